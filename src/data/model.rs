use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column names – the dataset's compatibility contract
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Medicine Name";
pub const COL_MANUFACTURER: &str = "Manufacturer";
pub const COL_USES: &str = "Uses";
pub const COL_EXCELLENT: &str = "Excellent Review %";
pub const COL_AVERAGE: &str = "Average Review %";
pub const COL_POOR: &str = "Poor Review %";
pub const COL_IMAGE_URL: &str = "Image URL";

/// Columns that must be present in every dataset file.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_NAME,
    COL_MANUFACTURER,
    COL_EXCELLENT,
    COL_AVERAGE,
    COL_POOR,
];

// ---------------------------------------------------------------------------
// Medicine – one row of the table
// ---------------------------------------------------------------------------

/// A single medicine entry with its review statistics.
///
/// The three review percentages are independent; they need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    #[serde(rename = "Medicine Name")]
    pub name: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Uses", default)]
    pub uses: String,
    #[serde(rename = "Excellent Review %")]
    pub excellent_pct: f64,
    #[serde(rename = "Average Review %")]
    pub average_pct: f64,
    #[serde(rename = "Poor Review %")]
    pub poor_pct: f64,
    /// Missing or blank image references render as a placeholder.
    #[serde(rename = "Image URL", default)]
    pub image_url: Option<String>,
}

impl Medicine {
    /// The image reference, if there is a non-blank one.
    pub fn image_ref(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// ---------------------------------------------------------------------------
// MedicineDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MedicineDataset {
    /// All medicines in file order.
    pub records: Vec<Medicine>,
    /// Sorted distinct manufacturer names.
    pub manufacturers: Vec<String>,
    /// Source rows dropped because they could not be parsed.
    pub skipped_rows: usize,
}

impl MedicineDataset {
    /// Build the manufacturer index from the loaded records.
    pub fn from_records(records: Vec<Medicine>, skipped_rows: usize) -> Self {
        let manufacturers: BTreeSet<&str> =
            records.iter().map(|m| m.manufacturer.as_str()).collect();
        let manufacturers = manufacturers.into_iter().map(str::to_string).collect();
        MedicineDataset {
            records,
            manufacturers,
            skipped_rows,
        }
    }

    /// Number of medicines.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn medicine(
    name: &str,
    manufacturer: &str,
    excellent: f64,
    average: f64,
    poor: f64,
) -> Medicine {
    Medicine {
        name: name.to_string(),
        manufacturer: manufacturer.to_string(),
        uses: String::new(),
        excellent_pct: excellent,
        average_pct: average,
        poor_pct: poor,
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manufacturers_are_sorted_and_distinct() {
        let ds = MedicineDataset::from_records(
            vec![
                medicine("A", "Zenith", 10.0, 10.0, 10.0),
                medicine("B", "Acme", 10.0, 10.0, 10.0),
                medicine("C", "Zenith", 10.0, 10.0, 10.0),
            ],
            0,
        );
        assert_eq!(ds.manufacturers, vec!["Acme", "Zenith"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn blank_image_reference_is_treated_as_missing() {
        let mut m = medicine("A", "Acme", 1.0, 1.0, 1.0);
        m.image_url = Some("   ".to_string());
        assert_eq!(m.image_ref(), None);
        m.image_url = Some("https://img/a.jpg".to_string());
        assert_eq!(m.image_ref(), Some("https://img/a.jpg"));
    }
}
