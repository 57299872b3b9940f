use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{
    COL_AVERAGE, COL_EXCELLENT, COL_IMAGE_URL, COL_MANUFACTURER, COL_NAME, COL_POOR, COL_USES,
    Medicine, MedicineDataset, REQUIRED_COLUMNS,
};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a medicine dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the dataset column names (recommended)
/// * `.json`    – `[{ "Medicine Name": ..., "Manufacturer": ..., ... }, ...]`
/// * `.parquet` – one column per dataset field
///
/// Missing required columns fail the load; individual rows that cannot be
/// read are skipped and counted in [`MedicineDataset::skipped_rows`].
pub fn load_file(path: &Path) -> Result<MedicineDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if dataset.skipped_rows > 0 {
        log::warn!(
            "{}: skipped {} unreadable rows",
            path.display(),
            dataset.skipped_rows
        );
    }
    Ok(dataset)
}

fn check_required(mut present: impl FnMut(&str) -> bool, source: &str) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|&col| !present(col))
        .collect();
    if !missing.is_empty() {
        bail!("{source} missing required columns: {}", missing.join(", "));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one medicine per row.
/// Extra columns (e.g. `Composition`, `Side_effects`) are ignored.
fn load_csv(path: &Path) -> Result<MedicineDataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<MedicineDataset> {
    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_required(|col| headers.iter().any(|h| h == col), "CSV")?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for (row_no, result) in reader.deserialize::<Medicine>().enumerate() {
        match result {
            Ok(medicine) => records.push(medicine),
            Err(e) => {
                log::warn!("CSV row {row_no}: {e}");
                skipped += 1;
            }
        }
    }

    Ok(MedicineDataset::from_records(records, skipped))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Medicine Name": "Paracetamol 500mg Tablet",
///     "Manufacturer": "Acme Ltd",
///     "Uses": "Fever",
///     "Excellent Review %": 64,
///     "Average Review %": 28,
///     "Poor Review %": 8,
///     "Image URL": "https://..."
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<MedicineDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<MedicineDataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;
    let rows = root.as_array().context("Expected top-level JSON array")?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (i, row) in rows.iter().enumerate() {
        match serde_json::from_value::<Medicine>(row.clone()) {
            Ok(medicine) => records.push(medicine),
            Err(e) => {
                log::warn!("JSON row {i}: {e}");
                skipped += 1;
            }
        }
    }

    Ok(MedicineDataset::from_records(records, skipped))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one column per dataset field.
///
/// Text columns may be Utf8 or LargeUtf8; review columns may be any of
/// Int32, Int64, Float32, Float64 (Pandas writes integer percentages as Int64).
fn load_parquet(path: &Path) -> Result<MedicineDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    check_required(|col| builder.schema().index_of(col).is_ok(), "Parquet file")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut skipped = 0;
    // Row numbers in warnings count from the start of the file.
    let mut offset = 0;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let columns = MedicineColumns::locate(&batch)?;

        for row in 0..batch.num_rows() {
            match columns.medicine_at(row) {
                Some(m) => records.push(m),
                None => {
                    log::warn!("Parquet row {}: missing or mistyped value", offset + row);
                    skipped += 1;
                }
            }
        }
        offset += batch.num_rows();
    }

    Ok(MedicineDataset::from_records(records, skipped))
}

// -- Parquet / Arrow helpers --

/// The dataset columns of one record batch.
struct MedicineColumns<'b> {
    name: &'b Arc<dyn Array>,
    manufacturer: &'b Arc<dyn Array>,
    excellent: &'b Arc<dyn Array>,
    average: &'b Arc<dyn Array>,
    poor: &'b Arc<dyn Array>,
    uses: Option<&'b Arc<dyn Array>>,
    image: Option<&'b Arc<dyn Array>>,
}

impl<'b> MedicineColumns<'b> {
    fn locate(batch: &'b RecordBatch) -> Result<Self> {
        let schema = batch.schema();
        let column = |name: &str| schema.index_of(name).ok().map(|i| batch.column(i));
        let required =
            |name: &str| column(name).with_context(|| format!("Parquet batch missing '{name}'"));

        Ok(Self {
            name: required(COL_NAME)?,
            manufacturer: required(COL_MANUFACTURER)?,
            excellent: required(COL_EXCELLENT)?,
            average: required(COL_AVERAGE)?,
            poor: required(COL_POOR)?,
            uses: column(COL_USES),
            image: column(COL_IMAGE_URL),
        })
    }

    /// `None` when any required cell is null or of an unsupported type.
    fn medicine_at(&self, row: usize) -> Option<Medicine> {
        Some(Medicine {
            name: string_at(self.name, row)?,
            manufacturer: string_at(self.manufacturer, row)?,
            uses: self.uses.and_then(|c| string_at(c, row)).unwrap_or_default(),
            excellent_pct: f64_at(self.excellent, row)?,
            average_pct: f64_at(self.average, row)?,
            poor_pct: f64_at(self.poor, row)?,
            image_url: self.image.and_then(|c| string_at(c, row)),
        })
    }
}

/// Read a text cell; `None` for nulls and non-string columns.
fn string_at(col: &Arc<dyn Array>, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    match col.data_type() {
        DataType::Utf8 => col
            .as_any()
            .downcast_ref::<StringArray>()
            .map(|s| s.value(row).to_string()),
        DataType::LargeUtf8 => Some(col.as_string::<i64>().value(row).to_string()),
        _ => None,
    }
}

/// Read a numeric cell as `f64`; `None` for nulls and non-numeric columns.
fn f64_at(col: &Arc<dyn Array>, row: usize) -> Option<f64> {
    if col.is_null(row) {
        return None;
    }
    let any = col.as_any();
    match col.data_type() {
        DataType::Int32 => any.downcast_ref::<Int32Array>().map(|a| a.value(row) as f64),
        DataType::Int64 => any.downcast_ref::<Int64Array>().map(|a| a.value(row) as f64),
        DataType::Float32 => any.downcast_ref::<Float32Array>().map(|a| a.value(row) as f64),
        DataType::Float64 => any.downcast_ref::<Float64Array>().map(|a| a.value(row)),
        _ => None,
    }
}
