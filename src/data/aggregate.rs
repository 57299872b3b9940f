use std::collections::BTreeMap;

use super::model::Medicine;

/// Default length of the manufacturer and top-rated rankings.
pub const DEFAULT_TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Mean of each review column over a non-empty view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewMeans {
    pub excellent: f64,
    pub average: f64,
    pub poor: f64,
}

impl ReviewMeans {
    /// Labelled values in display order.
    pub fn labelled(&self) -> [(&'static str, f64); 3] {
        [
            ("Excellent Review %", self.excellent),
            ("Average Review %", self.average),
            ("Poor Review %", self.poor),
        ]
    }
}

/// Statistics derived from one filtered view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateSummary {
    /// Number of records in the view.
    pub count: usize,
    /// `None` when the view is empty.
    pub means: Option<ReviewMeans>,
    /// (manufacturer, count), most frequent first.
    pub manufacturer_counts: Vec<(String, usize)>,
    /// Highest excellent percentage first.
    pub top_rated: Vec<Medicine>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Summarize a view with the default ranking length.
pub fn summarize<'a, I>(view: I) -> AggregateSummary
where
    I: IntoIterator<Item = &'a Medicine>,
{
    summarize_with_limit(view, DEFAULT_TOP_N)
}

/// Summarize a view, truncating both rankings to `limit` entries.
pub fn summarize_with_limit<'a, I>(view: I, limit: usize) -> AggregateSummary
where
    I: IntoIterator<Item = &'a Medicine>,
{
    let view: Vec<&Medicine> = view.into_iter().collect();
    AggregateSummary {
        count: view.len(),
        means: review_means(&view),
        manufacturer_counts: manufacturer_ranking(&view, limit),
        top_rated: top_by_excellent(&view, limit),
    }
}

/// Arithmetic mean of each review column, `None` for an empty view.
pub fn review_means(view: &[&Medicine]) -> Option<ReviewMeans> {
    if view.is_empty() {
        return None;
    }
    let n = view.len() as f64;
    let (e, a, p) = view.iter().fold((0.0, 0.0, 0.0), |(e, a, p), m| {
        (e + m.excellent_pct, a + m.average_pct, p + m.poor_pct)
    });
    Some(ReviewMeans {
        excellent: e / n,
        average: a / n,
        poor: p / n,
    })
}

/// Count medicines per manufacturer, most frequent first.
///
/// Equal counts are ordered by manufacturer name ascending.
pub fn manufacturer_ranking(view: &[&Medicine], limit: usize) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for m in view {
        *counts.entry(m.manufacturer.as_str()).or_default() += 1;
    }
    // BTreeMap yields names ascending; the stable sort keeps that for ties.
    let mut ranking: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking.truncate(limit);
    ranking
}

/// The `limit` best medicines by excellent percentage.
///
/// Ties keep their order in the view.
pub fn top_by_excellent(view: &[&Medicine], limit: usize) -> Vec<Medicine> {
    let mut ranked: Vec<&Medicine> = view.to_vec();
    ranked.sort_by(|a, b| b.excellent_pct.total_cmp(&a.excellent_pct));
    ranked.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply, FilterConfig, ManufacturerFilter};
    use crate::data::model::medicine;
    use proptest::prelude::*;

    fn sample() -> Vec<Medicine> {
        vec![
            medicine("Paracetamol", "Acme", 90.0, 8.0, 2.0),
            medicine("Ibuprofen", "Acme", 60.0, 30.0, 10.0),
            medicine("Cough Syrup", "Zenith", 40.0, 40.0, 20.0),
        ]
    }

    #[test]
    fn summary_of_filtered_example() {
        let data = sample();
        let config = FilterConfig {
            manufacturer: ManufacturerFilter::Exact("Acme".into()),
            min_excellent: 70.0,
            ..FilterConfig::default()
        };
        let summary = summarize(apply(&data, &config).iter());
        assert_eq!(summary.count, 1);
        let means = summary.means.expect("non-empty view has means");
        assert_eq!(means.excellent, 90.0);
        assert_eq!(means.average, 8.0);
        assert_eq!(summary.manufacturer_counts, vec![("Acme".to_string(), 1)]);
        assert_eq!(summary.top_rated, vec![data[0].clone()]);
    }

    #[test]
    fn means_over_whole_sample() {
        let data = sample();
        let means = summarize(&data).means.unwrap();
        assert!((means.excellent - 190.0 / 3.0).abs() < 1e-9);
        assert!((means.average - 26.0).abs() < 1e-9);
        assert!((means.poor - 32.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_view_gives_sentinel_summary() {
        let data: Vec<Medicine> = Vec::new();
        let summary = summarize(&data);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.means, None);
        assert!(summary.manufacturer_counts.is_empty());
        assert!(summary.top_rated.is_empty());
    }

    #[test]
    fn manufacturer_ties_break_by_name() {
        let data = vec![
            medicine("A", "Zenith", 50.0, 0.0, 0.0),
            medicine("B", "Cipla", 50.0, 0.0, 0.0),
            medicine("C", "Acme", 50.0, 0.0, 0.0),
            medicine("D", "Zenith", 50.0, 0.0, 0.0),
        ];
        let summary = summarize(&data);
        assert_eq!(
            summary.manufacturer_counts,
            vec![
                ("Zenith".to_string(), 2),
                ("Acme".to_string(), 1),
                ("Cipla".to_string(), 1),
            ]
        );
    }

    #[test]
    fn rankings_are_truncated() {
        let data: Vec<Medicine> = (0..15)
            .map(|i| medicine(&format!("M{i}"), &format!("Maker{i:02}"), i as f64, 0.0, 0.0))
            .collect();
        let summary = summarize(&data);
        assert_eq!(summary.manufacturer_counts.len(), 10);
        assert_eq!(summary.top_rated.len(), 10);
        assert_eq!(summary.top_rated[0].name, "M14");
        assert_eq!(summary.top_rated[9].name, "M5");

        let short = summarize_with_limit(&data, 3);
        assert_eq!(short.top_rated.len(), 3);
        assert_eq!(short.manufacturer_counts.len(), 3);
    }

    #[test]
    fn equal_scores_keep_view_order() {
        let data = vec![
            medicine("First", "Acme", 80.0, 0.0, 0.0),
            medicine("Best", "Acme", 95.0, 0.0, 0.0),
            medicine("Second", "Acme", 80.0, 0.0, 0.0),
            medicine("Third", "Acme", 80.0, 0.0, 0.0),
        ];
        let top: Vec<String> = summarize(&data)
            .top_rated
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(top, vec!["Best", "First", "Second", "Third"]);
    }

    proptest! {
        #[test]
        fn top_rated_is_sorted_and_bounded(scores in prop::collection::vec(0u8..=100, 0..30)) {
            let data: Vec<Medicine> = scores
                .iter()
                .enumerate()
                .map(|(i, &s)| medicine(&format!("M{i}"), "Acme", s as f64, 0.0, 0.0))
                .collect();
            let summary = summarize(&data);
            prop_assert!(summary.top_rated.len() <= DEFAULT_TOP_N);
            prop_assert!(summary
                .top_rated
                .windows(2)
                .all(|w| w[0].excellent_pct >= w[1].excellent_pct));
            let max = scores.iter().max().map(|&s| s as f64);
            prop_assert_eq!(summary.top_rated.first().map(|m| m.excellent_pct), max);
            prop_assert_eq!(summary.count, data.len());
        }
    }
}
