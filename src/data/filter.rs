use super::model::Medicine;

// ---------------------------------------------------------------------------
// Filter configuration
// ---------------------------------------------------------------------------

/// Manufacturer selection: either every manufacturer or one exact name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ManufacturerFilter {
    #[default]
    All,
    Exact(String),
}

/// The filter predicates for one query, rebuilt from the sidebar widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Case-insensitive substring of the medicine name. Empty matches all.
    pub name_substring: String,
    pub manufacturer: ManufacturerFilter,
    /// Inclusive lower bound on the excellent review percentage.
    pub min_excellent: f64,
}

impl Default for FilterConfig {
    /// No active predicates: every record passes.
    fn default() -> Self {
        Self {
            name_substring: String::new(),
            manufacturer: ManufacturerFilter::All,
            min_excellent: 0.0,
        }
    }
}

impl FilterConfig {
    /// A config with only the threshold set, as the dashboard starts.
    pub fn with_min_excellent(min_excellent: f64) -> Self {
        Self {
            min_excellent,
            ..Self::default()
        }
    }

    /// The active predicates of this config.
    ///
    /// An empty name or `All` contributes nothing; the threshold is always
    /// present since `>= 0` holds for every in-range record anyway.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut preds = Vec::with_capacity(3);
        if !self.name_substring.is_empty() {
            preds.push(Predicate::NameContains(self.name_substring.to_lowercase()));
        }
        if let ManufacturerFilter::Exact(name) = &self.manufacturer {
            preds.push(Predicate::ManufacturerIs(name.clone()));
        }
        preds.push(Predicate::MinExcellent(self.min_excellent));
        preds
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A single row test. Predicates are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Needle is stored lowercased.
    NameContains(String),
    ManufacturerIs(String),
    MinExcellent(f64),
}

impl Predicate {
    pub fn matches(&self, medicine: &Medicine) -> bool {
        match self {
            Predicate::NameContains(needle) => {
                medicine.name.to_lowercase().contains(needle.as_str())
            }
            Predicate::ManufacturerIs(name) => medicine.manufacturer == *name,
            Predicate::MinExcellent(min) => medicine.excellent_pct >= *min,
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Records of a dataset that passed a filter, held as positions into it.
///
/// Positions are strictly increasing, so iteration follows dataset order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    source: &'a [Medicine],
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// A view over every record.
    pub fn all(source: &'a [Medicine]) -> Self {
        Self {
            source,
            indices: (0..source.len()).collect(),
        }
    }

    /// Narrow this view to the records passing every predicate.
    pub fn refine(&self, predicates: &[Predicate]) -> Self {
        let indices = self
            .indices
            .iter()
            .copied()
            .filter(|&i| passes(predicates, &self.source[i]))
            .collect();
        Self {
            source: self.source,
            indices,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Medicine> + '_ {
        let source = self.source;
        self.indices.iter().map(move |&i| &source[i])
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn passes(predicates: &[Predicate], medicine: &Medicine) -> bool {
    predicates.iter().all(|p| p.matches(medicine))
}

/// Keep the records passing every predicate, in their original order.
pub fn apply_predicates<'a>(
    dataset: &'a [Medicine],
    predicates: &[Predicate],
) -> FilteredView<'a> {
    FilteredView::all(dataset).refine(predicates)
}

/// Apply a filter config to a dataset.
pub fn apply<'a>(dataset: &'a [Medicine], config: &FilterConfig) -> FilteredView<'a> {
    apply_predicates(dataset, &config.predicates())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::medicine;
    use proptest::prelude::*;

    fn sample() -> Vec<Medicine> {
        vec![
            medicine("Paracetamol", "Acme", 90.0, 8.0, 2.0),
            medicine("Ibuprofen", "Acme", 60.0, 30.0, 10.0),
            medicine("Cough Syrup", "Zenith", 40.0, 40.0, 20.0),
        ]
    }

    fn names(view: &FilteredView) -> Vec<String> {
        view.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn manufacturer_and_threshold_combine() {
        let data = sample();
        let config = FilterConfig {
            manufacturer: ManufacturerFilter::Exact("Acme".into()),
            min_excellent: 70.0,
            ..FilterConfig::default()
        };
        assert_eq!(names(&apply(&data, &config)), vec!["Paracetamol"]);
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let data = sample();
        let config = FilterConfig {
            name_substring: "cough".into(),
            ..FilterConfig::with_min_excellent(30.0)
        };
        assert_eq!(names(&apply(&data, &config)), vec!["Cough Syrup"]);

        let config = FilterConfig {
            name_substring: "PROF".into(),
            ..FilterConfig::default()
        };
        assert_eq!(names(&apply(&data, &config)), vec!["Ibuprofen"]);
    }

    #[test]
    fn empty_name_matches_everything() {
        let data = sample();
        let view = apply(&data, &FilterConfig::default());
        assert_eq!(view.indices(), &[0, 1, 2]);
    }

    #[test]
    fn unknown_manufacturer_yields_nothing() {
        let data = sample();
        let config = FilterConfig {
            manufacturer: ManufacturerFilter::Exact("Nobody".into()),
            ..FilterConfig::default()
        };
        assert!(apply(&data, &config).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let data = sample();
        let view = apply(&data, &FilterConfig::with_min_excellent(60.0));
        assert_eq!(names(&view), vec!["Paracetamol", "Ibuprofen"]);
    }

    #[test]
    fn refining_one_predicate_at_a_time_matches_all_at_once() {
        let data = sample();
        let config = FilterConfig {
            name_substring: "o".into(),
            manufacturer: ManufacturerFilter::Exact("Acme".into()),
            min_excellent: 30.0,
        };
        let stepwise = config
            .predicates()
            .iter()
            .fold(FilteredView::all(&data), |view, p| view.refine(std::slice::from_ref(p)));
        assert_eq!(stepwise, apply(&data, &config));
        assert_eq!(names(&stepwise), vec!["Paracetamol", "Ibuprofen"]);
    }

    #[test]
    fn empty_dataset_is_fine() {
        let data: Vec<Medicine> = Vec::new();
        assert!(apply(&data, &FilterConfig::with_min_excellent(30.0)).is_empty());
    }

    fn arb_medicine() -> impl Strategy<Value = Medicine> {
        (
            prop::sample::select(vec!["Paracetamol", "Ibuprofen", "Cough Syrup", "Aspirin"]),
            prop::sample::select(vec!["Acme", "Zenith", "Cipla"]),
            0u8..=100,
        )
            .prop_map(|(name, manufacturer, excellent)| {
                medicine(name, manufacturer, excellent as f64, 0.0, 0.0)
            })
    }

    fn arb_config() -> impl Strategy<Value = FilterConfig> {
        (
            prop::sample::select(vec!["", "p", "COUGH", "in", "zzz"]),
            prop::option::of(prop::sample::select(vec!["Acme", "Zenith", "Unknown"])),
            0u8..=100,
        )
            .prop_map(|(name, manufacturer, min)| FilterConfig {
                name_substring: name.to_string(),
                manufacturer: manufacturer
                    .map(|m| ManufacturerFilter::Exact(m.to_string()))
                    .unwrap_or_default(),
                min_excellent: min as f64,
            })
    }

    proptest! {
        #[test]
        fn result_is_ordered_subsequence(data in prop::collection::vec(arb_medicine(), 0..40), config in arb_config()) {
            let view = apply(&data, &config);
            let indices = view.indices();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(view.iter().count(), indices.len());
            for (m, &i) in view.iter().zip(indices) {
                prop_assert!(std::ptr::eq(m, &data[i]));
                prop_assert!(config.predicates().iter().all(|p| p.matches(m)));
            }
        }

        #[test]
        fn predicate_order_does_not_matter(data in prop::collection::vec(arb_medicine(), 0..40), config in arb_config()) {
            let forward = config.predicates();
            let mut reversed = forward.clone();
            reversed.reverse();
            let mut rotated = forward.clone();
            rotated.rotate_left(1);
            let a = apply_predicates(&data, &forward);
            prop_assert_eq!(&a, &apply_predicates(&data, &reversed));
            prop_assert_eq!(&a, &apply_predicates(&data, &rotated));
        }

        #[test]
        fn filtering_twice_is_a_noop(data in prop::collection::vec(arb_medicine(), 0..40), config in arb_config()) {
            let once = apply(&data, &config);
            let twice = once.refine(&config.predicates());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn default_config_returns_everything(data in prop::collection::vec(arb_medicine(), 0..40)) {
            let view = apply(&data, &FilterConfig::default());
            prop_assert_eq!(view.len(), data.len());
        }

        #[test]
        fn max_threshold_keeps_only_perfect_scores(data in prop::collection::vec(arb_medicine(), 0..40)) {
            let view = apply(&data, &FilterConfig::with_min_excellent(100.0));
            prop_assert!(view.iter().all(|m| m.excellent_pct == 100.0));
            let perfect = data.iter().filter(|m| m.excellent_pct == 100.0).count();
            prop_assert_eq!(view.len(), perfect);
        }
    }
}
