use crate::data::aggregate::{
    AggregateSummary, DEFAULT_TOP_N, summarize, summarize_with_limit,
};
use crate::data::filter::{FilterConfig, apply};
use crate::data::model::{Medicine, MedicineDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<MedicineDataset>,

    /// Current sidebar selections.
    pub filters: FilterConfig,

    /// Filters the cached view was computed with.
    applied_filters: Option<FilterConfig>,

    /// Indices of medicines passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over `visible_indices` (cached).
    pub summary: AggregateSummary,

    /// Ranking length.
    pub top_n: usize,

    /// Threshold restored on load and reset.
    pub default_min_excellent: f64,

    /// Medicine name chosen in the image preview.
    pub selected_medicine: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(default_min_excellent: f64, top_n: usize) -> Self {
        Self {
            dataset: None,
            filters: FilterConfig::with_min_excellent(default_min_excellent),
            applied_filters: None,
            visible_indices: Vec::new(),
            summary: AggregateSummary::default(),
            top_n,
            default_min_excellent,
            selected_medicine: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset and reset filters.
    pub fn set_dataset(&mut self, dataset: MedicineDataset) {
        self.status_message = (dataset.skipped_rows > 0)
            .then(|| format!("{} unreadable rows were skipped", dataset.skipped_rows));
        self.dataset = Some(dataset);
        self.filters = FilterConfig::with_min_excellent(self.default_min_excellent);
        self.applied_filters = None;
        self.selected_medicine = None;
        self.refilter();
    }

    /// Recompute the view and summary if the filters changed since last time.
    pub fn refilter(&mut self) {
        if self.applied_filters.as_ref() == Some(&self.filters) {
            return;
        }
        let Some(ds) = &self.dataset else {
            return;
        };
        let view = apply(&ds.records, &self.filters);
        self.summary = match self.top_n {
            DEFAULT_TOP_N => summarize(view.iter()),
            n => summarize_with_limit(view.iter(), n),
        };
        log::debug!(
            "Filters {:?} → {} of {} medicines",
            self.filters,
            view.len(),
            ds.len()
        );
        self.visible_indices = view.into_indices();
        self.applied_filters = Some(self.filters.clone());
        self.sync_selection();
    }

    /// Restore the filters a fresh session starts with.
    pub fn reset_filters(&mut self) {
        self.filters = FilterConfig::with_min_excellent(self.default_min_excellent);
        self.refilter();
    }

    /// Medicines in the current view, in dataset order.
    pub fn visible(&self) -> impl Iterator<Item = &Medicine> + '_ {
        let records = self
            .dataset
            .as_ref()
            .map(|ds| ds.records.as_slice())
            .unwrap_or_default();
        self.visible_indices.iter().filter_map(move |&i| records.get(i))
    }

    /// Distinct names in the view, in order of first appearance.
    pub fn visible_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.visible()
            .map(|m| m.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// First visible record with the selected name.
    pub fn selected_record(&self) -> Option<&Medicine> {
        let name = self.selected_medicine.as_deref()?;
        self.visible().find(|m| m.name == name)
    }

    /// Keep the preview selection pointing at something visible.
    fn sync_selection(&mut self) {
        if self.selected_record().is_none() {
            let first = self.visible().next().map(|m| m.name.clone());
            self.selected_medicine = first;
        }
    }
}
