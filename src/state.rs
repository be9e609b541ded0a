use crate::color::ColorMap;
use crate::data::error::LoadError;
use crate::data::filter::{FilterParams, filtered_indices, init_filter_params};
use crate::data::model::{CompanyDataset, Industry};

// ---------------------------------------------------------------------------
// Load outcome shown to the user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    /// Dataset loaded with this many companies.
    Loaded(usize),
    /// File read fine but held no companies.
    Empty,
    /// Load failed; message includes the cause.
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Enriched dataset, loaded once at start-up. `None` if loading failed
    /// or the file was empty.
    pub dataset: Option<CompanyDataset>,

    pub load_status: LoadStatus,

    /// Current filter inputs.
    pub filters: FilterParams,

    /// Indices of companies passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Industries offered in the filter panel, in order of first appearance.
    pub industry_options: Vec<Industry>,

    /// Full index range of the dataset; bounds of the range sliders.
    pub index_bounds: (f64, f64),

    pub color_map: ColorMap,
}

impl AppState {
    /// Build the session state from the single load attempt.
    pub fn from_load(result: Result<CompanyDataset, LoadError>) -> Self {
        let mut state = AppState {
            dataset: None,
            load_status: LoadStatus::Empty,
            filters: FilterParams {
                industries: Default::default(),
                index_range: (0.0, 0.0),
                search_term: String::new(),
            },
            visible_indices: Vec::new(),
            industry_options: Vec::new(),
            index_bounds: (0.0, 0.0),
            color_map: ColorMap::default(),
        };

        match result {
            Ok(dataset) if dataset.is_empty() => {
                log::warn!("{} contains no companies", dataset.source().display());
            }
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => state.load_status = LoadStatus::Failed(e.to_string()),
        }
        state
    }

    /// Ingest the loaded dataset and initialise filters to show everything.
    fn set_dataset(&mut self, dataset: CompanyDataset) {
        self.filters = init_filter_params(&dataset);
        self.industry_options = dataset.industries_present();
        self.index_bounds = self.filters.index_range;
        self.visible_indices = (0..dataset.len()).collect();
        self.load_status = LoadStatus::Loaded(dataset.len());
        self.dataset = Some(dataset);
    }

    /// Replace the filter inputs, recomputing the view only when they changed.
    pub fn update_filters(&mut self, params: FilterParams) {
        if params != self.filters {
            self.filters = params;
            self.refilter();
        }
    }

    /// Recompute `visible_indices` after filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
            log::debug!(
                "Filter applied: {} of {} companies visible",
                self.visible_indices.len(),
                ds.len()
            );
        }
    }

    /// Select every industry on offer.
    pub fn select_all(&mut self) {
        let mut params = self.filters.clone();
        params.industries = self.industry_options.iter().copied().collect();
        self.update_filters(params);
    }

    /// Deselect every industry; the view becomes empty.
    pub fn select_none(&mut self) {
        let mut params = self.filters.clone();
        params.industries.clear();
        self.update_filters(params);
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::data::model::tests::raw;

    fn loaded() -> AppState {
        let ds = CompanyDataset::from_raw(
            vec![
                raw("600000", "Pudong Bank", [0.0, 0.0, 10.0, 0.0, 0.0]),
                raw("600588", "Yonyou Software", [0.0, 0.0, 20.0, 0.0, 0.0]),
                raw("000001", "Plain Holdings", [0.0, 0.0, 0.0, 0.0, 0.0]),
            ],
            Path::new("mem.csv"),
        );
        AppState::from_load(Ok(ds))
    }

    #[test]
    fn loaded_state_shows_everything() {
        let state = loaded();
        assert_eq!(state.load_status, LoadStatus::Loaded(3));
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.index_bounds, (0.0, 5.0));
        assert_eq!(
            state.industry_options,
            vec![Industry::Finance, Industry::InformationTechnology, Industry::Other]
        );
    }

    #[test]
    fn failed_load_leaves_no_dataset() {
        let state = AppState::from_load(Err(LoadError::FileNotFound(PathBuf::from("x.xlsx"))));
        assert!(state.dataset.is_none());
        match state.load_status {
            LoadStatus::Failed(msg) => assert!(msg.contains("x.xlsx")),
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_reported_as_empty() {
        let ds = CompanyDataset::from_raw(Vec::new(), Path::new("mem.csv"));
        let state = AppState::from_load(Ok(ds));
        assert!(state.dataset.is_none());
        assert_eq!(state.load_status, LoadStatus::Empty);
    }

    #[test]
    fn select_none_then_all() {
        let mut state = loaded();
        state.select_none();
        assert!(state.visible_indices.is_empty());
        state.select_all();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn default_range_keeps_rows_at_unrounded_bounds() {
        let ds = CompanyDataset::from_raw(
            vec![
                raw("600000", "Plain Holdings", [0.0, 3.0, 0.0, 0.0, 0.0]),
                raw("600001", "Plain Holdings", [0.0, 0.0, 0.0, 0.0, 0.0]),
            ],
            Path::new("mem.csv"),
        );
        let mut state = AppState::from_load(Ok(ds));
        let (low, high) = state.index_bounds;
        assert_eq!(high, 3.0 * 0.1);

        let params = state.filters.clone().with_index_range(low, high);
        state.update_filters(params);
        assert_eq!(state.filters.index_range, (low, high));
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn crossed_range_snaps_and_refilters() {
        let mut state = loaded();
        let params = state.filters.clone().with_index_range(2.5, 5.0);
        state.update_filters(params);
        assert_eq!(state.visible_indices, vec![0, 1]);

        let params = state.filters.clone().with_index_range(2.5, 1.0);
        state.update_filters(params);
        assert_eq!(state.filters.index_range, (1.0, 1.0));
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn update_filters_recomputes_view() {
        let mut state = loaded();
        let mut params = state.filters.clone();
        params.search_term = "soft".to_string();
        state.update_filters(params);
        assert_eq!(state.visible_indices, vec![1]);
    }
}
