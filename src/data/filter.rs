use std::collections::BTreeSet;

use super::model::{CompanyDataset, CompanyRecord, Industry};

// ---------------------------------------------------------------------------
// Filter parameters: one immutable snapshot of the filter panel
// ---------------------------------------------------------------------------

/// Current filter inputs. All predicates are combined with AND.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Industries to keep. An empty set keeps nothing.
    pub industries: BTreeSet<Industry>,
    /// Inclusive `(low, high)` bounds on the digitalization index.
    pub index_range: (f64, f64),
    /// Case-insensitive substring matched against code or name. Empty means
    /// no text filter.
    pub search_term: String,
}

impl FilterParams {
    /// Replace the index range, keeping the bounds exactly as given. If the
    /// new bounds cross, the bound that did not move snaps to the one that
    /// did, so `low <= high` always holds.
    pub fn with_index_range(mut self, low: f64, high: f64) -> Self {
        let (old_low, old_high) = self.index_range;
        let (mut low, mut high) = (low, high);
        if low > high {
            if low != old_low {
                high = low;
            } else if high != old_high {
                low = high;
            } else {
                high = low;
            }
        }
        self.index_range = (low, high);
        self
    }
}

/// Initialise [`FilterParams`] that keep every row: all industries present,
/// the full index range, no search term.
pub fn init_filter_params(dataset: &CompanyDataset) -> FilterParams {
    FilterParams {
        industries: dataset.industries_present().into_iter().collect(),
        index_range: dataset.index_bounds().unwrap_or((0.0, 0.0)),
        search_term: String::new(),
    }
}

/// Return indices of records that pass every filter, in dataset order.
pub fn filtered_indices(dataset: &CompanyDataset, params: &FilterParams) -> Vec<usize> {
    let needle = params.search_term.to_lowercase();
    let (low, high) = params.index_range;

    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| params.industries.contains(&rec.industry()))
        .filter(|(_, rec)| {
            let index = rec.digitalization_index();
            index >= low && index <= high
        })
        .filter(|(_, rec)| needle.is_empty() || matches_search(rec, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// `needle` must already be lowercase.
fn matches_search(rec: &CompanyRecord, needle: &str) -> bool {
    rec.stock_code.to_lowercase().contains(needle)
        || rec.company_name.to_lowercase().contains(needle)
}
