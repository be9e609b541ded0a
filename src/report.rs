use crate::data::model::CompanyDataset;

/// Number of histogram bins over the filtered index values.
pub const HISTOGRAM_BINS: usize = 15;

/// Length of the ranking table.
pub const TOP_N: usize = 10;

/// Index values are shown with two decimals.
pub fn format_index(value: f64) -> String {
    format!("{value:.2}")
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Split `[min, max]` of `values` into `bins` equal-width bins and count the
/// values in each. The last bin includes its right edge. When every value is
/// equal the span is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (low, high) = if max == min {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let slot = (((v - low) / width) as usize).min(bins - 1);
        counts[slot] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: low + i as f64 * width,
            end: low + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Index values of the filtered rows, in view order.
pub fn index_values(dataset: &CompanyDataset, indices: &[usize]) -> Vec<f64> {
    indices
        .iter()
        .map(|&i| dataset.records()[i].digitalization_index())
        .collect()
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// The `n` filtered rows with the highest index, descending. The sort is
/// stable, so equal values keep their view order.
pub fn top_n(dataset: &CompanyDataset, indices: &[usize], n: usize) -> Vec<usize> {
    let records = dataset.records();
    let mut ranked = indices.to_vec();
    ranked.sort_by(|&a, &b| {
        records[b]
            .digitalization_index()
            .total_cmp(&records[a].digitalization_index())
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::data::model::tests::raw;

    fn dataset_with_big_data(values: &[f64]) -> CompanyDataset {
        let rows = values
            .iter()
            .enumerate()
            .map(|(i, &v)| raw(&format!("{i:06}"), "Plain Holdings", [0.0, 0.0, v, 0.0, 0.0]))
            .collect();
        CompanyDataset::from_raw(rows, Path::new("mem.csv"))
    }

    #[test]
    fn index_is_formatted_with_two_decimals() {
        assert_eq!(format_index(7.3), "7.30");
        assert_eq!(format_index(0.0), "0.00");
        assert_eq!(format_index(12.345678), "12.35");
    }

    #[test]
    fn top_ten_of_fifteen_distinct_rows() {
        let ds = dataset_with_big_data(&(0..15).map(f64::from).collect::<Vec<_>>());
        let all: Vec<usize> = (0..ds.len()).collect();

        let top = top_n(&ds, &all, TOP_N);
        assert_eq!(top, (5..15).rev().collect::<Vec<_>>());
    }

    #[test]
    fn top_ten_of_three_rows_keeps_all() {
        let ds = dataset_with_big_data(&[4.0, 8.0, 1.0]);
        let top = top_n(&ds, &[0, 1, 2], TOP_N);
        assert_eq!(top, vec![1, 0, 2]);
    }

    #[test]
    fn ties_keep_view_order() {
        let ds = dataset_with_big_data(&[4.0, 8.0, 4.0, 8.0]);
        let top = top_n(&ds, &[0, 1, 2, 3], TOP_N);
        assert_eq!(top, vec![1, 3, 0, 2]);
    }

    #[test]
    fn top_n_only_ranks_the_view() {
        let ds = dataset_with_big_data(&[4.0, 8.0, 1.0, 9.0]);
        assert_eq!(top_n(&ds, &[0, 2], TOP_N), vec![0, 2]);
    }

    #[test]
    fn histogram_counts_every_value() {
        let values: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.37).collect();
        let bins = histogram(&values, HISTOGRAM_BINS);

        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].start, 0.0);
        assert!((bins[HISTOGRAM_BINS - 1].end - 99.0 * 0.37).abs() < 1e-9);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = histogram(&[0.0, 15.0], HISTOGRAM_BINS);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[HISTOGRAM_BINS - 1].count, 1);
        assert!((bins[0].width() - 1.0).abs() < 1e-12);
        assert!((bins[0].center() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn single_value_histogram_is_centred() {
        let bins = histogram(&[3.0, 3.0], HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!((bins[0].start - 2.5).abs() < 1e-12);
        assert!((bins[HISTOGRAM_BINS - 1].end - 3.5).abs() < 1e-12);
    }

    #[test]
    fn tiny_span_is_not_treated_as_single_value() {
        let bins = histogram(&[0.0, 1e-17], HISTOGRAM_BINS);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[HISTOGRAM_BINS - 1].end, 1e-17);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[HISTOGRAM_BINS - 1].count, 1);
    }

    #[test]
    fn empty_view_has_no_bins() {
        assert!(histogram(&[], HISTOGRAM_BINS).is_empty());
    }

    #[test]
    fn index_values_follow_view_order() {
        let ds = dataset_with_big_data(&[4.0, 8.0]);
        assert_eq!(index_values(&ds, &[1, 0]), vec![2.0, 1.0]);
    }
}
