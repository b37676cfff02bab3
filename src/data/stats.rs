use std::collections::BTreeMap;

use super::model::{Dataset, Flag, Record};

// ---------------------------------------------------------------------------
// Discrete aggregations
// ---------------------------------------------------------------------------

/// Number of records per value of a discrete column, keyed by value.
/// The counts always sum to `dataset.len()`.
pub fn value_counts(dataset: &Dataset, flag: Flag) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for rec in dataset.records() {
        *counts.entry(rec.flag(flag)).or_insert(0) += 1;
    }
    counts
}

/// Mean of `of` within each group of `by`. Only groups that occur are present.
pub fn group_mean(dataset: &Dataset, by: Flag, of: Flag) -> BTreeMap<u8, f64> {
    let mut sums: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for rec in dataset.records() {
        let slot = sums.entry(rec.flag(by)).or_insert((0.0, 0));
        slot.0 += rec.flag(of) as f64;
        slot.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, n))| (key, sum / n as f64))
        .collect()
}

/// Records whose discrete column equals `value`, in dataset order.
pub fn select(dataset: &Dataset, flag: Flag, value: u8) -> Vec<&Record> {
    dataset
        .records()
        .iter()
        .filter(|rec| rec.flag(flag) == value)
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width binning of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending bin edges.
    pub edges: Vec<f64>,
    /// Number of values per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning their range.
    ///
    /// Every bin is half-open `[lo, hi)` except the last, which also takes
    /// the maximum. Non-finite values are not counted. A constant sample is
    /// centred in `(v - 0.5, v + 0.5)`; an empty one spans `(0, 1)`.
    pub fn compute(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut lo, mut hi) = match min_max(values) {
            Some(range) => range,
            None => (0.0, 1.0),
        };
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for &v in values.iter().filter(|v| v.is_finite()) {
            if !(lo..=hi).contains(&v) {
                continue;
            }
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Histogram { edges, counts }
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }

    /// Centre of bin `i`.
    pub fn center(&self, i: usize) -> f64 {
        (self.edges[i] + self.edges[i + 1]) / 2.0
    }
}

#[cfg(test)]
impl Histogram {
    /// Height of the bin that contains `value`, if it falls in range.
    pub fn count_at(&self, value: f64) -> Option<usize> {
        let last = self.counts.len().checked_sub(1)?;
        (0..=last)
            .find(|&i| {
                let (lo, hi) = (self.edges[i], self.edges[i + 1]);
                value >= lo && (value < hi || (i == last && value <= hi))
            })
            .map(|i| self.counts[i])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied().filter(|v| v.is_finite());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Number of evaluation points for density curves.
pub const KDE_GRID: usize = 200;

/// Standalone density plots extend this many bandwidths past the data.
pub const KDE_CUT: f64 = 3.0;

/// Gaussian kernel density estimate with Scott's rule bandwidth.
///
/// Returns `grid` `[x, density]` points from `min - cut * h` to
/// `max + cut * h`. Non-finite values are dropped first; fewer than two
/// remaining values or a zero-variance sample give an empty curve.
pub fn kde(values: &[f64], grid: usize, cut: f64) -> Vec<[f64; 2]> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let n = values.len();
    if n < 2 || grid < 2 {
        return Vec::new();
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std = var.sqrt();
    if std.is_nan() || std <= 0.0 {
        return Vec::new();
    }

    let h = std * (n as f64).powf(-0.2);
    let Some((lo, hi)) = min_max(&values) else {
        return Vec::new();
    };
    let (start, end) = (lo - cut * h, hi + cut * h);
    let step = (end - start) / (grid - 1) as f64;
    let norm = 1.0 / (n as f64 * h * (2.0 * std::f64::consts::PI).sqrt());

    (0..grid)
        .map(|i| {
            let x = start + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|&v| (-0.5 * ((x - v) / h).powi(2)).exp())
                .sum();
            [x, density * norm]
        })
        .collect()
}

/// Rescale a density curve so it overlays a count histogram of `n` values
/// with the given bin width.
pub fn scale_density(curve: &[[f64; 2]], n: usize, bin_width: f64) -> Vec<[f64; 2]> {
    let factor = n as f64 * bin_width;
    curve.iter().map(|&[x, y]| [x, y * factor]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn dataset(rows: &[(u8, u8, u8, u8)]) -> Dataset {
        Dataset::from_records(rows.iter().map(|&(g, s, h, d)| record(g, s, h, d)).collect())
    }

    #[test]
    fn test_value_counts_partition_is_complete() {
        let ds = dataset(&[(0, 1, 0, 0), (1, 1, 0, 1), (1, 0, 1, 1), (0, 0, 0, 0), (1, 0, 0, 0)]);
        for flag in [Flag::Gender, Flag::Smoking, Flag::CancerHistory, Flag::Diagnosis] {
            let counts = value_counts(&ds, flag);
            assert_eq!(counts.values().sum::<usize>(), ds.len(), "{flag:?}");
        }
        let gender = value_counts(&ds, Flag::Gender);
        assert_eq!(gender.get(&0), Some(&2));
        assert_eq!(gender.get(&1), Some(&3));
    }

    #[test]
    fn test_group_mean_ratios_in_unit_interval() {
        let ds = dataset(&[(0, 0, 0, 1), (0, 0, 0, 0), (1, 0, 0, 1), (1, 0, 0, 1), (1, 0, 0, 0)]);
        let ratio = group_mean(&ds, Flag::Gender, Flag::Diagnosis);
        assert_eq!(ratio.len(), 2);
        assert!((ratio[&0] - 0.5).abs() < 1e-12);
        assert!((ratio[&1] - 2.0 / 3.0).abs() < 1e-12);
        assert!(ratio.values().all(|r| (0.0..=1.0).contains(r)));
    }

    #[test]
    fn test_group_mean_single_group() {
        let ds = dataset(&[(0, 0, 0, 1), (0, 0, 0, 0), (0, 0, 0, 0), (0, 0, 0, 1)]);
        let ratio = group_mean(&ds, Flag::Gender, Flag::Diagnosis);
        assert_eq!(ratio.len(), 1);
        assert!(!ratio.contains_key(&1));
        assert!((ratio[&0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_select_filters_in_order() {
        let ds = dataset(&[(0, 0, 0, 1), (1, 0, 0, 0), (1, 1, 0, 1)]);
        let hits = select(&ds, Flag::Diagnosis, 1);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].gender, 0);
        assert_eq!(hits[1].gender, 1);
    }

    #[test]
    fn test_histogram_equal_width_bins() {
        let h = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        // last bin is closed on the right
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
        assert_eq!(h.total(), 5);
        assert!((h.bin_width() - 1.0).abs() < 1e-12);
        assert!((h.center(0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_constant_sample() {
        let h = Histogram::compute(&[1.0; 7], 2);
        assert_eq!(h.edges, vec![0.5, 1.0, 1.5]);
        assert_eq!(h.counts, vec![0, 7]);
        assert_eq!(h.count_at(1.0), Some(7));
        assert_eq!(h.count_at(3.0), None);
    }

    #[test]
    fn test_histogram_empty_sample() {
        let h = Histogram::compute(&[], 2);
        assert_eq!(h.edges, vec![0.0, 0.5, 1.0]);
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn test_kde_integrates_to_one() {
        let values = [1.0, 2.0, 2.5, 3.0, 4.0, 6.0];
        let curve = kde(&values, KDE_GRID, KDE_CUT);
        assert_eq!(curve.len(), KDE_GRID);
        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 0.01, "area = {area}");
        assert!(curve.iter().all(|p| p[1] >= 0.0));
    }

    #[test]
    fn test_kde_degenerate_inputs() {
        assert!(kde(&[], KDE_GRID, KDE_CUT).is_empty());
        assert!(kde(&[2.0], KDE_GRID, KDE_CUT).is_empty());
        assert!(kde(&[2.0, 2.0, 2.0], KDE_GRID, KDE_CUT).is_empty());
        assert!(kde(&[2.0, f64::NAN], KDE_GRID, KDE_CUT).is_empty());
    }

    #[test]
    fn test_kde_skips_nan_values() {
        let with_nan = kde(&[0.91, f64::NAN, 0.67, 0.3], KDE_GRID, KDE_CUT);
        let without = kde(&[0.91, 0.67, 0.3], KDE_GRID, KDE_CUT);
        assert_eq!(with_nan.len(), KDE_GRID);
        assert_eq!(with_nan, without);
        assert!(with_nan.iter().all(|p| p[0].is_finite() && p[1].is_finite()));
    }

    #[test]
    fn test_kde_zero_cut_stays_within_data() {
        let values = [18.0, 22.5, 25.0, 31.0, 39.5];
        let curve = kde(&values, KDE_GRID, 0.0);
        assert_eq!(curve.len(), KDE_GRID);
        assert!((curve[0][0] - 18.0).abs() < 1e-9);
        assert!((curve[KDE_GRID - 1][0] - 39.5).abs() < 1e-9);

        let wide = kde(&values, KDE_GRID, KDE_CUT);
        assert!(wide[0][0] < 18.0);
        assert!(wide[KDE_GRID - 1][0] > 39.5);
    }

    #[test]
    fn test_histogram_skips_nan_values() {
        let h = Histogram::compute(&[1.0, f64::NAN, 3.0], 2);
        assert_eq!(h.edges, vec![1.0, 2.0, 3.0]);
        assert_eq!(h.total(), 2);
    }

    #[test]
    fn test_scale_density() {
        let scaled = scale_density(&[[0.0, 0.5], [1.0, 0.25]], 10, 2.0);
        assert_eq!(scaled, vec![[0.0, 10.0], [1.0, 5.0]]);
    }
}
