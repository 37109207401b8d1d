use super::model::{HistogramBin, HistogramRecord, MeasurementSeries};
use super::stats;

/// Half-width of the widened range used when `[min, max]` is too narrow to bin.
pub const DEGENERATE_HALF_WIDTH: f64 = 0.5;

/// Equal-width histogram of a validated series.
///
/// The range `[min, max]` is split into `bin_count` bins. Bins are half-open
/// `[lower, upper)` except the last, which also holds `max`. When the range is
/// too narrow for strictly increasing edges (all values equal, or only a few
/// ULPs apart) it is widened to `[mid - 0.5, mid + 0.5]` around its midpoint,
/// so the bins stay well defined.
///
/// Mean and median are attached for the reference lines.
///
/// # Panics
///
/// Panics if the series is empty or `bin_count` is zero.
pub fn bin(series: &MeasurementSeries, bin_count: usize) -> HistogramRecord {
    assert!(!series.is_empty(), "histogram needs at least one value");
    assert!(bin_count > 0, "histogram needs at least one bin");

    let sorted = series.sorted();
    let (min, max) = (sorted[0], sorted[sorted.len() - 1]);
    let mut edges = equal_width_edges(min, max, bin_count);
    if !edges.windows(2).all(|w| w[0] < w[1]) {
        let mid = min + (max - min) / 2.0;
        edges = equal_width_edges(
            mid - DEGENERATE_HALF_WIDTH,
            mid + DEGENERATE_HALF_WIDTH,
            bin_count,
        );
    }

    let mut counts = vec![0u64; bin_count];
    for &value in &sorted {
        counts[bin_index(&edges, value)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: edges[i],
            upper: edges[i + 1],
            count,
        })
        .collect();

    let record = HistogramRecord {
        bins,
        mean: stats::mean(&sorted),
        median: stats::percentile_sorted(&sorted, 0.5),
    };
    log::debug!(
        "Binned {} values into {bin_count} bins over [{}, {}]",
        sorted.len(),
        edges[0],
        edges[bin_count]
    );
    record
}

/// `bin_count + 1` edges from `lo` to `hi`, each computed from the range
/// directly so no width error accumulates.
fn equal_width_edges(lo: f64, hi: f64, bin_count: usize) -> Vec<f64> {
    (0..=bin_count)
        .map(|i| lo + (hi - lo) * i as f64 / bin_count as f64)
        .collect()
}

/// Index of the bin holding `value`, given `edges.len() - 1` bins.
///
/// The arithmetic guess can land one bin off due to rounding, so it is
/// corrected against the actual edges.
fn bin_index(edges: &[f64], value: f64) -> usize {
    let bins = edges.len() - 1;
    let (lo, hi) = (edges[0], edges[bins]);
    let guess = ((value - lo) / (hi - lo) * bins as f64).floor();
    let mut idx = (guess.max(0.0) as usize).min(bins - 1);

    while idx > 0 && value < edges[idx] {
        idx -= 1;
    }
    while idx + 1 < bins && value >= edges[idx + 1] {
        idx += 1;
    }
    idx
}
