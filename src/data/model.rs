use serde::Serialize;

// ---------------------------------------------------------------------------
// RawTable – parsed delimited text, owned by the caller
// ---------------------------------------------------------------------------

/// A parsed delimited table: optional header row plus data rows of text cells.
///
/// Rows may be ragged; a row shorter than the measurement column simply has a
/// missing cell there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the first line, if the source had one.
    pub header: Option<Vec<String>>,
    /// Data rows in file order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Build a headerless table from string slices. Handy in tests and tools.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            header: None,
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Number of columns: the widest of the header and every data row.
    pub fn column_count(&self) -> usize {
        let header_width = self.header.as_ref().map_or(0, Vec::len);
        self.rows
            .iter()
            .map(Vec::len)
            .fold(header_width, usize::max)
    }

    /// Cells of one column in row order; `None` where a row is too short.
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str))
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// MeasurementSeries – validated marks
// ---------------------------------------------------------------------------

/// Validated marks in row order.
///
/// Only the validator builds these, so holders can rely on the series being
/// non-empty with every value finite and in range.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSeries {
    values: Vec<f64>,
}

impl MeasurementSeries {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty(), "measurement series needs at least one value");
        debug_assert!(values.iter().all(|v| v.is_finite()));
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a validated series; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values sorted ascending.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.values.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

// ---------------------------------------------------------------------------
// StatisticsRecord
// ---------------------------------------------------------------------------

/// Descriptive statistics of a measurement series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsRecord {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (divisor `n - 1`); `None` when `count < 2`.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub max: f64,
    /// 25th percentile, linear interpolation.
    pub q1: f64,
    /// 75th percentile, linear interpolation.
    pub q3: f64,
}

// ---------------------------------------------------------------------------
// HistogramRecord
// ---------------------------------------------------------------------------

/// One equal-width bin. Covers `[lower, upper)`, except the last bin of a
/// histogram which also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

impl HistogramBin {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn center(&self) -> f64 {
        self.lower + self.width() / 2.0
    }
}

/// Frequency distribution plus the reference lines drawn over it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramRecord {
    pub bins: Vec<HistogramBin>,
    pub mean: f64,
    pub median: f64,
}

impl HistogramRecord {
    /// Sum of all bin counts.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Bin edges, `bins.len() + 1` values.
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|b| b.lower).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.upper);
        }
        edges
    }
}

// ---------------------------------------------------------------------------
// AnalysisReport – the pipeline's success payload
// ---------------------------------------------------------------------------

/// Everything the renderer needs after a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub statistics: StatisticsRecord,
    pub histogram: HistogramRecord,
    pub record_count: usize,
}
