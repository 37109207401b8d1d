use thiserror::Error;

use super::model::{MeasurementSeries, RawTable};
use crate::config::AnalysisConfig;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Why a table was rejected. Every variant is a user-facing outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("CSV must contain at least 2 columns (Index and Marks)")]
    Schema { columns: usize },

    #[error("Found {invalid} invalid/missing values in marks column")]
    Parse { invalid: usize },

    /// `min`/`max` are the observed extremes, `lo`/`hi` the accepted bounds.
    #[error("Marks should be between {lo} and {hi} (percentages)")]
    Range { min: f64, max: f64, lo: f64, hi: f64 },

    #[error("No valid data found in the CSV file")]
    EmptyData,
}

/// Fieldless discriminant of [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    Schema,
    Parse,
    Range,
    EmptyData,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::Schema { .. } => ValidationErrorKind::Schema,
            ValidationError::Parse { .. } => ValidationErrorKind::Parse,
            ValidationError::Range { .. } => ValidationErrorKind::Range,
            ValidationError::EmptyData => ValidationErrorKind::EmptyData,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Lenient numeric coercion of one cell. Blank, missing, unparsable and NaN
/// cells come back as `None`; infinities pass through and fail the range check.
pub fn coerce_cell(cell: Option<&str>) -> Option<f64> {
    let text = cell?.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Extract the marks column and check it.
///
/// Checks run in this order: column count, per-cell coercion (all cells are
/// classified before failing), emptiness, range.
pub fn validate(
    table: &RawTable,
    config: &AnalysisConfig,
) -> Result<MeasurementSeries, ValidationError> {
    let columns = table.column_count();
    if columns <= config.measurement_column.max(1) {
        return Err(ValidationError::Schema { columns });
    }

    let coerced: Vec<Option<f64>> = table
        .column(config.measurement_column)
        .map(coerce_cell)
        .collect();

    let invalid = coerced.iter().filter(|v| v.is_none()).count();
    if invalid > 0 {
        return Err(ValidationError::Parse { invalid });
    }

    let values: Vec<f64> = coerced.into_iter().flatten().collect();
    if values.is_empty() {
        return Err(ValidationError::EmptyData);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min < config.min_value || max > config.max_value {
        return Err(ValidationError::Range {
            min,
            max,
            lo: config.min_value,
            hi: config.max_value,
        });
    }

    Ok(MeasurementSeries::from_values(values))
}
