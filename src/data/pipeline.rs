use super::histogram;
use super::model::{AnalysisReport, RawTable};
use super::stats;
use super::validate::{ValidationError, validate};
use crate::config::AnalysisConfig;

/// Receiver of a pipeline outcome. Exactly one method is called per run.
pub trait ResultSink {
    fn show_success(&mut self, report: &AnalysisReport);
    fn show_error(&mut self, message: &str);
}

/// Validate `table`, then compute statistics and the histogram from the same
/// series.
///
/// Validation failures are returned; the statistics and histogram stages are
/// total over a validated series, so a panic there is a bug and is not caught.
pub fn process(
    table: &RawTable,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, ValidationError> {
    let series = validate(table, config)?;

    let statistics = stats::compute(&series);
    let histogram = histogram::bin(&series, config.bin_count);

    Ok(AnalysisReport {
        statistics,
        histogram,
        record_count: series.len(),
    })
}

/// Run [`process`] and hand the outcome to `sink`.
pub fn process_into<S: ResultSink + ?Sized>(
    table: &RawTable,
    config: &AnalysisConfig,
    sink: &mut S,
) -> Option<AnalysisReport> {
    match process(table, config) {
        Ok(report) => {
            log::info!("Processed {} records", report.record_count);
            sink.show_success(&report);
            Some(report)
        }
        Err(e) => {
            log::warn!("Rejected table ({:?}): {e}", e.kind());
            sink.show_error(&e.to_string());
            None
        }
    }
}
