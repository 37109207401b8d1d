use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use marks_viewer::config::AnalysisConfig;
use marks_viewer::data::loader;
use marks_viewer::data::model::AnalysisReport;
use marks_viewer::data::pipeline::{ResultSink, process_into};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The one message shown after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Validation and binning settings.
    pub config: AnalysisConfig,

    /// Result of the last successful run (None until a valid file is loaded).
    pub report: Option<AnalysisReport>,

    /// File the current report or error came from.
    pub source_path: Option<PathBuf>,

    /// Success / error message shown in the UI.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Read `path`, run the analysis and record exactly one outcome.
    pub fn load_path(&mut self, path: &Path) {
        self.source_path = Some(path.to_path_buf());

        match loader::load_file(path) {
            Ok(table) => {
                let config = self.config.clone();
                process_into(&table, &config, self);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.show_error(&format!("{e:#}"));
            }
        }
    }

    /// Write the current report as pretty JSON.
    pub fn export_report(&self, path: &Path) -> Result<()> {
        let report = self
            .report
            .as_ref()
            .context("no results to export")?;
        let json = serde_json::to_string_pretty(report).context("serializing report")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Exported results to {}", path.display());
        Ok(())
    }
}

impl ResultSink for AppState {
    fn show_success(&mut self, report: &AnalysisReport) {
        self.status_message = Some(StatusMessage::Success(format!(
            "Successfully processed {} records!",
            report.record_count
        )));
        self.report = Some(report.clone());
    }

    fn show_error(&mut self, message: &str) {
        self.status_message = Some(StatusMessage::Error(format!("Error: {message}")));
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn csv_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn valid_file_sets_report_and_success() {
        let file = csv_file("Index,Marks\n1,0\n2,50\n3,100\n");
        let mut state = AppState::default();
        state.load_path(file.path());

        assert_eq!(state.report.as_ref().unwrap().record_count, 3);
        assert_eq!(
            state.status_message,
            Some(StatusMessage::Success("Successfully processed 3 records!".into()))
        );
    }

    #[test]
    fn invalid_file_clears_previous_report() {
        let good = csv_file("Index,Marks\n1,40\n");
        let bad = csv_file("Index,Marks\n1,-5\n2,50\n");
        let mut state = AppState::default();
        state.load_path(good.path());
        state.load_path(bad.path());

        assert!(state.report.is_none());
        assert_eq!(
            state.status_message,
            Some(StatusMessage::Error(
                "Error: Marks should be between 0 and 100 (percentages)".into()
            ))
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let mut state = AppState::default();
        state.load_path(Path::new("/nonexistent/marks.csv"));
        assert!(matches!(state.status_message, Some(StatusMessage::Error(_))));
    }

    #[test]
    fn export_writes_json() {
        let file = csv_file("Index,Marks\n1,20\n2,80\n");
        let out = tempfile::NamedTempFile::new().unwrap();
        let mut state = AppState::default();
        assert!(state.export_report(out.path()).is_err());

        state.load_path(file.path());
        state.export_report(out.path()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
        assert_eq!(json["statistics"]["mean"], 50.0);
    }
}
