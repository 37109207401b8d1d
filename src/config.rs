use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "MARKS_VIEWER_CONFIG";

/// Tunables for validation and binning.
///
/// Expected JSON (every key optional):
///
/// ```json
/// { "measurement_column": 1, "bin_count": 20, "min_value": 0.0, "max_value": 100.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Zero-based index of the column holding the marks.
    pub measurement_column: usize,
    /// Number of equal-width histogram bins.
    pub bin_count: usize,
    /// Smallest accepted mark (inclusive).
    pub min_value: f64,
    /// Largest accepted mark (inclusive).
    pub max_value: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            measurement_column: 1,
            bin_count: 20,
            min_value: 0.0,
            max_value: 100.0,
        }
    }
}

impl AnalysisConfig {
    /// Read and check a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text).context("parsing config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Config from `$MARKS_VIEWER_CONFIG` if set, defaults otherwise.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = Path::new(&path);
                log::info!("Loading analysis config from {}", path.display());
                Self::from_json_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.bin_count == 0 {
            bail!("bin_count must be at least 1");
        }
        if !(self.min_value < self.max_value) {
            bail!(
                "min_value ({}) must be below max_value ({})",
                self.min_value,
                self.max_value
            );
        }
        Ok(())
    }
}
