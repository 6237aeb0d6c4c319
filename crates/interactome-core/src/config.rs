//! Analysis configuration.
//!
//! Every field has a serde default so a partial (or absent) TOML file
//! yields a fully usable config. CLI flags override whatever the file
//! provides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::filter::DEFAULT_THRESHOLDS;
use crate::model::RecordPolicy;

/// Top-level configuration for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filter: FilterConfig::default(),
            input: InputConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Descending candidate thresholds, strictest first.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<f64>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// How malformed rows are handled (`skip` or `fail`).
    #[serde(default)]
    pub on_malformed: RecordPolicy,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            on_malformed: RecordPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Size of the small hub table.
    #[serde(default = "default_small_hubs")]
    pub small_hubs: usize,
    /// Size of the large hub table.
    #[serde(default = "default_large_hubs")]
    pub large_hubs: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            small_hubs: default_small_hubs(),
            large_hubs: default_large_hubs(),
        }
    }
}

fn default_thresholds() -> Vec<f64> {
    DEFAULT_THRESHOLDS.to_vec()
}

const fn default_small_hubs() -> usize {
    5
}

const fn default_large_hubs() -> usize {
    10
}

impl AnalysisConfig {
    /// Load config from a TOML file, or the defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let config = AnalysisConfig::default();
        assert_eq!(config.filter.thresholds, vec![700.0, 400.0, 0.0]);
        assert_eq!(config.report.small_hubs, 5);
        assert_eq!(config.report.large_hubs, 10);
        assert_eq!(config.input.on_malformed, RecordPolicy::Skip);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AnalysisConfig::load(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(config.filter.thresholds, vec![700.0, 400.0, 0.0]);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ppi.toml");
        let mut f = std::fs::File::create(&path).expect("create");
        writeln!(f, "[filter]\nthresholds = [900.0, 0.0]").expect("write");

        let config = AnalysisConfig::load(&path).expect("load");
        assert_eq!(config.filter.thresholds, vec![900.0, 0.0]);
        assert_eq!(config.report.small_hubs, 5);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[filter\nthresholds = oops").expect("write");
        assert!(AnalysisConfig::load(&path).is_err());
    }

    #[test]
    fn on_malformed_parses_lowercase() {
        let config: AnalysisConfig =
            toml::from_str("[input]\non_malformed = \"fail\"").expect("parse");
        assert_eq!(config.input.on_malformed, RecordPolicy::Fail);
    }
}
