//! Project-level configuration support
//!
//! Loads report defaults from a `spendguard.toml` in the working directory
//! or at an explicit path. Rule codes, weights, and thresholds are part of
//! the scoring contract and are deliberately not configurable.
//!
//! # Configuration Format
//!
//! ```toml
//! # spendguard.toml
//!
//! [report]
//! format = "text"
//! min_severity = "medium"
//! fail_on = "high"
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "spendguard.toml";

/// Configuration loaded from spendguard.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// `[report]` section: defaults the CLI falls back to
    #[serde(default)]
    pub report: ReportDefaults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportDefaults {
    /// Output format when `--format` is not given
    #[serde(default = "default_format")]
    pub format: String,

    /// Minimum severity shown in rendered output (display filter only)
    #[serde(default)]
    pub min_severity: Option<String>,

    /// Exit non-zero when any scored expense reaches this severity
    #[serde(default)]
    pub fail_on: Option<String>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            format: default_format(),
            min_severity: None,
            fail_on: None,
        }
    }
}

impl AppConfig {
    /// Load from an explicit path, or `spendguard.toml` if none is given.
    ///
    /// A missing file is not an error, and malformed TOML logs a warning
    /// and falls back to defaults: scoring is advisory and should not be
    /// blocked by a bad config.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load_from(Path::new(CONFIG_FILE)),
        }
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("no config file at {:?}, using defaults", path);
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    debug!("loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("ignoring malformed config {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
