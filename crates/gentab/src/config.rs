//! Configuration for diagnostics and logging.
//!
//! Stored as TOML; every section and field is optional and falls back to its
//! default, so a partial file such as
//!
//! ```toml
//! [diagnostics]
//! dispatch_tolerance = 0.01
//! ```
//!
//! is valid.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GentabConfig {
    pub diagnostics: DiagnosticsConfig,
    pub logging: LoggingConfig,
}

/// Thresholds for [`GenTable::diagnose`](crate::GenTable::diagnose).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Largest |PG| or |QG| tolerated on an out-of-service unit.
    pub dispatch_tolerance: f64,

    /// Flag PMIN > PMAX and QMIN > QMAX.
    pub check_limits: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            dispatch_tolerance: 1e-6,
            check_limits: true,
        }
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,

    /// Colored output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: true,
        }
    }
}

impl GentabConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("parsing gentab config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading gentab config: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("invalid gentab config: {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing gentab config")
    }
}
