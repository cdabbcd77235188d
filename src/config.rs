//! Configuration file support.
//!
//! Every key is optional:
//!
//! ```toml
//! data_dir = "/var/lib/spanlog"
//!
//! [durability]
//! mode = "batched"        # "none" | "strict" | "batched"
//! batch_size = 1000
//! interval_ms = 100
//!
//! [query]
//! default_page_size = 20
//! max_page_size = 1000
//!
//! [retention]
//! default_older_than_days = 7
//!
//! [log]
//! level = "info"
//! ```
//!
//! Without `data_dir` the store is in-memory only.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use spanlog_durability::DurabilityMode;
use spanlog_executor::ExecutorConfig;
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the write-ahead log
    pub data_dir: Option<PathBuf>,
    /// fsync policy
    pub durability: DurabilityConfig,
    /// Listing defaults
    pub query: QueryConfig,
    /// Cleanup defaults
    pub retention: RetentionConfig,
    /// Logging
    pub log: LogConfig,
}

/// Durability mode names as written in the file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurabilityKind {
    /// No log
    None,
    /// fsync every append
    Strict,
    /// fsync by count or interval
    #[default]
    Batched,
}

/// `[durability]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurabilityConfig {
    /// Mode name
    pub mode: DurabilityKind,
    /// Appends between fsyncs in batched mode
    pub batch_size: usize,
    /// Milliseconds between fsyncs in batched mode
    pub interval_ms: u64,
}

impl Default for DurabilityConfig {
    fn default() -> Self {
        Self {
            mode: DurabilityKind::Batched,
            batch_size: 1000,
            interval_ms: 100,
        }
    }
}

/// `[query]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Page size when a listing does not give one
    pub default_page_size: usize,
    /// Upper bound on requested page sizes
    pub max_page_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 1000,
        }
    }
}

/// `[retention]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetentionConfig {
    /// Age used when cleanup does not give one
    pub default_older_than_days: i64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            default_older_than_days: 7,
        }
    }
}

/// `[log]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.query.default_page_size == 0 {
            return Err(Error::Config("query.default_page_size must be at least 1".into()));
        }
        if self.query.max_page_size < self.query.default_page_size {
            return Err(Error::Config(format!(
                "query.max_page_size ({}) is below query.default_page_size ({})",
                self.query.max_page_size, self.query.default_page_size
            )));
        }
        if self.durability.mode == DurabilityKind::Batched && self.durability.batch_size == 0 {
            return Err(Error::Config("durability.batch_size must be at least 1".into()));
        }
        Ok(())
    }

    /// The durability mode these settings describe
    pub fn durability_mode(&self) -> DurabilityMode {
        match self.durability.mode {
            DurabilityKind::None => DurabilityMode::None,
            DurabilityKind::Strict => DurabilityMode::Strict,
            DurabilityKind::Batched => DurabilityMode::Batched {
                interval_ms: self.durability.interval_ms,
                batch_size: self.durability.batch_size,
            },
        }
    }

    /// Binding defaults for the executor
    pub fn executor_config(&self) -> ExecutorConfig {
        ExecutorConfig {
            default_page_size: self.query.default_page_size,
            max_page_size: self.query.max_page_size,
            default_older_than_days: self.retention.default_older_than_days,
        }
    }
}
