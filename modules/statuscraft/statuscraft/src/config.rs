//! Configuration for the statuscraft module.
//!
//! Loaded from an optional YAML file merged with `STATUSCRAFT_`-prefixed
//! environment variables (nested keys split on `__`). All fields carry
//! working defaults so an empty configuration is valid.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCraftConfig {
    pub database: DatabaseConfig,
    pub audit: AuditQueryConfig,
    pub validation: ValidationConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string understood by sea-orm (`sqlite::memory:`,
    /// `sqlite://path`, `postgres://...`, `mysql://...`).
    pub dsn: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite::memory:".to_owned(),
        }
    }
}

/// Result-count limits for audit log queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditQueryConfig {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for AuditQueryConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 500,
        }
    }
}

impl AuditQueryConfig {
    /// Resolve a caller-supplied limit against the configured bounds.
    #[must_use]
    pub fn effective_limit(&self, requested: Option<u64>) -> u64 {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum accepted length for status and balance comments.
    pub max_comment_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_comment_length: 500,
        }
    }
}

impl StatusCraftConfig {
    /// Load configuration from a YAML file (if present) plus environment
    /// overrides, on top of the built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("STATUSCRAFT_").split("__"))
            .extract()
    }
}
