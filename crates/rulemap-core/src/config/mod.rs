//! Configuration for every rulemap subsystem.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`RULEMAP_*`)
//! 2. TOML config file
//! 3. Compiled defaults (`defaults.rs`)

pub mod catalog_config;
pub mod defaults;
pub mod embedding_config;
pub mod matching_config;
pub mod observability_config;
pub mod retrieval_config;

pub use catalog_config::CatalogConfig;
pub use embedding_config::EmbeddingConfig;
pub use matching_config::MatchingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulemapConfig {
    pub embedding: EmbeddingConfig,
    pub matching: MatchingConfig,
    pub retrieval: RetrievalConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

impl RulemapConfig {
    /// Load configuration: defaults, then the optional TOML file, then `RULEMAP_*`
    /// environment overrides, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    ///
    /// Recognized variables: `RULEMAP_EMBEDDING_PROVIDER`, `RULEMAP_EMBEDDING_MODEL_PATH`,
    /// `RULEMAP_MATCHING_THRESHOLD`, `RULEMAP_RETRIEVAL_THRESHOLD`, `RULEMAP_LOG_LEVEL`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("RULEMAP_EMBEDDING_PROVIDER") {
            self.embedding.provider = provider;
        }
        if let Some(model_path) = lookup("RULEMAP_EMBEDDING_MODEL_PATH") {
            self.embedding.model_path = Some(model_path);
        }
        if let Some(raw) = lookup("RULEMAP_MATCHING_THRESHOLD") {
            self.matching.threshold = parse_threshold("RULEMAP_MATCHING_THRESHOLD", &raw)?;
        }
        if let Some(raw) = lookup("RULEMAP_RETRIEVAL_THRESHOLD") {
            self.retrieval.threshold = parse_threshold("RULEMAP_RETRIEVAL_THRESHOLD", &raw)?;
        }
        if let Some(level) = lookup("RULEMAP_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if self.embedding.batch_size == 0 {
            return Err(invalid("embedding.batch_size", "must be greater than 0"));
        }
        if !(-1.0..=1.0).contains(&self.matching.threshold) {
            return Err(invalid("matching.threshold", "must be between -1.0 and 1.0"));
        }
        if !(-1.0..=1.0).contains(&self.retrieval.threshold) {
            return Err(invalid("retrieval.threshold", "must be between -1.0 and 1.0"));
        }
        if self.matching.top_k == 0 {
            return Err(invalid("matching.top_k", "must be greater than 0"));
        }
        if self.retrieval.top_k == 0 || self.retrieval.context_top_k == 0 {
            return Err(invalid("retrieval.top_k", "must be greater than 0"));
        }
        if self.matching.overfetch_factor == 0 {
            return Err(invalid("matching.overfetch_factor", "must be at least 1"));
        }
        if self.retrieval.overfetch_factor == 0 {
            return Err(invalid("retrieval.overfetch_factor", "must be at least 1"));
        }
        if self.retrieval.min_chunk_chars < crate::constants::MIN_CHUNK_CHARS {
            return Err(invalid(
                "retrieval.min_chunk_chars",
                &format!("must be at least {}", crate::constants::MIN_CHUNK_CHARS),
            ));
        }
        Ok(())
    }
}

fn parse_threshold(variable: &str, raw: &str) -> Result<f32, ConfigError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::ValidationFailed {
            field: variable.to_string(),
            message: format!("not a number: {e}"),
        })
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
