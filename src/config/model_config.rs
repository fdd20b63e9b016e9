//! Model selection configuration parsing from environment variables.
//!
//! Covers the label stamped on estimates, an optional replacement catalog
//! file and an optional noise seed.

use crate::domain::valuation::estimate::DEFAULT_MODEL_NAME;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Model environment configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_name: String,
    pub catalog_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            catalog_path: None,
            seed: None,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_name = non_empty("VALUATION_MODEL_NAME")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

        let catalog_path = non_empty("MODEL_CATALOG_PATH").map(PathBuf::from);

        let seed = non_empty("VALUATION_SEED")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("Failed to parse VALUATION_SEED")?;

        Ok(Self {
            model_name,
            catalog_path,
            seed,
        })
    }
}
