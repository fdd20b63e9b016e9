//! Configuration module for homeval.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Market reference data and Model selection.

mod market_config;
mod model_config;

pub use market_config::{DEFAULT_MARKET_AVERAGE, MIN_MARKET_AVERAGE, MarketEnvConfig};
pub use model_config::ModelEnvConfig;

use crate::domain::valuation::model_catalog::ModelCatalog;
use crate::infrastructure::model_catalog_file::ModelCatalogFile;
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use tracing::info;

/// Main application configuration.
///
/// Loaded once at process start and handed to the valuation service.
#[derive(Debug, Clone)]
pub struct Config {
    // Market (from MarketEnvConfig)
    pub market_average: Decimal,

    // Model (from ModelEnvConfig)
    pub model_name: String,
    pub seed: Option<u64>,

    // Catalog (built-in or loaded from MODEL_CATALOG_PATH)
    pub catalog: ModelCatalog,
}

impl Default for Config {
    fn default() -> Self {
        let market = MarketEnvConfig::default();
        let model = ModelEnvConfig::default();
        Self {
            market_average: market.market_average,
            model_name: model.model_name,
            seed: model.seed,
            catalog: ModelCatalog::builtin(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let market = MarketEnvConfig::from_lookup(&lookup).context("Invalid market configuration")?;
        let model = ModelEnvConfig::from_lookup(&lookup).context("Invalid model configuration")?;

        let catalog = match &model.catalog_path {
            Some(path) => ModelCatalogFile::new(path).load()?,
            None => ModelCatalog::builtin(),
        };

        // The stamped label must refer to a catalogued model
        catalog.require(&model.model_name).with_context(|| {
            format!(
                "VALUATION_MODEL_NAME '{}' is not in the model catalog",
                model.model_name
            )
        })?;

        info!(
            "Configuration loaded: market_average={} model='{}' catalog_models={} seeded={}",
            market.market_average,
            model.model_name,
            catalog.models.len(),
            model.seed.is_some()
        );

        Ok(Self {
            market_average: market.market_average,
            model_name: model.model_name,
            seed: model.seed,
            catalog,
        })
    }
}
