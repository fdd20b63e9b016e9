//! Market reference configuration parsing from environment variables.

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

pub const DEFAULT_MARKET_AVERAGE: Decimal = dec!(425000);

/// Smallest accepted average: one whole currency unit.
pub const MIN_MARKET_AVERAGE: Decimal = dec!(1);

/// Market environment configuration
#[derive(Debug, Clone)]
pub struct MarketEnvConfig {
    /// Reference average price used for the market delta
    pub market_average: Decimal,
}

impl Default for MarketEnvConfig {
    fn default() -> Self {
        Self {
            market_average: DEFAULT_MARKET_AVERAGE,
        }
    }
}

impl MarketEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let market_average = match lookup("MARKET_AVERAGE_PRICE") {
            Some(raw) => Decimal::from_str(raw.trim())
                .context("Failed to parse MARKET_AVERAGE_PRICE")?,
            None => DEFAULT_MARKET_AVERAGE,
        };

        if market_average <= Decimal::ZERO {
            bail!(
                "MARKET_AVERAGE_PRICE must be greater than zero, got: {}",
                market_average
            );
        }
        if market_average < MIN_MARKET_AVERAGE {
            bail!(
                "MARKET_AVERAGE_PRICE must be at least {}, got: {}",
                MIN_MARKET_AVERAGE,
                market_average
            );
        }

        Ok(Self { market_average })
    }
}
