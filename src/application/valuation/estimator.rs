use crate::domain::errors::ValuationError;
use crate::domain::ports::NoiseSource;
use crate::domain::valuation::estimate::{DEFAULT_MODEL_NAME, Estimate};
use crate::domain::valuation::features::Features;
use crate::infrastructure::simulation::ThreadRngNoise;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::sync::Arc;
use tracing::{debug, warn};

pub const BASE_PRICE: Decimal = dec!(200000);
pub const PRICE_PER_SQFT: Decimal = dec!(150);
pub const PRICE_PER_BEDROOM: Decimal = dec!(25000);
pub const PRICE_PER_BATHROOM: Decimal = dec!(20000);
pub const DEPRECIATION_PER_YEAR: Decimal = dec!(2000);
pub const PRICE_PER_GARAGE_SPACE: Decimal = dec!(15000);
pub const POOL_PREMIUM: Decimal = dec!(50000);
pub const RENOVATION_PREMIUM: Decimal = dec!(40000);

/// Total width of the perturbation band: factor lies in `[0.95, 1.05)`.
pub const PRICE_VARIANCE: f64 = 0.10;

pub const CONFIDENCE_FLOOR: f64 = 85.0;
pub const CONFIDENCE_SPAN: f64 = 10.0;

/// Inputs beyond this cannot describe a dwelling and would overflow the
/// decimal arithmetic.
const MAX_FRACTIONAL_INPUT: f64 = 1e15;

/// Rule-based price estimator with bounded random noise.
///
/// The attribute formula is deterministic; only the final perturbation and
/// the confidence draw come from the injected [`NoiseSource`].
pub struct PriceEstimator {
    noise: Arc<dyn NoiseSource>,
    model_name: String,
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngNoise))
    }
}

impl PriceEstimator {
    pub fn new(noise: Arc<dyn NoiseSource>) -> Self {
        Self {
            noise,
            model_name: DEFAULT_MODEL_NAME.to_string(),
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Deterministic price before the random perturbation.
    pub fn base_price(features: &Features) -> Result<Decimal, ValuationError> {
        features.ensure_well_formed()?;
        let sqft = to_decimal("sqft", features.sqft)?;
        let bathrooms = to_decimal("bathrooms", features.bathrooms)?;

        let mut base = BASE_PRICE;
        base += sqft * PRICE_PER_SQFT;
        base += Decimal::from(features.bedrooms) * PRICE_PER_BEDROOM;
        base += bathrooms * PRICE_PER_BATHROOM;
        base -= Decimal::from(features.age) * DEPRECIATION_PER_YEAR;

        base *= features.location.multiplier();

        if features.garage > 0 {
            base += Decimal::from(features.garage) * PRICE_PER_GARAGE_SPACE;
        }
        if features.pool {
            base += POOL_PREMIUM;
        }
        if features.renovated {
            base += RENOVATION_PREMIUM;
        }

        Ok(base)
    }

    /// Maps a uniform draw in `[0, 1)` to a multiplier in `[0.95, 1.05)`.
    pub fn perturbation_factor(unit: f64) -> f64 {
        1.0 + (unit - 0.5) * PRICE_VARIANCE
    }

    /// Maps a uniform draw in `[0, 1)` to a confidence in `[85, 95)` with one
    /// decimal place.
    pub fn confidence_from_draw(unit: f64) -> f64 {
        let raw = CONFIDENCE_FLOOR + unit * CONFIDENCE_SPAN;
        let ceiling_tenths = (CONFIDENCE_FLOOR + CONFIDENCE_SPAN) * 10.0 - 1.0;
        let tenths = (raw * 10.0).round().clamp(CONFIDENCE_FLOOR * 10.0, ceiling_tenths);
        tenths / 10.0
    }

    pub fn estimate(&self, features: &Features) -> Result<Estimate, ValuationError> {
        let base = Self::base_price(features).inspect_err(|e| {
            warn!("PriceEstimator: rejected features: {}", e);
        })?;

        let factor = Self::perturbation_factor(self.noise.next_unit());
        let factor = Decimal::from_f64(factor).unwrap_or(Decimal::ONE);
        let price = (base * factor).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let confidence = Self::confidence_from_draw(self.noise.next_unit());

        debug!(
            "PriceEstimator: base={} factor={} price={} confidence={}% location={}",
            base, factor, price, confidence, features.location
        );

        Ok(Estimate {
            price,
            confidence,
            model_name: self.model_name.clone(),
            features: features.clone(),
        })
    }
}

fn to_decimal(field: &'static str, value: f64) -> Result<Decimal, ValuationError> {
    if value.abs() > MAX_FRACTIONAL_INPUT {
        return Err(ValuationError::InvalidInput {
            field,
            reason: format!("implausibly large value {}", value),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| ValuationError::InvalidInput {
        field,
        reason: format!("cannot represent {} as a decimal", value),
    })
}
