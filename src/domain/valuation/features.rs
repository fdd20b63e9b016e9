use crate::domain::errors::ValuationError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Practical bounds offered by the input form.
pub const SQFT_RANGE: (f64, f64) = (500.0, 10000.0);
pub const AGE_RANGE: (u32, u32) = (0, 100);
pub const BEDROOMS_RANGE: (u32, u32) = (1, 6);
pub const BATHROOMS_RANGE: (f64, f64) = (1.0, 5.0);
pub const GARAGE_RANGE: (u32, u32) = (0, 4);

/// Neighbourhood type of the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

impl Location {
    pub const ALL: [Location; 3] = [Location::Urban, Location::Suburban, Location::Rural];

    /// Price multiplier applied to the attribute-driven base price.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Location::Urban => dec!(1.3),
            Location::Suburban => dec!(1.0),
            Location::Rural => dec!(0.8),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Urban => "urban",
            Location::Suburban => "suburban",
            Location::Rural => "rural",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urban" => Ok(Location::Urban),
            "suburban" => Ok(Location::Suburban),
            "rural" => Ok(Location::Rural),
            _ => Err(ValuationError::UnknownLocation {
                value: s.to_string(),
            }),
        }
    }
}

/// Attributes of a single property submitted for valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub sqft: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    /// Years since construction
    pub age: u32,
    pub location: Location,
    /// Garage spaces
    pub garage: u32,
    pub pool: bool,
    pub renovated: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            sqft: 2000.0,
            bedrooms: 3,
            bathrooms: 2.0,
            age: 10,
            location: Location::Suburban,
            garage: 2,
            pool: false,
            renovated: false,
        }
    }
}

impl Features {
    /// Rejects values the pricing formula cannot work with: non-finite or
    /// negative fractional fields and a zero floor area.
    pub fn ensure_well_formed(&self) -> Result<(), ValuationError> {
        if !self.sqft.is_finite() || self.sqft <= 0.0 {
            return Err(ValuationError::InvalidInput {
                field: "sqft",
                reason: format!("must be a positive finite number, got {}", self.sqft),
            });
        }
        if !self.bathrooms.is_finite() || self.bathrooms < 0.0 {
            return Err(ValuationError::InvalidInput {
                field: "bathrooms",
                reason: format!(
                    "must be a non-negative finite number, got {}",
                    self.bathrooms
                ),
            });
        }
        Ok(())
    }

    /// Strict check against the ranges the input form allows.
    ///
    /// Not applied by the estimator itself; callers that accept free-form
    /// input run it before estimating.
    pub fn validate_practical(&self) -> Result<(), ValuationError> {
        self.ensure_well_formed()?;

        check_range("sqft", self.sqft, SQFT_RANGE.0, SQFT_RANGE.1)?;
        check_range(
            "bedrooms",
            self.bedrooms as f64,
            BEDROOMS_RANGE.0 as f64,
            BEDROOMS_RANGE.1 as f64,
        )?;
        check_range(
            "bathrooms",
            self.bathrooms,
            BATHROOMS_RANGE.0,
            BATHROOMS_RANGE.1,
        )?;
        if (self.bathrooms * 2.0).fract() != 0.0 {
            return Err(ValuationError::InvalidInput {
                field: "bathrooms",
                reason: format!("must be a multiple of 0.5, got {}", self.bathrooms),
            });
        }
        check_range(
            "age",
            self.age as f64,
            AGE_RANGE.0 as f64,
            AGE_RANGE.1 as f64,
        )?;
        check_range(
            "garage",
            self.garage as f64,
            GARAGE_RANGE.0 as f64,
            GARAGE_RANGE.1 as f64,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValuationError> {
    if value < min || value > max {
        return Err(ValuationError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
