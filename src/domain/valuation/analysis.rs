use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence at or above which an estimate is presented as reliable.
pub const RELIABLE_CONFIDENCE: f64 = 85.0;

/// Uncertainty band around a point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: Decimal,
    pub high: Decimal,
}

impl PriceRange {
    pub fn width(&self) -> Decimal {
        self.high - self.low
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.low <= price && price <= self.high
    }
}

/// Coarse display bucket for a confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceTier {
    /// 90 and above
    High,
    /// 80 to below 90
    Good,
    /// 70 to below 80
    Moderate,
    /// Below 70
    Low,
}

impl ConfidenceTier {
    /// Thresholds are checked from the top down, lower bounds inclusive.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 90.0 {
            ConfidenceTier::High
        } else if confidence >= 80.0 {
            ConfidenceTier::Good
        } else if confidence >= 70.0 {
            ConfidenceTier::Moderate
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Good => "Good",
            ConfidenceTier::Moderate => "Moderate",
            ConfidenceTier::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed difference between an estimate and the reference market average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketDelta {
    pub amount: Decimal,
    pub percent: f64,
    pub market_average: Decimal,
}

impl MarketDelta {
    pub fn is_above_market(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// Display-ready analytics derived from an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedResult {
    pub price_range: PriceRange,
    pub confidence_tier: ConfidenceTier,
    pub market_delta: MarketDelta,
    pub reliable: bool,
}

impl AnalyzedResult {
    pub fn advisory(&self) -> &'static str {
        if self.reliable {
            "High confidence prediction - reliable estimate"
        } else {
            "Moderate confidence - consider additional factors"
        }
    }
}
