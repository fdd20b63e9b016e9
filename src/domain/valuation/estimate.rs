use crate::domain::valuation::features::Features;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label stamped on estimates when no other model is configured.
pub const DEFAULT_MODEL_NAME: &str = "XGBoost Regressor";

/// Output of a single valuation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Point estimate in whole currency units
    pub price: Decimal,
    /// Self-reported certainty in percent, one decimal place
    pub confidence: f64,
    pub model_name: String,
    /// Input the estimate was computed from
    pub features: Features,
}
