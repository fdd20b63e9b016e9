use crate::domain::valuation::analysis::AnalyzedResult;
use crate::domain::valuation::estimate::Estimate;
use crate::domain::valuation::model_catalog::ModelMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-contained snapshot of one valuation for export by a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub generated_at: DateTime<Utc>,
    pub estimate: Estimate,
    pub analysis: AnalyzedResult,
    /// Comparison metrics of the model named on the estimate, when catalogued
    pub model: Option<ModelMetrics>,
}

impl ValuationReport {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
