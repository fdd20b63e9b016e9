use thiserror::Error;

/// Errors raised by the valuation engine.
///
/// Every variant describes a caller contract violation; none of them are
/// transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unknown location '{value}': must be 'urban', 'suburban' or 'rural'")]
    UnknownLocation { value: String },

    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Market average must be a positive finite amount, got {value}")]
    DegenerateMarketAverage { value: String },
}

/// Errors related to the model comparison catalog
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Model catalog is empty")]
    Empty,

    #[error("Duplicate model in catalog: {name}")]
    DuplicateModel { name: String },

    #[error("Model not found in catalog: {name}")]
    ModelNotFound { name: String },

    #[error("Invalid metric {metric} for {name}: {reason}")]
    InvalidMetric {
        name: String,
        metric: &'static str,
        reason: String,
    },
}
