pub mod analyzer;
pub mod estimator;
pub mod service;

pub use analyzer::{ResultAnalyzer, analyze};
pub use estimator::PriceEstimator;
pub use service::ValuationService;
