pub mod analysis;
pub mod estimate;
pub mod features;
pub mod model_catalog;
pub mod report;

pub use analysis::{AnalyzedResult, ConfidenceTier, MarketDelta, PriceRange};
pub use estimate::{DEFAULT_MODEL_NAME, Estimate};
pub use features::{Features, Location};
pub use model_catalog::{ModelCatalog, ModelMetrics, ModelStatus};
pub use report::ValuationReport;
