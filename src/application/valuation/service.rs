use crate::application::valuation::analyzer::ResultAnalyzer;
use crate::application::valuation::estimator::PriceEstimator;
use crate::config::Config;
use crate::domain::errors::ValuationError;
use crate::domain::ports::NoiseSource;
use crate::domain::valuation::analysis::AnalyzedResult;
use crate::domain::valuation::estimate::Estimate;
use crate::domain::valuation::features::Features;
use crate::domain::valuation::model_catalog::ModelCatalog;
use crate::domain::valuation::report::ValuationReport;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Runs one submission through the estimator and the analyzer.
///
/// Holds no per-request state, so a single instance can serve concurrent
/// callers behind an `Arc`.
pub struct ValuationService {
    estimator: PriceEstimator,
    analyzer: ResultAnalyzer,
    catalog: ModelCatalog,
}

impl ValuationService {
    pub fn new(estimator: PriceEstimator, analyzer: ResultAnalyzer, catalog: ModelCatalog) -> Self {
        Self {
            estimator,
            analyzer,
            catalog,
        }
    }

    pub fn from_config(config: &Config, noise: Arc<dyn NoiseSource>) -> Result<Self, ValuationError> {
        let estimator = PriceEstimator::new(noise).with_model_name(config.model_name.clone());
        let analyzer = ResultAnalyzer::new(config.market_average)?;
        Ok(Self::new(estimator, analyzer, config.catalog.clone()))
    }

    pub fn estimate(&self, features: &Features) -> Result<Estimate, ValuationError> {
        self.estimator.estimate(features)
    }

    pub fn analyze(&self, estimate: &Estimate) -> Result<AnalyzedResult, ValuationError> {
        self.analyzer.analyze(estimate)
    }

    /// Estimate, analyze and bundle into a timestamped report.
    pub fn appraise(&self, features: &Features) -> Result<ValuationReport, ValuationError> {
        let estimate = self.estimate(features)?;
        let analysis = self.analyze(&estimate)?;
        let model = self.catalog.get(&estimate.model_name).cloned();

        info!(
            "Valuation: {} {} sqft -> {} ({} confidence, {}%)",
            features.location,
            features.sqft,
            estimate.price,
            analysis.confidence_tier,
            estimate.confidence
        );

        Ok(ValuationReport {
            generated_at: Utc::now(),
            estimate,
            analysis,
            model,
        })
    }
}
