//! Static comparison table of the candidate pricing models.
//!
//! The figures are display data. Nothing in the engine computes or
//! updates them.

use crate::domain::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Best,
    Good,
    Baseline,
    Experimental,
}

impl ModelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModelStatus::Best => "🏆 Best Model",
            ModelStatus::Good => "✅ Good",
            ModelStatus::Baseline => "📊 Baseline",
            ModelStatus::Experimental => "🧪 Experimental",
        }
    }
}

/// Evaluation figures for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub name: String,
    /// Percent
    pub accuracy: f64,
    /// Mean absolute error in currency units
    pub mae: f64,
    /// Root mean square error in currency units
    pub rmse: f64,
    pub r2: f64,
    pub training_time: String,
    pub status: ModelStatus,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelMetrics>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelCatalog {
    /// Reference comparison shown by the dashboard.
    pub fn builtin() -> Self {
        let model = |name: &str,
                     accuracy: f64,
                     mae: f64,
                     rmse: f64,
                     r2: f64,
                     training_time: &str,
                     status: ModelStatus,
                     description: &str| ModelMetrics {
            name: name.to_string(),
            accuracy,
            mae,
            rmse,
            r2,
            training_time: training_time.to_string(),
            status,
            description: description.to_string(),
        };

        Self {
            models: vec![
                model(
                    "XGBoost Regressor",
                    92.3,
                    15420.0,
                    22180.0,
                    0.923,
                    "2.3s",
                    ModelStatus::Best,
                    "Gradient boosting with optimal performance",
                ),
                model(
                    "Random Forest",
                    89.7,
                    18650.0,
                    26340.0,
                    0.897,
                    "1.8s",
                    ModelStatus::Good,
                    "Ensemble method with good interpretability",
                ),
                model(
                    "Linear Regression",
                    78.2,
                    28930.0,
                    38420.0,
                    0.782,
                    "0.1s",
                    ModelStatus::Baseline,
                    "Simple linear model for baseline comparison",
                ),
                model(
                    "Neural Network",
                    88.9,
                    19200.0,
                    27100.0,
                    0.889,
                    "15.2s",
                    ModelStatus::Experimental,
                    "Deep learning approach with complex patterns",
                ),
            ],
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.models.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if !seen.insert(model.name.as_str()) {
                return Err(CatalogError::DuplicateModel {
                    name: model.name.clone(),
                });
            }
            if !(0.0..=100.0).contains(&model.accuracy) {
                return Err(invalid(model, "accuracy", "must be between 0 and 100"));
            }
            if !(0.0..=1.0).contains(&model.r2) {
                return Err(invalid(model, "r2", "must be between 0 and 1"));
            }
            if model.mae.is_nan() || model.mae < 0.0 {
                return Err(invalid(model, "mae", "must be non-negative"));
            }
            if model.rmse.is_nan() || model.rmse < 0.0 {
                return Err(invalid(model, "rmse", "must be non-negative"));
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ModelMetrics> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&ModelMetrics, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::ModelNotFound {
            name: name.to_string(),
        })
    }

    /// Model with the highest accuracy; first entry wins ties.
    pub fn best(&self) -> Option<&ModelMetrics> {
        self.models.iter().fold(None, |best, m| match best {
            Some(b) if b.accuracy >= m.accuracy => Some(b),
            _ => Some(m),
        })
    }

    /// Models ordered by accuracy, highest first.
    pub fn ranked(&self) -> Vec<&ModelMetrics> {
        let mut ranked: Vec<&ModelMetrics> = self.models.iter().collect();
        ranked.sort_by(|a, b| {
            b.accuracy
                .partial_cmp(&a.accuracy)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }
}

fn invalid(model: &ModelMetrics, metric: &'static str, reason: &str) -> CatalogError {
    CatalogError::InvalidMetric {
        name: model.name.clone(),
        metric,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ModelCatalog::builtin();
        assert_eq!(catalog.models.len(), 4);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_best_model_is_xgboost() {
        let catalog = ModelCatalog::builtin();
        let best = catalog.best().unwrap();
        assert_eq!(best.name, "XGBoost Regressor");
        assert_eq!(best.status, ModelStatus::Best);
    }

    #[test]
    fn test_ranked_by_accuracy() {
        let catalog = ModelCatalog::builtin();
        let names: Vec<&str> = catalog.ranked().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "XGBoost Regressor",
                "Random Forest",
                "Neural Network",
                "Linear Regression"
            ]
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = ModelCatalog::builtin();
        assert_eq!(catalog.get("Random Forest").unwrap().mae, 18650.0);
        assert!(catalog.get("Gaussian Process").is_none());
        assert_eq!(
            catalog.require("Gaussian Process").unwrap_err(),
            CatalogError::ModelNotFound {
                name: "Gaussian Process".to_string()
            }
        );
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let catalog = ModelCatalog { models: vec![] };
        assert_eq!(catalog.validate(), Err(CatalogError::Empty));
        assert!(catalog.best().is_none());
    }

    #[test]
    fn test_duplicate_model_rejected() {
        let mut catalog = ModelCatalog::builtin();
        let dup = catalog.models[0].clone();
        catalog.models.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateModel { .. })
        ));
    }

    #[test]
    fn test_out_of_range_metrics_rejected() {
        let mut catalog = ModelCatalog::builtin();
        catalog.models[1].r2 = 1.4;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidMetric { metric: "r2", .. })
        ));

        let mut catalog = ModelCatalog::builtin();
        catalog.models[2].mae = f64::NAN;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidMetric { metric: "mae", .. })
        ));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ModelStatus::Best.label(), "🏆 Best Model");
        assert_eq!(ModelStatus::Experimental.label(), "🧪 Experimental");
    }
}
