//! Loading of the model comparison catalog from a TOML file.
//!
//! The file is read once at startup and never written back.

use crate::domain::valuation::model_catalog::ModelCatalog;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub struct ModelCatalogFile {
    file_path: PathBuf,
}

impl ModelCatalogFile {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Reads, parses and validates the catalog.
    pub fn load(&self) -> Result<ModelCatalog> {
        let content = fs::read_to_string(&self.file_path).with_context(|| {
            format!("Failed to read model catalog file {:?}", self.file_path)
        })?;
        let catalog = parse_catalog(&content)
            .with_context(|| format!("Invalid model catalog in {:?}", self.file_path))?;

        info!(
            "Loaded {} models from {:?}",
            catalog.models.len(),
            self.file_path
        );
        Ok(catalog)
    }
}

pub fn parse_catalog(content: &str) -> Result<ModelCatalog> {
    let catalog: ModelCatalog =
        toml::from_str(content).context("Failed to parse model catalog TOML")?;
    catalog.validate()?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::model_catalog::ModelStatus;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    const SAMPLE: &str = r#"
[[models]]
name = "Gradient Boost"
accuracy = 91.0
mae = 16000
rmse = 23000
r2 = 0.91
training_time = "3.1s"
status = "best"
description = "Tuned boosting"

[[models]]
name = "Ridge"
accuracy = 80.5
mae = 27000
rmse = 36000
r2 = 0.805
training_time = "0.2s"
status = "baseline"
"#;

    fn temp_catalog_path() -> PathBuf {
        let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "homeval_test_{}_{}_catalog",
            std::process::id(),
            unique_id
        ));
        fs::create_dir_all(&temp_dir).expect("Failed to create test temp dir");
        temp_dir.join("models.toml")
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.models.len(), 2);
        assert_eq!(catalog.models[0].status, ModelStatus::Best);
        assert_eq!(catalog.models[1].description, "");
        assert_eq!(catalog.best().unwrap().name, "Gradient Boost");
    }

    #[test]
    fn test_example_file_matches_builtin() {
        let content = include_str!("../../config/models.example.toml");
        assert_eq!(parse_catalog(content).unwrap(), ModelCatalog::builtin());
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let content = SAMPLE.replace("\"baseline\"", "\"legendary\"");
        assert!(parse_catalog(&content).is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_metrics() {
        let content = SAMPLE.replace("accuracy = 80.5", "accuracy = 180.5");
        let err = parse_catalog(&content).unwrap_err();
        assert!(err.to_string().contains("accuracy"));
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_catalog_path();
        fs::write(&path, SAMPLE).unwrap();

        let file = ModelCatalogFile::new(&path);
        let catalog = file.load().unwrap();
        assert!(catalog.get("Ridge").is_some());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let file = ModelCatalogFile::new("/nonexistent/homeval/models.toml");
        let err = file.load().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read model catalog file"));
    }
}
