pub mod model_catalog_file;
pub mod simulation;

pub use model_catalog_file::ModelCatalogFile;
