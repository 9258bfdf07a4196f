pub mod catalog;
pub mod config;
pub mod subject;

pub use catalog::{Catalog, CatalogError, CatalogResult, SAMPLE_CATALOG};
pub use config::{TrackerConfig, DEFAULT_STORAGE_KEY};
pub use subject::{Subject, SubjectDef};
