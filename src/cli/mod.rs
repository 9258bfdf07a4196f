pub mod init;
pub mod interactive;
pub mod status;
pub mod toggle;

use crate::controller::{CurriculumController, Notifier};
use crate::models::{Catalog, TrackerConfig};
use crate::state::{ApprovalStore, FileStorage};
use crate::{Context, Result};
use std::path::{Path, PathBuf};

/// Controller wired to the on-disk catalog and storage
pub type Tracker<N> = CurriculumController<ApprovalStore<FileStorage>, N>;

/// Command-line overrides for config values
#[derive(Debug, Clone, Default)]
pub struct TrackerOptions {
    pub catalog: Option<PathBuf>,
    pub storage: Option<PathBuf>,
}

impl TrackerOptions {
    /// Apply overrides on top of a loaded config
    pub fn apply(&self, mut config: TrackerConfig) -> TrackerConfig {
        if let Some(catalog) = &self.catalog {
            config.catalog = catalog.clone();
        }
        if let Some(storage) = &self.storage {
            config.storage = Some(storage.clone());
        }
        config
    }
}

/// Load config, catalog and stored state, and build a ready controller
pub fn open_tracker<N: Notifier>(
    project_root: &Path,
    options: &TrackerOptions,
    notifier: N,
) -> Result<(Tracker<N>, Catalog)> {
    let config = options.apply(
        TrackerConfig::load(project_root).context("Failed to load pensum/config.toml")?,
    );

    let catalog_path = config.catalog_path(project_root);
    if !catalog_path.exists() {
        anyhow::bail!(
            "Catalog not found at {}. Run 'pensum init' first.",
            catalog_path.display()
        );
    }
    let catalog = Catalog::load(&catalog_path)
        .with_context(|| format!("Failed to load catalog {}", catalog_path.display()))?;

    let storage = FileStorage::new(config.storage_path(project_root));
    let store = ApprovalStore::with_key(storage, config.storage_key.clone());
    let tracker = CurriculumController::from_catalog(&catalog, store, notifier)?;

    Ok((tracker, catalog))
}
