use crate::models::config::CONFIG_PATH;
use crate::models::{TrackerConfig, SAMPLE_CATALOG};
use crate::Result;
use colored::Colorize;
use std::env;
use std::path::Path;

pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    init_project(&project_root, force)
}

/// Write the default config and a sample catalog under `pensum/`
pub fn init_project(project_root: &Path, force: bool) -> Result<()> {
    let config_path = project_root.join(CONFIG_PATH);

    if config_path.exists() && !force {
        println!("{}", "⚠️  Pensum is already initialized".yellow());
        println!("   Run with --force to overwrite the config and catalog");
        return Ok(());
    }

    let config = TrackerConfig::default();
    config.save(project_root)?;
    println!("   ✓ {}", CONFIG_PATH);

    let catalog_path = config.catalog_path(project_root);
    if let Some(parent) = catalog_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&catalog_path, SAMPLE_CATALOG)?;
    println!("   ✓ {}", config.catalog.display());

    println!();
    println!("{}", "✅ Pensum initialized".green().bold());
    println!(
        "   Approval state is stored in {}",
        config.storage_path(project_root).display()
    );
    println!("   Edit the catalog, then run 'pensum status'");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config_and_catalog() {
        let temp = TempDir::new().unwrap();

        init_project(temp.path(), false).unwrap();

        assert!(temp.path().join("pensum/config.toml").exists());
        let catalog = Catalog::load(&temp.path().join("pensum/curriculum.yaml")).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let temp = TempDir::new().unwrap();
        init_project(temp.path(), false).unwrap();

        let catalog_path = temp.path().join("pensum/curriculum.yaml");
        std::fs::write(&catalog_path, "subjects: []\n").unwrap();

        init_project(temp.path(), false).unwrap();
        assert_eq!(std::fs::read_to_string(&catalog_path).unwrap(), "subjects: []\n");

        init_project(temp.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(&catalog_path).unwrap(), SAMPLE_CATALOG);
    }
}
