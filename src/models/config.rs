use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key used when the config does not name one
pub const DEFAULT_STORAGE_KEY: &str = "asignaturasAprobadas";

/// Config location relative to the project root
pub const CONFIG_PATH: &str = "pensum/config.toml";

fn default_catalog() -> PathBuf {
    PathBuf::from("pensum/curriculum.yaml")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Default storage file: `<data dir>/pensum/storage.json`, or the project dir
/// when the platform has no data directory
pub fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("pensum"))
        .unwrap_or_else(|| PathBuf::from("pensum"))
        .join("storage.json")
}

/// Tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Catalog file, relative paths resolve against the project root
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// Key-value storage file; unset means the per-user default
    #[serde(default)]
    pub storage: Option<PathBuf>,

    /// Key the approved ids are stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            storage: None,
            storage_key: default_storage_key(),
        }
    }
}

impl TrackerConfig {
    /// Load config from pensum/config.toml
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = project_root.join(CONFIG_PATH);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: TrackerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to pensum/config.toml
    pub fn save(&self, project_root: &Path) -> anyhow::Result<()> {
        let config_path = project_root.join(CONFIG_PATH);
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Catalog path resolved against the project root
    pub fn catalog_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.catalog)
    }

    /// Storage path resolved against the project root
    pub fn storage_path(&self, project_root: &Path) -> PathBuf {
        match &self.storage {
            Some(path) => project_root.join(path),
            None => default_storage_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = TrackerConfig::load(temp.path()).unwrap();

        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.storage_key, "asignaturasAprobadas");
        assert_eq!(
            config.catalog_path(temp.path()),
            temp.path().join("pensum/curriculum.yaml")
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let config = TrackerConfig {
            catalog: PathBuf::from("plans/2024.yaml"),
            storage: Some(PathBuf::from(".pensum/storage.json")),
            storage_key: "approved".to_string(),
        };
        config.save(temp.path()).unwrap();

        let loaded = TrackerConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.storage_path(temp.path()),
            temp.path().join(".pensum/storage.json")
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("pensum")).unwrap();
        std::fs::write(
            temp.path().join(CONFIG_PATH),
            "storage_key = \"custom\"\n",
        )
        .unwrap();

        let config = TrackerConfig::load(temp.path()).unwrap();
        assert_eq!(config.storage_key, "custom");
        assert_eq!(config.catalog, PathBuf::from("pensum/curriculum.yaml"));
        assert_eq!(config.storage, None);
    }
}
