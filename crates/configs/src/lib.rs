use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory the file backend keeps its per-key files in.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// The single well-known key the whole roast collection lives under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), storage_key: default_storage_key() }
    }
}

fn default_data_dir() -> String { "data".to_string() }
fn default_storage_key() -> String { "@roasts_data".to_string() }

/// Load from `CONFIG_PATH` (default `config.toml`). A missing file is not an
/// error; a local-first app should start with defaults on first run.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !std::path::Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize()?;
        Ok(())
    }
}

impl StorageConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
        }
        if self.storage_key.trim().is_empty() {
            return Err(anyhow!("storage.storage_key must not be empty"));
        }
        Ok(())
    }
}
