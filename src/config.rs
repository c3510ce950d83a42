use crate::error::{GalleryError, Result};
use portfolio_gallery_common::GalleryConfig;
use std::path::{Path, PathBuf};

/// ~/.config/portfolio-gallery/config.json の読み書き
pub struct ConfigFile;

impl ConfigFile {
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("portfolio-gallery").join("config.json"))
    }

    pub fn load() -> Result<GalleryConfig> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルが無ければデフォルト設定
    pub fn load_from(path: &Path) -> Result<GalleryConfig> {
        if !path.exists() {
            log::debug!("config not found, using defaults: {}", path.display());
            return Ok(GalleryConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = GalleryConfig::from_json(&content)?;
        Ok(config)
    }

    pub fn save_to(config: &GalleryConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
