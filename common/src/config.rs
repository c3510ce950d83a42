//! ギャラリー設定
//!
//! JSON（camelCase）で部分指定でき、未指定の項目はデフォルト値で埋まる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "assets/images/project-placeholder.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryConfig {
    /// グリッドのマウント先
    pub root_selector: String,
    /// root_selector が無い場合の代替
    pub fallback_root_selector: String,
    /// ビューアのルート（無ければ生成）
    pub viewer_selector: String,
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    pub transition_ms: u32,
    pub swipe_threshold_px: f64,
    pub reveal_threshold: f64,
    pub placeholder_image: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root_selector: "#projects-root".into(),
            fallback_root_selector: ".projects-grid".into(),
            viewer_selector: "#project-modal-root".into(),
            autoplay: false,
            autoplay_interval_ms: 5000,
            transition_ms: 380,
            swipe_threshold_px: 20.0,
            reveal_threshold: 0.12,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.into(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GalleryConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(Error::Config("autoplayIntervalMs must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::Config(format!(
                "revealThreshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            return Err(Error::Config(format!(
                "swipeThresholdPx must be a non-negative number, got {}",
                self.swipe_threshold_px
            )));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}
