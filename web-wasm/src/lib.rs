//! Portfolio Gallery Web App (Leptos + WASM)
//!
//! JS 側からの入口:
//! - `initGallery(options?, projects?, opener?)` でグリッドとビューアをマウント
//! - 返された `GalleryHandle` の `open(id)` / `close()` で外部から操作

mod app;
mod components;
mod dom;
mod reveal;
mod session;
mod timer;

use app::{App, Gallery};
use components::project_viewer::ProjectViewer;
use leptos::prelude::*;
use portfolio_gallery_common::{GalleryConfig, ProjectRecord, ProjectStore};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
}

/// ギャラリーへの外部ハンドル
#[wasm_bindgen]
pub struct GalleryHandle {
    gallery: Gallery,
}

#[wasm_bindgen]
impl GalleryHandle {
    /// ID で内蔵ビューアを開く。見つからなければ false
    pub fn open(&self, id: &str) -> bool {
        self.gallery.open(id)
    }

    pub fn close(&self) {
        self.gallery.close();
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.gallery.is_open()
    }
}

/// グリッドをマウントしてハンドルを返す。
/// コンテナが無ければグリッドは描画しない（ビューアは使える）。
#[wasm_bindgen(js_name = initGallery)]
pub fn init_gallery(
    options: JsValue,
    projects: JsValue,
    opener: Option<js_sys::Function>,
) -> Option<GalleryHandle> {
    let config = match load_config(options) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return None;
        }
    };
    let store = match load_store(projects) {
        Ok(store) => store,
        Err(e) => {
            log::error!("{}", e);
            return None;
        }
    };

    let document = dom::document()?;
    let gallery = Gallery::new(store, config.clone(), opener);

    match dom::query(&document, &config.root_selector)
        .or_else(|| dom::query(&document, &config.fallback_root_selector))
    {
        Some(root) => {
            root.set_inner_html("");
            leptos::mount::mount_to(root, move || view! { <App gallery=gallery /> }).forget();
        }
        None => log::debug!("gallery container not found: {}", config.root_selector),
    }

    dom::ensure_stylesheet(&document);
    match dom::ensure_viewer_root(&document, &config.viewer_selector) {
        Some(root) => {
            leptos::mount::mount_to(root, move || view! { <ProjectViewer gallery=gallery /> })
                .forget();
        }
        None => log::debug!("viewer root unavailable: {}", config.viewer_selector),
    }

    Some(GalleryHandle { gallery })
}

fn load_config(options: JsValue) -> Result<GalleryConfig, String> {
    if options.is_undefined() || options.is_null() {
        return Ok(GalleryConfig::default());
    }
    let config: GalleryConfig = serde_wasm_bindgen::from_value(options)
        .map_err(|e| format!("設定の読込失敗: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("設定が不正: {}", e))?;
    Ok(config)
}

fn load_store(projects: JsValue) -> Result<ProjectStore, String> {
    if projects.is_undefined() || projects.is_null() {
        return ProjectStore::bundled().map_err(|e| format!("同梱データの読込失敗: {}", e));
    }
    let records: Vec<ProjectRecord> = serde_wasm_bindgen::from_value(projects)
        .map_err(|e| format!("プロジェクトデータの読込失敗: {}", e))?;
    ProjectStore::new(records).map_err(|e| format!("プロジェクトデータが不正: {}", e))
}
