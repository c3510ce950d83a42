//! データセットの読込と表示用テキスト

use crate::error::{GalleryError, Result};
use portfolio_gallery_common::{
    CardView, GalleryConfig, ManualTimer, ProjectStore, ViewerController, ViewerView,
};
use std::path::Path;

/// パス省略または "-" なら同梱データセット
pub fn load_store(path: Option<&Path>) -> Result<ProjectStore> {
    match path {
        None => Ok(ProjectStore::bundled()?),
        Some(p) if p.as_os_str() == "-" => Ok(ProjectStore::bundled()?),
        Some(p) => {
            if !p.exists() {
                return Err(GalleryError::FileNotFound(p.display().to_string()));
            }
            Ok(ProjectStore::load(p)?)
        }
    }
}

/// カード1枚につき1行
pub fn card_lines(store: &ProjectStore, config: &GalleryConfig) -> Vec<String> {
    store
        .iter()
        .map(|record| {
            let card = CardView::from_record(record, config);
            format!(
                "{}\t{}\t[{}]\t{}",
                card.id,
                card.title,
                card.tags.join(", "),
                card.thumbnail
            )
        })
        .collect()
}

/// ビューアを開いた直後の状態を組み立てる
pub fn viewer_view(store: &ProjectStore, config: &GalleryConfig, id: &str) -> Result<ViewerView> {
    let record = store
        .find_by_id(id)
        .ok_or_else(|| GalleryError::ProjectNotFound(id.to_string()))?;

    let mut controller = ViewerController::new(config.clone(), ManualTimer::new());
    controller.open(record);
    controller
        .view(record)
        .ok_or_else(|| GalleryError::ProjectNotFound(id.to_string()))
}

pub fn viewer_text(view: &ViewerView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", view.title));
    if !view.full_description.is_empty() {
        out.push_str(&format!("{}\n\n", view.full_description));
    }
    for row in &view.meta {
        out.push_str(&format!("{}: {}\n", row.label, row.value));
    }
    if !view.takeaways.is_empty() {
        out.push_str("\nKey takeaways:\n");
        for item in &view.takeaways {
            out.push_str(&format!("  - {}\n", item));
        }
    }
    out.push_str(&format!("\nSlides ({}):\n", view.slides.len()));
    for slide in &view.slides {
        out.push_str(&format!("  {}. {}\n", slide.index + 1, slide.src));
    }
    out
}
