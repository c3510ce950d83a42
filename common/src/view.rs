//! 表示用ビューモデル
//!
//! ストアのレコードとビューア状態から、DOMに依存しない表示データを組み立てる。
//! フロントエンドは状態が変わるたびにここから再描画する。

use crate::carousel::ViewerState;
use crate::config::GalleryConfig;
use crate::types::ProjectRecord;
use serde::Serialize;

pub const VIEW_CONTROL_LABEL: &str = "View Details";

/// 値が空の場合の表示
const EMPTY_VALUE: &str = "-";

/// 閉じているときのスライドトラック
pub const IDLE_TRACK_STYLE: &str = "display: flex; transform: translateX(0%); transition: none;";

/// ビューアルートの開閉。aria-hidden と対で使う
pub fn modal_style(open: bool) -> &'static str {
    if open {
        "display: flex;"
    } else {
        "display: none;"
    }
}

/// グリッドの1カード
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub thumbnail: String,
    pub thumbnail_alt: String,
    pub title: String,
    pub short_description: String,
    pub tags: Vec<String>,
    pub view_label: &'static str,
}

impl CardView {
    pub fn from_record(record: &ProjectRecord, config: &GalleryConfig) -> Self {
        Self {
            id: record.id.clone(),
            thumbnail: record.resolved_thumbnail(&config.placeholder_image),
            thumbnail_alt: format!("{} — thumbnail", record.title),
            title: record.title.clone(),
            short_description: record.short_description.clone(),
            tags: record.tags.clone(),
            view_label: VIEW_CONTROL_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideView {
    pub index: usize,
    pub src: String,
    pub alt: String,
}

/// 位置インジケータ（ドット）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorView {
    pub index: usize,
    pub label: String,
    pub active: bool,
}

/// ビューア全体
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerView {
    pub project_id: String,
    pub title: String,
    pub full_description: String,
    pub meta: Vec<MetaRow>,
    pub takeaways: Vec<String>,
    pub slides: Vec<SlideView>,
    pub indicators: Vec<IndicatorView>,
    pub current_index: usize,
    pub offset_percent: f64,
    pub animate: bool,
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        value.to_string()
    }
}

impl ViewerView {
    pub fn from_state(state: &ViewerState, record: &ProjectRecord) -> Self {
        let total = state.images.len();
        let slides = state
            .images
            .iter()
            .enumerate()
            .map(|(i, src)| SlideView {
                index: i,
                src: src.clone(),
                alt: format!("Project image {} of {}", i + 1, total),
            })
            .collect();

        let indicators = (0..total)
            .map(|i| IndicatorView {
                index: i,
                label: format!("Go to image {}", i + 1),
                active: i == state.current_slide_index,
            })
            .collect();

        Self {
            project_id: record.id.clone(),
            title: record.title.clone(),
            full_description: record.full_description.clone(),
            meta: vec![
                MetaRow { label: "Role", value: or_dash(&record.role) },
                MetaRow { label: "Timeline", value: or_dash(&record.timeline) },
                MetaRow { label: "Tools", value: or_dash(&record.tools.join(", ")) },
            ],
            takeaways: record.takeaways.clone(),
            slides,
            indicators,
            current_index: state.current_slide_index,
            offset_percent: state.track_offset_percent(),
            animate: state.animate,
        }
    }

    /// スライドトラックの CSS transform
    pub fn track_transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent)
    }

    /// スライドトラックの style 属性。
    /// トラック幅はカルーセル幅と同じで、各スライドが 100% を占めるので
    /// translateX(-k*100%) がちょうど k 枚目になる
    pub fn track_style(&self, transition_ms: u32) -> String {
        format!(
            "display: flex; transform: {}; transition: {};",
            self.track_transform(),
            self.track_transition(transition_ms)
        )
    }

    /// トラックの CSS transition（アニメーション無効時は none）
    pub fn track_transition(&self, transition_ms: u32) -> String {
        if self.animate {
            format!("transform {}ms ease", transition_ms)
        } else {
            "none".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{ManualTimer, ViewerController};

    fn sample() -> ProjectRecord {
        ProjectRecord {
            id: "p1".into(),
            title: "Kid's Library".into(),
            short_description: "short".into(),
            full_description: "full".into(),
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
            thumbnail: None,
            tags: vec!["Research".into(), "Masterplan".into()],
            role: "Design Lead".into(),
            timeline: String::new(),
            tools: vec!["AutoCAD".into(), "SketchUp".into()],
            takeaways: vec!["Zoning".into()],
        }
    }

    #[test]
    fn test_card_view() {
        let card = CardView::from_record(&sample(), &GalleryConfig::default());

        assert_eq!(card.id, "p1");
        assert_eq!(card.thumbnail, "a.jpg");
        assert_eq!(card.thumbnail_alt, "Kid's Library — thumbnail");
        assert_eq!(card.tags, vec!["Research", "Masterplan"]);
        assert_eq!(card.view_label, "View Details");
    }

    #[test]
    fn test_viewer_meta_rows() {
        let record = sample();
        let mut c = ViewerController::new(GalleryConfig::default(), ManualTimer::new());
        c.open(&record);
        let view = c.view(&record).unwrap();

        assert_eq!(view.meta[0].value, "Design Lead");
        assert_eq!(view.meta[1].value, "-");
        assert_eq!(view.meta[2].value, "AutoCAD, SketchUp");
        assert_eq!(view.takeaways, vec!["Zoning"]);
        assert_eq!(view.slides[2].alt, "Project image 3 of 3");
    }

    #[test]
    fn test_exactly_one_indicator_active() {
        let record = sample();
        let mut c = ViewerController::new(GalleryConfig::default(), ManualTimer::new());
        c.open(&record);

        for step in 0..7 {
            let view = c.view(&record).unwrap();
            let active: Vec<usize> = view
                .indicators
                .iter()
                .filter(|d| d.active)
                .map(|d| d.index)
                .collect();
            assert_eq!(active, vec![c.current_index()], "step {}", step);
            c.next();
        }
    }

    #[test]
    fn test_track_transform_and_transition() {
        let record = sample();
        let mut c = ViewerController::new(GalleryConfig::default(), ManualTimer::new());
        c.open(&record);

        let initial = c.view(&record).unwrap();
        assert_eq!(initial.track_transform(), "translateX(0%)");
        assert_eq!(initial.track_transition(380), "none");

        c.go_to(2);
        let view = c.view(&record).unwrap();
        assert_eq!(view.track_transform(), "translateX(-200%)");
        assert_eq!(view.track_transition(380), "transform 380ms ease");
    }

    #[test]
    fn test_modal_style_follows_open_state() {
        assert_eq!(modal_style(true), "display: flex;");
        assert_eq!(modal_style(false), "display: none;");
        assert!(IDLE_TRACK_STYLE.contains("display: flex"));
    }

    #[test]
    fn test_track_style_lays_out_slides_in_a_row() {
        let record = sample();
        let mut c = ViewerController::new(GalleryConfig::default(), ManualTimer::new());
        c.open(&record);
        c.go_to(1);

        let view = c.view(&record).unwrap();
        assert_eq!(
            view.track_style(380),
            "display: flex; transform: translateX(-100%); transition: transform 380ms ease;"
        );
    }
}
