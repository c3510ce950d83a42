//! ギャラリー全体の動作シナリオ
//!
//! ストア → カード → ビューアの流れを手動タイマーで検証

use portfolio_gallery::report;
use portfolio_gallery_common::{
    AutoplayTimer, GalleryConfig, Key, ManualTimer, ProjectStore, SwipeOutcome, ViewerController,
};
use std::time::Duration;
use tempfile::tempdir;

fn bundled() -> ProjectStore {
    report::load_store(None).expect("同梱データの読込失敗")
}

/// p1 を開いて3回送るとラップする
#[test]
fn test_open_next_wraps() {
    let store = bundled();
    let mut controller = ViewerController::new(GalleryConfig::default(), ManualTimer::new());

    let record = store.find_by_id("p1").unwrap();
    controller.open(record);
    assert_eq!(controller.slide_count(), 3);
    assert_eq!(controller.current_index(), 0);

    controller.next();
    assert_eq!(controller.current_index(), 1);
    controller.next();
    assert_eq!(controller.current_index(), 2);
    controller.next();
    assert_eq!(controller.current_index(), 0);
}

/// 見つからないIDでは open されない
#[test]
fn test_missing_id_never_opens() {
    let store = bundled();
    let mut controller = ViewerController::new(GalleryConfig::default(), ManualTimer::new());

    if let Some(record) = store.find_by_id("missing") {
        controller.open(record);
    }
    assert!(!controller.is_open());
}

/// 閉じた後のキー入力は無視される
#[test]
fn test_keys_after_close() {
    let store = bundled();
    let mut controller = ViewerController::new(GalleryConfig::default(), ManualTimer::new());

    controller.open(store.find_by_id("p2").unwrap());
    assert!(controller.handle_key(Key::Escape));
    assert!(!controller.is_open());

    assert!(!controller.handle_key(Key::ArrowRight));
    assert!(!controller.handle_key(Key::Escape));
    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.slide_count(), 0);
}

/// 自動再生: 3周期で3枚進む。手動操作で周期がリセットされる
#[test]
fn test_autoplay_cycle() {
    let store = bundled();
    let config = GalleryConfig {
        autoplay: true,
        autoplay_interval_ms: 2000,
        ..Default::default()
    };
    let mut controller = ViewerController::new(config, ManualTimer::new());
    controller.open(store.find_by_id("p1").unwrap());

    assert_eq!(controller.advance_clock(Duration::from_millis(6000)), 3);
    assert_eq!(controller.current_index(), 0, "3枚のスライドを3回送って一周");

    controller.advance_clock(Duration::from_millis(1500));
    controller.prev();
    assert_eq!(controller.current_index(), 2);
    assert_eq!(controller.advance_clock(Duration::from_millis(1500)), 0);
    assert_eq!(controller.advance_clock(Duration::from_millis(500)), 1);
    assert_eq!(controller.current_index(), 0);

    controller.close();
    assert!(!controller.timer().is_running());
    assert_eq!(controller.advance_clock(Duration::from_millis(10_000)), 0);
}

/// スワイプ閾値は設定値に従う
#[test]
fn test_swipe_threshold_from_config() {
    let store = bundled();
    let config = GalleryConfig {
        swipe_threshold_px: 50.0,
        ..Default::default()
    };
    let mut controller = ViewerController::new(config, ManualTimer::new());
    controller.open(store.find_by_id("p1").unwrap());

    controller.drag_start(300.0, 600.0);
    assert_eq!(controller.drag_end(260.0), SwipeOutcome::SnapBack);
    assert_eq!(controller.current_index(), 0);

    controller.drag_start(300.0, 600.0);
    assert_eq!(controller.drag_end(250.0), SwipeOutcome::Next);
    assert_eq!(controller.current_index(), 1);
}

/// 画像なしのレコードはプレースホルダ1枚
#[test]
fn test_dataset_without_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "a", "title": "No images"},
            {"id": "b", "title": "Thumb only", "thumb": "b_thumb.jpg"}
        ]"#,
    )
    .unwrap();

    let store = report::load_store(Some(&path)).unwrap();
    let config = GalleryConfig::default();

    let a = report::viewer_view(&store, &config, "a").unwrap();
    assert_eq!(a.slides.len(), 1);
    assert_eq!(a.slides[0].src, config.placeholder_image);

    let b = report::viewer_view(&store, &config, "b").unwrap();
    assert_eq!(b.slides.len(), 1);
    assert_eq!(b.slides[0].src, "b_thumb.jpg");
}

/// カード一覧はストア順
#[test]
fn test_card_lines_in_store_order() {
    let store = bundled();
    let lines = report::card_lines(&store, &GalleryConfig::default());

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("p1\t"));
    assert!(lines[1].starts_with("p2\t"));
    assert!(lines[2].starts_with("p3\t"));
    assert!(lines[0].contains("[Research, Interior Design, Masterplan]"));
}

/// ビューア表示テキスト
#[test]
fn test_viewer_text() {
    let store = bundled();
    let view = report::viewer_view(&store, &GalleryConfig::default(), "p2").unwrap();
    let text = report::viewer_text(&view);

    assert!(text.starts_with("Interior Design Study"));
    assert!(text.contains("Role: Intern Designer"));
    assert!(text.contains("Tools: AutoCAD, SketchUp"));
    assert!(text.contains("Slides (2):"));
    assert!(text.contains("  - Client collaboration"));
}
