//! モーダル/カルーセル コントローラ
//!
//! ビューアの開閉とスライド位置の状態遷移を管理する。
//! DOMには触れない。表示は view モジュールが状態から組み立てる。
//!
//! 状態遷移: Closed --open--> Open --close--> Closed
//! Open 中の open は「表示中レコードの差し替え」として扱う。

pub mod timer;

pub use timer::{AutoplayTimer, ManualTimer};

use crate::config::GalleryConfig;
use crate::types::ProjectRecord;
use crate::view::ViewerView;

/// ビューアが解釈するキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// KeyboardEvent.key の値から変換
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// スワイプ終了時の判定結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Next,
    Prev,
    SnapBack,
    /// ドラッグ中でなかった
    Ignored,
}

/// ポインタドラッグ中の一時状態
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// 開始時のポインタX座標(px)
    pub start_x: f64,
    pub track_width: f64,
    /// トラック幅に対する現在の変位(%)
    pub offset_percent: f64,
}

/// ビューア状態（開いている間だけ意味を持つ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub active_project_id: Option<String>,
    pub images: Vec<String>,
    pub current_slide_index: usize,
    pub slide_count: usize,
    pub drag: Option<DragGesture>,
    /// false の間はトランジション無しで位置を反映する
    pub animate: bool,
    pub autoplay_active: bool,
}

impl ViewerState {
    pub fn is_open(&self) -> bool {
        self.active_project_id.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// スライドトラックのオフセット(%)
    pub fn track_offset_percent(&self) -> f64 {
        let base = -(self.current_slide_index as f64) * 100.0;
        base + self.drag.map_or(0.0, |d| d.offset_percent)
    }
}

pub struct ViewerController<T: AutoplayTimer> {
    config: GalleryConfig,
    state: ViewerState,
    timer: T,
}

impl<T: AutoplayTimer> ViewerController<T> {
    pub fn new(config: GalleryConfig, timer: T) -> Self {
        Self {
            config,
            state: ViewerState::default(),
            timer,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_slide_index
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count
    }

    /// レコードを表示する。開いていれば状態を破棄してから差し替える
    pub fn open(&mut self, record: &ProjectRecord) {
        self.reset();

        let images = record.resolved_images(&self.config.placeholder_image);
        self.state.slide_count = images.len();
        self.state.images = images;
        self.state.active_project_id = Some(record.id.clone());
        self.place(0, false);

        if self.config.autoplay {
            self.timer.start(self.config.autoplay_interval());
            self.state.autoplay_active = true;
        }

        log::debug!(
            "viewer opened: {} ({} slides, autoplay={})",
            record.id,
            self.state.slide_count,
            self.state.autoplay_active
        );
    }

    /// 閉じる。既に閉じていれば何もしない（false を返す）
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        let id = self.state.active_project_id.clone().unwrap_or_default();
        self.reset();
        log::debug!("viewer closed: {}", id);
        true
    }

    /// 指定位置へ移動（両方向にラップ）。自動再生タイマーは再始動する。
    /// ドラッグ中なら、そのジェスチャはここで終わる
    pub fn go_to(&mut self, index: i64) {
        if !self.is_open() {
            return;
        }
        if self.state.drag.take().is_some() {
            log::trace!("drag discarded by navigation");
        }
        self.place(index, true);
        self.restart_autoplay();
    }

    pub fn next(&mut self) {
        self.go_to(self.state.current_slide_index as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.state.current_slide_index as i64 - 1);
    }

    /// タイマー発火時の送り。タイマー自体は再始動しない
    pub fn autoplay_tick(&mut self) {
        if !self.is_open() || !self.state.autoplay_active || self.state.is_dragging() {
            return;
        }
        self.place(self.state.current_slide_index as i64 + 1, true);
        log::trace!("autoplay advanced to {}", self.state.current_slide_index);
    }

    /// 初期配置後、次フレームでトランジションを戻す
    pub fn settle(&mut self) {
        if self.is_open() && !self.state.is_dragging() {
            self.state.animate = true;
        }
    }

    /// キー入力。処理した場合 true
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Escape => {
                self.close();
            }
            Key::Other => return false,
        }
        true
    }

    pub fn drag_start(&mut self, x: f64, track_width: f64) {
        if !self.is_open() {
            return;
        }
        self.state.drag = Some(DragGesture {
            start_x: x,
            track_width,
            offset_percent: 0.0,
        });
        self.state.animate = false;
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Some(drag) = self.state.drag.as_mut() {
            let dx = x - drag.start_x;
            drag.offset_percent = if drag.track_width > 0.0 {
                dx / drag.track_width * 100.0
            } else {
                0.0
            };
        }
    }

    /// ドラッグ終了。閾値以上なら1枚送る、未満なら元の位置に戻す
    pub fn drag_end(&mut self, x: f64) -> SwipeOutcome {
        let Some(drag) = self.state.drag.take() else {
            return SwipeOutcome::Ignored;
        };

        let dx = x - drag.start_x;
        let outcome = if dx != 0.0 && dx.abs() >= self.config.swipe_threshold_px {
            if dx < 0.0 {
                SwipeOutcome::Next
            } else {
                SwipeOutcome::Prev
            }
        } else {
            SwipeOutcome::SnapBack
        };

        match outcome {
            SwipeOutcome::Next => self.next(),
            SwipeOutcome::Prev => self.prev(),
            _ => self.go_to(self.state.current_slide_index as i64),
        }
        log::trace!("swipe dx={:.1}px -> {:?}", dx, outcome);
        outcome
    }

    /// pointercancel 等。常に元の位置へ戻す
    pub fn drag_cancel(&mut self) {
        if self.state.drag.take().is_some() {
            self.go_to(self.state.current_slide_index as i64);
        }
    }

    /// 表示中レコードのビューモデル。閉じている、または別レコードなら None
    pub fn view(&self, record: &ProjectRecord) -> Option<ViewerView> {
        if self.state.active_project_id.as_deref() != Some(record.id.as_str()) {
            return None;
        }
        Some(ViewerView::from_state(&self.state, record))
    }

    fn place(&mut self, index: i64, animate: bool) {
        let count = self.state.slide_count.max(1) as i64;
        self.state.current_slide_index = index.rem_euclid(count) as usize;
        self.state.animate = animate;
    }

    fn restart_autoplay(&mut self) {
        if self.state.autoplay_active {
            self.timer.start(self.config.autoplay_interval());
        }
    }

    fn reset(&mut self) {
        self.timer.cancel();
        self.state = ViewerState::default();
    }
}

impl ViewerController<ManualTimer> {
    /// 手動タイマーを進め、発火回数分だけ自動送りする。
    /// 送り位置は周回するので、実際の送りは1周未満に畳む
    pub fn advance_clock(&mut self, by: std::time::Duration) -> u32 {
        let fires = self.timer.advance(by);
        if fires > 0 {
            let count = self.state.slide_count.max(1) as u64;
            let ticks = (u64::from(fires) - 1) % count + 1;
            for _ in 0..ticks {
                self.autoplay_tick();
            }
        }
        fires
    }
}
