//! ギャラリー本体
//!
//! ストア・設定・ビューアコントローラをまとめた Gallery と、
//! カードグリッドのルートコンポーネント。

use crate::components::project_card::ProjectCard;
use crate::reveal::RevealObserver;
use crate::session::ViewerSession;
use crate::timer::IntervalTimer;
use leptos::html;
use leptos::prelude::*;
use portfolio_gallery_common::{
    CardView, GalleryConfig, Key, ProjectStore, RevealDecision, RevealTracker, ViewerController,
    ViewerView,
};
use wasm_bindgen::JsValue;

/// ギャラリーの状態（Copy なハンドルの集まり）
#[derive(Clone, Copy)]
pub struct Gallery {
    store: StoredValue<ProjectStore>,
    config: StoredValue<GalleryConfig>,
    controller: StoredValue<ViewerController<IntervalTimer>, LocalStorage>,
    session: StoredValue<Option<ViewerSession>, LocalStorage>,
    /// 外部から差し込まれたビューア（無ければ内蔵ビューア）
    opener: StoredValue<Option<js_sys::Function>, LocalStorage>,
    reveal: StoredValue<RevealTracker>,
    /// 描画用スナップショット。コントローラ操作のたびに作り直す
    pub viewer: RwSignal<Option<ViewerView>>,
    pub carousel_ref: NodeRef<html::Div>,
    pub track_ref: NodeRef<html::Div>,
}

impl Gallery {
    pub fn new(store: ProjectStore, config: GalleryConfig, opener: Option<js_sys::Function>) -> Self {
        let gallery = Self {
            store: StoredValue::new(store),
            reveal: StoredValue::new(RevealTracker::new(config.reveal_threshold)),
            controller: StoredValue::new_local(ViewerController::new(
                config.clone(),
                IntervalTimer::default(),
            )),
            config: StoredValue::new(config),
            session: StoredValue::new_local(None),
            opener: StoredValue::new_local(opener),
            viewer: RwSignal::new(None),
            carousel_ref: NodeRef::new(),
            track_ref: NodeRef::new(),
        };

        gallery
            .controller
            .update_value(|c| c.timer_mut().bind(move || gallery.autoplay_tick()));
        gallery
    }

    pub fn config(&self) -> GalleryConfig {
        self.config.get_value()
    }

    pub fn cards(&self) -> Vec<CardView> {
        let config = self.config();
        self.store
            .with_value(|s| s.iter().map(|r| CardView::from_record(r, &config)).collect())
    }

    pub fn is_open(&self) -> bool {
        self.controller.with_value(|c| c.is_open())
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.with_value(|c| c.state().is_dragging())
    }

    /// カードの「View Details」から呼ばれる。外部ビューアが失敗したら内蔵ビューアで開く
    pub fn activate(&self, id: &str) {
        if self.store.with_value(|s| s.find_by_id(id).is_none()) {
            log::debug!("view requested for unknown project: {}", id);
            return;
        }

        let handled = self.opener.with_value(|opener| match opener {
            Some(f) => match f.call1(&JsValue::NULL, &JsValue::from_str(id)) {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("external opener failed, falling back: {:?}", e);
                    false
                }
            },
            None => false,
        });

        if !handled {
            self.open(id);
        }
    }

    /// 内蔵ビューアで開く。見つからなければ false
    pub fn open(&self, id: &str) -> bool {
        let Some(record) = self.store.with_value(|s| s.find_by_id(id).cloned()) else {
            log::debug!("open aborted, project not found: {}", id);
            return false;
        };

        // 旧セッションを解放してから取得し直す（スクロールロックの順序）
        self.session.set_value(None);
        self.controller.update_value(|c| c.open(&record));
        self.session.set_value(Some(ViewerSession::acquire(*self)));
        self.sync();

        let gallery = *self;
        request_animation_frame(move || {
            gallery.update(|c| c.settle());
            if let Some(el) = gallery.carousel_ref.get_untracked() {
                if let Err(e) = el.focus() {
                    log::warn!("failed to focus carousel: {:?}", e);
                }
            }
        });
        true
    }

    pub fn close(&self) {
        self.controller.update_value(|c| {
            c.close();
        });
        self.session.set_value(None);
        self.sync();
    }

    pub fn handle_key(&self, key: Key) -> bool {
        let handled = self
            .controller
            .try_update_value(|c| c.handle_key(key))
            .unwrap_or(false);
        if !self.is_open() {
            self.session.set_value(None);
        }
        self.sync();
        handled
    }

    /// コントローラを操作して再描画
    pub fn update(&self, f: impl FnOnce(&mut ViewerController<IntervalTimer>)) {
        self.controller.update_value(f);
        self.sync();
    }

    pub fn autoplay_tick(&self) {
        self.update(|c| c.autoplay_tick());
    }

    pub fn reveal(&self, key: &str, is_intersecting: bool, ratio: f64) -> RevealDecision {
        self.reveal
            .try_update_value(|t| t.observe(key, is_intersecting, ratio))
            .unwrap_or(RevealDecision::Pending)
    }

    fn sync(&self) {
        let view = self.controller.with_value(|c| {
            let id = c.state().active_project_id.clone()?;
            self.store.with_value(|s| s.find_by_id(&id).and_then(|r| c.view(r)))
        });
        self.viewer.set(view);
    }
}

/// カードグリッド
#[component]
pub fn App(gallery: Gallery) -> impl IntoView {
    let observer = StoredValue::new_local(RevealObserver::new(gallery, gallery.config().reveal_threshold));

    gallery
        .cards()
        .into_iter()
        .map(|card| view! { <ProjectCard card=card gallery=gallery observer=observer /> })
        .collect_view()
}
