//! ビューアのオープンセッション
//!
//! open で取得したもの（keydown リスナー、スクロールロック）を保持し、
//! Drop で必ず解放する。close・再 open のどちらでも同じ経路で片付く。

use crate::app::Gallery;
use crate::dom;
use leptos::ev;
use leptos::prelude::*;
use portfolio_gallery_common::Key;

pub struct ViewerSession {
    keydown: Option<WindowListenerHandle>,
}

impl ViewerSession {
    pub fn acquire(gallery: Gallery) -> Self {
        let keydown = window_event_listener(ev::keydown, move |ev| {
            let key = Key::from_key_name(&ev.key());
            if key != Key::Other && gallery.handle_key(key) {
                ev.prevent_default();
            }
        });
        dom::set_scroll_lock(true);

        Self {
            keydown: Some(keydown),
        }
    }
}

impl Drop for ViewerSession {
    fn drop(&mut self) {
        if let Some(handle) = self.keydown.take() {
            handle.remove();
        }
        dom::set_scroll_lock(false);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use portfolio_gallery_common::{GalleryConfig, ProjectStore};
    use wasm_bindgen_test::*;
    use web_sys::{KeyboardEvent, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn gallery() -> Gallery {
        let store = ProjectStore::bundled().expect("bundled dataset");
        Gallery::new(store, GalleryConfig::default(), None)
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keydown event");
        web_sys::window()
            .expect("window")
            .dispatch_event(&event)
            .expect("dispatch");
    }

    fn current_index(gallery: &Gallery) -> Option<usize> {
        gallery.viewer.get_untracked().map(|v| v.current_index)
    }

    fn scroll_locked() -> bool {
        dom::document()
            .and_then(|d| d.body())
            .map(|b| b.class_list().contains(dom::SCROLL_LOCK_CLASS))
            .unwrap_or(false)
    }

    #[wasm_bindgen_test]
    fn wasm_keys_after_close_change_nothing() {
        Owner::new().with(|| {
            let g = gallery();
            assert!(g.open("p1"));
            press("ArrowRight");
            assert_eq!(current_index(&g), Some(1));

            g.close();
            press("ArrowRight");
            press("Escape");
            assert!(!g.is_open());
            assert_eq!(current_index(&g), None);
            assert!(!scroll_locked());
        });
    }

    #[wasm_bindgen_test]
    fn wasm_reopen_does_not_stack_listeners() {
        Owner::new().with(|| {
            let g = gallery();
            assert!(g.open("p1"));
            g.close();
            assert!(g.open("p1"));
            // 開いたまま開き直す
            assert!(g.open("p1"));

            press("ArrowRight");
            assert_eq!(current_index(&g), Some(1));

            g.close();
        });
    }

    #[wasm_bindgen_test]
    fn wasm_escape_closes_and_unlocks_scroll() {
        Owner::new().with(|| {
            let g = gallery();
            assert!(g.open("p2"));
            assert!(scroll_locked());

            press("Escape");
            assert!(!g.is_open());
            assert!(!scroll_locked());

            // Escape で外れたリスナーは、次のキーにも反応しない
            press("ArrowLeft");
            assert_eq!(current_index(&g), None);
        });
    }

    #[wasm_bindgen_test]
    fn wasm_scroll_lock_released_after_reopen() {
        Owner::new().with(|| {
            let g = gallery();
            assert!(g.open("p1"));
            assert!(g.open("p2"));
            assert!(scroll_locked());

            g.close();
            assert!(!scroll_locked());
            g.close();
            assert!(!scroll_locked());
        });
    }

    #[wasm_bindgen_test]
    fn wasm_unknown_id_acquires_nothing() {
        Owner::new().with(|| {
            let g = gallery();
            assert!(!g.open("missing"));
            assert!(!scroll_locked());

            press("ArrowRight");
            assert!(!g.is_open());
        });
    }
}
