//! DOM ヘルパー

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub const SCROLL_LOCK_CLASS: &str = "no-scroll";

const DEFAULT_VIEWER_ID: &str = "project-modal-root";

const STYLESHEET_ID: &str = "project-modal-style";
const STYLESHEET: &str = include_str!("viewer.css");

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// セレクタに一致する最初の要素。不正なセレクタも None
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// ビューアのルート要素。無ければ body 直下に作る
pub fn ensure_viewer_root(document: &Document, selector: &str) -> Option<HtmlElement> {
    if let Some(existing) = query(document, selector) {
        return Some(existing);
    }

    let id = selector
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
        .unwrap_or(DEFAULT_VIEWER_ID);
    let root: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    root.set_id(id);
    document.body()?.append_child(&root).ok()?;
    log::debug!("viewer root #{} created", id);
    Some(root)
}

/// ビューアの最小スタイルを head に一度だけ入れる
pub fn ensure_stylesheet(document: &Document) {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("no <head>, viewer stylesheet skipped");
        return;
    };
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(e) => {
            log::warn!("failed to create viewer stylesheet: {:?}", e);
            return;
        }
    };
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(STYLESHEET));
    if let Err(e) = head.append_child(&style) {
        log::warn!("failed to mount viewer stylesheet: {:?}", e);
    }
}

pub fn set_scroll_lock(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if locked {
        classes.add_1(SCROLL_LOCK_CLASS)
    } else {
        classes.remove_1(SCROLL_LOCK_CLASS)
    };
    if let Err(e) = result {
        log::warn!("scroll lock update failed: {:?}", e);
    }
}
