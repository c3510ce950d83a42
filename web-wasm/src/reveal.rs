//! IntersectionObserver によるスクロール表示

use crate::app::Gallery;
use portfolio_gallery_common::reveal::REVEAL_CLASS;
use portfolio_gallery_common::RevealDecision;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct RevealObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
}

impl RevealObserver {
    /// IntersectionObserver が使えない環境では observe 時に即表示する
    pub fn new(gallery: Gallery, threshold: f64) -> Self {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let key = target.get_attribute("data-project-id").unwrap_or_default();

                    let decision =
                        gallery.reveal(&key, entry.is_intersecting(), entry.intersection_ratio());
                    if decision != RevealDecision::Pending {
                        mark_revealed(&target);
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Self {
                observer: Some(observer),
                _callback: Some(callback),
            },
            Err(e) => {
                log::warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                Self {
                    observer: None,
                    _callback: None,
                }
            }
        }
    }

    pub fn observe(&self, element: &Element) {
        match &self.observer {
            Some(observer) => observer.observe(element),
            None => mark_revealed(element),
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn mark_revealed(element: &Element) {
    if let Err(e) = element.class_list().add_1(REVEAL_CLASS) {
        log::warn!("failed to add reveal class: {:?}", e);
    }
}
