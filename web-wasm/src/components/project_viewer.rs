//! プロジェクトビューア（モーダル + カルーセル）
//!
//! 骨格は常にマウントしておき、中身は Gallery::viewer のスナップショットから描画する。
//! スライドトラック要素は作り直さない（ドラッグ中のポインタキャプチャを保つため）。

use crate::app::Gallery;
use leptos::prelude::*;
use portfolio_gallery_common::view::{
    modal_style, IndicatorView, MetaRow, SlideView, IDLE_TRACK_STYLE,
};
use web_sys::PointerEvent;

#[component]
pub fn ProjectViewer(gallery: Gallery) -> impl IntoView {
    let viewer = gallery.viewer;
    let transition_ms = gallery.config().transition_ms;

    let is_open = move || viewer.with(|v| v.is_some());
    let title = move || viewer.with(|v| v.as_ref().map(|v| v.title.clone()).unwrap_or_default());
    let full = move || {
        viewer.with(|v| v.as_ref().map(|v| v.full_description.clone()).unwrap_or_default())
    };
    let slides = move || viewer.with(|v| v.as_ref().map(|v| v.slides.clone()).unwrap_or_default());
    let indicators = move || {
        viewer.with(|v| v.as_ref().map(|v| v.indicators.clone()).unwrap_or_default())
    };
    let meta = move || viewer.with(|v| v.as_ref().map(|v| v.meta.clone()).unwrap_or_default());
    let takeaways = move || {
        viewer.with(|v| {
            v.as_ref()
                .map(|v| v.takeaways.iter().cloned().enumerate().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let track_style = move || {
        viewer.with(|v| match v {
            Some(v) => v.track_style(transition_ms),
            None => IDLE_TRACK_STYLE.to_string(),
        })
    };

    let on_pointerdown = move |ev: PointerEvent| {
        let track = gallery.track_ref.get_untracked();
        let width = track.as_ref().map_or(0.0, |el| el.client_width() as f64);
        gallery.update(|c| c.drag_start(ev.client_x() as f64, width));
        if let Some(el) = track {
            if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
                log::warn!("pointer capture failed: {:?}", e);
            }
        }
    };
    let on_pointermove = move |ev: PointerEvent| {
        if gallery.is_dragging() {
            gallery.update(|c| c.drag_move(ev.client_x() as f64));
        }
    };
    let on_pointerup = move |ev: PointerEvent| {
        if gallery.is_dragging() {
            gallery.update(|c| {
                c.drag_end(ev.client_x() as f64);
            });
        }
    };
    let on_pointercancel = move |_: PointerEvent| {
        if gallery.is_dragging() {
            gallery.update(|c| c.drag_cancel());
        }
    };

    view! {
        <div
            class="project-modal"
            style=move || modal_style(is_open())
            aria-hidden=move || if is_open() { "false" } else { "true" }
        >
            <div class="project-modal__backdrop" on:click=move |_| gallery.close()></div>
            <div
                class="project-modal__dialog"
                role="dialog"
                aria-modal="true"
                aria-label="Project details"
            >
                <button
                    class="project-modal__close"
                    aria-label="Close (Esc)"
                    on:click=move |_| gallery.close()
                >
                    "✕"
                </button>
                <div class="project-modal__content">
                    <div
                        class="project-modal__carousel"
                        tabindex="0"
                        aria-roledescription="carousel"
                        node_ref=gallery.carousel_ref
                    >
                        <div
                            class="slides"
                            style=track_style
                            node_ref=gallery.track_ref
                            on:pointerdown=on_pointerdown
                            on:pointermove=on_pointermove
                            on:pointerup=on_pointerup
                            on:pointercancel=on_pointercancel
                        >
                            <For
                                each=slides
                                key=|slide: &SlideView| (slide.index, slide.src.clone())
                                children=|slide: SlideView| {
                                    view! {
                                        <div class="slide">
                                            <img
                                                src=slide.src
                                                alt=slide.alt
                                                data-index=slide.index.to_string()
                                                loading="lazy"
                                                draggable="false"
                                            />
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <div class="carousel-indicator" aria-hidden="true">
                            <For
                                each=indicators
                                key=|dot: &IndicatorView| (dot.index, dot.active)
                                children=move |dot: IndicatorView| {
                                    let index = dot.index;
                                    view! {
                                        <button
                                            class="dot"
                                            class:active=dot.active
                                            data-dot=index.to_string()
                                            aria-label=dot.label
                                            on:click=move |_| gallery.update(|c| c.go_to(index as i64))
                                        >
                                            {index + 1}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </div>
                    <div class="project-modal__meta">
                        <h2 class="project-modal__title">{title}</h2>
                        <p class="project-modal__full">{full}</p>
                        <ul class="project-modal__meta-list">
                            <For
                                each=meta
                                key=|row: &MetaRow| (row.label, row.value.clone())
                                children=|row: MetaRow| {
                                    view! {
                                        <li>
                                            <strong>{row.label}":"</strong>
                                            " "
                                            {row.value}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                        <div class="project-modal__takeaway">
                            <strong>"Key takeaways:"</strong>
                            <ul>
                                <For
                                    each=takeaways
                                    key=|item: &(usize, String)| item.clone()
                                    children=|(_, text): (usize, String)| view! { <li>{text}</li> }
                                />
                            </ul>
                        </div>
                    </div>
                </div>
                <button
                    class="project-modal__prev"
                    aria-label="Previous image"
                    on:click=move |_| gallery.update(|c| c.prev())
                >
                    "◀"
                </button>
                <button
                    class="project-modal__next"
                    aria-label="Next image"
                    on:click=move |_| gallery.update(|c| c.next())
                >
                    "▶"
                </button>
            </div>
        </div>
    }
}
