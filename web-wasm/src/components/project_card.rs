//! プロジェクトカードコンポーネント

use crate::app::Gallery;
use crate::reveal::RevealObserver;
use leptos::html;
use leptos::prelude::*;
use portfolio_gallery_common::CardView;

#[component]
pub fn ProjectCard(
    card: CardView,
    gallery: Gallery,
    observer: StoredValue<RevealObserver, LocalStorage>,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Article>::new();

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            observer.with_value(|o| o.observe(&el));
        }
    });

    let project_id = card.id.clone();

    view! {
        <article
            class="project-card reveal-on-scroll"
            data-project-id=card.id.clone()
            node_ref=node_ref
        >
            <img src=card.thumbnail alt=card.thumbnail_alt loading="lazy" />
            <div class="project-info">
                <h3>{card.title}</h3>
                <p class="project-excerpt">{card.short_description}</p>
                <div class="tags">
                    {card.tags.into_iter().map(|tag| view! { <span>{tag}</span> }).collect_view()}
                </div>
                <button
                    type="button"
                    class="btn small view-project"
                    data-project=card.id.clone()
                    aria-haspopup="dialog"
                    on:click=move |_| gallery.activate(&project_id)
                >
                    {card.view_label}
                </button>
            </div>
        </article>
    }
}
