//! 結果オーバーレイコンポーネント（フィルタバーとギャラリー）

use leptos::prelude::*;

use photo_match_common::{CardView, GalleryView};

use crate::overlay::OverlayState;

/// スコア下限セレクタの選択肢
const SCORE_OPTIONS: [&str; 6] = ["0.3", "0.4", "0.5", "0.6", "0.7", "0.8"];

#[component]
pub fn ResultsOverlay<FA, FB>(
    overlay: ReadSignal<OverlayState>,
    gallery: Memo<Option<GalleryView>>,
    categories: Memo<Vec<String>>,
    score_value: ReadSignal<String>,
    set_score_value: WriteSignal<String>,
    category_value: ReadSignal<String>,
    set_category_value: WriteSignal<String>,
    on_apply_filters: FA,
    on_back: FB,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FB: Fn(()) + 'static + Clone,
{
    view! {
        <div
            class="overlay"
            class:hidden=move || overlay.get().is_hidden()
            class:show=move || overlay.get().is_shown()
        >
            <div class="overlay-toolbar">
                <button
                    class="btn btn-secondary back-btn"
                    on:click={
                        let on_back = on_back.clone();
                        move |_| on_back(())
                    }
                >
                    "Back"
                </button>

                <select
                    class="filter-select filter-category"
                    on:change=move |ev| {
                        set_category_value.set(event_target_value(&ev));
                    }
                >
                    <option value="" selected=move || category_value.get().is_empty()>
                        "All Categories"
                    </option>
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            let value = category.clone();
                            let selected = {
                                let value = value.clone();
                                move || category_value.get() == value
                            };
                            view! {
                                <option value=value selected=selected>{category}</option>
                            }
                        }
                    />
                </select>

                <select
                    class="filter-select filter-score"
                    on:change=move |ev| {
                        set_score_value.set(event_target_value(&ev));
                    }
                >
                    {SCORE_OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option
                                    selected=move || score_value.get() == option
                                >
                                    {format!("Min score {}", option)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <button
                    class="btn btn-primary apply-btn"
                    on:click={
                        let on_apply_filters = on_apply_filters.clone();
                        move |_| on_apply_filters(())
                    }
                >
                    "Apply Filters"
                </button>
            </div>

            <div class="overlay-results">
                {move || gallery.get().map(|gallery| view! { <GalleryPanel gallery=gallery /> })}
            </div>
        </div>
    }
}

#[component]
fn GalleryPanel(gallery: GalleryView) -> impl IntoView {
    let cards = gallery.cards;

    view! {
        <div class="query-section">
            <p class="query-label">"Uploaded Image"</p>
            <img class="query-image" src=gallery.query alt="Uploaded image" />
        </div>

        <div class="match-grid">
            {if cards.is_empty() {
                view! { <p class="no-results">"No similar items found"</p> }.into_any()
            } else {
                cards
                    .into_iter()
                    .map(|card| view! { <MatchCard card=card /> })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn MatchCard(card: CardView) -> impl IntoView {
    view! {
        <div class="match-card">
            <img src=card.image alt=card.title.clone() />
            <p class="match-title">{card.title}</p>
            <p class="match-meta">"Category: "{card.category}</p>
            <p class="match-meta">"Similarity: "{card.similarity}</p>
        </div>
    }
}
