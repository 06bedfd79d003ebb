//! メインアプリケーションコンポーネント

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use photo_match_common::{
    build_gallery, distinct_categories, Error, FilterCriteria, MatchResponse, DEFAULT_MIN_SCORE,
};

use crate::api;
use crate::components::{
    header::Header, results_overlay::ResultsOverlay, search_panel::SearchPanel,
};
use crate::overlay::OverlayState;

/// フェードアウト完了を待つ時間（CSS transitionと一致させる）
const OVERLAY_HIDE_DELAY_MS: u32 = 300;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 直近の結果セット。送信フローだけが書き換える（上書きのみ、部分更新なし）
    let (last_results, set_last_results) = signal(None::<MatchResponse>);

    // 適用中の絞り込み条件。送信成功時とApply Filters時にコントロールから組み直す
    let (criteria, set_criteria) = signal(FilterCriteria {
        min_score: DEFAULT_MIN_SCORE,
        category: String::new(),
    });

    let (overlay, set_overlay) = signal(OverlayState::Hidden);

    // UIコントロールの現在値
    let (url_text, set_url_text) = signal(String::new());
    let (score_value, set_score_value) = signal(DEFAULT_MIN_SCORE.to_string());
    let (category_value, set_category_value) = signal(String::new());

    // ファイル入力はDOM側が状態を持つ。送信時にNodeRef経由で読む
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let gallery = Memo::new(move |_| {
        last_results
            .get()
            .map(|response| build_gallery(&response, &criteria.get()))
    });

    let categories = Memo::new(move |_| {
        last_results
            .get()
            .map(|response| distinct_categories(&response.results))
            .unwrap_or_default()
    });

    let on_submit = move |_| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let url = url_text.get_untracked().trim().to_string();

        spawn_local(async move {
            match api::submit_image(file, &url).await {
                Ok(response) => {
                    set_last_results.set(Some(response));
                    set_criteria.set(FilterCriteria::from_controls(
                        &score_value.get_untracked(),
                        &category_value.get_untracked(),
                    ));
                    set_overlay.set(overlay.get_untracked().open());
                }
                Err(Error::Input(message)) | Err(Error::Server(message)) => {
                    gloo::dialogs::alert(&message);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("match request failed: {err}").into());
                    gloo::dialogs::alert("Something went wrong!");
                }
            }
        });
    };

    // 保持中の結果セットに対する再描画のみ。ネットワークアクセスなし
    let on_apply_filters = move |_| {
        set_criteria.set(FilterCriteria::from_controls(
            &score_value.get_untracked(),
            &category_value.get_untracked(),
        ));
    };

    let on_back = move |_| {
        set_overlay.set(overlay.get_untracked().begin_close());
        gloo::timers::callback::Timeout::new(OVERLAY_HIDE_DELAY_MS, move || {
            set_overlay.set(overlay.get_untracked().finish_close());
        })
        .forget();
    };

    view! {
        <div class="container">
            <Header />

            <SearchPanel
                file_input=file_input
                url_text=url_text
                set_url_text=set_url_text
                on_submit=on_submit
            />

            <ResultsOverlay
                overlay=overlay
                gallery=gallery
                categories=categories
                score_value=score_value
                set_score_value=set_score_value
                category_value=category_value
                set_category_value=set_category_value
                on_apply_filters=on_apply_filters
                on_back=on_back
            />
        </div>
    }
}
