//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Photo Match - Visual Similarity Search"</h1>
        </header>
    }
}
