//! 検索パネルコンポーネント（ファイル選択・URL入力・送信）

use leptos::ev::MouseEvent;
use leptos::html;
use leptos::prelude::*;

/// ファイル未選択時のボタンラベル
const PLACEHOLDER_LABEL: &str = "Choose File";

#[component]
pub fn SearchPanel<F>(
    file_input: NodeRef<html::Input>,
    url_text: ReadSignal<String>,
    set_url_text: WriteSignal<String>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let (file_label, set_file_label) = signal(PLACEHOLDER_LABEL.to_string());

    // 装飾ボタンからネイティブのファイル選択ダイアログを開く
    let on_upload_click = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_file_change = move |_| {
        let name = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.name());
        set_file_label.set(name.unwrap_or_else(|| PLACEHOLDER_LABEL.to_string()));
    };

    view! {
        <div class="search-panel">
            <input
                type="file"
                accept="image/*"
                class="file-input-hidden"
                node_ref=file_input
                on:change=on_file_change
            />

            <button class="btn upload-btn" on:click=on_upload_click>
                {move || file_label.get()}
            </button>

            <input
                type="text"
                class="url-input"
                placeholder="...or paste an image URL"
                prop:value=move || url_text.get()
                on:input=move |ev| {
                    set_url_text.set(event_target_value(&ev));
                }
            />

            <button
                class="btn btn-primary go-btn"
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                "Go"
            </button>
        </div>
    }
}
