//! `/match` エンドポイント連携
//!
//! 送信フロー: 入力チェック → (URL指定時はまず画像本体を取得) →
//! multipartフォーム組み立て → POST → 本文解析。段階ごとの失敗は
//! すべてResultで呼び出し側へ返す。

use photo_match_common::{parse_match_response, Error, MatchResponse, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FormData, Request, RequestInit, Response};

const MATCH_ENDPOINT: &str = "/match";

/// multipartフォームの画像フィールド名
const IMAGE_FIELD: &str = "image";

/// URL経由で取得した画像に付ける固定ファイル名
const URL_IMAGE_FILENAME: &str = "url_image.jpg";

/// 入力不足時のユーザー向け通知文
pub const MISSING_INPUT_NOTICE: &str = "Please upload a file or enter an image URL.";

/// 画像を送信して結果セットを受け取る
///
/// ファイルとURLの両方があればファイルを優先する。どちらも無ければ
/// リクエストを発行せずError::Inputを返す。
pub async fn submit_image(file: Option<File>, url: &str) -> Result<MatchResponse> {
    if file.is_none() && url.is_empty() {
        return Err(Error::Input(MISSING_INPUT_NOTICE.to_string()));
    }

    let form = build_form(file, url).await.map_err(into_fetch_error)?;
    let body = post_match(&form).await.map_err(into_fetch_error)?;
    parse_match_response(&body)
}

async fn build_form(file: Option<File>, url: &str) -> std::result::Result<FormData, JsValue> {
    let form = FormData::new()?;
    match file {
        // ファイル名はブラウザが元のものを付与する
        Some(file) => form.append_with_blob(IMAGE_FIELD, &file)?,
        None => {
            let blob = fetch_url_blob(url).await?;
            form.append_with_blob_and_filename(IMAGE_FIELD, &blob, URL_IMAGE_FILENAME)?;
        }
    }
    Ok(form)
}

/// ユーザー指定URLから画像本体を取得する（content-type検証なし）
async fn fetch_url_blob(url: &str) -> std::result::Result<Blob, JsValue> {
    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;
    let blob_value = JsFuture::from(resp.blob()?).await?;
    blob_value.dyn_into()
}

async fn post_match(form: &FormData) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    // Content-Typeは指定しない（multipart境界はブラウザが付ける）
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(MATCH_ENDPOINT, &opts)?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    // サーバは4xxでもerrorフィールド入りJSONを返すため、
    // ステータスに関わらず本文を解析へ回す
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

fn into_fetch_error(err: JsValue) -> Error {
    Error::Fetch(format!("{err:?}"))
}
