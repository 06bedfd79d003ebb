//! ギャラリービューの構築
//!
//! (結果セット, 絞り込み条件) → 表示用ビューツリーの純粋関数。
//! DOMには依存せず、コンポーネント側はこの出力をそのまま描画する。

use crate::filter::filter_items;
use crate::types::{FilterCriteria, MatchResponse};

/// オーバーレイに描画するギャラリー全体
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    /// アップロードした画像のURL
    pub query: String,

    /// 絞り込み後のカード（元の順序を保持）
    pub cards: Vec<CardView>,
}

/// カード1枚分の表示データ
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// 候補画像のURL
    pub image: String,

    /// 拡張子を除いたファイル名
    pub title: String,

    pub category: String,

    /// "87.34%" 形式の類似度ラベル
    pub similarity: String,
}

/// 末尾の拡張子（最後のドット以降）を取り除く
///
/// "cat.photo.jpg" → "cat.photo"、"noext" はそのまま。
/// 末尾がドットの場合は拡張子なしとみなす。
pub fn display_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx + 1 < filename.len() && !filename[idx + 1..].contains('/') => {
            &filename[..idx]
        }
        _ => filename,
    }
}

/// 類似度をパーセント表記（小数2桁）に整形する
pub fn format_similarity(similarity: f64) -> String {
    format!("{:.2}%", similarity * 100.0)
}

/// 保持中の結果セットと条件からギャラリービューを組み立てる
pub fn build_gallery(response: &MatchResponse, criteria: &FilterCriteria) -> GalleryView {
    let cards = filter_items(&response.results, criteria)
        .into_iter()
        .map(|item| CardView {
            image: item.path,
            title: display_name(&item.filename).to_string(),
            category: item.category,
            similarity: format_similarity(item.similarity),
        })
        .collect();

    GalleryView {
        query: response.query.clone(),
        cards,
    }
}
