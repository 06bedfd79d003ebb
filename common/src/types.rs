//! `/match` レスポンスとフィルタ条件の型定義
//!
//! - MatchResponse: 1回の送信ごとにサーバが返す結果セット
//! - MatchItem: 候補画像1件の表示用データ（読み取り専用）
//! - FilterCriteria: UIコントロールから都度組み立てる絞り込み条件

use serde::{Deserialize, Serialize};

/// `/match` エンドポイントのレスポンス
///
/// 受信後は不変。直近の結果セットとして次の送信まで保持される。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    /// アップロードした画像のURL/パス
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub results: Vec<MatchItem>,

    /// 失敗時のみ存在する
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 類似画像の候補1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchItem {
    pub filename: String,

    /// 画像URL
    pub path: String,

    pub category: String,

    /// 類似度 [0, 1]
    pub similarity: f64,
}

/// 絞り込み条件
///
/// 描画時にUIコントロールから組み立てる。キャッシュしない。
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub min_score: f64,

    /// 空文字列は「すべて」
    pub category: String,
}
