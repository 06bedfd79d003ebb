//! 結果セットの絞り込み
//!
//! 保持中のMatchResponseに対する純粋なフィルタ。元のリストは変更せず、
//! 順序を保ったまま新しいビューを作る。

use crate::types::{FilterCriteria, MatchItem};

/// スコア下限の既定値（未入力・解析不能時に適用）
pub const DEFAULT_MIN_SCORE: f64 = 0.4;

/// スコア下限のコントロール値を解析する
///
/// 空文字列や数値として解析できない値はDEFAULT_MIN_SCOREに落とす。
/// "0" は0として解析される（既定値へは落とさない）。
pub fn parse_min_score(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(DEFAULT_MIN_SCORE)
}

impl FilterCriteria {
    /// UIコントロールの現在値から条件を組み立てる
    pub fn from_controls(raw_score: &str, category: &str) -> Self {
        Self {
            min_score: parse_min_score(raw_score),
            category: category.to_string(),
        }
    }

    /// 1件がこの条件を通過するか
    ///
    /// スコア条件とカテゴリ条件のAND。カテゴリが空なら全カテゴリ通過。
    pub fn accepts(&self, item: &MatchItem) -> bool {
        let score_ok = item.similarity >= self.min_score;
        let category_ok = self.category.is_empty() || item.category == self.category;
        score_ok && category_ok
    }
}

/// 条件を満たす項目だけを元の順序で返す（安定フィルタ、再ソートなし）
pub fn filter_items(items: &[MatchItem], criteria: &FilterCriteria) -> Vec<MatchItem> {
    items
        .iter()
        .filter(|item| criteria.accepts(item))
        .cloned()
        .collect()
}

/// 結果セットに現れるカテゴリを初出順で列挙する（カテゴリセレクタ用）
pub fn distinct_categories(items: &[MatchItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(filename: &str, category: &str, similarity: f64) -> MatchItem {
        MatchItem {
            filename: filename.to_string(),
            path: format!("/static/dataset/{}.jpg", filename),
            category: category.to_string(),
            similarity,
        }
    }

    fn sample_items() -> Vec<MatchItem> {
        vec![
            item("shirt_001", "Shirts", 0.91),
            item("jeans_004", "Jeans", 0.72),
            item("shirt_010", "Shirts", 0.55),
            item("shoes_002", "Shoes", 0.41),
        ]
    }

    #[test]
    fn test_parse_min_score_valid() {
        assert_eq!(parse_min_score("0.6"), 0.6);
        assert_eq!(parse_min_score(" 0.5 "), 0.5);
    }

    #[test]
    fn test_parse_min_score_zero_is_not_defaulted() {
        assert_eq!(parse_min_score("0"), 0.0);
    }

    #[test]
    fn test_parse_min_score_fallback() {
        assert_eq!(parse_min_score(""), DEFAULT_MIN_SCORE);
        assert_eq!(parse_min_score("abc"), DEFAULT_MIN_SCORE);
    }

    #[test]
    fn test_zero_score_empty_category_returns_all_in_order() {
        let items = sample_items();
        let criteria = FilterCriteria::from_controls("0", "");
        let filtered = filter_items(&items, &criteria);
        assert_eq!(filtered, items);
    }

    #[test]
    fn test_low_similarity_never_passes() {
        let items = sample_items();
        let criteria = FilterCriteria::from_controls("0.6", "");
        let filtered = filter_items(&items, &criteria);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|i| i.similarity >= 0.6));
    }

    #[test]
    fn test_non_matching_category_never_passes() {
        let items = sample_items();
        let criteria = FilterCriteria::from_controls("0", "Shirts");
        let filtered = filter_items(&items, &criteria);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|i| i.category == "Shirts"));
    }

    #[test]
    fn test_score_and_category_are_anded() {
        let items = sample_items();
        let criteria = FilterCriteria::from_controls("0.6", "Shirts");
        let filtered = filter_items(&items, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].filename, "shirt_001");
    }

    #[test]
    fn test_boundary_similarity_passes() {
        let items = vec![item("a", "Shirts", 0.6)];
        let criteria = FilterCriteria::from_controls("0.6", "");
        assert_eq!(filter_items(&items, &criteria).len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample_items();
        let criteria = FilterCriteria::from_controls("0.5", "Shirts");
        let once = filter_items(&items, &criteria);
        let twice = filter_items(&items, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let items = sample_items();
        let criteria = FilterCriteria::from_controls("0.9", "");
        let _ = filter_items(&items, &criteria);
        assert_eq!(items, sample_items());
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let items = sample_items();
        assert_eq!(distinct_categories(&items), vec!["Shirts", "Jeans", "Shoes"]);
    }

    #[test]
    fn test_distinct_categories_empty() {
        assert!(distinct_categories(&[]).is_empty());
    }
}
