//! Photo Match Common Library
//!
//! Web(WASM)フロントエンドから利用される型とユーティリティ

pub mod error;
pub mod filter;
pub mod gallery;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use filter::{distinct_categories, filter_items, parse_min_score, DEFAULT_MIN_SCORE};
pub use gallery::{build_gallery, display_name, format_similarity, CardView, GalleryView};
pub use parser::parse_match_response;
pub use types::{FilterCriteria, MatchItem, MatchResponse};
