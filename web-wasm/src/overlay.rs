//! 結果オーバーレイの表示状態
//!
//! hidden → shown は即時。shown → hidden はshowクラスを外して
//! CSS transitionのフェードアウトを待ち、タイマー満了でレイアウトから消す。

/// オーバーレイの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// display: none（レイアウトから除去済み）
    Hidden,
    Shown,
    /// フェードアウト中。タイマー満了でHiddenへ。
    FadingOut,
}

impl OverlayState {
    /// 送信成功時の遷移（即時表示）
    pub fn open(self) -> Self {
        OverlayState::Shown
    }

    /// 戻る操作の開始（フェードアウト開始）
    pub fn begin_close(self) -> Self {
        match self {
            OverlayState::Shown => OverlayState::FadingOut,
            other => other,
        }
    }

    /// フェードアウト完了
    pub fn finish_close(self) -> Self {
        match self {
            OverlayState::FadingOut => OverlayState::Hidden,
            other => other,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == OverlayState::Hidden
    }

    pub fn is_shown(self) -> bool {
        self == OverlayState::Shown
    }
}
