//! 組裝層模組
//!
//! 把核心規則組裝成呼叫端直接可用的輸出：完整的個人檔案衍生視圖，
//! 以及單一事件（加卡、每日登入）觸發的進度增量

pub mod events;
pub mod snapshot;

pub use events::{apply_card_added, apply_daily_login, CardVariant, ProgressionDelta};
pub use snapshot::{snapshot_from_facts, GameProgressView, ProfileFacts, ProfileSnapshot};

#[cfg(test)]
mod integration_tests;
