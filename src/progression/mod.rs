//! 進度系統核心模組
//!
//! 包含收藏進度引擎的核心定義：
//! - `constants`: 經驗值與門檻常量
//! - `games`: 支援的卡牌遊戲定義
//! - `levels`: 等級表與升級計算
//! - `rewards`: 行為經驗值獎勵
//! - `achievements`: 成就目錄與解鎖判定
//! - `avatar`: 頭像裝飾解鎖判定
//! - `streak`: 連續活動日曆
//!
//! 注意：持久化由呼叫端處理，本模組只做快照上的純計算

pub mod achievements;
pub mod avatar;
pub mod constants;
pub mod games;
pub mod levels;
pub mod rewards;
pub mod streak;

pub use achievements::{AchievementDef, MilestoneTier, TierProgress};
pub use avatar::{AvatarItem, UnlockFacts, UnlockRequirement};
pub use constants::*;
pub use games::{GameId, GAME_COUNT};
pub use levels::{LevelDef, LevelProgress, LevelUp};
pub use rewards::XpAction;
pub use streak::{CalendarDay, CalendarWeek, StreakCalendar};
