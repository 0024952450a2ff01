//! CardVault 進度與參與引擎
//!
//! 卡牌收藏應用的核心進度系統：經驗值、等級、成就、頭像裝飾與連續活動日曆。
//! 所有函數皆為純函數——輸入是持久層提供的事實快照（總經驗值、各遊戲卡牌數、
//! 已獲得成就、活動日期），輸出是衍生狀態與事件增量，由呼叫端負責持久化。
//!
//! - `progression`: 核心規則（等級表、獎勵、成就、裝飾解鎖、連續日曆）
//! - `profile`: 組裝層（完整衍生視圖、單一事件的增量管線）

pub mod profile;
pub mod progression;

// Re-export 常用類型（公開 API，可能未在內部使用）
pub use progression::achievements::{
    check_all_game_achievements, check_cross_game_achievements,
    check_game_milestone_achievements, cross_game_progress, find_achievement,
    game_milestone_progress, AchievementCategory, AchievementDef, AchievementTier,
    MilestoneTier, TierProgress, ACHIEVEMENT_CATALOG, MILESTONE_TIERS,
};
pub use progression::avatar::{
    approximate_level_from_cards, find_item, is_item_unlocked, unlock_progress,
    unlocked_item_ids, AvatarItem, ItemCategory, Rarity, UnlockFacts, UnlockRequirement,
    AVATAR_ITEMS,
};
pub use progression::games::{GameId, GAME_COUNT};
pub use progression::levels::{
    calculate_level_from_xp, calculate_level_up, level_progress, levels_earned_between,
    title_for_level, will_level_up, LevelDef, LevelProgress, LevelUp, LEVELS, MAX_LEVEL,
};
pub use progression::rewards::{daily_login_xp, set_completion_xp, xp_reward, XpAction};
pub use progression::streak::{
    build_streak_calendar, build_streak_calendar_with_window, current_streak_days,
    longest_streak_days, parse_activity_dates, CalendarDay, CalendarWeek, StreakCalendar,
};

pub use profile::events::{apply_card_added, apply_daily_login, CardVariant, ProgressionDelta};
pub use profile::snapshot::{snapshot_from_facts, GameProgressView, ProfileFacts, ProfileSnapshot};
