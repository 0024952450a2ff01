//! 行為經驗值獎勵
//!
//! 每種行為對應固定的經驗值；套牌完成度採階梯制（取達到的最高階，
//! 不做線性內插），每日登入隨連續天數線性加成。

use serde::{Deserialize, Serialize};

use super::constants::{
    ACHIEVEMENT_BRONZE_XP, ACHIEVEMENT_GOLD_XP, ACHIEVEMENT_SILVER_XP, CARD_ADD_XP,
    DAILY_LOGIN_BASE_XP, DUPLICATE_ADD_XP, FIRST_EDITION_ADD_XP, HOLOFOIL_ADD_XP,
    LOGIN_STREAK_BONUS_XP, REVERSE_HOLOFOIL_ADD_XP, SET_COMPLETION_100_XP,
    SET_COMPLETION_25_XP, SET_COMPLETION_50_XP, SET_COMPLETION_75_XP,
};

/// 可獲得經驗值的行為
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum XpAction {
    AddCard,
    AddDuplicate,
    AddHolofoil,
    AddReverseHolofoil,
    AddFirstEdition,
    SetCompletion25,
    SetCompletion50,
    SetCompletion75,
    SetCompletion100,
    DailyLogin,
    AchievementBronze,
    AchievementSilver,
    AchievementGold,
}

/// 行為對應的固定經驗值
pub fn xp_reward(action: XpAction) -> i64 {
    match action {
        XpAction::AddCard => CARD_ADD_XP,
        XpAction::AddDuplicate => DUPLICATE_ADD_XP,
        XpAction::AddHolofoil => HOLOFOIL_ADD_XP,
        XpAction::AddReverseHolofoil => REVERSE_HOLOFOIL_ADD_XP,
        XpAction::AddFirstEdition => FIRST_EDITION_ADD_XP,
        XpAction::SetCompletion25 => SET_COMPLETION_25_XP,
        XpAction::SetCompletion50 => SET_COMPLETION_50_XP,
        XpAction::SetCompletion75 => SET_COMPLETION_75_XP,
        XpAction::SetCompletion100 => SET_COMPLETION_100_XP,
        XpAction::DailyLogin => DAILY_LOGIN_BASE_XP,
        XpAction::AchievementBronze => ACHIEVEMENT_BRONZE_XP,
        XpAction::AchievementSilver => ACHIEVEMENT_SILVER_XP,
        XpAction::AchievementGold => ACHIEVEMENT_GOLD_XP,
    }
}

/// 套牌完成度經驗值：取完成度達到的最高階（25/50/75/100），未達 25% 為 0
pub fn set_completion_xp(completion_pct: f32) -> i64 {
    if completion_pct >= 100.0 {
        SET_COMPLETION_100_XP
    } else if completion_pct >= 75.0 {
        SET_COMPLETION_75_XP
    } else if completion_pct >= 50.0 {
        SET_COMPLETION_50_XP
    } else if completion_pct >= 25.0 {
        SET_COMPLETION_25_XP
    } else {
        0
    }
}

/// 每日登入經驗值：基礎值 + (連續天數 − 1) × 加成
///
/// 連續天數 0 或 1 都只給基礎值，不會出現負加成。
pub fn daily_login_xp(streak_days: i64) -> i64 {
    let bonus_days = (streak_days - 1).max(0);
    DAILY_LOGIN_BASE_XP + bonus_days * LOGIN_STREAK_BONUS_XP
}

// ============================================================================
// 單元測試
// ============================================================================
