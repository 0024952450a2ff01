//! 事件增量管線
//!
//! 一次「加卡」在呼叫端看來是單一邏輯交易：計算經驗值增量、判定是否
//! 跨越等級門檻、以新卡牌數重新判定成就、再看是否解鎖新裝飾。
//! 本模組把這個順序固定在一個純函數裡；引擎不做持久化，呼叫端拿到
//! `ProgressionDelta` 之後自行原子地寫回所有結果。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::progression::achievements::{check_all_game_achievements, find_achievement};
use crate::progression::avatar::{unlocked_item_ids, UnlockFacts};
use crate::progression::games::GameId;
use crate::progression::levels::{calculate_level_up, levels_earned_between, LevelUp};
use crate::progression::rewards::{daily_login_xp, xp_reward, XpAction};
use crate::progression::streak::current_streak_days;

use super::snapshot::ProfileFacts;

/// 加卡的卡種
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    Standard,
    Duplicate,
    Holofoil,
    ReverseHolofoil,
    FirstEdition,
}

impl CardVariant {
    fn xp_action(&self) -> XpAction {
        match self {
            CardVariant::Standard => XpAction::AddCard,
            CardVariant::Duplicate => XpAction::AddDuplicate,
            CardVariant::Holofoil => XpAction::AddHolofoil,
            CardVariant::ReverseHolofoil => XpAction::AddReverseHolofoil,
            CardVariant::FirstEdition => XpAction::AddFirstEdition,
        }
    }

    /// 重複卡不增加不重複卡牌數
    fn adds_unique_card(&self) -> bool {
        !matches!(self, CardVariant::Duplicate)
    }
}

/// 單一事件產生的全部進度增量
#[derive(Clone, Debug, Serialize)]
pub struct ProgressionDelta {
    pub xp_gained: i64,
    pub new_total_xp: i64,
    /// 跨越等級門檻時的升級事件（只報最終等級）
    pub level_up: Option<LevelUp>,
    /// 逐一跨越的等級門檻（升級動畫排程用）
    pub levels_crossed: Vec<i32>,
    pub new_achievement_keys: Vec<String>,
    pub new_item_ids: Vec<&'static str>,
}

/// 成就的經驗值獎勵（依目錄中的獎勵階級；未知 key 不給獎勵）
fn achievement_xp(key: &str) -> i64 {
    use crate::progression::achievements::AchievementTier;

    match find_achievement(key).map(|def| def.tier) {
        Some(AchievementTier::Bronze) => xp_reward(XpAction::AchievementBronze),
        Some(AchievementTier::Silver) => xp_reward(XpAction::AchievementSilver),
        Some(AchievementTier::Gold) => xp_reward(XpAction::AchievementGold),
        None => 0,
    }
}

/// 由事實與事件後的狀態算出完整增量
fn build_delta(
    facts: &ProfileFacts,
    base_xp: i64,
    new_achievement_keys: Vec<String>,
    cards_after: i64,
    streak_before: i64,
    streak_after: i64,
) -> ProgressionDelta {
    let achievement_bonus: i64 = new_achievement_keys.iter().map(|k| achievement_xp(k)).sum();
    let xp_gained = base_xp + achievement_bonus;
    let new_total_xp = facts.total_xp + xp_gained;

    let level_up = calculate_level_up(facts.total_xp, xp_gained);
    let levels_crossed = levels_earned_between(facts.total_xp, new_total_xp);

    // 裝飾解鎖：事件前後各算一次，差集即新解鎖
    let before = UnlockFacts {
        earned_achievements: &facts.earned_achievements,
        total_unique_cards: facts.total_unique_cards(),
        current_streak: streak_before,
    };
    let unlocked_before = unlocked_item_ids(&before);

    let mut earned_after = facts.earned_achievements.clone();
    earned_after.extend(new_achievement_keys.iter().cloned());
    let after = UnlockFacts {
        earned_achievements: &earned_after,
        total_unique_cards: cards_after,
        current_streak: streak_after,
    };
    let new_item_ids: Vec<&'static str> = unlocked_item_ids(&after)
        .into_iter()
        .filter(|id| !unlocked_before.contains(id))
        .collect();

    if let Some(up) = &level_up {
        debug!(previous = up.previous_level, new = up.new_level, "level up");
    }
    if !new_achievement_keys.is_empty() {
        debug!(keys = ?new_achievement_keys, "achievements unlocked");
    }
    if !new_item_ids.is_empty() {
        debug!(items = ?new_item_ids, "avatar items unlocked");
    }

    ProgressionDelta {
        xp_gained,
        new_total_xp,
        level_up,
        levels_crossed,
        new_achievement_keys,
        new_item_ids,
    }
}

/// 加卡事件的完整增量
///
/// 以加卡後的卡牌數重新判定成就；新成就的經驗值獎勵併入同一筆增量，
/// 升級判定看的是合併後的總增量。
pub fn apply_card_added(
    facts: &ProfileFacts,
    game: GameId,
    variant: CardVariant,
    today: NaiveDate,
) -> ProgressionDelta {
    let mut counts_after = facts.card_counts.clone();
    if variant.adds_unique_card() {
        *counts_after.entry(game).or_insert(0) += 1;
    }

    let new_achievement_keys =
        check_all_game_achievements(&counts_after, &facts.earned_achievements);
    let cards_after: i64 = counts_after.values().sum();
    // 加卡不動活動紀錄：前後連續天數相同
    let streak = current_streak_days(&facts.activity_dates, today);

    build_delta(
        facts,
        xp_reward(variant.xp_action()),
        new_achievement_keys,
        cards_after,
        streak,
        streak,
    )
}

/// 每日登入事件的完整增量
///
/// `facts.activity_dates` 是登入前的紀錄；本函數視同已補上今天，
/// 登入獎勵與裝飾解鎖都以補上後的連續天數計算。
pub fn apply_daily_login(facts: &ProfileFacts, today: NaiveDate) -> ProgressionDelta {
    let streak_before = current_streak_days(&facts.activity_dates, today);

    let mut dates_after = facts.activity_dates.clone();
    dates_after.push(today);
    let streak_after = current_streak_days(&dates_after, today);

    // 登入不改卡牌數；成就家族不含連續天數門檻，重跑必為空，
    // 但維持同一條管線讓增量形狀一致
    let new_achievement_keys =
        check_all_game_achievements(&facts.card_counts, &facts.earned_achievements);

    build_delta(
        facts,
        daily_login_xp(streak_after),
        new_achievement_keys,
        facts.total_unique_cards(),
        streak_before,
        streak_after,
    )
}

// ============================================================================
// 單元測試
// ============================================================================
