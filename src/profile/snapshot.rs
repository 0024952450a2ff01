//! 個人檔案衍生視圖
//!
//! 持久層只存兩類事實：經驗值總量與活動紀錄（卡牌數、成就集合、活動日期）。
//! 等級、成就進度、已解鎖裝飾、連續日曆全部在讀取時由事實重新計算，
//! 沒有任何衍生狀態有自己的生命週期。

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::progression::achievements::{
    cross_game_progress, game_milestone_progress, TierProgress,
};
use crate::progression::avatar::{unlocked_item_ids, UnlockFacts};
use crate::progression::games::GameId;
use crate::progression::levels::{level_progress, LevelProgress};
use crate::progression::streak::{build_streak_calendar, current_streak_days, StreakCalendar};

/// 呼叫端提供的事實快照（引擎假設快照一致，不處理部分寫入）
#[derive(Clone, Debug, Default)]
pub struct ProfileFacts {
    pub total_xp: i64,
    pub card_counts: HashMap<GameId, i64>,
    pub earned_achievements: HashSet<String>,
    pub activity_dates: Vec<NaiveDate>,
}

impl ProfileFacts {
    /// 全遊戲不重複卡牌總數
    pub fn total_unique_cards(&self) -> i64 {
        self.card_counts.values().sum()
    }

    /// 至少擁有一張卡的遊戲（固定順序）
    pub fn games_with_cards(&self) -> Vec<GameId> {
        GameId::ALL
            .iter()
            .copied()
            .filter(|g| self.card_counts.get(g).copied().unwrap_or(0) > 0)
            .collect()
    }
}

/// 單一遊戲的里程碑進度視圖
#[derive(Clone, Debug, Serialize)]
pub struct GameProgressView {
    pub game: GameId,
    pub card_count: i64,
    pub tiers: Vec<TierProgress>,
}

/// 完整衍生視圖：一次讀取所需的全部展示資料
#[derive(Clone, Debug, Serialize)]
pub struct ProfileSnapshot {
    pub level: LevelProgress,
    pub total_unique_cards: i64,
    pub current_streak_days: i64,
    pub milestones: Vec<GameProgressView>,
    pub cross_game: Vec<TierProgress>,
    pub unlocked_item_ids: Vec<&'static str>,
    pub calendar: StreakCalendar,
}

/// 由事實快照組裝完整視圖
pub fn snapshot_from_facts(facts: &ProfileFacts, today: NaiveDate) -> ProfileSnapshot {
    let streak = current_streak_days(&facts.activity_dates, today);
    let total_cards = facts.total_unique_cards();

    let milestones = GameId::ALL
        .iter()
        .map(|&game| {
            let card_count = facts.card_counts.get(&game).copied().unwrap_or(0);
            GameProgressView {
                game,
                card_count,
                tiers: game_milestone_progress(game, card_count, &facts.earned_achievements),
            }
        })
        .collect();

    let unlock_facts = UnlockFacts {
        earned_achievements: &facts.earned_achievements,
        total_unique_cards: total_cards,
        current_streak: streak,
    };

    ProfileSnapshot {
        level: level_progress(facts.total_xp),
        total_unique_cards: total_cards,
        current_streak_days: streak,
        milestones,
        cross_game: cross_game_progress(&facts.games_with_cards(), &facts.earned_achievements),
        unlocked_item_ids: unlocked_item_ids(&unlock_facts),
        calendar: build_streak_calendar(&facts.activity_dates, today),
    }
}

// ============================================================================
// 單元測試
// ============================================================================
