//! 成就目錄與解鎖判定
//!
//! 三個獨立的成就家族，各有自己的門檻階梯：
//!
//! | 家族         | 門檻                                   | key 形式              |
//! |--------------|----------------------------------------|-----------------------|
//! | 單遊戲里程碑 | 10 / 50 / 100 / 250 / 500 / 1000 張    | `{game}_{tier}`       |
//! | 跨遊戲徽章   | 2 / 3 / 全部 7 款遊戲各有至少一張卡    | `multi_collector_*`   |
//!
//! 判定回傳「本次新達標」的全部 key——不是只回最高階：一次評估從 0 跳到
//! 1000 張時，六個階級同時回傳。已獲得集合由呼叫端持久化；用更新後的
//! 集合重跑一次必得空結果（冪等不變量）。

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

use super::games::{GameId, GAME_COUNT};

/// 成就類別
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    GameMilestone,
    GameMastery,
    CrossGame,
}

/// 成就獎勵階級（對應經驗值獎勵）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
}

/// 單遊戲里程碑階級
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneTier {
    Novice,
    Apprentice,
    Collector,
    Expert,
    Master,
    Legend,
}

/// 里程碑階級（門檻嚴格遞增）
pub const MILESTONE_TIERS: [MilestoneTier; 6] = [
    MilestoneTier::Novice,
    MilestoneTier::Apprentice,
    MilestoneTier::Collector,
    MilestoneTier::Expert,
    MilestoneTier::Master,
    MilestoneTier::Legend,
];

impl MilestoneTier {
    /// 該階級需要的不重複卡牌數
    pub fn threshold(&self) -> i64 {
        match self {
            MilestoneTier::Novice => 10,
            MilestoneTier::Apprentice => 50,
            MilestoneTier::Collector => 100,
            MilestoneTier::Expert => 250,
            MilestoneTier::Master => 500,
            MilestoneTier::Legend => 1000,
        }
    }

    pub fn key_suffix(&self) -> &'static str {
        match self {
            MilestoneTier::Novice => "novice",
            MilestoneTier::Apprentice => "apprentice",
            MilestoneTier::Collector => "collector",
            MilestoneTier::Expert => "expert",
            MilestoneTier::Master => "master",
            MilestoneTier::Legend => "legend",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MilestoneTier::Novice => "Novice",
            MilestoneTier::Apprentice => "Apprentice",
            MilestoneTier::Collector => "Collector",
            MilestoneTier::Expert => "Expert",
            MilestoneTier::Master => "Master",
            MilestoneTier::Legend => "Legend",
        }
    }

    /// 對應的經驗值獎勵階級
    pub fn reward_tier(&self) -> AchievementTier {
        match self {
            MilestoneTier::Novice | MilestoneTier::Apprentice => AchievementTier::Bronze,
            MilestoneTier::Collector | MilestoneTier::Expert => AchievementTier::Silver,
            MilestoneTier::Master | MilestoneTier::Legend => AchievementTier::Gold,
        }
    }

    /// 高階視為精通類別，低階為里程碑類別
    pub fn category(&self) -> AchievementCategory {
        match self {
            MilestoneTier::Master | MilestoneTier::Legend => AchievementCategory::GameMastery,
            _ => AchievementCategory::GameMilestone,
        }
    }
}

/// 跨遊戲徽章：(key, 需要的遊戲數, 名稱, 獎勵階級)
///
/// 最高檔用 `_all` 而非數字，未來新增遊戲時 key 不會變成孤兒。
const CROSS_GAME_BADGES: [(&str, usize, &str, AchievementTier); 3] = [
    ("multi_collector_2", 2, "Dual Collector", AchievementTier::Bronze),
    ("multi_collector_3", 3, "Triple Threat", AchievementTier::Silver),
    ("multi_collector_all", GAME_COUNT, "Master of All Games", AchievementTier::Gold),
];

/// 成就定義
#[derive(Clone, Debug, Serialize)]
pub struct AchievementDef {
    pub key: String,
    pub category: AchievementCategory,
    pub name: String,
    pub description: String,
    pub threshold: i64,
    pub game: Option<GameId>,
    pub tier: AchievementTier,
}

/// 單遊戲里程碑的成就 key
pub fn milestone_key(game: GameId, tier: MilestoneTier) -> String {
    format!("{}_{}", game.key(), tier.key_suffix())
}

/// 完整成就目錄：7 款遊戲 × 6 階級 + 3 個跨遊戲徽章
pub static ACHIEVEMENT_CATALOG: Lazy<Vec<AchievementDef>> = Lazy::new(|| {
    let mut defs = Vec::with_capacity(GAME_COUNT * MILESTONE_TIERS.len() + CROSS_GAME_BADGES.len());

    for game in GameId::ALL {
        for tier in MILESTONE_TIERS {
            defs.push(AchievementDef {
                key: milestone_key(game, tier),
                category: tier.category(),
                name: format!("{} {}", game.display_name(), tier.display_name()),
                description: format!(
                    "Collect {} unique {} cards",
                    tier.threshold(),
                    game.display_name()
                ),
                threshold: tier.threshold(),
                game: Some(game),
                tier: tier.reward_tier(),
            });
        }
    }

    for (key, required, name, tier) in CROSS_GAME_BADGES {
        defs.push(AchievementDef {
            key: key.to_string(),
            category: AchievementCategory::CrossGame,
            name: name.to_string(),
            description: format!("Own at least one card from {} different games", required),
            threshold: required as i64,
            game: None,
            tier,
        });
    }

    defs
});

/// 以 key 查成就定義；未知 key 回傳 None（不拋錯）
pub fn find_achievement(key: &str) -> Option<&'static AchievementDef> {
    ACHIEVEMENT_CATALOG.iter().find(|def| def.key == key)
}

/// 單遊戲里程碑判定：回傳所有「門檻已達且尚未獲得」的 key（依階級升冪）
pub fn check_game_milestone_achievements(
    game: GameId,
    card_count: i64,
    already_earned: &HashSet<String>,
) -> Vec<String> {
    MILESTONE_TIERS
        .iter()
        .filter(|tier| card_count >= tier.threshold())
        .map(|tier| milestone_key(game, *tier))
        .filter(|key| !already_earned.contains(key))
        .collect()
}

/// 跨遊戲徽章判定：`games` 內不重複的遊戲數達標即解鎖
pub fn check_cross_game_achievements(
    games: &[GameId],
    already_earned: &HashSet<String>,
) -> Vec<String> {
    let distinct: HashSet<GameId> = games.iter().copied().collect();

    CROSS_GAME_BADGES
        .iter()
        .filter(|(_, required, _, _)| distinct.len() >= *required)
        .map(|(key, _, _, _)| key.to_string())
        .filter(|key| !already_earned.contains(key))
        .collect()
}

/// 彙總判定：每款遊戲的里程碑結果 ∪ 跨遊戲徽章結果
///
/// 跨遊戲的「擁有遊戲」集合取自卡牌數 > 0 的遊戲。
pub fn check_all_game_achievements(
    card_counts: &HashMap<GameId, i64>,
    already_earned: &HashSet<String>,
) -> Vec<String> {
    let mut newly = Vec::new();

    // 依固定順序走訪，結果順序可重現
    for game in GameId::ALL {
        if let Some(&count) = card_counts.get(&game) {
            newly.extend(check_game_milestone_achievements(game, count, already_earned));
        }
    }

    let owned_games: Vec<GameId> = GameId::ALL
        .iter()
        .copied()
        .filter(|g| card_counts.get(g).copied().unwrap_or(0) > 0)
        .collect();
    newly.extend(check_cross_game_achievements(&owned_games, already_earned));

    newly
}

/// 單一階級的進度（無論是否已獲得都回報）
#[derive(Clone, Debug, Serialize)]
pub struct TierProgress {
    pub key: String,
    pub current: i64,
    pub threshold: i64,
    /// 0~100 的整數百分比（四捨五入後夾住）
    pub progress: u32,
    /// 純粹的集合成員判定；`progress == 100` 但尚未持久化時可為 false
    pub earned: bool,
}

fn progress_pct(current: i64, threshold: i64) -> u32 {
    let ratio = current.max(0) as f64 / threshold as f64;
    ((ratio * 100.0).round() as i64).clamp(0, 100) as u32
}

/// 單遊戲全部六階的進度（依階級升冪）
pub fn game_milestone_progress(
    game: GameId,
    card_count: i64,
    already_earned: &HashSet<String>,
) -> Vec<TierProgress> {
    MILESTONE_TIERS
        .iter()
        .map(|tier| {
            let key = milestone_key(game, *tier);
            TierProgress {
                earned: already_earned.contains(&key),
                current: card_count,
                threshold: tier.threshold(),
                progress: progress_pct(card_count, tier.threshold()),
                key,
            }
        })
        .collect()
}

/// 跨遊戲徽章的進度（依門檻升冪）
pub fn cross_game_progress(
    games: &[GameId],
    already_earned: &HashSet<String>,
) -> Vec<TierProgress> {
    let distinct = games.iter().copied().collect::<HashSet<GameId>>().len() as i64;

    CROSS_GAME_BADGES
        .iter()
        .map(|(key, required, _, _)| TierProgress {
            key: key.to_string(),
            current: distinct,
            threshold: *required as i64,
            progress: progress_pct(distinct, *required as i64),
            earned: already_earned.contains(*key),
        })
        .collect()
}

// ============================================================================
// 單元測試
// ============================================================================
