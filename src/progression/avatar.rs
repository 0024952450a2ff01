//! 頭像裝飾解鎖判定
//!
//! 裝飾沒有獨立的「已解鎖」欄位——解鎖與否永遠從當前事實重新計算，
//! 目錄與已獲得事實之間不可能脫鉤。四種解鎖條件：
//!
//! | 條件類型      | 判定                                   | 進度        |
//! |---------------|----------------------------------------|-------------|
//! | `Achievement` | 成就 key 是否在已獲得集合              | 0 或 100    |
//! | `Milestone`   | 不重複卡牌總數 ≥ 門檻                  | 線性夾住    |
//! | `Streak`      | 當前連續天數 ≥ 門檻                    | 線性夾住    |
//! | `Level`       | 近似等級（卡牌數 × 2 XP）≥ 門檻        | 線性夾住    |
//!
//! `Level` 條件刻意沿用獨立的 10 階近似表而非主等級系統，隔離在
//! `approximate_level_from_cards` 之後，未來若要統一只需改這裡。

use std::collections::HashSet;

use serde::Serialize;

/// 裝飾類別
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Hat,
    Frame,
    Badge,
}

/// 稀有度
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// 解鎖條件
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockRequirement {
    /// 已獲得指定成就
    Achievement(&'static str),
    /// 不重複卡牌總數達標
    Milestone(i64),
    /// 當前連續天數達標
    Streak(i64),
    /// 近似等級達標（獨立於主等級系統）
    Level(i32),
}

/// 裝飾目錄項目
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AvatarItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub requirement: UnlockRequirement,
}

/// 裝飾目錄
pub const AVATAR_ITEMS: [AvatarItem; 18] = [
    // ========================================================================
    // 帽子
    // ========================================================================
    AvatarItem { id: "hat_starter_cap", name: "Starter Cap", category: ItemCategory::Hat, rarity: Rarity::Common, requirement: UnlockRequirement::Milestone(1) },
    AvatarItem { id: "hat_party", name: "Party Hat", category: ItemCategory::Hat, rarity: Rarity::Common, requirement: UnlockRequirement::Streak(3) },
    AvatarItem { id: "hat_wizard", name: "Wizard Hat", category: ItemCategory::Hat, rarity: Rarity::Rare, requirement: UnlockRequirement::Level(3) },
    AvatarItem { id: "hat_crown", name: "Collector's Crown", category: ItemCategory::Hat, rarity: Rarity::Epic, requirement: UnlockRequirement::Milestone(250) },
    AvatarItem { id: "hat_champion", name: "Champion's Helm", category: ItemCategory::Hat, rarity: Rarity::Legendary, requirement: UnlockRequirement::Achievement("multi_collector_all") },

    // ========================================================================
    // 相框
    // ========================================================================
    AvatarItem { id: "frame_bronze", name: "Bronze Frame", category: ItemCategory::Frame, rarity: Rarity::Common, requirement: UnlockRequirement::Milestone(10) },
    AvatarItem { id: "frame_silver", name: "Silver Frame", category: ItemCategory::Frame, rarity: Rarity::Rare, requirement: UnlockRequirement::Milestone(100) },
    AvatarItem { id: "frame_gold", name: "Gold Frame", category: ItemCategory::Frame, rarity: Rarity::Epic, requirement: UnlockRequirement::Milestone(500) },
    AvatarItem { id: "frame_flame", name: "Flame Frame", category: ItemCategory::Frame, rarity: Rarity::Rare, requirement: UnlockRequirement::Streak(7) },
    AvatarItem { id: "frame_rainbow", name: "Rainbow Frame", category: ItemCategory::Frame, rarity: Rarity::Legendary, requirement: UnlockRequirement::Level(8) },

    // ========================================================================
    // 徽章
    // ========================================================================
    AvatarItem { id: "badge_first_card", name: "First Card", category: ItemCategory::Badge, rarity: Rarity::Common, requirement: UnlockRequirement::Milestone(1) },
    AvatarItem { id: "badge_week_streak", name: "Week Warrior", category: ItemCategory::Badge, rarity: Rarity::Rare, requirement: UnlockRequirement::Streak(7) },
    AvatarItem { id: "badge_month_streak", name: "Monthly Devotion", category: ItemCategory::Badge, rarity: Rarity::Epic, requirement: UnlockRequirement::Streak(30) },
    AvatarItem { id: "badge_pokemon_master", name: "Pokémon Master", category: ItemCategory::Badge, rarity: Rarity::Epic, requirement: UnlockRequirement::Achievement("pokemon_master") },
    AvatarItem { id: "badge_yugioh_master", name: "Duel Master", category: ItemCategory::Badge, rarity: Rarity::Epic, requirement: UnlockRequirement::Achievement("yugioh_master") },
    AvatarItem { id: "badge_multi_2", name: "Game Hopper", category: ItemCategory::Badge, rarity: Rarity::Rare, requirement: UnlockRequirement::Achievement("multi_collector_2") },
    AvatarItem { id: "badge_level_5", name: "Rising Star", category: ItemCategory::Badge, rarity: Rarity::Rare, requirement: UnlockRequirement::Level(5) },
    AvatarItem { id: "badge_level_10", name: "Shining Star", category: ItemCategory::Badge, rarity: Rarity::Legendary, requirement: UnlockRequirement::Level(10) },
];

/// 解鎖判定輸入的事實組（具名欄位，避免參數順序錯置）
#[derive(Clone, Copy, Debug)]
pub struct UnlockFacts<'a> {
    pub earned_achievements: &'a HashSet<String>,
    pub total_unique_cards: i64,
    pub current_streak: i64,
}

// ============================================================================
// 近似等級（獨立於主等級系統）
// ============================================================================

/// 每張卡折算的近似經驗值
const APPROX_XP_PER_CARD: i64 = 2;

/// 近似等級門檻表（10 階，嚴格遞增）
const APPROX_LEVEL_XP: [i64; 10] = [0, 20, 60, 140, 260, 420, 620, 900, 1300, 1800];

/// 由卡牌總數求近似等級（卡牌數 × 2 XP 對照 10 階表）
pub fn approximate_level_from_cards(total_unique_cards: i64) -> i32 {
    let xp = total_unique_cards.max(0) * APPROX_XP_PER_CARD;
    let mut level = 1;
    for (i, threshold) in APPROX_LEVEL_XP.iter().enumerate() {
        if xp >= *threshold {
            level = i as i32 + 1;
        }
    }
    level
}

// ============================================================================
// 解鎖判定
// ============================================================================

/// 解鎖判定：對當前事實的純謂詞
pub fn is_item_unlocked(item: &AvatarItem, facts: &UnlockFacts<'_>) -> bool {
    match item.requirement {
        UnlockRequirement::Achievement(key) => facts.earned_achievements.contains(key),
        UnlockRequirement::Milestone(required) => facts.total_unique_cards >= required,
        UnlockRequirement::Streak(required) => facts.current_streak >= required,
        UnlockRequirement::Level(required) => {
            approximate_level_from_cards(facts.total_unique_cards) >= required
        }
    }
}

/// 解鎖進度百分比：成就條件為 0/100 二值，其餘為線性比例夾在 0~100
pub fn unlock_progress(item: &AvatarItem, facts: &UnlockFacts<'_>) -> f32 {
    let ratio = match item.requirement {
        UnlockRequirement::Achievement(key) => {
            return if facts.earned_achievements.contains(key) { 100.0 } else { 0.0 };
        }
        UnlockRequirement::Milestone(required) => {
            facts.total_unique_cards as f32 / required as f32
        }
        UnlockRequirement::Streak(required) => facts.current_streak as f32 / required as f32,
        UnlockRequirement::Level(required) => {
            approximate_level_from_cards(facts.total_unique_cards) as f32 / required as f32
        }
    };
    (ratio * 100.0).clamp(0.0, 100.0)
}

/// 當前事實下已解鎖的全部裝飾 id（目錄順序）
pub fn unlocked_item_ids(facts: &UnlockFacts<'_>) -> Vec<&'static str> {
    AVATAR_ITEMS
        .iter()
        .filter(|item| is_item_unlocked(item, facts))
        .map(|item| item.id)
        .collect()
}

/// 以 id 查目錄項目；未知 id 回傳 None
pub fn find_item(id: &str) -> Option<&'static AvatarItem> {
    AVATAR_ITEMS.iter().find(|item| item.id == id)
}

/// 指定類別的目錄項目（目錄順序）
pub fn items_in_category(category: ItemCategory) -> Vec<&'static AvatarItem> {
    AVATAR_ITEMS.iter().filter(|item| item.category == category).collect()
}

// ============================================================================
// 單元測試
// ============================================================================
