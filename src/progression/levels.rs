//! 等級表與升級計算
//!
//! 等級是衍生值，不持久化：由總經驗值對照單調遞增的門檻表求出。
//! `calculate_level_from_xp`、`calculate_level_up`、`will_level_up` 三者
//! 對相同輸入必須一致（一致性不變量，見單元測試）。

use serde::Serialize;

/// 最高等級
pub const MAX_LEVEL: i32 = 15;

/// 等級定義
#[derive(Clone, Copy, Debug)]
pub struct LevelDef {
    pub level: i32,
    pub xp_required: i64,
    pub title: &'static str,
}

/// 等級門檻表：`xp_required` 嚴格遞增，首項為 0
pub const LEVELS: [LevelDef; MAX_LEVEL as usize] = [
    LevelDef { level: 1, xp_required: 0, title: "Rookie Collector" },
    LevelDef { level: 2, xp_required: 100, title: "Card Fan" },
    LevelDef { level: 3, xp_required: 250, title: "Pack Opener" },
    LevelDef { level: 4, xp_required: 500, title: "Keen Trader" },
    LevelDef { level: 5, xp_required: 850, title: "Set Builder" },
    LevelDef { level: 6, xp_required: 1300, title: "Binder Boss" },
    LevelDef { level: 7, xp_required: 1900, title: "Rare Hunter" },
    LevelDef { level: 8, xp_required: 2700, title: "Shiny Seeker" },
    LevelDef { level: 9, xp_required: 3700, title: "Vault Keeper" },
    LevelDef { level: 10, xp_required: 5000, title: "Card Expert" },
    LevelDef { level: 11, xp_required: 6600, title: "Grand Trader" },
    LevelDef { level: 12, xp_required: 8500, title: "Master Collector" },
    LevelDef { level: 13, xp_required: 11000, title: "Card Sage" },
    LevelDef { level: 14, xp_required: 14000, title: "Living Legend" },
    LevelDef { level: 15, xp_required: 18000, title: "Ultimate Collector" },
];

/// 由總經驗值求等級：負值視為等級 1，否則取門檻 ≤ xp 的最大等級
pub fn calculate_level_from_xp(xp: i64) -> i32 {
    if xp < 0 {
        return 1;
    }
    LEVELS
        .iter()
        .rev()
        .find(|def| def.xp_required <= xp)
        .map(|def| def.level)
        .unwrap_or(1)
}

/// 等級稱號；超出範圍的等級夾到表內
pub fn title_for_level(level: i32) -> &'static str {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    LEVELS[idx].title
}

fn level_def(level: i32) -> &'static LevelDef {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    &LEVELS[idx]
}

/// 當前等級帶內的進度
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LevelProgress {
    pub level: i32,
    pub title: &'static str,
    /// 進入本等級後累積的經驗值
    pub xp_into_level: i64,
    /// 距離下一等級還需的經驗值（滿級為 0）
    pub xp_to_next: i64,
    /// 到下一等級的百分比（0~100，滿級固定 100）
    pub percent_to_next: f32,
    pub is_max_level: bool,
}

/// 計算等級帶內進度
pub fn level_progress(total_xp: i64) -> LevelProgress {
    let level = calculate_level_from_xp(total_xp);
    let current = level_def(level);

    if level >= MAX_LEVEL {
        return LevelProgress {
            level,
            title: current.title,
            xp_into_level: (total_xp - current.xp_required).max(0),
            xp_to_next: 0,
            percent_to_next: 100.0,
            is_max_level: true,
        };
    }

    let next = level_def(level + 1);
    let band = next.xp_required - current.xp_required;
    let xp_into_level = (total_xp - current.xp_required).max(0);
    let percent = (xp_into_level as f32 / band as f32 * 100.0).clamp(0.0, 100.0);

    LevelProgress {
        level,
        title: current.title,
        xp_into_level,
        xp_to_next: next.xp_required - total_xp.max(0),
        percent_to_next: percent,
        is_max_level: false,
    }
}

/// 升級事件
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LevelUp {
    pub previous_level: i32,
    /// 最終到達的等級（一次大量經驗值可能跳級）
    pub new_level: i32,
    pub levels_gained: i32,
    pub new_title: &'static str,
    pub total_xp: i64,
}

/// 判定一次經驗值增量是否跨越等級門檻
///
/// 未跨越回傳 None；跨越多級時只回報最終等級，逐級清單由
/// `levels_earned_between` 提供（用於升級動畫排程）。
pub fn calculate_level_up(current_xp: i64, xp_gain: i64) -> Option<LevelUp> {
    let total_xp = current_xp + xp_gain;
    let previous_level = calculate_level_from_xp(current_xp);
    let new_level = calculate_level_from_xp(total_xp);

    if new_level <= previous_level {
        return None;
    }

    Some(LevelUp {
        previous_level,
        new_level,
        levels_gained: new_level - previous_level,
        new_title: title_for_level(new_level),
        total_xp,
    })
}

/// 列出 (from_xp, to_xp] 之間跨越的每一個等級門檻
pub fn levels_earned_between(from_xp: i64, to_xp: i64) -> Vec<i32> {
    LEVELS
        .iter()
        .filter(|def| def.xp_required > from_xp.max(0) && def.xp_required <= to_xp)
        .map(|def| def.level)
        .collect()
}

/// `calculate_level_up` 的布林捷徑
pub fn will_level_up(current_xp: i64, xp_gain: i64) -> bool {
    calculate_level_up(current_xp, xp_gain).is_some()
}

// ============================================================================
// 單元測試
// ============================================================================
