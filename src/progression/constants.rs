//! 進度系統常量定義

// ============================================================================
// 加卡經驗值
// ============================================================================

pub const CARD_ADD_XP: i64 = 10;              // 新增一張卡
pub const DUPLICATE_ADD_XP: i64 = 2;          // 重複卡
pub const HOLOFOIL_ADD_XP: i64 = 15;          // 閃卡
pub const REVERSE_HOLOFOIL_ADD_XP: i64 = 12;  // 逆閃卡
pub const FIRST_EDITION_ADD_XP: i64 = 25;     // 初版卡

// ============================================================================
// 套牌完成度經驗值（階梯制，不內插）
// ============================================================================

pub const SET_COMPLETION_25_XP: i64 = 50;
pub const SET_COMPLETION_50_XP: i64 = 100;
pub const SET_COMPLETION_75_XP: i64 = 200;
pub const SET_COMPLETION_100_XP: i64 = 500;

// ============================================================================
// 每日登入經驗值
// ============================================================================

pub const DAILY_LOGIN_BASE_XP: i64 = 5;       // 基礎登入獎勵
pub const LOGIN_STREAK_BONUS_XP: i64 = 2;     // 每連續一天的加成

// ============================================================================
// 成就經驗值（依成就階級）
// ============================================================================

pub const ACHIEVEMENT_BRONZE_XP: i64 = 25;
pub const ACHIEVEMENT_SILVER_XP: i64 = 75;
pub const ACHIEVEMENT_GOLD_XP: i64 = 200;

// ============================================================================
// 連續活動日曆
// ============================================================================

pub const STREAK_WINDOW_DAYS: i64 = 30;       // 日曆預設視窗（天）
