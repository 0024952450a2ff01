//! 支援的卡牌遊戲定義

use serde::{Deserialize, Serialize};

/// 支援的遊戲總數（跨遊戲徽章的最高門檻）
pub const GAME_COUNT: usize = 7;

/// 卡牌遊戲 ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Pokemon,
    Yugioh,
    Mtg,
    OnePiece,
    Lorcana,
    Digimon,
    DragonBall,
}

impl GameId {
    pub const ALL: [GameId; GAME_COUNT] = [
        GameId::Pokemon,
        GameId::Yugioh,
        GameId::Mtg,
        GameId::OnePiece,
        GameId::Lorcana,
        GameId::Digimon,
        GameId::DragonBall,
    ];

    /// 穩定字串鍵（成就 key 的前綴，與持久層一致）
    pub fn key(&self) -> &'static str {
        match self {
            GameId::Pokemon => "pokemon",
            GameId::Yugioh => "yugioh",
            GameId::Mtg => "mtg",
            GameId::OnePiece => "onepiece",
            GameId::Lorcana => "lorcana",
            GameId::Digimon => "digimon",
            GameId::DragonBall => "dragonball",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameId::Pokemon => "Pokémon",
            GameId::Yugioh => "Yu-Gi-Oh!",
            GameId::Mtg => "Magic: The Gathering",
            GameId::OnePiece => "One Piece",
            GameId::Lorcana => "Lorcana",
            GameId::Digimon => "Digimon",
            GameId::DragonBall => "Dragon Ball",
        }
    }

    /// 從字串鍵還原；未知鍵回傳 None（不拋錯，缺徽章優於炸掉畫面）
    pub fn from_key(key: &str) -> Option<GameId> {
        GameId::ALL.iter().copied().find(|g| g.key() == key)
    }
}

// ============================================================================
// 單元測試
// ============================================================================
