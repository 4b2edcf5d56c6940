//! Loader 相關的資料結構定義

use crate::domain::alias::{Coord, PlayerId};
use crate::domain::constants::{DEFAULT_BOARD_SIZE, DEFAULT_FACTION};
use crate::domain::core_types::{BoardSize, RuleSet};
use serde::{Deserialize, Serialize};

/// 對局設定（game.toml）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: Coord,
    pub board_height: Coord,
    pub mode: RuleSet,
    /// 存檔時標記的陣營名稱
    pub faction: String,
    /// 依輪替順序排列；第一位玩家使用獵人陣容並從 y = 0 出發
    pub players: Vec<PlayerConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub name: String,
}

impl GameConfig {
    pub fn board_size(&self) -> BoardSize {
        BoardSize {
            width: self.board_width,
            height: self.board_height,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_SIZE.width,
            board_height: DEFAULT_BOARD_SIZE.height,
            mode: RuleSet::default(),
            faction: DEFAULT_FACTION.to_string(),
            players: vec![
                PlayerConfig {
                    id: "player-1".to_string(),
                    name: "Player 1".to_string(),
                },
                PlayerConfig {
                    id: "ai-player".to_string(),
                    name: "Player 2".to_string(),
                },
            ],
        }
    }
}
