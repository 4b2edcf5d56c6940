//! 遊戲狀態容器
//!
//! `GameState` 是所有狀態轉換函式的輸入與輸出。轉換函式只借用舊狀態，
//! 回傳新的狀態，從不修改呼叫者手上的實例。

use crate::domain::alias::{AbilityId, CharacterId, PlayerId, TurnNumber};
use crate::domain::character::{Character, Player};
use crate::domain::core_types::{ActionMode, Board, BoardSize, GamePhase, GridPosition, RuleSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vec<Player>,
    pub board: Board,
    pub current_player_id: PlayerId,
    pub selected_character_id: Option<CharacterId>,
    pub phase: GamePhase,
    pub turn: TurnNumber,
    pub board_size: BoardSize,
    pub winner: Option<PlayerId>,
    pub action_mode: ActionMode,
    pub selected_ability_id: Option<AbilityId>,
    pub mode: RuleSet,
}

impl GameState {
    /// 所有玩家的所有角色（依玩家順序）
    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.players.iter().flat_map(|p| p.characters.iter())
    }

    pub fn characters_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.players.iter_mut().flat_map(|p| p.characters.iter_mut())
    }

    pub fn find_character(&self, id: &str) -> Option<&Character> {
        self.characters().find(|c| c.id == id)
    }

    pub fn find_character_mut(&mut self, id: &str) -> Option<&mut Character> {
        self.characters_mut().find(|c| c.id == id)
    }

    pub fn selected_character(&self) -> Option<&Character> {
        self.selected_character_id
            .as_deref()
            .and_then(|id| self.find_character(id))
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_index(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.player(&self.current_player_id)
    }

    /// 第一位玩家（跳棋方向以其為準）
    pub fn is_first_player(&self, id: &str) -> bool {
        self.players.first().is_some_and(|p| p.id == id)
    }

    pub fn in_bounds(&self, pos: GridPosition) -> bool {
        crate::logic::board::in_bounds(pos, self.board_size)
    }
}
