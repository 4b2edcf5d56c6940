//! 移動規則
//!
//! 每套規則都是純函式：`(角色, 遊戲狀態) -> 合法目的地集合`，只讀取狀態。
//! 前置條件：呼叫者提供的角色必須在棋盤邊界內；不在棋盤上的角色沒有任何移動。
//!
//! 三套規則刻意不統一：一般模式是範圍填色、不考慮路徑阻擋；
//! 西洋棋模式的滑行會被第一個佔據格擋下。

mod checkers;
mod chess;
mod standard;

pub use checkers::CheckersMovement;
pub use chess::{ChessMovement, ChessPattern};
pub use standard::StandardMovement;

use crate::domain::character::Character;
use crate::domain::core_types::{GridPosition, RuleSet};
use crate::domain::state::GameState;
use crate::logic::board::character_at;
use std::collections::BTreeSet;

/// 合法目的地集合
pub type MoveSet = BTreeSet<GridPosition>;

/// 移動規則介面，每個規則集一個實作
pub trait MovementRule {
    fn valid_moves(&self, character: &Character, state: &GameState) -> MoveSet;
}

impl RuleSet {
    /// 取得此規則集對應的移動規則
    pub fn movement_rule(self) -> &'static dyn MovementRule {
        match self {
            RuleSet::Storyline => &StandardMovement,
            RuleSet::Chess => &ChessMovement,
            RuleSet::Checkers => &CheckersMovement,
        }
    }
}

/// 目標格上的角色與移動者的關係
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Occupancy {
    Empty,
    Ally,
    Enemy,
}

fn occupancy(mover: &Character, pos: GridPosition, state: &GameState) -> Occupancy {
    match character_at(pos, state.characters()) {
        None => Occupancy::Empty,
        Some(other) if other.is_enemy_of(mover) => Occupancy::Enemy,
        Some(_) => Occupancy::Ally,
    }
}
