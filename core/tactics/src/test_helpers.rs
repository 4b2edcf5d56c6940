//! 測試輔助：ScenarioBuilder
//!
//! 用 ASCII art 視覺化擺放角色，直接產生可用的遊戲狀態。

use crate::domain::alias::PlayerId;
use crate::domain::character::Player;
use crate::domain::core_types::{CharacterClass, GamePhase, GridPosition, Rank, RuleSet};
use crate::domain::state::GameState;
use crate::error::{LoadError, Result};
use crate::loader::load_from_ascii;
use crate::logic::board::{sync_occupancy, validate_state};
use crate::logic::game::create_initial_game_state;
use crate::logic::roster::create_character;
use std::collections::{HashMap, HashSet};

/// 場景中的兩位玩家，第一位往 +y 前進
pub const FIRST_PLAYER: &str = "p1";
pub const SECOND_PLAYER: &str = "p2";

struct PieceDef {
    marker: String,
    class: CharacterClass,
    rank: Rank,
    owner: PlayerId,
}

/// 用 ASCII art 建立遊戲狀態
///
/// # 使用範例
///
/// ```ignore
/// use tactics::domain::core_types::{CharacterClass, Rank, RuleSet};
/// use tactics::test_helpers::{ScenarioBuilder, FIRST_PLAYER, SECOND_PLAYER};
///
/// let (state, markers) = ScenarioBuilder::from_ascii("
///   A . .
///   . . .
///   . . E
/// ")
/// .mode(RuleSet::Chess)
/// .piece("A", CharacterClass::Tank, Rank::C, FIRST_PLAYER)
/// .piece("E", CharacterClass::Monster, Rank::C, SECOND_PLAYER)
/// .build()
/// .unwrap();
/// assert_eq!(markers["E"].len(), 1);
/// assert_eq!(state.characters().count(), 2);
/// ```
pub struct ScenarioBuilder {
    ascii: String,
    mode: RuleSet,
    pieces: Vec<PieceDef>,
}

impl ScenarioBuilder {
    pub fn from_ascii(ascii: &str) -> Self {
        ScenarioBuilder {
            ascii: ascii.to_string(),
            mode: RuleSet::Storyline,
            pieces: Vec::new(),
        }
    }

    pub fn mode(mut self, mode: RuleSet) -> Self {
        self.mode = mode;
        self
    }

    /// 設定標記對應的職業、等級與擁有者；同一標記的每個位置各放一個角色
    pub fn piece(mut self, marker: &str, class: CharacterClass, rank: Rank, owner: &str) -> Self {
        self.pieces.push(PieceDef {
            marker: marker.to_string(),
            class,
            rank,
            owner: owner.to_string(),
        });
        self
    }

    /// 組裝遊戲狀態（遊戲階段、第一位玩家的回合）與標記位置
    pub fn build(self) -> Result<(GameState, HashMap<String, Vec<GridPosition>>)> {
        let (board_size, markers) = load_from_ascii(&self.ascii)?;

        if let Some(marker) = markers
            .keys()
            .find(|m| !self.pieces.iter().any(|p| &p.marker == *m))
        {
            return Err(LoadError::ParseError(format!("未定義的標記: {marker}")).into());
        }

        let mut players = vec![
            Player::new(FIRST_PLAYER, "Player 1"),
            Player::new(SECOND_PLAYER, "Player 2"),
        ];
        let mut used_ids = HashSet::new();
        for piece in &self.pieces {
            let Some(player) = players.iter_mut().find(|p| p.id == piece.owner) else {
                return Err(LoadError::ParseError(format!("未知的玩家: {}", piece.owner)).into());
            };
            for pos in markers.get(&piece.marker).into_iter().flatten() {
                player.characters.push(create_character(
                    &piece.marker,
                    piece.class,
                    piece.rank,
                    Some(*pos),
                    &piece.owner,
                    "test",
                    &mut used_ids,
                ));
            }
        }

        let initial = create_initial_game_state(players, board_size, self.mode);
        let mut state = sync_occupancy(&initial);
        validate_state(&state)?;
        state.phase = GamePhase::Playing;
        Ok((state, markers))
    }
}

/// 位於 `pos` 的角色 ID
pub fn id_at(state: &GameState, pos: GridPosition) -> Option<String> {
    crate::logic::board::character_at(pos, state.characters()).map(|c| c.id.clone())
}
