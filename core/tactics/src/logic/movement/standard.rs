use super::{MoveSet, MovementRule};
use crate::domain::character::Character;
use crate::domain::core_types::GridPosition;
use crate::domain::state::GameState;
use crate::logic::board::distance;

/// 一般（劇情）模式：曼哈頓距離在移動力內且未被佔據的所有格子
///
/// 不做路徑搜尋，中間有角色擋住也能到達。佔據判定看格子的 `occupied_by`。
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMovement;

impl MovementRule for StandardMovement {
    fn valid_moves(&self, character: &Character, state: &GameState) -> MoveSet {
        let Some(from) = character.position else {
            return MoveSet::new();
        };
        let size = state.board_size;

        (0..size.height)
            .flat_map(|y| (0..size.width).map(move |x| GridPosition::new(x, y)))
            .filter(|pos| distance(from, *pos) <= character.move_range)
            .filter(|pos| {
                state
                    .board
                    .get_tile(*pos)
                    .is_some_and(|tile| tile.occupied_by.is_none())
            })
            .collect()
    }
}
