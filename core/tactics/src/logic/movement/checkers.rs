use super::{occupancy, MoveSet, MovementRule, Occupancy};
use crate::domain::character::Character;
use crate::domain::core_types::{GridPosition, Rank};
use crate::domain::state::GameState;

/// 跳棋模式
///
/// 「前方」依擁有者而定：第一位玩家往 +y，其他玩家往 -y。
/// 一般走法是前方兩個斜角空格；吃子是跳過前方斜角的敵人落在其後的空格，只跳一次。
/// S 級角色視為王棋，後方也能走與吃。
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckersMovement;

impl MovementRule for CheckersMovement {
    fn valid_moves(&self, character: &Character, state: &GameState) -> MoveSet {
        let Some(from) = character.position else {
            return MoveSet::new();
        };

        let forward = forward_direction(character, state);
        let mut moves = MoveSet::new();
        diagonal_moves(character, from, forward, state, &mut moves);
        if character.rank == Rank::S {
            diagonal_moves(character, from, -forward, state, &mut moves);
        }
        moves
    }
}

/// 角色擁有者的前進方向（y 軸）
pub(crate) fn forward_direction(character: &Character, state: &GameState) -> i32 {
    if state.is_first_player(&character.owner) {
        1
    } else {
        -1
    }
}

/// 往 `dy` 方向的一般走法與吃子走法
fn diagonal_moves(
    character: &Character,
    from: GridPosition,
    dy: i32,
    state: &GameState,
    moves: &mut MoveSet,
) {
    for dx in [-1, 1] {
        let step = from.offset(dx, dy);
        if state.in_bounds(step) && occupancy(character, step, state) == Occupancy::Empty {
            moves.insert(step);
        }

        let landing = from.offset(dx * 2, dy * 2);
        if state.in_bounds(landing)
            && occupancy(character, step, state) == Occupancy::Enemy
            && occupancy(character, landing, state) == Occupancy::Empty
        {
            moves.insert(landing);
        }
    }
}
