use super::{occupancy, MoveSet, MovementRule, Occupancy};
use crate::domain::character::Character;
use crate::domain::core_types::{CharacterClass, GridPosition};
use crate::domain::state::GameState;

const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// 鄰域模式的半徑（5×5 扣掉中心）
const NEIGHBORHOOD_RADIUS: i32 = 2;

/// 西洋棋走法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessPattern {
    Rook,
    Bishop,
    Queen,
    Knight,
    King,
    /// 沒有對應棋子的職業：兩格內的方形鄰域
    Neighborhood,
}

impl ChessPattern {
    /// 職業對應的走法；等級不影響西洋棋走法
    pub fn for_class(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Tank => ChessPattern::Rook,
            CharacterClass::Mage => ChessPattern::Bishop,
            CharacterClass::Hunter => ChessPattern::Queen,
            CharacterClass::Assassin => ChessPattern::Knight,
            CharacterClass::Monster => ChessPattern::King,
            CharacterClass::Soldier => ChessPattern::Neighborhood,
        }
    }
}

/// 西洋棋模式
///
/// 滑行走法在遇到第一個有角色的格子時停止：敵人可吃（包含該格），友軍不含；
/// 跳躍與單步走法只排除友軍佔據的格子。
#[derive(Debug, Clone, Copy, Default)]
pub struct ChessMovement;

impl MovementRule for ChessMovement {
    fn valid_moves(&self, character: &Character, state: &GameState) -> MoveSet {
        let Some(from) = character.position else {
            return MoveSet::new();
        };

        let mut moves = MoveSet::new();
        match ChessPattern::for_class(character.class) {
            ChessPattern::Rook => slide_all(character, from, &ORTHOGONAL, state, &mut moves),
            ChessPattern::Bishop => slide_all(character, from, &DIAGONAL, state, &mut moves),
            ChessPattern::Queen => {
                slide_all(character, from, &ORTHOGONAL, state, &mut moves);
                slide_all(character, from, &DIAGONAL, state, &mut moves);
            }
            ChessPattern::Knight => leap(character, from, &KNIGHT_OFFSETS, state, &mut moves),
            ChessPattern::King => leap(character, from, &KING_OFFSETS, state, &mut moves),
            ChessPattern::Neighborhood => {
                let offsets: Vec<(i32, i32)> = (-NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS)
                    .flat_map(|dx| {
                        (-NEIGHBORHOOD_RADIUS..=NEIGHBORHOOD_RADIUS).map(move |dy| (dx, dy))
                    })
                    .filter(|&offset| offset != (0, 0))
                    .collect();
                leap(character, from, &offsets, state, &mut moves);
            }
        }
        moves
    }
}

fn slide_all(
    character: &Character,
    from: GridPosition,
    directions: &[(i32, i32)],
    state: &GameState,
    moves: &mut MoveSet,
) {
    for &(dx, dy) in directions {
        slide(character, from, dx, dy, state, moves);
    }
}

/// 沿單一方向滑行，直到棋盤邊緣或第一個被佔據的格子
fn slide(
    character: &Character,
    from: GridPosition,
    dx: i32,
    dy: i32,
    state: &GameState,
    moves: &mut MoveSet,
) {
    let mut pos = from.offset(dx, dy);
    while state.in_bounds(pos) {
        match occupancy(character, pos, state) {
            Occupancy::Empty => {
                moves.insert(pos);
            }
            Occupancy::Enemy => {
                moves.insert(pos);
                return;
            }
            Occupancy::Ally => return,
        }
        pos = pos.offset(dx, dy);
    }
}

/// 固定偏移量走法，友軍佔據的格子不可進入
fn leap(
    character: &Character,
    from: GridPosition,
    offsets: &[(i32, i32)],
    state: &GameState,
    moves: &mut MoveSet,
) {
    let targets = offsets
        .iter()
        .map(|&(dx, dy)| from.offset(dx, dy))
        .filter(|pos| state.in_bounds(*pos))
        .filter(|pos| occupancy(character, *pos, state) != Occupancy::Ally);
    moves.extend(targets);
}
