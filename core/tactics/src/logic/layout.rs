//! 棋盤模式的起始布局
//!
//! 布局只決定起始位置與職業/等級，與移動規則無關；之後的合法性由對應規則檢查。

use crate::domain::alias::Coord;
use crate::domain::character::Character;
use crate::domain::constants::{CHECKERS_ROWS_PER_SIDE, CHESS_BOARD_WIDTH};
use crate::domain::core_types::{BoardSize, CharacterClass, GridPosition, Rank, RuleSet};
use crate::error::{BoardError, Result};
use crate::logic::roster::home_row;
use crate::logic::unit_attributes::calculate_stats;

/// 底線棋子：車、馬、象、后、王、象、馬、車（依 x 排列）
const CHESS_BACK_RANK: [(CharacterClass, Rank); 8] = [
    (CharacterClass::Tank, Rank::B),
    (CharacterClass::Assassin, Rank::A),
    (CharacterClass::Mage, Rank::A),
    (CharacterClass::Hunter, Rank::S),
    (CharacterClass::Monster, Rank::S),
    (CharacterClass::Mage, Rank::A),
    (CharacterClass::Assassin, Rank::A),
    (CharacterClass::Tank, Rank::B),
];

const CHESS_PAWN: (CharacterClass, Rank) = (CharacterClass::Soldier, Rank::C);

const CHECKERS_PIECE: (CharacterClass, Rank) = (CharacterClass::Soldier, Rank::C);

/// 依規則集重新安排陣容的位置、職業與等級
///
/// - 劇情模式：原樣回傳
/// - 西洋棋：陣容索引 0..8 依序放在底線，8..16 放在兵線，其餘移出棋盤
/// - 跳棋：依序放在己方三列的深色格，其餘移出棋盤，全部改為通用兵種
pub fn position_characters_for_board_game(
    characters: &[Character],
    is_first_player: bool,
    mode: RuleSet,
    board_size: BoardSize,
) -> Result<Vec<Character>> {
    match mode {
        RuleSet::Storyline => Ok(characters.to_vec()),
        RuleSet::Chess => chess_layout(characters, is_first_player, board_size),
        RuleSet::Checkers => checkers_layout(characters, is_first_player, board_size),
    }
}

fn chess_layout(
    characters: &[Character],
    is_first_player: bool,
    board_size: BoardSize,
) -> Result<Vec<Character>> {
    if board_size.width != CHESS_BOARD_WIDTH || board_size.height < 4 {
        return Err(BoardError::UnsupportedBoardSize {
            layout: "chess",
            width: board_size.width,
            height: board_size.height,
        }
        .into());
    }

    let back_row = home_row(is_first_player, board_size);
    let pawn_row = if is_first_player {
        back_row + 1
    } else {
        back_row - 1
    };
    let slots = CHESS_BACK_RANK.len();

    let placed = characters
        .iter()
        .enumerate()
        .map(|(index, character)| {
            let (class, rank, position) = if index < slots {
                let (class, rank) = CHESS_BACK_RANK[index];
                (class, rank, Some(GridPosition::new(index as Coord, back_row)))
            } else if index < slots * 2 {
                let (class, rank) = CHESS_PAWN;
                let x = (index - slots) as Coord;
                (class, rank, Some(GridPosition::new(x, pawn_row)))
            } else {
                (character.class, character.rank, None)
            };
            reassign(character, class, rank, position)
        })
        .collect();
    Ok(placed)
}

fn checkers_layout(
    characters: &[Character],
    is_first_player: bool,
    board_size: BoardSize,
) -> Result<Vec<Character>> {
    if board_size.height < CHECKERS_ROWS_PER_SIDE * 2 || board_size.width < 2 {
        return Err(BoardError::UnsupportedBoardSize {
            layout: "checkers",
            width: board_size.width,
            height: board_size.height,
        }
        .into());
    }

    let home = home_row(is_first_player, board_size);
    let toward_center = if is_first_player { 1 } else { -1 };
    let mut dark_squares = (0..CHECKERS_ROWS_PER_SIDE)
        .map(|row| home + row * toward_center)
        .flat_map(|y| (0..board_size.width).map(move |x| GridPosition::new(x, y)))
        .filter(|pos| is_dark_square(*pos));

    let (class, rank) = CHECKERS_PIECE;
    let placed = characters
        .iter()
        .map(|character| reassign(character, class, rank, dark_squares.next()))
        .collect();
    Ok(placed)
}

/// 深色格：(x + y) 為奇數
pub fn is_dark_square(pos: GridPosition) -> bool {
    (pos.x + pos.y) % 2 == 1
}

/// 改寫職業/等級與位置，並依新職業/等級重算數值（生命回滿）
fn reassign(
    character: &Character,
    class: CharacterClass,
    rank: Rank,
    position: Option<GridPosition>,
) -> Character {
    let stats = calculate_stats(class, rank);
    Character {
        class,
        rank,
        health: stats.max_health,
        max_health: stats.max_health,
        attack: stats.attack,
        defense: stats.defense,
        move_range: stats.move_range,
        attack_range: stats.attack_range,
        position,
        ..character.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dark_square() {
        assert!(!is_dark_square(GridPosition::new(0, 0)));
        assert!(is_dark_square(GridPosition::new(1, 0)));
        assert!(is_dark_square(GridPosition::new(0, 7)));
        assert!(!is_dark_square(GridPosition::new(7, 7)));
    }
}
