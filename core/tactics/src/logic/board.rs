//! 棋盤邏輯：距離、邊界、佔據查詢與棋盤建構

use crate::domain::character::Character;
use crate::domain::core_types::{Board, BoardSize, GridPosition, Tile};
use crate::domain::state::GameState;
use crate::error::{BoardError, Result};
use std::collections::HashMap;

/// 曼哈頓距離（只用於一般模式的範圍判定）
pub fn distance(a: GridPosition, b: GridPosition) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// 驗證位置是否在棋盤邊界內
pub fn in_bounds(pos: GridPosition, size: BoardSize) -> bool {
    pos.x >= 0 && pos.x < size.width && pos.y >= 0 && pos.y < size.height
}

/// 取得位於 `pos` 的角色
///
/// 若有多個角色重疊（違反不變量），回傳清單中的第一個；
/// 這只是決定性的結果，不應被當作合法的優先規則，請以 [`validate_state`] 檢查。
pub fn character_at<'a, I>(pos: GridPosition, characters: I) -> Option<&'a Character>
where
    I: IntoIterator<Item = &'a Character>,
{
    characters.into_iter().find(|c| c.is_at(pos))
}

/// 建立全為一般地形、無高亮、無佔據的棋盤
pub fn build_board(size: BoardSize) -> Board {
    let tiles = (0..size.height.max(0))
        .map(|y| {
            (0..size.width.max(0))
                .map(|x| Tile::new(GridPosition::new(x, y)))
                .collect()
        })
        .collect();
    Board { tiles }
}

/// 依角色位置重算每一格的佔據者
pub fn sync_occupancy(state: &GameState) -> GameState {
    let mut next = state.clone();
    let occupants: HashMap<GridPosition, String> = state
        .characters()
        .filter_map(|c| c.position.map(|pos| (pos, c.id.clone())))
        .collect();
    for tile in next.board.iter_mut() {
        tile.occupied_by = occupants.get(&tile.position).cloned();
    }
    next
}

/// 檢查遊戲狀態的不變量
///
/// - 棋盤上的角色位置必須在邊界內
/// - 一格最多一個角色
/// - 格子的佔據者必須與角色位置一致
/// - 生命不得超過上限
pub fn validate_state(state: &GameState) -> Result<()> {
    let size = state.board_size;
    let mut seen: HashMap<GridPosition, &str> = HashMap::new();

    for character in state.characters() {
        if character.health > character.max_health {
            return Err(BoardError::HealthExceedsMax {
                id: character.id.clone(),
                health: character.health,
                max_health: character.max_health,
            }
            .into());
        }
        let Some(pos) = character.position else {
            continue;
        };
        if !in_bounds(pos, size) {
            return Err(BoardError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: size.width,
                height: size.height,
            }
            .into());
        }
        if let Some(first) = seen.insert(pos, &character.id) {
            return Err(BoardError::TileConflict {
                x: pos.x,
                y: pos.y,
                first: first.to_string(),
                second: character.id.clone(),
            }
            .into());
        }
    }

    for tile in state.board.iter() {
        let expected = seen.get(&tile.position).copied();
        if tile.occupied_by.as_deref() != expected {
            return Err(BoardError::OccupancyMismatch {
                x: tile.position.x,
                y: tile.position.y,
            }
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetric() {
        let points = [
            GridPosition::new(0, 0),
            GridPosition::new(3, 4),
            GridPosition::new(7, 1),
            GridPosition::new(-1, 2),
        ];
        for a in points {
            for b in points {
                assert_eq!(distance(a, b), distance(b, a), "{:?} {:?}", a, b);
            }
        }
        assert_eq!(distance(points[0], points[1]), 7);
    }

    #[test]
    fn test_in_bounds() {
        let size = BoardSize {
            width: 3,
            height: 2,
        };
        let test_data = [
            ((0, 0), true),
            ((2, 1), true),
            ((3, 0), false),
            ((0, 2), false),
            ((-1, 0), false),
            ((0, -1), false),
        ];
        for ((x, y), expected) in test_data {
            assert_eq!(in_bounds(GridPosition::new(x, y), size), expected, "({x}, {y})");
        }
    }

    #[test]
    fn test_build_board() {
        let board = build_board(BoardSize {
            width: 4,
            height: 3,
        });
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        for tile in board.iter() {
            assert_eq!(tile, &Tile::new(tile.position));
        }
        assert_eq!(
            board.get_tile(GridPosition::new(3, 2)).map(|t| t.position),
            Some(GridPosition::new(3, 2))
        );
    }
}
