//! 基本資料類型定義

use crate::domain::alias::{CharacterId, Coord};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// ============================================================================
// 座標與棋盤
// ============================================================================

/// 棋盤位置（以棋盤左上角為原點）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPosition {
    pub x: Coord,
    pub y: Coord,
}

impl GridPosition {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// 平移後的位置（不檢查邊界）
    pub const fn offset(self, dx: Coord, dy: Coord) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// 棋盤尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width: Coord,
    pub height: Coord,
}

/// 地形類型
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TerrainType {
    #[default]
    Normal,
    Blocked,
    Buff,
    Debuff,
}

/// 高亮種類
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    #[default]
    None,
    Move,
    Attack,
    Ability,
}

/// 棋盤格
///
/// 只有狀態轉換函式會改寫 `occupied_by` 與高亮欄位，移動規則只讀取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub position: GridPosition,
    pub terrain: TerrainType,
    pub occupied_by: Option<CharacterId>,
    pub highlighted: bool,
    pub highlight: HighlightKind,
}

impl Tile {
    pub fn new(position: GridPosition) -> Self {
        Self {
            position,
            terrain: TerrainType::Normal,
            occupied_by: None,
            highlighted: false,
            highlight: HighlightKind::None,
        }
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = false;
        self.highlight = HighlightKind::None;
    }

    pub fn set_highlight(&mut self, kind: HighlightKind) {
        self.highlighted = kind != HighlightKind::None;
        self.highlight = kind;
    }
}

/// 二維棋盤，`tiles[y][x]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub tiles: Vec<Vec<Tile>>,
}

impl Board {
    pub fn width(&self) -> Coord {
        self.tiles.first().map_or(0, |row| row.len() as Coord)
    }

    pub fn height(&self) -> Coord {
        self.tiles.len() as Coord
    }

    pub fn get_tile(&self, pos: GridPosition) -> Option<&Tile> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        self.tiles.get(y)?.get(x)
    }

    pub fn get_tile_mut(&mut self, pos: GridPosition) -> Option<&mut Tile> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        self.tiles.get_mut(y)?.get_mut(x)
    }

    /// 依列優先順序走訪所有格子
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut().flatten()
    }

    /// 目前被高亮的位置
    pub fn highlighted_positions(&self, kind: HighlightKind) -> Vec<GridPosition> {
        self.iter()
            .filter(|tile| tile.highlighted && tile.highlight == kind)
            .map(|tile| tile.position)
            .collect()
    }

    pub fn clear_highlights(&mut self) {
        self.iter_mut().for_each(Tile::clear_highlight);
    }

    pub fn has_highlights(&self) -> bool {
        self.iter().any(|tile| tile.highlighted)
    }
}

// ============================================================================
// 角色分類
// ============================================================================

/// 職業
///
/// `Soldier` 不是角色職業，只在棋盤模式布局中作為通用兵種使用。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum CharacterClass {
    Hunter,
    Tank,
    Mage,
    Assassin,
    Monster,
    Soldier,
}

/// 等級（E 最低，S 最高）
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Rank {
    E,
    D,
    #[default]
    C,
    B,
    A,
    S,
}

// ============================================================================
// 遊戲流程列舉
// ============================================================================

/// 遊戲階段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    GameOver,
}

/// 目前的行動模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionMode {
    #[default]
    None,
    Move,
    Attack,
    Ability,
}

/// 規則集：決定使用哪一套移動規則與起始布局
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleSet {
    #[default]
    Storyline,
    Chess,
    Checkers,
}
