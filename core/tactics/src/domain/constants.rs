//! 遊戲常數定義

use crate::domain::alias::{Coord, TurnNumber};
use crate::domain::core_types::BoardSize;

/// 預設棋盤大小
pub const DEFAULT_BOARD_SIZE: BoardSize = BoardSize {
    width: 8,
    height: 8,
};

/// 西洋棋布局要求的棋盤寬度
pub const CHESS_BOARD_WIDTH: Coord = 8;

/// 跳棋每方佔用的列數
pub const CHECKERS_ROWS_PER_SIDE: Coord = 3;

/// 第一回合
pub const FIRST_TURN: TurnNumber = 1;

/// 每位玩家的預設陣容人數
pub const PRESET_ROSTER_SIZE: usize = 5;

/// 主角名稱，S 級時額外獲得「Arise」
pub const PROTAGONIST_NAME: &str = "Sung Jin-Woo";

/// 預設陣營名稱
pub const DEFAULT_FACTION: &str = "S-RANK HUNTERS";

/// 角色 ID 長度
pub const CHARACTER_ID_LEN: usize = 13;

/// 傷害浮動範圍下限（百分比）
pub const DAMAGE_ROLL_MIN: f64 = 0.8;

/// 傷害浮動範圍寬度
pub const DAMAGE_ROLL_SPAN: f64 = 0.4;

/// S 級攻擊者的傷害加成（百分比）
pub const S_RANK_DAMAGE_BONUS: i32 = 120;

/// 開局所需的最少玩家數
pub const MIN_PLAYERS: usize = 2;
