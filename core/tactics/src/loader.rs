//! 設定與棋盤載入器

use crate::domain::alias::Coord;
use crate::domain::core_types::{BoardSize, GridPosition};
use crate::error::{LoadError, Result};
use crate::loader_schema::GameConfig;
use log::debug;
use std::collections::HashMap;

/// 從 TOML 字串載入對局設定，未填的欄位使用預設值
pub fn load_config(config_toml: &str) -> Result<GameConfig> {
    let config: GameConfig =
        toml::from_str(config_toml).map_err(|e| LoadError::DeserializeError {
            format: "game.toml".to_string(),
            reason: e.to_string(),
        })?;
    debug!(
        "載入設定：{}x{} {} 模式，{} 位玩家",
        config.board_width,
        config.board_height,
        config.mode,
        config.players.len()
    );
    Ok(config)
}

/// 從 ASCII 格式載入棋盤
///
/// ASCII 格式：每行用空格分隔的符號
/// - `.` = 空格子
/// - 其他字符串（`A`、`E` 等）= 標記位置
/// - 相同的標記會全部收集成 Vec（列優先順序）
///
/// 第一行是 y = 0。每一行的符號數必須相同。
///
/// 例如：
/// ```text
/// A . .
/// . . E
/// . . .
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<(BoardSize, HashMap<String, Vec<GridPosition>>)> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    };

    let width: Coord = first
        .split_whitespace()
        .count()
        .try_into()
        .map_err(|_| LoadError::ParseError("棋盤寬度過大".to_string()))?;
    let height: Coord = lines
        .len()
        .try_into()
        .map_err(|_| LoadError::ParseError("棋盤高度過大".to_string()))?;

    let mut markers: HashMap<String, Vec<GridPosition>> = HashMap::new();
    for (y, line) in lines.iter().enumerate() {
        let cells: Vec<&str> = line.split_whitespace().collect();
        if cells.len() as Coord != width {
            return Err(LoadError::ParseError(format!(
                "第 {y} 行有 {} 格，預期 {width} 格",
                cells.len()
            ))
            .into());
        }
        for (x, cell) in cells.into_iter().enumerate() {
            if cell != "." {
                markers
                    .entry(cell.to_string())
                    .or_default()
                    .push(GridPosition::new(x as Coord, y as Coord));
            }
        }
    }

    Ok((BoardSize { width, height }, markers))
}
