//! 錯誤處理系統
//!
//! 狀態轉換函式本身不回傳錯誤（前置條件不符時保持狀態不變），
//! 錯誤只來自建立遊戲、布局、設定載入、不變量檢查與存檔。

use crate::domain::alias::{CharacterId, Coord};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 棋盤與遊戲狀態錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置超出棋盤邊界: ({x}, {y}) 邊界 ({width}, {height})")]
    OutOfBounds {
        x: Coord,
        y: Coord,
        width: Coord,
        height: Coord,
    },
    #[error("兩個角色佔據同一格 ({x}, {y}): {first} 與 {second}")]
    TileConflict {
        x: Coord,
        y: Coord,
        first: CharacterId,
        second: CharacterId,
    },
    #[error("格子 ({x}, {y}) 的佔據者與角色位置不一致")]
    OccupancyMismatch { x: Coord, y: Coord },
    #[error("{layout} 布局不支援棋盤大小 ({width}, {height})")]
    UnsupportedBoardSize {
        layout: &'static str,
        width: Coord,
        height: Coord,
    },
    #[error("角色 {id} 生命 {health} 超過上限 {max_health}")]
    HealthExceedsMax {
        id: CharacterId,
        health: i32,
        max_health: i32,
    },
    #[error("至少需要兩位玩家，目前 {count} 位")]
    NotEnoughPlayers { count: usize },
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{format} 序列化失敗: {reason}")]
    SerializeError { format: String, reason: String },
}

/// 存檔協作者錯誤
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("沒有已登入的使用者")]
    NoAuthenticatedUser,
    #[error("存檔後端錯誤: {0}")]
    Backend(String),
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        let msg = format!("{} [{}:{}]", context.into(), loc.file(), loc.line());
        self.contexts.push(msg);
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        for ctx in &self.contexts {
            write!(f, "\n  {}", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// Result 擴展 trait，用於添加錯誤上下文
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Result<T> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(e.context(context)),
        }
    }
}
