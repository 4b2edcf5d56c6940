//! 回合制戰棋核心
//!
//! 包含：
//! - 三套移動規則（一般、西洋棋、跳棋）
//! - 角色工廠與棋盤模式布局
//! - 回合與選取狀態機、行動結算
//! - 不可變的遊戲狀態，以及設定載入與存檔介面

pub mod domain;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;
pub mod store;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
