//! 領域資料（型別、常數、別名），不含業務邏輯

pub mod alias;
pub mod character;
pub mod constants;
pub mod core_types;
pub mod state;
