//! 存檔協作者
//!
//! 遊戲狀態以 JSON 快照保存；後端只需實作 [`GameStore`]。

use crate::domain::state::GameState;
use crate::error::{Context, LoadError, Result, StoreError};
use crate::loader_schema::GameConfig;
use crate::logic::board::validate_state;
use crate::logic::game::new_game;
use crate::logic::id_generator::generate_unique_id;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const SNAPSHOT_FORMAT: &str = "game_state.json";

/// 已保存的對局
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub id: String,
    pub user_id: String,
    pub faction: String,
    pub game_data: GameState,
    pub saved_at: DateTime<Utc>,
}

/// 存檔後端介面，所有操作都屬於目前登入的使用者
pub trait GameStore {
    fn save(&mut self, faction: &str, state: &GameState) -> Result<SavedGame>;
    /// 最近一次存檔
    fn latest(&self) -> Result<Option<SavedGame>>;
    /// 所有存檔，新的在前
    fn list(&self) -> Result<Vec<SavedGame>>;
    /// 回傳是否有刪除
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// 序列化遊戲狀態
pub fn to_json(state: &GameState) -> Result<String> {
    serde_json::to_string(state).map_err(|e| {
        LoadError::SerializeError {
            format: SNAPSHOT_FORMAT.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// 反序列化遊戲狀態
pub fn from_json(json: &str) -> Result<GameState> {
    serde_json::from_str(json).map_err(|e| {
        LoadError::DeserializeError {
            format: SNAPSHOT_FORMAT.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// 讀取最近的存檔並檢查其不變量；沒有存檔時依設定開新局
pub fn load_or_new_game(store: &impl GameStore, config: &GameConfig) -> Result<GameState> {
    match store.latest().context("讀取最近存檔")? {
        Some(saved) => {
            validate_state(&saved.game_data).context(format!("檢查存檔 {}", saved.id))?;
            info!("載入存檔 {}（{}）", saved.id, saved.saved_at);
            Ok(saved.game_data)
        }
        None => new_game(config),
    }
}

/// 存在記憶體中的紀錄，快照以 JSON 字串保存
#[derive(Debug, Clone)]
struct Record {
    id: String,
    user_id: String,
    faction: String,
    snapshot: String,
    saved_at: DateTime<Utc>,
}

impl Record {
    fn to_saved_game(&self) -> Result<SavedGame> {
        Ok(SavedGame {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            faction: self.faction.clone(),
            game_data: from_json(&self.snapshot).context(format!("讀取存檔 {}", self.id))?,
            saved_at: self.saved_at,
        })
    }
}

/// 記憶體存檔後端
///
/// 沒有登入使用者時所有操作都回傳 [`StoreError::NoAuthenticatedUser`]。
#[derive(Debug, Default)]
pub struct MemoryStore {
    user_id: Option<String>,
    /// 依保存順序排列
    records: Vec<Record>,
    used_ids: HashSet<String>,
}

impl MemoryStore {
    pub fn new(user_id: Option<&str>) -> Self {
        Self {
            user_id: user_id.map(str::to_string),
            ..Self::default()
        }
    }

    /// 切換登入的使用者（`None` 為登出）
    pub fn set_user(&mut self, user_id: Option<&str>) {
        self.user_id = user_id.map(str::to_string);
    }

    fn user(&self) -> Result<&str> {
        self.user_id
            .as_deref()
            .ok_or_else(|| StoreError::NoAuthenticatedUser.into())
    }

    fn own_records<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Record> {
        self.records.iter().rev().filter(move |r| r.user_id == user)
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, faction: &str, state: &GameState) -> Result<SavedGame> {
        let user_id = self.user()?.to_string();
        let record = Record {
            id: generate_unique_id(&mut self.used_ids),
            user_id,
            faction: faction.to_string(),
            snapshot: to_json(state)?,
            saved_at: Utc::now(),
        };
        debug!("存檔 {}（使用者 {}）", record.id, record.user_id);
        let saved = SavedGame {
            id: record.id.clone(),
            user_id: record.user_id.clone(),
            faction: record.faction.clone(),
            game_data: state.clone(),
            saved_at: record.saved_at,
        };
        self.records.push(record);
        Ok(saved)
    }

    fn latest(&self) -> Result<Option<SavedGame>> {
        let user = self.user()?;
        self.own_records(user)
            .next()
            .map(Record::to_saved_game)
            .transpose()
    }

    fn list(&self) -> Result<Vec<SavedGame>> {
        let user = self.user()?;
        self.own_records(user).map(Record::to_saved_game).collect()
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let user = self.user()?.to_string();
        let before = self.records.len();
        self.records.retain(|r| !(r.id == id && r.user_id == user));
        let deleted = self.records.len() != before;
        if deleted {
            debug!("刪除存檔 {id}");
        }
        Ok(deleted)
    }
}
