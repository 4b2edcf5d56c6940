//! 角色、技能與玩家資料結構
//!
//! 僅負責資料與簡單查詢，不含數值推導（見 `logic::unit_attributes`）或行動判定。

use crate::domain::alias::{AbilityId, CharacterId, PlayerId, Stat};
use crate::domain::core_types::{CharacterClass, GridPosition, Rank};
use serde::{Deserialize, Serialize};

/// 技能效果種類與參數
///
/// 效果尚未實作，由之後的戰鬥結算元件解讀。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// 復活倒下的怪物為己方作戰
    Arise,
    /// 對半徑內所有敵人造成傷害
    DomainExpansion { radius: i32 },
    /// 回復目標友軍最大生命的百分比
    HealingTouch { percent: i32 },
    /// 移動數格後攻擊
    Charge { distance: i32 },
    /// 攻擊加倍、防禦減半，持續數回合
    BerserkerRage { turns: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub description: String,
    pub cooldown: u32,
    pub current_cooldown: u32,
    pub effect: AbilityEffect,
}

impl Ability {
    pub fn is_ready(&self) -> bool {
        self.current_cooldown == 0
    }

    /// 冷卻減一，最低為 0
    pub fn tick_cooldown(&mut self) {
        self.current_cooldown = self.current_cooldown.saturating_sub(1);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: CharacterClass,
    pub rank: Rank,
    pub health: Stat,
    pub max_health: Stat,
    pub attack: Stat,
    pub defense: Stat,
    pub move_range: i32,
    pub attack_range: i32,
    pub abilities: Vec<Ability>,
    /// `None` 表示不在棋盤上（布局容納不下時的後備角色）
    pub position: Option<GridPosition>,
    pub model_kind: String,
    pub owner: PlayerId,
    pub is_selected: bool,
    pub has_moved: bool,
    pub has_attacked: bool,
}

impl Character {
    pub fn is_on_board(&self) -> bool {
        self.position.is_some()
    }

    pub fn is_at(&self, pos: GridPosition) -> bool {
        self.position == Some(pos)
    }

    pub fn is_enemy_of(&self, other: &Character) -> bool {
        self.owner != other.owner
    }

    pub fn ability(&self, ability_id: &str) -> Option<&Ability> {
        self.abilities.iter().find(|a| a.id == ability_id)
    }

    /// 移出棋盤（被吃掉或擊倒）
    pub fn bench(&mut self) {
        self.position = None;
        self.is_selected = false;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub characters: Vec<Character>,
    pub is_current_turn: bool,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            characters: Vec::new(),
            is_current_turn: false,
        }
    }

    /// 是否仍有角色在棋盤上
    pub fn has_characters_on_board(&self) -> bool {
        self.characters.iter().any(Character::is_on_board)
    }
}
