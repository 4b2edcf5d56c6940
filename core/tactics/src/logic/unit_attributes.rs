//! 角色數值推導：職業基礎值 × 等級倍率

use crate::domain::alias::Stat;
use crate::domain::character::{Ability, AbilityEffect};
use crate::domain::core_types::{CharacterClass, Rank};

/// 職業基礎數值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStats {
    pub health: Stat,
    pub attack: Stat,
    pub defense: Stat,
    pub move_range: i32,
    pub attack_range: i32,
}

/// 未對應職業時的預設值
const DEFAULT_STATS: BaseStats = BaseStats {
    health: 100,
    attack: 10,
    defense: 5,
    move_range: 2,
    attack_range: 1,
};

/// 計算出的角色數值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatedStats {
    pub max_health: Stat,
    pub attack: Stat,
    pub defense: Stat,
    pub move_range: i32,
    pub attack_range: i32,
}

pub fn base_stats(class: CharacterClass) -> BaseStats {
    match class {
        CharacterClass::Hunter => BaseStats {
            attack: 12,
            move_range: 3,
            ..DEFAULT_STATS
        },
        CharacterClass::Tank => BaseStats {
            health: 150,
            defense: 10,
            move_range: 1,
            ..DEFAULT_STATS
        },
        CharacterClass::Mage => BaseStats {
            health: 80,
            attack: 15,
            defense: 3,
            move_range: 2,
            attack_range: 3,
        },
        CharacterClass::Assassin => BaseStats {
            health: 90,
            attack: 14,
            defense: 4,
            move_range: 4,
            ..DEFAULT_STATS
        },
        CharacterClass::Monster => BaseStats {
            health: 120,
            attack: 11,
            defense: 7,
            move_range: 2,
            ..DEFAULT_STATS
        },
        CharacterClass::Soldier => DEFAULT_STATS,
    }
}

/// 等級倍率（百分比）
pub fn rank_multiplier(rank: Rank) -> Stat {
    match rank {
        Rank::E => 80,
        Rank::D => 90,
        Rank::C => 100,
        Rank::B => 110,
        Rank::A => 120,
        Rank::S => 150,
    }
}

/// 以等級倍率縮放生命、攻擊、防禦並向下取整；移動與攻擊範圍不受影響
pub fn calculate_stats(class: CharacterClass, rank: Rank) -> CalculatedStats {
    let base = base_stats(class);
    let multiplier = rank_multiplier(rank);
    let scale = |value: Stat| (value * multiplier) / 100;
    CalculatedStats {
        max_health: scale(base.health),
        attack: scale(base.attack),
        defense: scale(base.defense),
        move_range: base.move_range,
        attack_range: base.attack_range,
    }
}

/// 技能目錄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityKind {
    Arise,
    DomainExpansion,
    HealingTouch,
    Charge,
    BerserkerRage,
}

impl AbilityKind {
    /// 建立冷卻歸零的技能
    pub fn build(self) -> Ability {
        let (id, name, description, cooldown, effect) = match self {
            AbilityKind::Arise => (
                "arise",
                "Arise",
                "Revive a fallen monster to fight for you",
                3,
                AbilityEffect::Arise,
            ),
            AbilityKind::DomainExpansion => (
                "domainExpansion",
                "Domain Expansion",
                "Deal damage to all enemies in a 2-tile radius",
                2,
                AbilityEffect::DomainExpansion { radius: 2 },
            ),
            AbilityKind::HealingTouch => (
                "healingTouch",
                "Healing Touch",
                "Restore 30% HP to target ally",
                2,
                AbilityEffect::HealingTouch { percent: 30 },
            ),
            AbilityKind::Charge => (
                "charge",
                "Charge",
                "Move up to 3 spaces and attack",
                2,
                AbilityEffect::Charge { distance: 3 },
            ),
            AbilityKind::BerserkerRage => (
                "berserkerRage",
                "Berserker Rage",
                "Double attack but reduce defense by half for 2 turns",
                3,
                AbilityEffect::BerserkerRage { turns: 2 },
            ),
        };
        Ability {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            cooldown,
            current_cooldown: 0,
            effect,
        }
    }
}

/// 職業的起始技能
pub fn starting_abilities(class: CharacterClass) -> Vec<Ability> {
    let kinds: &[AbilityKind] = match class {
        CharacterClass::Hunter => &[AbilityKind::DomainExpansion],
        CharacterClass::Tank => &[AbilityKind::Charge],
        CharacterClass::Mage => &[AbilityKind::HealingTouch],
        CharacterClass::Assassin => &[AbilityKind::BerserkerRage],
        CharacterClass::Monster | CharacterClass::Soldier => &[],
    };
    kinds.iter().map(|kind| kind.build()).collect()
}
