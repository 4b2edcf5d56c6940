//! 攻擊範圍與傷害公式

use crate::domain::character::Character;
use crate::domain::constants::{DAMAGE_ROLL_MIN, DAMAGE_ROLL_SPAN, S_RANK_DAMAGE_BONUS};
use crate::domain::core_types::{GridPosition, Rank};
use crate::domain::state::GameState;
use crate::logic::board::distance;
use std::collections::BTreeSet;

/// 攻擊範圍（曼哈頓距離）內有敵方角色的位置
pub fn valid_attack_positions(character: &Character, state: &GameState) -> BTreeSet<GridPosition> {
    let Some(from) = character.position else {
        return BTreeSet::new();
    };
    state
        .characters()
        .filter(|other| other.is_enemy_of(character))
        .filter_map(|other| other.position)
        .filter(|pos| state.in_bounds(*pos))
        .filter(|pos| distance(from, *pos) <= character.attack_range)
        .collect()
}

/// 傷害公式
///
/// `(攻擊 - 防禦 / 2) × [0.8, 1.2)` 向下取整，最少 1；S 級攻擊者再 ×1.2 向下取整。
pub fn calculate_damage(
    attacker: &Character,
    defender: &Character,
    rng: &mut impl rand::Rng,
) -> i32 {
    let roll = DAMAGE_ROLL_MIN + rng.random::<f64>() * DAMAGE_ROLL_SPAN;
    let raw = (attacker.attack as f64 - defender.defense as f64 / 2.0) * roll;
    let damage = (raw.floor() as i32).max(1);
    if attacker.rank == Rank::S {
        damage * S_RANK_DAMAGE_BONUS / 100
    } else {
        damage
    }
}
