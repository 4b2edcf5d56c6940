//! 行動結算：移動（含吃子）、攻擊、技能與勝負判定
//!
//! 與選取狀態機相同，所有函式都是 `&GameState -> GameState`，前置條件不符時狀態不變。

use crate::domain::character::{AbilityEffect, Character};
use crate::domain::core_types::{ActionMode, GamePhase, GridPosition, HighlightKind, RuleSet};
use crate::domain::state::GameState;
use crate::logic::board::{character_at, sync_occupancy};
use crate::logic::combat::calculate_damage;
use crate::logic::movement::MovementRule;
use log::{debug, info, warn};

impl AbilityEffect {
    /// 技能效果的掛勾點，目前不改變狀態
    pub fn apply(&self, state: &GameState, caster: &Character, target: GridPosition) -> GameState {
        debug!(
            "{} 對 ({}, {}) 施放 {:?}（效果未結算）",
            caster.id, target.x, target.y, self
        );
        state.clone()
    }
}

/// 移動選取中的角色到已高亮的目標格
///
/// 目標必須同時是該角色在目前規則下的合法走法。
/// 西洋棋模式下目的地的敵人被吃掉；跳棋模式下跳過的敵人被吃掉。
pub fn move_selected_character(state: &GameState, target: GridPosition) -> GameState {
    move_selected_character_with(state.mode.movement_rule(), state, target)
}

/// 以指定的移動規則驗證並移動選取中的角色
pub fn move_selected_character_with(
    rule: &dyn MovementRule,
    state: &GameState,
    target: GridPosition,
) -> GameState {
    let Some(mover) = acting_character(state, HighlightKind::Move, target) else {
        return state.clone();
    };
    if mover.has_moved {
        warn!("角色 {} 本回合已移動", mover.id);
        return state.clone();
    }
    if !rule.valid_moves(mover, state).contains(&target) {
        warn!(
            "({}, {}) 不在角色 {} 的走法內",
            target.x, target.y, mover.id
        );
        return state.clone();
    }
    let Some(from) = mover.position else {
        return state.clone();
    };

    let captured = captured_position(state.mode, from, target)
        .and_then(|pos| character_at(pos, state.characters()))
        .filter(|other| other.is_enemy_of(mover))
        .map(|other| other.id.clone());
    let mover_id = mover.id.clone();

    let mut next = state.clone();
    if let Some(id) = captured {
        bench_character(&mut next, &id);
        info!("{mover_id} 吃掉了 {id}");
    }
    if let Some(character) = next.find_character_mut(&mover_id) {
        character.position = Some(target);
        character.has_moved = true;
    }
    debug!("{mover_id} 移動到 ({}, {})", target.x, target.y);

    finish_action(next)
}

/// 以選取中的角色攻擊已高亮的目標
///
/// 生命歸零的防守方移出棋盤。
pub fn attack_with_selected(
    state: &GameState,
    target: GridPosition,
    rng: &mut impl rand::Rng,
) -> GameState {
    let Some(attacker) = acting_character(state, HighlightKind::Attack, target) else {
        return state.clone();
    };
    if attacker.has_attacked {
        warn!("角色 {} 本回合已攻擊", attacker.id);
        return state.clone();
    }
    let defender = character_at(target, state.characters()).filter(|d| d.is_enemy_of(attacker));
    let Some(defender) = defender else {
        warn!("({}, {}) 沒有敵人", target.x, target.y);
        return state.clone();
    };

    let damage = calculate_damage(attacker, defender, rng);
    let attacker_id = attacker.id.clone();
    let defender_id = defender.id.clone();

    let mut next = state.clone();
    let mut defeated = false;
    if let Some(character) = next.find_character_mut(&defender_id) {
        character.health = (character.health - damage).max(0);
        defeated = character.health == 0;
        info!(
            "{attacker_id} 對 {defender_id} 造成 {damage} 傷害，剩餘 {}",
            character.health
        );
    }
    if defeated {
        bench_character(&mut next, &defender_id);
        info!("{defender_id} 被擊倒");
    }
    if let Some(character) = next.find_character_mut(&attacker_id) {
        character.has_attacked = true;
    }

    finish_action(next)
}

/// 對目標格施放選取中的技能並開始冷卻
pub fn use_selected_ability(state: &GameState, target: GridPosition) -> GameState {
    if !state.in_bounds(target) {
        warn!("({}, {}) 在棋盤外", target.x, target.y);
        return state.clone();
    }
    if state.action_mode != ActionMode::Ability {
        warn!("目前不是技能模式");
        return state.clone();
    }
    let Some(caster) = current_players_selection(state) else {
        return state.clone();
    };
    let Some(ability) = state
        .selected_ability_id
        .as_deref()
        .and_then(|id| caster.ability(id))
    else {
        warn!("沒有選取中的技能");
        return state.clone();
    };
    if !ability.is_ready() {
        warn!("技能 {} 冷卻中", ability.id);
        return state.clone();
    }

    let caster_id = caster.id.clone();
    let ability_id = ability.id.clone();
    let mut next = ability.effect.apply(state, caster, target);
    if let Some(ability) = next
        .find_character_mut(&caster_id)
        .and_then(|c| c.abilities.iter_mut().find(|a| a.id == ability_id))
    {
        ability.current_cooldown = ability.cooldown;
    }
    info!("{caster_id} 使用技能 {ability_id}");

    next.selected_ability_id = None;
    next.action_mode = ActionMode::None;
    next.board.clear_highlights();
    next
}

/// 只剩一位玩家有角色在棋盤上時結束遊戲
pub fn check_winner(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.players.len() < 2 || state.phase == GamePhase::GameOver {
        return next;
    }
    let mut standing = state.players.iter().filter(|p| p.has_characters_on_board());
    if let (Some(winner), None) = (standing.next(), standing.next()) {
        info!("遊戲結束，勝利者 {}", winner.id);
        next.phase = GamePhase::GameOver;
        next.winner = Some(winner.id.clone());
    }
    next
}

/// 目前玩家的選取角色
fn current_players_selection(state: &GameState) -> Option<&Character> {
    if state.phase == GamePhase::GameOver {
        warn!("遊戲已結束");
        return None;
    }
    let Some(character) = state.selected_character() else {
        warn!("沒有選取中的角色");
        return None;
    };
    if character.owner != state.current_player_id {
        warn!("角色 {} 不屬於目前玩家", character.id);
        return None;
    }
    Some(character)
}

/// 目前玩家的選取角色，且目標格已以 `kind` 高亮
fn acting_character(
    state: &GameState,
    kind: HighlightKind,
    target: GridPosition,
) -> Option<&Character> {
    let character = current_players_selection(state)?;
    let highlighted = state
        .board
        .get_tile(target)
        .is_some_and(|tile| tile.highlighted && tile.highlight == kind);
    if !highlighted {
        warn!("({}, {}) 不是合法的 {:?} 目標", target.x, target.y, kind);
        return None;
    }
    Some(character)
}

/// 移動會吃掉的位置
fn captured_position(mode: RuleSet, from: GridPosition, to: GridPosition) -> Option<GridPosition> {
    match mode {
        RuleSet::Chess => Some(to),
        RuleSet::Checkers if (to.x - from.x).abs() == 2 && (to.y - from.y).abs() == 2 => Some(
            GridPosition::new((from.x + to.x) / 2, (from.y + to.y) / 2),
        ),
        _ => None,
    }
}

fn bench_character(state: &mut GameState, id: &str) {
    if let Some(character) = state.find_character_mut(id) {
        character.health = 0;
        character.bench();
    }
}

/// 行動後清除高亮與行動模式，同步佔據並檢查勝負
fn finish_action(mut state: GameState) -> GameState {
    state.board.clear_highlights();
    state.action_mode = ActionMode::None;
    state.selected_ability_id = None;
    check_winner(&sync_occupancy(&state))
}
