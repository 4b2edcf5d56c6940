//! 回合與選取狀態機
//!
//! 狀態：未選取 → 已選取（行動模式 None）→ 待行動（移動/攻擊/技能，棋盤已高亮）。
//! 所有函式都是 `&GameState -> GameState`；前置條件不符時回傳內容不變的新狀態。

use crate::domain::character::Character;
use crate::domain::core_types::{ActionMode, GridPosition, HighlightKind};
use crate::domain::state::GameState;
use crate::logic::combat::valid_attack_positions;
use crate::logic::movement::MovementRule;
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// 選取角色（切換語意）
///
/// - 再次選取同一角色：取消選取，清除行動模式與高亮
/// - 選取不同角色：取代選取並清除所有高亮，行動模式回到 None
/// - 不存在的角色 ID：不做任何事
pub fn select_character(state: &GameState, character_id: Option<&str>) -> GameState {
    let mut next = state.clone();

    if state.selected_character_id.as_deref() == character_id {
        debug!("取消選取角色 {:?}", character_id);
        next.selected_character_id = None;
    } else {
        if let Some(id) = character_id {
            if state.find_character(id).is_none() {
                warn!("選取不存在的角色 {id}，忽略");
                return next;
            }
        }
        debug!("選取角色 {:?}", character_id);
        next.selected_character_id = character_id.map(str::to_string);
    }

    next.action_mode = ActionMode::None;
    next.selected_ability_id = None;
    next.board.clear_highlights();
    sync_selection_flags(&mut next);
    next
}

/// 以規則集對應的移動規則高亮合法移動
pub fn highlight_valid_moves(character: &Character, state: &GameState) -> GameState {
    highlight_valid_moves_with(state.mode.movement_rule(), character, state)
}

/// 以指定的移動規則高亮合法移動，行動模式設為 Move
pub fn highlight_valid_moves_with(
    rule: &dyn MovementRule,
    character: &Character,
    state: &GameState,
) -> GameState {
    let moves = rule.valid_moves(character, state);
    debug!("角色 {} 有 {} 個合法移動", character.id, moves.len());
    apply_highlights(state, &moves, ActionMode::Move, HighlightKind::Move)
}

/// 對目前選取的角色高亮合法移動；沒有選取或角色不存在時不做任何事
pub fn highlight_selected_moves(state: &GameState) -> GameState {
    match state.selected_character() {
        Some(character) => highlight_valid_moves(character, state),
        None => {
            warn!("沒有選取中的角色，無法顯示移動範圍");
            state.clone()
        }
    }
}

/// 高亮攻擊範圍內的敵人，行動模式設為 Attack
pub fn highlight_valid_attacks(character: &Character, state: &GameState) -> GameState {
    let targets = valid_attack_positions(character, state);
    debug!("角色 {} 有 {} 個攻擊目標", character.id, targets.len());
    apply_highlights(state, &targets, ActionMode::Attack, HighlightKind::Attack)
}

/// 對目前選取的角色高亮攻擊目標
pub fn highlight_selected_attacks(state: &GameState) -> GameState {
    match state.selected_character() {
        Some(character) => highlight_valid_attacks(character, state),
        None => {
            warn!("沒有選取中的角色，無法顯示攻擊範圍");
            state.clone()
        }
    }
}

/// 切換選取角色的技能
///
/// 技能必須屬於選取中的角色且已冷卻完畢；再次選取同一技能會取消。
pub fn select_ability(state: &GameState, ability_id: &str) -> GameState {
    let mut next = state.clone();
    let Some(character) = state.selected_character() else {
        warn!("沒有選取中的角色，無法選取技能 {ability_id}");
        return next;
    };
    let Some(ability) = character.ability(ability_id) else {
        warn!("角色 {} 沒有技能 {ability_id}", character.id);
        return next;
    };

    next.board.clear_highlights();
    if state.selected_ability_id.as_deref() == Some(ability_id) {
        next.selected_ability_id = None;
        next.action_mode = ActionMode::None;
    } else if ability.is_ready() {
        next.selected_ability_id = Some(ability.id.clone());
        next.action_mode = ActionMode::Ability;
    } else {
        debug!("技能 {ability_id} 冷卻中（剩 {}）", ability.current_cooldown);
        return state.clone();
    }
    next
}

/// 結束回合
///
/// - 輪到下一位玩家；繞回第一位玩家時回合數加一
/// - 只重置下一位玩家角色的已移動/已攻擊旗標，其他玩家保留
/// - 所有角色的技能冷卻減一（最低 0）
/// - 清除選取、行動模式與所有高亮
pub fn end_turn(state: &GameState) -> GameState {
    let mut next = state.clone();
    if state.players.is_empty() {
        warn!("沒有玩家，無法結束回合");
        return next;
    }

    let next_index = match state.player_index(&state.current_player_id) {
        Some(index) => (index + 1) % state.players.len(),
        None => {
            warn!("目前玩家 {} 不在玩家列表中", state.current_player_id);
            0
        }
    };

    for (index, player) in next.players.iter_mut().enumerate() {
        let is_next = index == next_index;
        player.is_current_turn = is_next;
        for character in &mut player.characters {
            if is_next {
                character.has_moved = false;
                character.has_attacked = false;
            }
            character.is_selected = false;
            character.abilities.iter_mut().for_each(|a| a.tick_cooldown());
        }
    }

    next.current_player_id = next.players[next_index].id.clone();
    if next_index == 0 {
        next.turn += 1;
    }
    next.selected_character_id = None;
    next.selected_ability_id = None;
    next.action_mode = ActionMode::None;
    next.board.clear_highlights();

    info!("第 {} 回合，輪到 {}", next.turn, next.current_player_id);
    next
}

/// 清除舊高亮、設定行動模式，並高亮棋盤內的位置
fn apply_highlights(
    state: &GameState,
    positions: &BTreeSet<GridPosition>,
    mode: ActionMode,
    kind: HighlightKind,
) -> GameState {
    let mut next = state.clone();
    next.board.clear_highlights();
    next.action_mode = mode;
    for pos in positions.iter().filter(|pos| state.in_bounds(**pos)) {
        if let Some(tile) = next.board.get_tile_mut(*pos) {
            tile.set_highlight(kind);
        }
    }
    next
}

/// 讓角色的 `is_selected` 與 `selected_character_id` 一致
fn sync_selection_flags(state: &mut GameState) {
    let selected = state.selected_character_id.clone();
    for character in state.characters_mut() {
        character.is_selected = selected.as_deref() == Some(character.id.as_str());
    }
}
