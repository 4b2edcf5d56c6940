//! 回合與選取狀態機測試

use tactics::domain::character::Player;
use tactics::domain::core_types::{
    ActionMode, BoardSize, CharacterClass, GridPosition, HighlightKind, Rank, RuleSet,
};
use tactics::domain::state::GameState;
use tactics::logic::game::create_initial_game_state;
use tactics::logic::movement::{ChessMovement, MoveSet, MovementRule};
use tactics::logic::turn::{
    end_turn, highlight_selected_attacks, highlight_selected_moves, highlight_valid_moves,
    highlight_valid_moves_with, select_ability, select_character,
};
use tactics::test_helpers::{id_at, ScenarioBuilder, FIRST_PLAYER, SECOND_PLAYER};

const DUEL: &str = "
    . . . . .
    . A . . .
    . . . . .
    . . . E .
    . . . . .
";

fn duel(mode: RuleSet) -> (GameState, String, String) {
    let (state, markers) = ScenarioBuilder::from_ascii(DUEL)
        .mode(mode)
        .piece("A", CharacterClass::Hunter, Rank::S, FIRST_PLAYER)
        .piece("E", CharacterClass::Mage, Rank::C, SECOND_PLAYER)
        .build()
        .unwrap();
    let a = id_at(&state, markers["A"][0]).unwrap();
    let e = id_at(&state, markers["E"][0]).unwrap();
    (state, a, e)
}

#[test]
fn test_select_twice_deselects_and_clears() {
    let (state, a, _) = duel(RuleSet::Storyline);

    let selected = select_character(&state, Some(&a));
    assert_eq!(selected.selected_character_id.as_deref(), Some(a.as_str()));
    assert!(selected.find_character(&a).unwrap().is_selected);

    let highlighted = highlight_selected_moves(&selected);
    assert!(highlighted.board.has_highlights());
    assert_eq!(highlighted.action_mode, ActionMode::Move);

    let deselected = select_character(&highlighted, Some(&a));
    assert_eq!(deselected.selected_character_id, None);
    assert_eq!(deselected.action_mode, ActionMode::None);
    assert!(!deselected.board.has_highlights());
    assert!(!deselected.find_character(&a).unwrap().is_selected);
}

#[test]
fn test_select_other_clears_stale_highlights() {
    let (state, a, e) = duel(RuleSet::Storyline);

    let state = highlight_selected_moves(&select_character(&state, Some(&a)));
    assert!(state.board.has_highlights());

    let switched = select_character(&state, Some(&e));
    assert_eq!(switched.selected_character_id.as_deref(), Some(e.as_str()));
    assert_eq!(switched.action_mode, ActionMode::None);
    assert!(!switched.board.has_highlights());
    assert!(!switched.find_character(&a).unwrap().is_selected);
    assert!(switched.find_character(&e).unwrap().is_selected);
}

#[test]
fn test_select_unknown_id_is_noop() {
    let (state, a, _) = duel(RuleSet::Storyline);
    let state = select_character(&state, Some(&a));

    let next = select_character(&state, Some("no-such-id"));
    assert_eq!(next, state);
}

#[test]
fn test_transitions_do_not_touch_input() {
    let (state, a, _) = duel(RuleSet::Chess);
    let before = state.clone();

    let _ = end_turn(&highlight_selected_moves(&select_character(&state, Some(&a))));
    assert_eq!(state, before);
}

#[test]
fn test_highlight_valid_moves_uses_rule_set() {
    let (state, a, _) = duel(RuleSet::Chess);
    let hunter = state.find_character(&a).unwrap();

    let next = highlight_valid_moves(hunter, &state);
    let expected = ChessMovement.valid_moves(hunter, &state);
    let highlighted: MoveSet = next
        .board
        .highlighted_positions(HighlightKind::Move)
        .into_iter()
        .collect();
    assert_eq!(highlighted, expected);
    assert_eq!(next.action_mode, ActionMode::Move);
    // 后的走法可以沿斜線吃到 (3, 3) 的敵人
    assert!(expected.contains(&GridPosition::new(3, 3)));

    let injected = highlight_valid_moves_with(&ChessMovement, hunter, &state);
    assert_eq!(injected.board, next.board);
}

#[test]
fn test_highlight_replaces_previous_highlights() {
    let (state, a, _) = duel(RuleSet::Storyline);
    let state = select_character(&state, Some(&a));

    let moves = highlight_selected_moves(&state);
    let attacks = highlight_selected_attacks(&moves);
    assert_eq!(attacks.action_mode, ActionMode::Attack);
    assert!(attacks.board.highlighted_positions(HighlightKind::Move).is_empty());
}

#[test]
fn test_highlight_without_selection_is_noop() {
    let (state, _, _) = duel(RuleSet::Storyline);
    assert_eq!(highlight_selected_moves(&state), state);
    assert_eq!(highlight_selected_attacks(&state), state);
}

#[test]
fn test_end_turn_round_robin() {
    let players = vec![
        Player::new("a", "A"),
        Player::new("b", "B"),
        Player::new("c", "C"),
    ];
    let size = BoardSize {
        width: 4,
        height: 4,
    };
    let state = create_initial_game_state(players, size, RuleSet::Storyline);
    assert_eq!(state.turn, 1);

    let mut next = state.clone();
    let mut order = Vec::new();
    for _ in 0..3 {
        next = end_turn(&next);
        order.push(next.current_player_id.clone());
    }
    assert_eq!(order, vec!["b", "c", "a"]);
    assert_eq!(next.turn, state.turn + 1);
    assert_eq!(next.current_player_id, state.current_player_id);
    assert!(next.players[0].is_current_turn);
    assert!(!next.players[1].is_current_turn);
}

#[test]
fn test_end_turn_resets_only_next_players_flags() {
    let (state, a, e) = duel(RuleSet::Storyline);
    let mut state = select_character(&state, Some(&a));
    for character in state.characters_mut() {
        character.has_moved = true;
        character.has_attacked = true;
    }

    let next = end_turn(&state);
    assert_eq!(next.current_player_id, SECOND_PLAYER);
    let mine = next.find_character(&a).unwrap();
    let theirs = next.find_character(&e).unwrap();
    assert!(mine.has_moved && mine.has_attacked);
    assert!(!theirs.has_moved && !theirs.has_attacked);

    assert_eq!(next.selected_character_id, None);
    assert_eq!(next.action_mode, ActionMode::None);
    assert!(!next.board.has_highlights());
    assert!(!mine.is_selected);
}

#[test]
fn test_end_turn_ticks_every_cooldown() {
    // 冷卻對所有玩家同時倒數，不論輪到誰
    let (mut state, a, e) = duel(RuleSet::Storyline);
    if let Some(hunter) = state.find_character_mut(&a) {
        hunter.abilities[0].current_cooldown = 3;
    }
    if let Some(mage) = state.find_character_mut(&e) {
        mage.abilities[0].current_cooldown = 1;
    }

    let once = end_turn(&state);
    let twice = end_turn(&once);
    assert_eq!(twice.find_character(&a).unwrap().abilities[0].current_cooldown, 1);
    assert_eq!(twice.find_character(&e).unwrap().abilities[0].current_cooldown, 0);
}

#[test]
fn test_end_turn_edge_cases() {
    let size = BoardSize {
        width: 2,
        height: 2,
    };
    let empty = create_initial_game_state(Vec::new(), size, RuleSet::Storyline);
    assert_eq!(end_turn(&empty), empty);

    let mut lost = create_initial_game_state(
        vec![Player::new("a", "A"), Player::new("b", "B")],
        size,
        RuleSet::Storyline,
    );
    lost.current_player_id = "ghost".to_string();
    let next = end_turn(&lost);
    assert_eq!(next.current_player_id, "a");
    assert_eq!(next.turn, lost.turn + 1);
}

#[test]
fn test_select_ability_toggle_and_cooldown() {
    let (state, a, _) = duel(RuleSet::Storyline);

    // 沒有選取角色時不做任何事
    assert_eq!(select_ability(&state, "domainExpansion"), state);

    let state = select_character(&state, Some(&a));
    let armed = select_ability(&state, "domainExpansion");
    assert_eq!(armed.action_mode, ActionMode::Ability);
    assert_eq!(armed.selected_ability_id.as_deref(), Some("domainExpansion"));

    let disarmed = select_ability(&armed, "domainExpansion");
    assert_eq!(disarmed.action_mode, ActionMode::None);
    assert_eq!(disarmed.selected_ability_id, None);

    assert_eq!(select_ability(&state, "healingTouch"), state);

    let mut cooling = state.clone();
    if let Some(hunter) = cooling.find_character_mut(&a) {
        hunter.abilities[0].current_cooldown = 2;
    }
    assert_eq!(select_ability(&cooling, "domainExpansion"), cooling);
}
