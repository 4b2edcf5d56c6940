//! 開局、布局與不變量檢查測試

use std::collections::HashSet;
use tactics::domain::constants::PRESET_ROSTER_SIZE;
use tactics::domain::core_types::{
    BoardSize, CharacterClass, GamePhase, GridPosition, Rank, RuleSet,
};
use tactics::domain::state::GameState;
use tactics::error::{BoardError, ErrorKind};
use tactics::loader_schema::{GameConfig, PlayerConfig};
use tactics::logic::board::{sync_occupancy, validate_state};
use tactics::logic::game::new_game;
use tactics::logic::layout::{is_dark_square, position_characters_for_board_game};
use tactics::logic::roster::create_character;
use tactics::test_helpers::{id_at, ScenarioBuilder, FIRST_PLAYER, SECOND_PLAYER};

const BOARD_8X8: BoardSize = BoardSize {
    width: 8,
    height: 8,
};

fn config(mode: RuleSet, width: i32, height: i32) -> GameConfig {
    GameConfig {
        board_width: width,
        board_height: height,
        mode,
        ..GameConfig::default()
    }
}

fn positions_of(state: &GameState, player: usize) -> Vec<GridPosition> {
    state.players[player]
        .characters
        .iter()
        .filter_map(|c| c.position)
        .collect()
}

#[test]
fn test_new_game_storyline() {
    let state = new_game(&GameConfig::default()).unwrap();

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.turn, 1);
    assert_eq!(state.current_player_id, "player-1");
    assert!(state.players[0].is_current_turn);
    assert!(!state.players[1].is_current_turn);
    assert_eq!(state.selected_character_id, None);
    assert_eq!(state.winner, None);
    assert!(!state.board.has_highlights());

    assert_eq!(state.players[0].characters.len(), PRESET_ROSTER_SIZE);
    assert!(positions_of(&state, 0).iter().all(|p| p.y == 0));
    assert!(positions_of(&state, 1).iter().all(|p| p.y == 7));

    let ids: HashSet<&str> = state.characters().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), PRESET_ROSTER_SIZE * 2);
    assert!(ids.iter().all(|id| id.len() == 13));

    // 主角在 S 級時多一個技能
    let protagonist = state
        .characters()
        .find(|c| c.name == "Sung Jin-Woo")
        .unwrap();
    assert!(protagonist.ability("arise").is_some());
    validate_state(&state).unwrap();
}

#[test]
fn test_new_game_chess_layout() {
    let state = new_game(&config(RuleSet::Chess, 8, 8)).unwrap();
    let expected = [
        (CharacterClass::Tank, Rank::B),
        (CharacterClass::Assassin, Rank::A),
        (CharacterClass::Mage, Rank::A),
        (CharacterClass::Hunter, Rank::S),
        (CharacterClass::Monster, Rank::S),
    ];

    for (player, row) in [(0, 0), (1, 7)] {
        for (x, character) in state.players[player].characters.iter().enumerate() {
            assert_eq!(character.position, Some(GridPosition::new(x as i32, row)));
            assert_eq!((character.class, character.rank), expected[x], "{}", character.name);
        }
    }

    // 數值依新職業/等級重算：Tank B = 150 × 1.1
    let rook = &state.players[1].characters[0];
    assert_eq!(rook.max_health, 165);
    assert_eq!(rook.health, rook.max_health);
    validate_state(&state).unwrap();
}

#[test]
fn test_new_game_checkers_layout() {
    let state = new_game(&config(RuleSet::Checkers, 8, 8)).unwrap();

    let first = positions_of(&state, 0);
    let second = positions_of(&state, 1);
    let p = GridPosition::new;
    assert_eq!(first, vec![p(1, 0), p(3, 0), p(5, 0), p(7, 0), p(0, 1)]);
    assert_eq!(second, vec![p(0, 7), p(2, 7), p(4, 7), p(6, 7), p(1, 6)]);
    assert!(first.iter().chain(&second).all(|pos| is_dark_square(*pos)));

    for character in state.characters() {
        assert_eq!(character.class, CharacterClass::Soldier);
        assert_eq!(character.rank, Rank::C);
        assert_eq!(character.max_health, 100);
    }
    validate_state(&state).unwrap();
}

#[test]
fn test_new_game_rejects_bad_setups() {
    let test_data = [
        (config(RuleSet::Chess, 6, 8), "chess 寬度 6"),
        (config(RuleSet::Chess, 8, 3), "chess 高度 3"),
        (config(RuleSet::Checkers, 8, 5), "checkers 高度 5"),
    ];
    for (config, case) in test_data {
        let err = new_game(&config).unwrap_err();
        assert!(
            matches!(
                err.kind(),
                ErrorKind::Board(BoardError::UnsupportedBoardSize { .. })
            ),
            "{case}: {err}"
        );
    }

    let lonely = GameConfig {
        players: vec![PlayerConfig {
            id: "solo".to_string(),
            name: "Solo".to_string(),
        }],
        ..GameConfig::default()
    };
    let err = new_game(&lonely).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::NotEnoughPlayers { count: 1 })
    ));
}

#[test]
fn test_layout_benches_overflow() {
    let mut used = HashSet::new();
    let roster: Vec<_> = (0..18)
        .map(|i| {
            create_character(
                &format!("unit-{i}"),
                CharacterClass::Hunter,
                Rank::C,
                None,
                "p1",
                "hunter-c",
                &mut used,
            )
        })
        .collect();

    let chess = position_characters_for_board_game(&roster, false, RuleSet::Chess, BOARD_8X8)
        .unwrap();
    assert_eq!(chess[8].position, Some(GridPosition::new(0, 6)));
    assert_eq!(chess[8].class, CharacterClass::Soldier);
    assert_eq!(chess[15].position, Some(GridPosition::new(7, 6)));
    assert_eq!(chess[16].position, None);
    assert_eq!(chess[17].position, None);

    let checkers =
        position_characters_for_board_game(&roster, true, RuleSet::Checkers, BOARD_8X8).unwrap();
    assert_eq!(checkers.iter().filter(|c| c.is_on_board()).count(), 12);
    assert_eq!(checkers[11].position, Some(GridPosition::new(7, 2)));
    assert_eq!(checkers[12].position, None);

    let storyline =
        position_characters_for_board_game(&roster, true, RuleSet::Storyline, BOARD_8X8).unwrap();
    assert_eq!(storyline, roster);
}

#[test]
fn test_validate_state_reports_violations() {
    let (state, markers) = ScenarioBuilder::from_ascii(
        "
        A . .
        . . E
        ",
    )
    .piece("A", CharacterClass::Hunter, Rank::C, FIRST_PLAYER)
    .piece("E", CharacterClass::Monster, Rank::C, SECOND_PLAYER)
    .build()
    .unwrap();
    validate_state(&state).unwrap();
    let a = id_at(&state, markers["A"][0]).unwrap();

    let mut stacked = state.clone();
    stacked.find_character_mut(&a).unwrap().position = Some(markers["E"][0]);
    let err = validate_state(&sync_occupancy(&stacked)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Board(BoardError::TileConflict { .. })));

    let mut outside = state.clone();
    outside.find_character_mut(&a).unwrap().position = Some(GridPosition::new(3, 0));
    let err = validate_state(&outside).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Board(BoardError::OutOfBounds { .. })));

    let mut stale = state.clone();
    stale.find_character_mut(&a).unwrap().position = Some(GridPosition::new(1, 0));
    let err = validate_state(&stale).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Board(BoardError::OccupancyMismatch { .. })));
    validate_state(&sync_occupancy(&stale)).unwrap();

    let mut overhealed = state.clone();
    overhealed.find_character_mut(&a).unwrap().health += 1;
    let err = validate_state(&overhealed).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Board(BoardError::HealthExceedsMax { .. })));
}
