//! 建立對局

use crate::domain::character::Player;
use crate::domain::constants::{FIRST_TURN, MIN_PLAYERS};
use crate::domain::core_types::{ActionMode, BoardSize, GamePhase, RuleSet};
use crate::domain::state::GameState;
use crate::error::{BoardError, Context, Result};
use crate::loader_schema::GameConfig;
use crate::logic::board::{build_board, sync_occupancy, validate_state};
use crate::logic::layout::position_characters_for_board_game;
use crate::logic::roster::generate_preset_characters;
use log::info;
use std::collections::HashSet;

/// 建立初始狀態：準備階段、第一回合、由第一位玩家開始，沒有任何選取或高亮
pub fn create_initial_game_state(
    players: Vec<Player>,
    board_size: BoardSize,
    mode: RuleSet,
) -> GameState {
    let mut players = players;
    for (index, player) in players.iter_mut().enumerate() {
        player.is_current_turn = index == 0;
    }
    let current_player_id = players.first().map(|p| p.id.clone()).unwrap_or_default();

    GameState {
        players,
        board: build_board(board_size),
        current_player_id,
        selected_character_id: None,
        phase: GamePhase::Setup,
        turn: FIRST_TURN,
        board_size,
        winner: None,
        action_mode: ActionMode::None,
        selected_ability_id: None,
        mode,
    }
}

/// 依設定開新局
///
/// 每位玩家產生預設陣容並套用規則集的布局，同步格子佔據並檢查不變量，
/// 最後進入遊戲階段。
pub fn new_game(config: &GameConfig) -> Result<GameState> {
    if config.players.len() < MIN_PLAYERS {
        return Err(BoardError::NotEnoughPlayers {
            count: config.players.len(),
        }
        .into());
    }
    let board_size = config.board_size();
    let players = config
        .players
        .iter()
        .map(|p| Player::new(p.id.clone(), p.name.clone()))
        .collect();
    let mut state = create_initial_game_state(players, board_size, config.mode);

    let mut used_ids = HashSet::new();
    for (index, player) in state.players.iter_mut().enumerate() {
        let is_first_player = index == 0;
        let roster =
            generate_preset_characters(&player.id, is_first_player, board_size, &mut used_ids);
        player.characters =
            position_characters_for_board_game(&roster, is_first_player, config.mode, board_size)
                .context(format!("布局玩家 {}", player.id))?;
    }

    let mut state = sync_occupancy(&state);
    validate_state(&state).context("檢查新局狀態")?;
    state.phase = GamePhase::Playing;

    info!(
        "新局開始：{} 模式 {}x{}，{} 位玩家",
        state.mode,
        board_size.width,
        board_size.height,
        state.players.len()
    );
    Ok(state)
}

