//! 角色工廠與預設陣容

use crate::domain::alias::{CharacterId, Coord};
use crate::domain::character::Character;
use crate::domain::constants::PROTAGONIST_NAME;
use crate::domain::core_types::{BoardSize, CharacterClass, GridPosition, Rank};
use crate::logic::id_generator::generate_unique_id;
use crate::logic::unit_attributes::{calculate_stats, starting_abilities, AbilityKind};
use std::collections::HashSet;

/// 建立角色
///
/// 數值由職業與等級推導；S 級主角額外獲得「Arise」。
/// 回傳的角色所有回合旗標皆為 false，ID 在 `used_ids` 中唯一。
pub fn create_character(
    name: &str,
    class: CharacterClass,
    rank: Rank,
    position: Option<GridPosition>,
    owner: &str,
    model_kind: &str,
    used_ids: &mut HashSet<CharacterId>,
) -> Character {
    let stats = calculate_stats(class, rank);
    let mut abilities = starting_abilities(class);
    if name == PROTAGONIST_NAME && rank == Rank::S {
        abilities.push(AbilityKind::Arise.build());
    }

    Character {
        id: generate_unique_id(used_ids),
        name: name.to_string(),
        class,
        rank,
        health: stats.max_health,
        max_health: stats.max_health,
        attack: stats.attack,
        defense: stats.defense,
        move_range: stats.move_range,
        attack_range: stats.attack_range,
        abilities,
        position,
        model_kind: model_kind.to_string(),
        owner: owner.to_string(),
        is_selected: false,
        has_moved: false,
        has_attacked: false,
    }
}

/// (名稱, 職業, 等級, 起始 x, 模型)
type PresetEntry = (&'static str, CharacterClass, Rank, Coord, &'static str);

const HUNTER_ROSTER: [PresetEntry; 5] = [
    ("Sung Jin-Woo", CharacterClass::Hunter, Rank::S, 3, "hunter-s"),
    ("Cha Hae-In", CharacterClass::Assassin, Rank::A, 2, "assassin-a"),
    ("Go Gun-Hee", CharacterClass::Mage, Rank::S, 4, "mage-s"),
    ("Woo Jin-Cheol", CharacterClass::Tank, Rank::B, 5, "tank-b"),
    ("Min Byung-Gu", CharacterClass::Hunter, Rank::C, 1, "hunter-c"),
];

const MONSTER_ROSTER: [PresetEntry; 5] = [
    ("Beru", CharacterClass::Monster, Rank::S, 3, "monster-s"),
    ("Igris", CharacterClass::Monster, Rank::A, 2, "monster-a"),
    ("Tusk", CharacterClass::Monster, Rank::B, 4, "monster-b"),
    ("Iron", CharacterClass::Monster, Rank::C, 5, "monster-c"),
    ("Tank", CharacterClass::Monster, Rank::C, 1, "monster-c"),
];

/// 玩家的底線列：第一位玩家在 y = 0，另一方在最後一列
pub fn home_row(is_first_player: bool, board_size: BoardSize) -> Coord {
    if is_first_player {
        0
    } else {
        board_size.height - 1
    }
}

/// 產生固定的五人陣容：第一位玩家是獵人，另一方是怪物
pub fn generate_preset_characters(
    player_id: &str,
    is_first_player: bool,
    board_size: BoardSize,
    used_ids: &mut HashSet<CharacterId>,
) -> Vec<Character> {
    let roster = if is_first_player {
        &HUNTER_ROSTER
    } else {
        &MONSTER_ROSTER
    };
    let y = home_row(is_first_player, board_size);

    roster
        .iter()
        .map(|&(name, class, rank, x, model_kind)| {
            create_character(
                name,
                class,
                rank,
                Some(GridPosition::new(x, y)),
                player_id,
                model_kind,
                used_ids,
            )
        })
        .collect()
}
