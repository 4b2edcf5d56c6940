//! 唯一 ID 產生邏輯

use crate::domain::alias::CharacterId;
use crate::domain::constants::CHARACTER_ID_LEN;
use rand::Rng;
use std::collections::HashSet;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 從集合中產生唯一的隨機 ID（小寫 base-36 字串）
pub fn generate_unique_id(used_ids: &mut HashSet<CharacterId>) -> CharacterId {
    let mut rng = rand::rng();
    loop {
        let new_id: CharacterId = (0..CHARACTER_ID_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();
        if used_ids.insert(new_id.clone()) {
            return new_id;
        }
    }
}
