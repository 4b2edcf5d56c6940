//! 型別別名

/// 棋盤座標分量（允許負值，方便先算候選格再過濾邊界）
pub type Coord = i32;

/// 角色 ID（13 碼 base-36 字串）
pub type CharacterId = String;

/// 玩家 ID
pub type PlayerId = String;

/// 技能 ID
pub type AbilityId = String;

/// 回合數
pub type TurnNumber = u32;

/// 角色數值（生命、攻擊、防禦）
pub type Stat = i32;
