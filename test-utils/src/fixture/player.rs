//! Player fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::player;

use crate::fixture::game::DEFAULT_GAME_CODE;

/// Default test player name.
pub const DEFAULT_NAME: &str = "Alice";

/// Creates a player entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Alice"`
/// - game_code: `"TESTGAME"`
/// - role_id: `1`
/// - alive: `true`, seat: `1`, luck and luck_modifier: `0`
/// - luck_status / alignment_override: `None`
pub fn entity() -> player::Model {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    player::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        game_code: DEFAULT_GAME_CODE.to_string(),
        role_id: 1,
        alive: true,
        seat: 1,
        luck: 0,
        luck_modifier: 0,
        luck_status: None,
        alignment_override: None,
        created_at: at,
        updated_at: at,
    }
}
