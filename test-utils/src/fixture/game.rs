//! Game fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::game;

/// Default test game code.
pub const DEFAULT_GAME_CODE: &str = "TESTGAME";

/// Creates a game entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - game_code: `"TESTGAME"`
/// - player_count: `0`
/// - created_at / updated_at: `2026-01-01T00:00:00Z`
pub fn entity() -> game::Model {
    let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    game::Model {
        id: 1,
        game_code: DEFAULT_GAME_CODE.to_string(),
        player_count: 0,
        created_at: at,
        updated_at: at,
    }
}
