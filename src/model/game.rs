//! Domain models for games.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A game session, the root of a player subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    /// Internal identifier.
    pub id: i32,
    /// External code shared with players; players and alliances reference it.
    pub game_code: String,
    pub player_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            game_code: entity.game_code,
            player_count: entity.player_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Rows removed by a cascading game delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeletedGame {
    pub games: u64,
    pub players: u64,
    pub alliances: u64,
}
