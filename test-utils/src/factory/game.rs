//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game::GameFactory;
///
/// let game = GameFactory::new(&db)
///     .game_code("WOLF42")
///     .player_count(8)
///     .build()
///     .await?;
/// ```
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    game_code: String,
    player_count: i32,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory with default values.
    ///
    /// Defaults:
    /// - game_code: `"GAME{id}"` where id is auto-incremented
    /// - player_count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            game_code: format!("GAME{}", id),
            player_count: 0,
        }
    }

    /// Sets the external game code.
    pub fn game_code(mut self, game_code: impl Into<String>) -> Self {
        self.game_code = game_code.into();
        self
    }

    /// Sets the player count.
    pub fn player_count(mut self, player_count: i32) -> Self {
        self.player_count = player_count;
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let now = Utc::now();
        entity::game::ActiveModel {
            id: ActiveValue::NotSet,
            game_code: ActiveValue::Set(self.game_code),
            player_count: ActiveValue::Set(self.player_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
///
/// Shorthand for `GameFactory::new(db).build().await`.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}
