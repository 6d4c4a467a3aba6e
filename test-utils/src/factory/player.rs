//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db, &game.game_code, role.id)
///     .name("Alice")
///     .seat(3)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    game_code: String,
    role_id: i32,
    alive: bool,
    seat: i32,
    luck: i32,
    luck_modifier: i32,
    luck_status: Option<String>,
    alignment_override: Option<String>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"`
    /// - alive: `true`
    /// - seat: `{id}` so seats are unique across a test
    /// - luck, luck_modifier: `0`
    /// - luck_status, alignment_override: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `game_code` - Code of the game the player joins
    /// - `role_id` - Role assigned to the player
    pub fn new(db: &'a DatabaseConnection, game_code: impl Into<String>, role_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Player {}", id),
            game_code: game_code.into(),
            role_id,
            alive: true,
            seat: id as i32,
            luck: 0,
            luck_modifier: 0,
            luck_status: None,
            alignment_override: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    pub fn seat(mut self, seat: i32) -> Self {
        self.seat = seat;
        self
    }

    pub fn luck(mut self, luck: i32) -> Self {
        self.luck = luck;
        self
    }

    pub fn luck_status(mut self, luck_status: Option<String>) -> Self {
        self.luck_status = luck_status;
        self
    }

    pub fn alignment_override(mut self, alignment_override: Option<String>) -> Self {
        self.alignment_override = alignment_override;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let now = Utc::now();
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            game_code: ActiveValue::Set(self.game_code),
            role_id: ActiveValue::Set(self.role_id),
            alive: ActiveValue::Set(self.alive),
            seat: ActiveValue::Set(self.seat),
            luck: ActiveValue::Set(self.luck),
            luck_modifier: ActiveValue::Set(self.luck_modifier),
            luck_status: ActiveValue::Set(self.luck_status),
            alignment_override: ActiveValue::Set(self.alignment_override),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values in the given game and role.
pub async fn create_player(
    db: &DatabaseConnection,
    game_code: impl Into<String>,
    role_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, game_code, role_id).build().await
}
