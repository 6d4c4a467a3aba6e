//! Game data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::game::Game;

/// Repository providing database operations for games.
pub struct GameRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GameRepository<'a, C> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new game.
    ///
    /// # Arguments
    /// - `game_code` - Unique external code for the game
    /// - `player_count` - Expected number of players
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(DbErr)` - Database error, including a unique violation on `game_code`
    pub async fn create(&self, game_code: String, player_count: i32) -> Result<Game, DbErr> {
        let now = Utc::now();
        let entity = entity::game::ActiveModel {
            game_code: ActiveValue::Set(game_code),
            player_count: ActiveValue::Set(player_count),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Finds a game by its external code.
    ///
    /// # Returns
    /// - `Ok(Some(Game))` - Game found
    /// - `Ok(None)` - No game uses that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_code(&self, game_code: &str) -> Result<Option<Game>, DbErr> {
        let entity = entity::prelude::Game::find()
            .filter(entity::game::Column::GameCode.eq(game_code))
            .one(self.db)
            .await?;

        Ok(entity.map(Game::from_entity))
    }

    /// Gets all games, newest first.
    pub async fn get_all(&self) -> Result<Vec<Game>, DbErr> {
        let entities = entity::prelude::Game::find()
            .order_by_desc(entity::game::Column::CreatedAt)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Game::from_entity).collect())
    }

    /// Sets the expected player count of a game.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated, `0` when no game uses the code
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_player_count(
        &self,
        game_code: &str,
        player_count: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::update_many()
            .filter(entity::game::Column::GameCode.eq(game_code))
            .col_expr(
                entity::game::Column::PlayerCount,
                sea_orm::sea_query::Expr::value(player_count),
            )
            .col_expr(
                entity::game::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the game row only. Players and alliances are removed by the caller.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of games deleted (`0` or `1`)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_code(&self, game_code: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Game::delete_many()
            .filter(entity::game::Column::GameCode.eq(game_code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
