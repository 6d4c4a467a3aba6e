//! Game lifecycle: creation, lookup and cascading teardown.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{alliance::AllianceRepository, game::GameRepository, player::PlayerRepository},
    error::StoreError,
    model::game::{DeletedGame, Game},
    service::{store_error, CallContext},
};

/// Service managing games and the rows that hang off them.
pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a game.
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(StoreError::ConstraintViolation)` - The code is already in use
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn create(
        &self,
        ctx: &CallContext,
        game_code: &str,
        player_count: i32,
    ) -> Result<Game, StoreError> {
        const OP: &str = "create_game";
        let key = format!("game={}", game_code);

        ctx.run(OP, &key, async {
            let game = GameRepository::new(self.db)
                .create(game_code.to_string(), player_count)
                .await
                .map_err(|e| store_error(OP, &key, e))?;

            tracing::info!(game_code = %game.game_code, player_count, "created game");

            Ok(game)
        })
        .await
    }

    pub async fn get_by_code(&self, ctx: &CallContext, game_code: &str) -> Result<Game, StoreError> {
        const OP: &str = "get_game";
        let key = format!("game={}", game_code);

        ctx.run(OP, &key, async {
            GameRepository::new(self.db)
                .get_by_code(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?
                .ok_or_else(|| StoreError::not_found(OP, &key))
        })
        .await
    }

    /// Sets the expected player count and returns the updated game.
    pub async fn update_player_count(
        &self,
        ctx: &CallContext,
        game_code: &str,
        player_count: i32,
    ) -> Result<Game, StoreError> {
        const OP: &str = "update_game_player_count";
        let key = format!("game={}", game_code);

        ctx.run(OP, &key, async {
            let repo = GameRepository::new(self.db);
            let updated = repo
                .update_player_count(game_code, player_count)
                .await
                .map_err(|e| store_error(OP, &key, e))?;
            if updated == 0 {
                return Err(StoreError::not_found(OP, &key));
            }

            repo.get_by_code(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?
                .ok_or_else(|| StoreError::not_found(OP, &key))
        })
        .await
    }

    /// Deletes a game together with its players and alliances.
    ///
    /// Players and alliances reference the game by code without a foreign key, so they
    /// are removed here explicitly. All three deletes run in one transaction; nothing
    /// is removed unless the game row itself exists.
    ///
    /// # Returns
    /// - `Ok(DeletedGame)` - Row counts removed per table
    /// - `Err(StoreError::NotFound)` - No game uses the code; the transaction is rolled back
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn delete(&self, ctx: &CallContext, game_code: &str) -> Result<DeletedGame, StoreError> {
        const OP: &str = "delete_game";
        let key = format!("game={}", game_code);

        ctx.run(OP, &key, async {
            let txn = self.db.begin().await.map_err(|e| store_error(OP, &key, e))?;

            let players = PlayerRepository::new(&txn)
                .delete_by_game(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?;
            let alliances = AllianceRepository::new(&txn)
                .delete_by_game(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?;
            let games = GameRepository::new(&txn)
                .delete_by_code(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?;

            if games == 0 {
                txn.rollback().await.map_err(|e| store_error(OP, &key, e))?;
                return Err(StoreError::not_found(OP, &key));
            }

            txn.commit().await.map_err(|e| store_error(OP, &key, e))?;

            let deleted = DeletedGame {
                games,
                players,
                alliances,
            };
            tracing::info!(game_code, ?deleted, "deleted game");

            Ok(deleted)
        })
        .await
    }
}
