//! Assembly of composite read models.
//!
//! Two shapes are served here. A player is joined one-to-one with its role in a single
//! prefixed query; a listing also checks for players the join could not match, so a
//! missing role fails the call instead of shortening the list. A role is expanded with the abilities and passives its id arrays
//! reference; those reads run in one read-only repeatable-read transaction so the role
//! and its children come from the same snapshot.

use sea_orm::{AccessMode, DatabaseConnection, IsolationLevel, TransactionTrait};

use crate::{
    data::{player::PlayerRepository, role::RoleRepository, NameMatch},
    error::StoreError,
    model::{
        player::PlayerWithRole,
        role::{ComplexRole, RoleKey},
    },
    service::{store_error, CallContext},
};

/// Service building players-with-role and complex roles.
pub struct AggregationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AggregationService<'a> {
    /// Creates a new AggregationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one player of a game, by case-insensitive name, together with its role.
    ///
    /// # Arguments
    /// - `ctx` - Deadline and cancellation for the call
    /// - `game_code` - Game the player is seated in
    /// - `name` - Player display name, matched exactly after case folding
    ///
    /// # Returns
    /// - `Ok(PlayerWithRole)` - The single matching player and its role
    /// - `Err(StoreError::NotFound)` - No such player, or the player's role row is missing
    /// - `Err(StoreError::AmbiguousMatch)` - Several players in the game share the name
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn get_complex_player(
        &self,
        ctx: &CallContext,
        game_code: &str,
        name: &str,
    ) -> Result<PlayerWithRole, StoreError> {
        const OP: &str = "get_complex_player";
        let key = format!("game={} name={:?}", game_code, name);
        tracing::debug!(op = OP, %key, "aggregating player with role");

        ctx.run(OP, &key, async {
            let found = PlayerRepository::new(self.db)
                .find_complex_by_game_and_name(game_code, name)
                .await
                .map_err(|e| store_error(OP, &key, e))?;

            expect_unique(OP, &key, found)
        })
        .await
    }

    /// Gets every player of a game with its role, ordered by seat then id.
    ///
    /// The join and the orphan check read the same snapshot. A single player whose role
    /// row is missing fails the whole call; no partial list is returned.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerWithRole>)` - Players of the game, empty for an unknown game
    /// - `Err(StoreError::NotFound)` - Some player's role row is missing; the key names them
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn get_all_complex_players(
        &self,
        ctx: &CallContext,
        game_code: &str,
    ) -> Result<Vec<PlayerWithRole>, StoreError> {
        const OP: &str = "get_all_complex_players";
        let key = format!("game={}", game_code);
        tracing::debug!(op = OP, %key, "aggregating players with roles");

        ctx.run(OP, &key, async {
            let txn = self
                .db
                .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
                .await
                .map_err(|e| store_error(OP, &key, e))?;

            let repo = PlayerRepository::new(&txn);
            let players = repo
                .get_all_complex_by_game(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?;
            let orphans = repo
                .find_ids_without_role(game_code)
                .await
                .map_err(|e| store_error(OP, &key, e))?;

            txn.commit().await.map_err(|e| store_error(OP, &key, e))?;

            if !orphans.is_empty() {
                tracing::warn!(op = OP, %key, ?orphans, "players without a role row");
                return Err(StoreError::not_found(
                    OP,
                    format!("{} players without role={:?}", key, orphans),
                ));
            }

            Ok(players)
        })
        .await
    }

    /// Gets a role with its abilities and passives resolved.
    ///
    /// Ids in the role's arrays that match no row do not fail the call. They are
    /// returned in `unresolved_ability_ids` / `unresolved_passive_ids` and logged.
    ///
    /// # Arguments
    /// - `ctx` - Deadline and cancellation for the call
    /// - `role` - Role id, or role name matched case-insensitively
    ///
    /// # Returns
    /// - `Ok(ComplexRole)` - The role with resolved children
    /// - `Err(StoreError::NotFound)` - No role for the key
    /// - `Err(StoreError::AmbiguousMatch)` - Several roles share the name
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn get_complex_role(
        &self,
        ctx: &CallContext,
        role: RoleKey,
    ) -> Result<ComplexRole, StoreError> {
        const OP: &str = "get_complex_role";
        let key = role.to_string();
        tracing::debug!(op = OP, %key, "aggregating role");

        ctx.run(OP, &key, async {
            let txn = self
                .db
                .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
                .await
                .map_err(|e| store_error(OP, &key, e))?;

            let repo = RoleRepository::new(&txn);
            let found = match &role {
                RoleKey::Id(id) => repo
                    .get_complex_by_id(*id)
                    .await
                    .map(|r| r.map_or(NameMatch::Missing, NameMatch::Unique)),
                RoleKey::Name(name) => repo.find_complex_by_name(name).await,
            }
            .map_err(|e| store_error(OP, &key, e))?;

            txn.commit().await.map_err(|e| store_error(OP, &key, e))?;

            let complex = expect_unique(OP, &key, found)?;
            warn_dangling(&complex);

            Ok(complex)
        })
        .await
    }

    /// Gets every role with abilities and passives resolved, ordered by id.
    ///
    /// Reads run in one snapshot and use a single batch query per child table.
    pub async fn get_all_complex_roles(
        &self,
        ctx: &CallContext,
    ) -> Result<Vec<ComplexRole>, StoreError> {
        const OP: &str = "get_all_complex_roles";
        let key = "all roles";

        ctx.run(OP, key, async {
            let txn = self
                .db
                .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
                .await
                .map_err(|e| store_error(OP, key, e))?;

            let roles = RoleRepository::new(&txn)
                .get_all_complex()
                .await
                .map_err(|e| store_error(OP, key, e))?;

            txn.commit().await.map_err(|e| store_error(OP, key, e))?;

            roles.iter().for_each(warn_dangling);

            Ok(roles)
        })
        .await
    }
}

fn expect_unique<T>(op: &'static str, key: &str, found: NameMatch<T>) -> Result<T, StoreError> {
    match found {
        NameMatch::Unique(value) => Ok(value),
        NameMatch::Missing => Err(StoreError::not_found(op, key)),
        NameMatch::Ambiguous(matches) => {
            tracing::warn!(op, key, matches, "name matches more than one row");
            Err(StoreError::AmbiguousMatch {
                op,
                key: key.to_string(),
                matches,
            })
        }
    }
}

fn warn_dangling(role: &ComplexRole) {
    if role.dangling_count() > 0 {
        tracing::warn!(
            role_id = role.id,
            role = %role.name,
            abilities = ?role.unresolved_ability_ids,
            passives = ?role.unresolved_passive_ids,
            "role references missing rows"
        );
    }
}
