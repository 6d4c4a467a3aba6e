//! Alliance membership by player display name.
//!
//! Membership writes are optimistic. Every write bumps the alliance's `version`;
//! a caller that passes the version it last read gets [`StoreError::Conflict`] instead
//! of overwriting a concurrent change. `add_member` and `remove_member` always do this
//! against the version they just read and never retry on their own.
//!
//! Names are matched case-insensitively. Renaming a player does not carry over to the
//! alliances that list the old name.

use sea_orm::DatabaseConnection;

use crate::{
    data::alliance::{AllianceRepository, MembersUpdate},
    error::StoreError,
    model::{alliance::Alliance, names_match},
    service::{store_error, CallContext},
};

/// Service resolving and mutating alliance membership.
pub struct MembershipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipService<'a> {
    /// Creates a new MembershipService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every alliance, in any game, that lists `player_name` as a member.
    ///
    /// # Returns
    /// - `Ok(Vec<Alliance>)` - Matching alliances ordered by id, empty when none
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn get_by_member(
        &self,
        ctx: &CallContext,
        player_name: &str,
    ) -> Result<Vec<Alliance>, StoreError> {
        const OP: &str = "get_alliances_by_member";
        let key = format!("member={:?}", player_name);
        tracing::debug!(op = OP, %key, "resolving alliances");

        ctx.run(OP, &key, async {
            AllianceRepository::new(self.db)
                .get_by_member(player_name)
                .await
                .map_err(|e| store_error(OP, &key, e))
        })
        .await
    }

    /// Gets the alliances of one game that list `player_name` as a member.
    pub async fn get_by_game_and_member(
        &self,
        ctx: &CallContext,
        game_code: &str,
        player_name: &str,
    ) -> Result<Vec<Alliance>, StoreError> {
        const OP: &str = "get_alliances_by_game_and_member";
        let key = format!("game={} member={:?}", game_code, player_name);
        tracing::debug!(op = OP, %key, "resolving alliances");

        ctx.run(OP, &key, async {
            AllianceRepository::new(self.db)
                .get_by_game_and_member(game_code, player_name)
                .await
                .map_err(|e| store_error(OP, &key, e))
        })
        .await
    }

    /// Replaces the member list of an alliance.
    ///
    /// # Arguments
    /// - `ctx` - Deadline and cancellation for the call
    /// - `id` - Alliance id
    /// - `members` - New member names; trimmed, blanks dropped, case-insensitive duplicates collapsed
    /// - `expected_version` - Version last read by the caller; `None` overwrites unconditionally
    ///
    /// # Returns
    /// - `Ok(Alliance)` - The alliance as stored after the write
    /// - `Err(StoreError::NotFound)` - No alliance with that id
    /// - `Err(StoreError::Conflict)` - The alliance changed since `expected_version`
    /// - `Err(StoreError)` - Store failure, deadline or cancellation
    pub async fn update_members(
        &self,
        ctx: &CallContext,
        id: i32,
        members: Vec<String>,
        expected_version: Option<i32>,
    ) -> Result<Alliance, StoreError> {
        const OP: &str = "update_alliance_members";
        let key = format!("alliance id={}", id);
        tracing::debug!(op = OP, %key, ?expected_version, "replacing members");

        ctx.run(OP, &key, self.write_members(OP, &key, id, members, expected_version))
            .await
    }

    /// Adds a member unless a case-insensitive match is already listed.
    ///
    /// Returns the alliance unchanged, without a write, when the name is already present.
    pub async fn add_member(
        &self,
        ctx: &CallContext,
        id: i32,
        player_name: &str,
    ) -> Result<Alliance, StoreError> {
        const OP: &str = "add_alliance_member";
        let key = format!("alliance id={} member={:?}", id, player_name);

        ctx.run(OP, &key, async {
            let alliance = self.load(OP, &key, id).await?;
            if alliance.has_member(player_name) {
                return Ok(alliance);
            }

            let mut members = alliance.members;
            members.push(player_name.to_string());

            self.write_members(OP, &key, id, members, Some(alliance.version))
                .await
        })
        .await
    }

    /// Removes every case-insensitive match of `player_name` from an alliance.
    ///
    /// Returns the alliance unchanged, without a write, when the name is not listed.
    pub async fn remove_member(
        &self,
        ctx: &CallContext,
        id: i32,
        player_name: &str,
    ) -> Result<Alliance, StoreError> {
        const OP: &str = "remove_alliance_member";
        let key = format!("alliance id={} member={:?}", id, player_name);

        ctx.run(OP, &key, async {
            let alliance = self.load(OP, &key, id).await?;
            if !alliance.has_member(player_name) {
                return Ok(alliance);
            }

            let members = alliance
                .members
                .into_iter()
                .filter(|m| !names_match(m, player_name))
                .collect();

            self.write_members(OP, &key, id, members, Some(alliance.version))
                .await
        })
        .await
    }

    async fn load(&self, op: &'static str, key: &str, id: i32) -> Result<Alliance, StoreError> {
        AllianceRepository::new(self.db)
            .get_by_id(id)
            .await
            .map_err(|e| store_error(op, key, e))?
            .ok_or_else(|| StoreError::not_found(op, key))
    }

    async fn write_members(
        &self,
        op: &'static str,
        key: &str,
        id: i32,
        members: Vec<String>,
        expected_version: Option<i32>,
    ) -> Result<Alliance, StoreError> {
        let outcome = AllianceRepository::new(self.db)
            .update_members(id, members, expected_version)
            .await
            .map_err(|e| store_error(op, key, e))?;

        match outcome {
            MembersUpdate::Updated(alliance) => Ok(alliance),
            MembersUpdate::NotFound => Err(StoreError::not_found(op, key)),
            MembersUpdate::Conflict { actual } => {
                tracing::debug!(op, key, ?expected_version, actual, "membership write lost a race");
                Err(StoreError::Conflict {
                    op,
                    key: key.to_string(),
                    expected: expected_version.unwrap_or(actual),
                    actual,
                })
            }
        }
    }
}
