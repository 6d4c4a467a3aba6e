//! Column aliasing for flat one-to-one joins.
//!
//! Joined tables share column names (`id`, `name`), so every selected column is aliased
//! as `<prefix><column>`. The alias list is generated from the entity's column set and
//! the row is split back with the same prefix, so adding a column to an entity never
//! leaves the join out of step.

use sea_orm::{DbErr, EntityTrait, FromQueryResult, IdenStatic, Iterable, QueryResult, QuerySelect};

pub const PLAYER_PREFIX: &str = "player_";
pub const ROLE_PREFIX: &str = "role_";

/// Adds every column of `E` to `query`, aliased with `prefix`.
pub fn select_prefixed<E, Q>(query: Q, prefix: &str) -> Q
where
    E: EntityTrait,
    Q: QuerySelect,
{
    E::Column::iter().fold(query, |query, column| {
        query.column_as(column, format!("{}{}", prefix, column.as_str()))
    })
}

/// One row of the player ⋈ role join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerWithRoleRow {
    pub player: entity::player::Model,
    pub role: entity::role::Model,
}

impl FromQueryResult for PlayerWithRoleRow {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            player: entity::player::Model::from_query_result(res, PLAYER_PREFIX)?,
            role: entity::role::Model::from_query_result(res, ROLE_PREFIX)?,
        })
    }
}
