//! Domain models for roles and their resolved abilities and passives.

use serde::Serialize;
use std::fmt;

use crate::{
    data::resolver::Resolved,
    model::{ability::Ability, passive::Passive},
};

/// Role row with its raw reference arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub alignment: String,
    /// Ability ids as stored; may include ids without a matching ability.
    pub ability_ids: Vec<i32>,
    /// Passive ids as stored; may include ids without a matching passive.
    pub passive_ids: Vec<i32>,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            alignment: entity.alignment,
            ability_ids: entity.ability_ids.into_inner(),
            passive_ids: entity.passive_ids.into_inner(),
        }
    }
}

/// How a role is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleKey {
    Id(i32),
    /// Case-insensitive exact name.
    Name(String),
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "role id={}", id),
            Self::Name(name) => write!(f, "role name={:?}", name),
        }
    }
}

impl From<i32> for RoleKey {
    fn from(id: i32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for RoleKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Role with its ability and passive arrays resolved into entities.
///
/// Ids that matched no row are dropped from `abilities` / `passives` and listed in the
/// `unresolved_*` fields instead, so a partially broken role still loads and the gap
/// stays visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplexRole {
    pub id: i32,
    pub name: String,
    pub alignment: String,
    /// Abilities in the order the role references them, duplicates collapsed.
    pub abilities: Vec<Ability>,
    /// Passives in the order the role references them, duplicates collapsed.
    pub passives: Vec<Passive>,
    pub unresolved_ability_ids: Vec<i32>,
    pub unresolved_passive_ids: Vec<i32>,
}

impl ComplexRole {
    /// Assembles a complex role from its row and the resolver output for both arrays.
    pub fn from_resolved(
        role: entity::role::Model,
        abilities: Resolved<entity::ability::Model>,
        passives: Resolved<entity::passive::Model>,
    ) -> Self {
        Self {
            id: role.id,
            name: role.name,
            alignment: role.alignment,
            abilities: abilities
                .items
                .into_iter()
                .map(Ability::from_entity)
                .collect(),
            passives: passives
                .items
                .into_iter()
                .map(Passive::from_entity)
                .collect(),
            unresolved_ability_ids: abilities.unresolved,
            unresolved_passive_ids: passives.unresolved,
        }
    }

    /// Number of referenced ids, across both arrays, that matched no row.
    pub fn dangling_count(&self) -> usize {
        self.unresolved_ability_ids.len() + self.unresolved_passive_ids.len()
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    pub name: String,
    pub alignment: String,
    pub ability_ids: Vec<i32>,
    pub passive_ids: Vec<i32>,
}
