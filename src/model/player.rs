//! Domain models for players.
//!
//! Player rows are mutated continuously during a game. Single-field writes go through
//! [`PlayerField`], a closed set of typed updates, instead of naming columns at runtime.

use chrono::{DateTime, Utc};
use sea_orm::Value;
use serde::Serialize;

use crate::model::role::Role;

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i32,
    /// Display name, unique per game by convention only.
    pub name: String,
    pub game_code: String,
    pub role_id: i32,
    pub alive: bool,
    pub seat: i32,
    pub luck: i32,
    pub luck_modifier: i32,
    pub luck_status: Option<String>,
    /// Replaces the role's alignment for this player when set.
    pub alignment_override: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            game_code: entity.game_code,
            role_id: entity.role_id,
            alive: entity.alive,
            seat: entity.seat,
            luck: entity.luck,
            luck_modifier: entity.luck_modifier,
            luck_status: entity.luck_status,
            alignment_override: entity.alignment_override,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Luck after the modifier is applied.
    pub fn effective_luck(&self) -> i32 {
        self.luck.saturating_add(self.luck_modifier)
    }
}

/// A player joined with the role it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerWithRole {
    pub player: Player,
    pub role: Role,
}

impl PlayerWithRole {
    pub fn from_entities(player: entity::player::Model, role: entity::role::Model) -> Self {
        Self {
            player: Player::from_entity(player),
            role: Role::from_entity(role),
        }
    }

    /// The player's alignment: the override when present, else the role's.
    pub fn alignment(&self) -> &str {
        match self.player.alignment_override.as_deref() {
            Some(alignment) if !alignment.is_empty() => alignment,
            _ => &self.role.alignment,
        }
    }
}

/// Parameters for seating a new player.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub name: String,
    pub game_code: String,
    pub role_id: i32,
    pub seat: i32,
}

/// Parameters for updating several player fields at once.
///
/// Only provided fields are written. For nullable columns the outer `Option` marks
/// presence and the inner one the value.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParams {
    pub id: i32,
    pub name: Option<String>,
    pub game_code: Option<String>,
    pub role_id: Option<i32>,
    pub alive: Option<bool>,
    pub seat: Option<i32>,
    pub luck: Option<i32>,
    pub luck_modifier: Option<i32>,
    pub luck_status: Option<Option<String>>,
    pub alignment_override: Option<Option<String>>,
}

/// One updatable player field together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerField {
    Name(String),
    RoleId(i32),
    Alive(bool),
    Seat(i32),
    Luck(i32),
    LuckModifier(i32),
    LuckStatus(Option<String>),
    AlignmentOverride(Option<String>),
}

impl PlayerField {
    /// Column written by this update.
    pub fn column(&self) -> entity::player::Column {
        use entity::player::Column;

        match self {
            Self::Name(_) => Column::Name,
            Self::RoleId(_) => Column::RoleId,
            Self::Alive(_) => Column::Alive,
            Self::Seat(_) => Column::Seat,
            Self::Luck(_) => Column::Luck,
            Self::LuckModifier(_) => Column::LuckModifier,
            Self::LuckStatus(_) => Column::LuckStatus,
            Self::AlignmentOverride(_) => Column::AlignmentOverride,
        }
    }

    /// Value bound for the column.
    pub fn into_value(self) -> Value {
        match self {
            Self::Name(name) => name.into(),
            Self::RoleId(id) => id.into(),
            Self::Alive(alive) => alive.into(),
            Self::Seat(seat) => seat.into(),
            Self::Luck(luck) => luck.into(),
            Self::LuckModifier(modifier) => modifier.into(),
            Self::LuckStatus(status) => status.into(),
            Self::AlignmentOverride(alignment) => alignment.into(),
        }
    }
}
