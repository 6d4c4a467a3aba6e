//! Domain models for alliances.

use serde::Serialize;

use crate::model::names_match;

/// A named group of players within a game.
///
/// Members are held by display name, not by player id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alliance {
    pub id: i32,
    pub name: String,
    pub game_code: String,
    pub description: Option<String>,
    pub members: Vec<String>,
    pub color: Option<String>,
    /// Membership version; pass it back to `update_members` to detect concurrent writes.
    pub version: i32,
}

impl Alliance {
    pub fn from_entity(entity: entity::alliance::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            game_code: entity.game_code,
            description: entity.description,
            members: entity.members.into_inner(),
            color: entity.color,
            version: entity.version,
        }
    }

    /// Whether `player_name` is listed as a member, ignoring case.
    pub fn has_member(&self, player_name: &str) -> bool {
        self.members.iter().any(|m| names_match(m, player_name))
    }
}

/// Cleans a member list before it is stored.
///
/// Names are trimmed and blanks dropped. Case-insensitive duplicates collapse to the
/// first spelling seen, so membership checks and stored data agree.
pub fn normalize_members<S: AsRef<str>>(members: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();

    for member in members {
        let member = member.as_ref().trim();
        if member.is_empty() {
            continue;
        }
        if normalized.iter().any(|existing| names_match(existing, member)) {
            continue;
        }
        normalized.push(member.to_string());
    }

    normalized
}

#[derive(Debug, Clone)]
pub struct CreateAllianceParams {
    pub name: String,
    pub game_code: String,
    pub description: Option<String>,
    pub members: Vec<String>,
    pub color: Option<String>,
}

/// Parameters for updating an alliance's descriptive fields.
///
/// Membership is not part of this; it changes only through `update_members`.
#[derive(Debug, Clone, Default)]
pub struct UpdateAllianceParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub color: Option<Option<String>>,
}
