//! Alliance factory for creating test alliance entities.

use crate::factory::helpers::next_id;
use entity::array::NameList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test alliances with customizable fields.
pub struct AllianceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    game_code: String,
    description: Option<String>,
    members: Vec<String>,
    color: Option<String>,
}

impl<'a> AllianceFactory<'a> {
    /// Creates a new AllianceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Alliance {id}"`
    /// - description: `None`
    /// - members: empty
    /// - color: `None`
    pub fn new(db: &'a DatabaseConnection, game_code: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Alliance {}", id),
            game_code: game_code.into(),
            description: None,
            members: Vec::new(),
            color: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn members<S: Into<String>>(mut self, members: impl IntoIterator<Item = S>) -> Self {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    /// Builds and inserts the alliance entity into the database with version `1`.
    pub async fn build(self) -> Result<entity::alliance::Model, DbErr> {
        entity::alliance::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            game_code: ActiveValue::Set(self.game_code),
            description: ActiveValue::Set(self.description),
            members: ActiveValue::Set(NameList(self.members)),
            color: ActiveValue::Set(self.color),
            version: ActiveValue::Set(1),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty alliance with default values in the given game.
pub async fn create_alliance(
    db: &DatabaseConnection,
    game_code: impl Into<String>,
) -> Result<entity::alliance::Model, DbErr> {
    AllianceFactory::new(db, game_code).build().await
}
