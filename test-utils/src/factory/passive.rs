//! Passive factory for creating test passive entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test passives with customizable fields.
pub struct PassiveFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> PassiveFactory<'a> {
    /// Creates a new PassiveFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Passive {id}"`
    /// - description: `"Test passive description"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Passive {}", id),
            description: "Test passive description".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the passive entity into the database.
    pub async fn build(self) -> Result<entity::passive::Model, DbErr> {
        entity::passive::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passive with default values.
pub async fn create_passive(db: &DatabaseConnection) -> Result<entity::passive::Model, DbErr> {
    PassiveFactory::new(db).build().await
}
