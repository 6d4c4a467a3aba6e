//! Ability factory for creating test ability entities.

use crate::factory::helpers::next_id;
use entity::array::NameList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test abilities with customizable fields.
pub struct AbilityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    charges: i32,
    any_ability: bool,
    role_specific: String,
    categories: Vec<String>,
}

impl<'a> AbilityFactory<'a> {
    /// Creates a new AbilityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Ability {id}"`
    /// - description: `"Test ability description"`
    /// - charges: `1`
    /// - any_ability: `false`
    /// - role_specific: `""`
    /// - categories: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ability {}", id),
            description: "Test ability description".to_string(),
            charges: 1,
            any_ability: false,
            role_specific: String::new(),
            categories: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn charges(mut self, charges: i32) -> Self {
        self.charges = charges;
        self
    }

    pub fn any_ability(mut self, any_ability: bool) -> Self {
        self.any_ability = any_ability;
        self
    }

    pub fn role_specific(mut self, role_specific: impl Into<String>) -> Self {
        self.role_specific = role_specific.into();
        self
    }

    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    /// Builds and inserts the ability entity into the database.
    pub async fn build(self) -> Result<entity::ability::Model, DbErr> {
        entity::ability::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            charges: ActiveValue::Set(self.charges),
            any_ability: ActiveValue::Set(self.any_ability),
            role_specific: ActiveValue::Set(self.role_specific),
            categories: ActiveValue::Set(NameList(self.categories)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ability with default values.
pub async fn create_ability(db: &DatabaseConnection) -> Result<entity::ability::Model, DbErr> {
    AbilityFactory::new(db).build().await
}
