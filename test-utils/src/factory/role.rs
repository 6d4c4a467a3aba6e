//! Role factory for creating test role entities.
//!
//! Roles reference abilities and passives through id arrays. The factory writes
//! whatever ids it is given, including ids with no matching row, so tests can build
//! dangling references on purpose.

use crate::factory::helpers::next_id;
use entity::array::IdList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role::RoleFactory;
///
/// let role = RoleFactory::new(&db)
///     .name("Seer")
///     .alignment("good")
///     .ability_ids(vec![ability.id, 9999])
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    alignment: String,
    ability_ids: Vec<i32>,
    passive_ids: Vec<i32>,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Role {id}"`
    /// - alignment: `"good"`
    /// - ability_ids: empty
    /// - passive_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Role {}", id),
            alignment: "good".to_string(),
            ability_ids: Vec::new(),
            passive_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = alignment.into();
        self
    }

    pub fn ability_ids(mut self, ability_ids: Vec<i32>) -> Self {
        self.ability_ids = ability_ids;
        self
    }

    pub fn passive_ids(mut self, passive_ids: Vec<i32>) -> Self {
        self.passive_ids = passive_ids;
        self
    }

    /// Builds and inserts the role entity into the database.
    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            alignment: ActiveValue::Set(self.alignment),
            ability_ids: ActiveValue::Set(IdList(self.ability_ids)),
            passive_ids: ActiveValue::Set(IdList(self.passive_ids)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values and no abilities or passives.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}
