//! Ability data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use entity::array::NameList;

use crate::model::ability::{Ability, CreateAbilityParams};

pub struct AbilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AbilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new ability definition.
    pub async fn create(&self, params: CreateAbilityParams) -> Result<Ability, DbErr> {
        let entity = entity::ability::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            charges: ActiveValue::Set(params.charges),
            any_ability: ActiveValue::Set(params.any_ability),
            role_specific: ActiveValue::Set(params.role_specific),
            categories: ActiveValue::Set(NameList(params.categories)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Ability::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ability>, DbErr> {
        let entity = entity::prelude::Ability::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Ability::from_entity))
    }

    /// Gets all abilities ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Ability>, DbErr> {
        let entities = entity::prelude::Ability::find()
            .order_by_asc(entity::ability::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Ability::from_entity).collect())
    }

    /// Deletes an ability.
    ///
    /// Roles referencing the id are left untouched; the id becomes dangling and is
    /// reported as unresolved when those roles are aggregated.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Ability::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
