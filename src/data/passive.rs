//! Passive data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::model::passive::{CreatePassiveParams, Passive};

pub struct PassiveRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PassiveRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePassiveParams) -> Result<Passive, DbErr> {
        let entity = entity::passive::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Passive::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Passive>, DbErr> {
        let entity = entity::prelude::Passive::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Passive::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Passive>, DbErr> {
        let entities = entity::prelude::Passive::find()
            .order_by_asc(entity::passive::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Passive::from_entity).collect())
    }

    /// Deletes a passive, leaving any role references to it dangling.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Passive::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
