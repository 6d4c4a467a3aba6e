//! Role data repository.
//!
//! Besides plain CRUD this assembles [`ComplexRole`]s: a role row plus the abilities and
//! passives its id arrays reference. Run the complex queries on a transaction when the
//! role and its children must come from one snapshot.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use entity::array::IdList;

use crate::{
    data::{name_matches, resolver::ArrayRefResolver, NameMatch},
    model::role::{ComplexRole, CreateRoleParams, Role},
};

/// Repository providing database operations for roles.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new role.
    ///
    /// The id arrays are stored as given; ids are not checked against the ability and
    /// passive tables.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRoleParams) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(params.name),
            alignment: ActiveValue::Set(params.alignment),
            ability_ids: ActiveValue::Set(IdList(params.ability_ids)),
            passive_ids: ActiveValue::Set(IdList(params.passive_ids)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Role::from_entity))
    }

    /// Finds every role whose name equals `name` ignoring case, ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Role>)` - All matches; empty when none, more than one when names collide
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Role>, DbErr> {
        let entities = self.find_entities_by_name(name).await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    /// Gets all roles ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    /// Gets a role by id with its abilities and passives resolved.
    ///
    /// Issues the role lookup and one query per child table.
    ///
    /// # Returns
    /// - `Ok(Some(ComplexRole))` - Role found; unmatched child ids are listed, not fatal
    /// - `Ok(None)` - No role with that id
    /// - `Err(DbErr)` - Database error during any of the lookups
    pub async fn get_complex_by_id(&self, id: i32) -> Result<Option<ComplexRole>, DbErr> {
        match entity::prelude::Role::find_by_id(id).one(self.db).await? {
            Some(role) => Ok(Some(self.assemble(role).await?)),
            None => Ok(None),
        }
    }

    /// Finds a role by case-insensitive name with its abilities and passives resolved.
    ///
    /// Children are only resolved when exactly one role matches.
    pub async fn find_complex_by_name(&self, name: &str) -> Result<NameMatch<ComplexRole>, DbErr> {
        match NameMatch::from_matches(self.find_entities_by_name(name).await?) {
            NameMatch::Unique(role) => Ok(NameMatch::Unique(self.assemble(role).await?)),
            NameMatch::Missing => Ok(NameMatch::Missing),
            NameMatch::Ambiguous(n) => Ok(NameMatch::Ambiguous(n)),
        }
    }

    /// Gets every role with abilities and passives resolved, ordered by id.
    ///
    /// Children are fetched with a single batch query per child table regardless of
    /// how many roles exist.
    pub async fn get_all_complex(&self) -> Result<Vec<ComplexRole>, DbErr> {
        let roles = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await?;

        let resolver = ArrayRefResolver::new(self.db);
        let ability_arrays: Vec<&[i32]> = roles.iter().map(|r| r.ability_ids.as_slice()).collect();
        let passive_arrays: Vec<&[i32]> = roles.iter().map(|r| r.passive_ids.as_slice()).collect();

        let abilities = resolver
            .resolve_many::<entity::ability::Entity>(&ability_arrays)
            .await?;
        let passives = resolver
            .resolve_many::<entity::passive::Entity>(&passive_arrays)
            .await?;

        Ok(roles
            .into_iter()
            .zip(abilities)
            .zip(passives)
            .map(|((role, abilities), passives)| {
                ComplexRole::from_resolved(role, abilities, passives)
            })
            .collect())
    }

    async fn find_entities_by_name(&self, name: &str) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(name_matches(entity::role::Column::Name, name))
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    async fn assemble(&self, role: entity::role::Model) -> Result<ComplexRole, DbErr> {
        let resolver = ArrayRefResolver::new(self.db);
        let abilities = resolver
            .resolve::<entity::ability::Entity>(role.ability_ids.as_slice())
            .await?;
        let passives = resolver
            .resolve::<entity::passive::Entity>(role.passive_ids.as_slice())
            .await?;

        Ok(ComplexRole::from_resolved(role, abilities, passives))
    }
}
