//! Alliance data repository for database operations.
//!
//! Membership is a JSON array of player display names on the alliance row. Member
//! lookups filter in the store by expanding that array with the backend's JSON table
//! function and comparing each element after `lower()`.

use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait, Func, Query, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::array::NameList;

use crate::model::alliance::{
    normalize_members, Alliance, CreateAllianceParams, UpdateAllianceParams,
};

/// Outcome of a membership write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembersUpdate {
    /// Write applied; holds the alliance as stored afterwards.
    Updated(Alliance),
    NotFound,
    /// The stored version differed from the expected one. Nothing was written.
    Conflict { actual: i32 },
}

/// Repository providing database operations for alliances.
pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    /// Creates a new AllianceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new alliance at version `1`.
    ///
    /// Members are normalized before they are stored.
    ///
    /// # Returns
    /// - `Ok(Alliance)` - The created alliance
    /// - `Err(DbErr)` - Database error, including a unique violation on the name
    pub async fn create(&self, params: CreateAllianceParams) -> Result<Alliance, DbErr> {
        let entity = entity::alliance::ActiveModel {
            name: ActiveValue::Set(params.name),
            game_code: ActiveValue::Set(params.game_code),
            description: ActiveValue::Set(params.description),
            members: ActiveValue::Set(NameList(normalize_members(params.members))),
            color: ActiveValue::Set(params.color),
            version: ActiveValue::Set(1),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Alliance::from_entity(entity))
    }

    /// Creates an empty alliance with only a name.
    pub async fn create_with_name(&self, name: String, game_code: String) -> Result<Alliance, DbErr> {
        self.create(CreateAllianceParams {
            name,
            game_code,
            description: None,
            members: Vec::new(),
            color: None,
        })
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Alliance>, DbErr> {
        let entity = entity::prelude::Alliance::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Alliance::from_entity))
    }

    /// Finds an alliance by its exact, globally unique name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Alliance>, DbErr> {
        let entity = entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Alliance::from_entity))
    }

    /// Gets all alliances ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Alliance>, DbErr> {
        let entities = entity::prelude::Alliance::find()
            .order_by_asc(entity::alliance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Alliance::from_entity).collect())
    }

    /// Gets all alliances of a game ordered by id.
    pub async fn get_all_by_game(&self, game_code: &str) -> Result<Vec<Alliance>, DbErr> {
        let entities = entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::GameCode.eq(game_code))
            .order_by_asc(entity::alliance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Alliance::from_entity).collect())
    }

    /// Gets every alliance listing `player_name` as a member, across all games.
    ///
    /// # Returns
    /// - `Ok(Vec<Alliance>)` - Matching alliances ordered by id, empty when none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_member(&self, player_name: &str) -> Result<Vec<Alliance>, DbErr> {
        let condition = member_condition(self.db.get_database_backend(), player_name)?;

        let entities = entity::prelude::Alliance::find()
            .filter(condition)
            .order_by_asc(entity::alliance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Alliance::from_entity).collect())
    }

    /// Gets the alliances of one game listing `player_name` as a member.
    pub async fn get_by_game_and_member(
        &self,
        game_code: &str,
        player_name: &str,
    ) -> Result<Vec<Alliance>, DbErr> {
        let condition = member_condition(self.db.get_database_backend(), player_name)?;

        let entities = entity::prelude::Alliance::find()
            .filter(entity::alliance::Column::GameCode.eq(game_code))
            .filter(condition)
            .order_by_asc(entity::alliance::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Alliance::from_entity).collect())
    }

    /// Updates the descriptive fields of an alliance. Membership and version are untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Alliance))` - The updated alliance
    /// - `Ok(None)` - No alliance with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateAllianceParams) -> Result<Option<Alliance>, DbErr> {
        let Some(existing) = entity::prelude::Alliance::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(color) = params.color {
            active.color = ActiveValue::Set(color);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Alliance::from_entity(entity)))
    }

    /// Replaces the member list of an alliance and bumps its version.
    ///
    /// The replace, the version bump and the optional version check are one UPDATE
    /// statement, so two writers can never both succeed against the same version.
    ///
    /// # Arguments
    /// - `id` - Alliance id
    /// - `members` - New member names; normalized before they are stored
    /// - `expected_version` - When `Some`, only write if the stored version matches
    ///
    /// # Returns
    /// - `Ok(MembersUpdate::Updated)` - Write applied
    /// - `Ok(MembersUpdate::NotFound)` - No alliance with that id
    /// - `Ok(MembersUpdate::Conflict)` - Version check failed
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_members(
        &self,
        id: i32,
        members: Vec<String>,
        expected_version: Option<i32>,
    ) -> Result<MembersUpdate, DbErr> {
        let mut update = entity::prelude::Alliance::update_many()
            .col_expr(
                entity::alliance::Column::Members,
                Expr::value(NameList(normalize_members(members))),
            )
            .col_expr(
                entity::alliance::Column::Version,
                Expr::col(entity::alliance::Column::Version).add(1),
            )
            .filter(entity::alliance::Column::Id.eq(id));

        if let Some(version) = expected_version {
            update = update.filter(entity::alliance::Column::Version.eq(version));
        }

        let mut updated = update.exec_with_returning(self.db).await?;

        if let Some(entity) = updated.pop() {
            return Ok(MembersUpdate::Updated(Alliance::from_entity(entity)));
        }

        match entity::prelude::Alliance::find_by_id(id).one(self.db).await? {
            Some(current) => Ok(MembersUpdate::Conflict {
                actual: current.version,
            }),
            None => Ok(MembersUpdate::NotFound),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Alliance::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every alliance of a game.
    pub async fn delete_by_game(&self, game_code: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Alliance::delete_many()
            .filter(entity::alliance::Column::GameCode.eq(game_code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Builds `EXISTS (SELECT 1 FROM <json table fn>(alliances.members) AS m WHERE lower(m.value) = ?)`.
///
/// SQLite expands the array with `json_each`, Postgres with `json_array_elements_text`;
/// both name the element column `value`.
pub(crate) fn member_condition(backend: DbBackend, player_name: &str) -> Result<SimpleExpr, DbErr> {
    let expand = match backend {
        DbBackend::Sqlite => "json_each",
        DbBackend::Postgres => "json_array_elements_text",
        other => {
            return Err(DbErr::Custom(format!(
                "member lookup is not supported on {:?}",
                other
            )))
        }
    };

    let element = Alias::new("m");
    let members = Query::select()
        .expr(Expr::val(1))
        .from_function(
            Func::cust(Alias::new(expand)).arg(Expr::col((
                entity::alliance::Column::Members.entity_name(),
                entity::alliance::Column::Members,
            ))),
            element.clone(),
        )
        .and_where(
            Expr::expr(Func::lower(Expr::col((element, Alias::new("value")))))
                .eq(player_name.to_lowercase()),
        )
        .to_owned();

    Ok(Expr::exists(members))
}
