//! Player data repository for database operations.
//!
//! Players are the most frequently written rows during a game. Single-column writes go
//! through [`PlayerRepository::update_field`] with a typed [`PlayerField`]; the `set_*`
//! methods are shorthands for it. The join queries return players together with their
//! role using prefixed column aliases (see [`crate::data::join`]).

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Select,
};

use crate::{
    data::{
        join::{select_prefixed, PlayerWithRoleRow, PLAYER_PREFIX, ROLE_PREFIX},
        name_matches, NameMatch,
    },
    model::player::{CreatePlayerParams, Player, PlayerField, PlayerWithRole, UpdatePlayerParams},
};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `PlayerRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Seats a new player in a game.
    ///
    /// The player starts alive with zero luck and no overrides.
    ///
    /// # Arguments
    /// - `params` - Name, game code, role and seat of the player
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an unknown role
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let now = Utc::now();
        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            game_code: ActiveValue::Set(params.game_code),
            role_id: ActiveValue::Set(params.role_id),
            alive: ActiveValue::Set(true),
            seat: ActiveValue::Set(params.seat),
            luck: ActiveValue::Set(0),
            luck_modifier: ActiveValue::Set(0),
            luck_status: ActiveValue::Set(None),
            alignment_override: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets all players of a game ordered by seat, then id.
    pub async fn get_by_game(&self, game_code: &str) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::GameCode.eq(game_code))
            .order_by_asc(entity::player::Column::Seat)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets the display names of a game's players in seat order.
    pub async fn get_names(&self, game_code: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Name)
            .filter(entity::player::Column::GameCode.eq(game_code))
            .order_by_asc(entity::player::Column::Seat)
            .order_by_asc(entity::player::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Finds players in a game whose name equals `name` ignoring case.
    ///
    /// Names are not unique in the schema, so every match is returned, ordered by id.
    pub async fn find_by_game_and_name(
        &self,
        game_code: &str,
        name: &str,
    ) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::GameCode.eq(game_code))
            .filter(name_matches(entity::player::Column::Name, name))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Finds a player by game and case-insensitive name, joined with its role.
    ///
    /// A player whose role row is missing does not survive the inner join and is
    /// reported as [`NameMatch::Missing`].
    ///
    /// # Returns
    /// - `Ok(NameMatch::Unique(PlayerWithRole))` - Exactly one player matched
    /// - `Ok(NameMatch::Missing)` - No player with a role matched
    /// - `Ok(NameMatch::Ambiguous(n))` - `n` players share the name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_complex_by_game_and_name(
        &self,
        game_code: &str,
        name: &str,
    ) -> Result<NameMatch<PlayerWithRole>, DbErr> {
        let rows = Self::joined_with_role()
            .filter(entity::player::Column::GameCode.eq(game_code))
            .filter(name_matches(entity::player::Column::Name, name))
            .order_by_asc(entity::player::Column::Id)
            .into_model::<PlayerWithRoleRow>()
            .all(self.db)
            .await?;

        Ok(NameMatch::from_matches(rows).map(into_player_with_role))
    }

    /// Gets a player by id joined with its role.
    ///
    /// # Returns
    /// - `Ok(Some(PlayerWithRole))` - Player and role both found
    /// - `Ok(None)` - No such player, or its role row is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_complex_by_id(&self, id: i32) -> Result<Option<PlayerWithRole>, DbErr> {
        let row = Self::joined_with_role()
            .filter(entity::player::Column::Id.eq(id))
            .into_model::<PlayerWithRoleRow>()
            .one(self.db)
            .await?;

        Ok(row.map(into_player_with_role))
    }

    /// Gets every player of a game joined with its role, ordered by seat then id.
    ///
    /// Players whose role row is missing are skipped by the inner join; see
    /// [`Self::find_ids_without_role`].
    pub async fn get_all_complex_by_game(
        &self,
        game_code: &str,
    ) -> Result<Vec<PlayerWithRole>, DbErr> {
        let rows = Self::joined_with_role()
            .filter(entity::player::Column::GameCode.eq(game_code))
            .order_by_asc(entity::player::Column::Seat)
            .order_by_asc(entity::player::Column::Id)
            .into_model::<PlayerWithRoleRow>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(into_player_with_role).collect())
    }

    /// Gets the ids of a game's players whose role row is missing.
    ///
    /// These are exactly the players [`Self::get_all_complex_by_game`] cannot join.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Orphaned player ids in ascending order, empty when every role exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_ids_without_role(&self, game_code: &str) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Id)
            .join(JoinType::LeftJoin, entity::player::Relation::Role.def())
            .filter(entity::player::Column::GameCode.eq(game_code))
            .filter(entity::role::Column::Id.is_null())
            .order_by_asc(entity::player::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Updates the provided fields of a player.
    ///
    /// # Arguments
    /// - `params` - Player id plus the fields to change; `None` leaves a field as is
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - The updated player
    /// - `Ok(None)` - No player with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, DbErr> {
        let Some(existing) = entity::prelude::Player::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(game_code) = params.game_code {
            active.game_code = ActiveValue::Set(game_code);
        }
        if let Some(role_id) = params.role_id {
            active.role_id = ActiveValue::Set(role_id);
        }
        if let Some(alive) = params.alive {
            active.alive = ActiveValue::Set(alive);
        }
        if let Some(seat) = params.seat {
            active.seat = ActiveValue::Set(seat);
        }
        if let Some(luck) = params.luck {
            active.luck = ActiveValue::Set(luck);
        }
        if let Some(luck_modifier) = params.luck_modifier {
            active.luck_modifier = ActiveValue::Set(luck_modifier);
        }
        if let Some(luck_status) = params.luck_status {
            active.luck_status = ActiveValue::Set(luck_status);
        }
        if let Some(alignment_override) = params.alignment_override {
            active.alignment_override = ActiveValue::Set(alignment_override);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Player::from_entity(entity)))
    }

    /// Writes a single field of a player and bumps its `updated_at`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows updated, `0` when the player does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_field(&self, id: i32, field: PlayerField) -> Result<u64, DbErr> {
        let column = field.column();
        let result = entity::prelude::Player::update_many()
            .filter(entity::player::Column::Id.eq(id))
            .col_expr(column, Expr::value(field.into_value()))
            .col_expr(
                entity::player::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_alive(&self, id: i32, alive: bool) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::Alive(alive)).await
    }

    pub async fn set_seat(&self, id: i32, seat: i32) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::Seat(seat)).await
    }

    pub async fn set_luck(&self, id: i32, luck: i32) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::Luck(luck)).await
    }

    pub async fn set_luck_modifier(&self, id: i32, luck_modifier: i32) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::LuckModifier(luck_modifier))
            .await
    }

    pub async fn set_luck_status(
        &self,
        id: i32,
        luck_status: Option<String>,
    ) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::LuckStatus(luck_status))
            .await
    }

    pub async fn set_alignment_override(
        &self,
        id: i32,
        alignment: Option<String>,
    ) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::AlignmentOverride(alignment))
            .await
    }

    /// Assigns a different role. An unknown role id fails with a foreign key violation.
    pub async fn set_role(&self, id: i32, role_id: i32) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::RoleId(role_id)).await
    }

    /// Renames a player.
    ///
    /// Alliance membership is keyed by name and is not updated.
    pub async fn set_name(&self, id: i32, name: String) -> Result<u64, DbErr> {
        self.update_field(id, PlayerField::Name(name)).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every player of a game.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of players deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_game(&self, game_code: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Player::delete_many()
            .filter(entity::player::Column::GameCode.eq(game_code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Player ⋈ role select with every column aliased by entity prefix.
    fn joined_with_role() -> Select<entity::player::Entity> {
        let query = entity::prelude::Player::find().select_only();
        let query = select_prefixed::<entity::player::Entity, _>(query, PLAYER_PREFIX);
        let query = select_prefixed::<entity::role::Entity, _>(query, ROLE_PREFIX);

        query.join(JoinType::InnerJoin, entity::player::Relation::Role.def())
    }
}

fn into_player_with_role(row: PlayerWithRoleRow) -> PlayerWithRole {
    PlayerWithRole::from_entities(row.player, row.role)
}
