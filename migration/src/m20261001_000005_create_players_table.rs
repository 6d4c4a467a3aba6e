use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000004_create_roles_table::Role;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string(Player::GameCode))
                    .col(integer(Player::RoleId))
                    .col(boolean(Player::Alive).default(true))
                    .col(integer(Player::Seat).default(0))
                    .col(integer(Player::Luck).default(0))
                    .col(integer(Player::LuckModifier).default(0))
                    .col(string_null(Player::LuckStatus))
                    .col(string_null(Player::AlignmentOverride))
                    .col(
                        timestamp_with_time_zone(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Player::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_role_id")
                            .from(Player::Table, Player::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_players_game_code")
                    .table(Player::Table)
                    .col(Player::GameCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    Name,
    GameCode,
    RoleId,
    Alive,
    Seat,
    Luck,
    LuckModifier,
    LuckStatus,
    AlignmentOverride,
    CreatedAt,
    UpdatedAt,
}
