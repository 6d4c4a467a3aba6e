use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alliance::Table)
                    .if_not_exists()
                    .col(pk_auto(Alliance::Id))
                    .col(string_uniq(Alliance::Name))
                    .col(string(Alliance::GameCode))
                    .col(text_null(Alliance::Description))
                    .col(json(Alliance::Members))
                    .col(string_null(Alliance::Color))
                    .col(integer(Alliance::Version).default(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alliances_game_code")
                    .table(Alliance::Table)
                    .col(Alliance::GameCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alliance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alliance {
    #[sea_orm(iden = "alliances")]
    Table,
    Id,
    Name,
    GameCode,
    Description,
    Members,
    Color,
    Version,
}
