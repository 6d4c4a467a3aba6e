use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passive::Table)
                    .if_not_exists()
                    .col(pk_auto(Passive::Id))
                    .col(string(Passive::Name))
                    .col(text(Passive::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passive::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passive {
    #[sea_orm(iden = "passives")]
    Table,
    Id,
    Name,
    Description,
}
