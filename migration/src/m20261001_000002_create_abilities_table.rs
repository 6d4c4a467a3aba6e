use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ability::Table)
                    .if_not_exists()
                    .col(pk_auto(Ability::Id))
                    .col(string(Ability::Name))
                    .col(text(Ability::Description))
                    .col(integer(Ability::Charges).default(0))
                    .col(boolean(Ability::AnyAbility).default(false))
                    .col(string(Ability::RoleSpecific).default(""))
                    .col(json(Ability::Categories))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ability {
    #[sea_orm(iden = "abilities")]
    Table,
    Id,
    Name,
    Description,
    Charges,
    AnyAbility,
    RoleSpecific,
    Categories,
}
