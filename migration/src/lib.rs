pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_games_table;
mod m20261001_000002_create_abilities_table;
mod m20261001_000003_create_passives_table;
mod m20261001_000004_create_roles_table;
mod m20261001_000005_create_players_table;
mod m20261001_000006_create_alliances_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_games_table::Migration),
            Box::new(m20261001_000002_create_abilities_table::Migration),
            Box::new(m20261001_000003_create_passives_table::Migration),
            Box::new(m20261001_000004_create_roles_table::Migration),
            Box::new(m20261001_000005_create_players_table::Migration),
            Box::new(m20261001_000006_create_alliances_table::Migration),
        ]
    }
}
