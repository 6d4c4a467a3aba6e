//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and codes in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game, a role without abilities, and one player seated in that game.
///
/// # Returns
/// - `Ok((game, role, player))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::game::Model,
        entity::role::Model,
        entity::player::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::create_game(db).await?;
    let role = crate::factory::role::create_role(db).await?;
    let player = crate::factory::player::create_player(db, &game.game_code, role.id).await?;

    Ok((game, role, player))
}

/// Creates `abilities` abilities and `passives` passives plus a role referencing all of them.
///
/// # Returns
/// - `Ok((role, abilities, passives))` - Role and the children in the order they are referenced
/// - `Err(DbErr)` - Database error during creation
pub async fn create_role_with_children(
    db: &DatabaseConnection,
    abilities: usize,
    passives: usize,
) -> Result<
    (
        entity::role::Model,
        Vec<entity::ability::Model>,
        Vec<entity::passive::Model>,
    ),
    DbErr,
> {
    let mut created_abilities = Vec::with_capacity(abilities);
    for _ in 0..abilities {
        created_abilities.push(crate::factory::ability::create_ability(db).await?);
    }

    let mut created_passives = Vec::with_capacity(passives);
    for _ in 0..passives {
        created_passives.push(crate::factory::passive::create_passive(db).await?);
    }

    let role = crate::factory::role::RoleFactory::new(db)
        .ability_ids(created_abilities.iter().map(|a| a.id).collect())
        .passive_ids(created_passives.iter().map(|p| p.id).collect())
        .build()
        .await?;

    Ok((role, created_abilities, created_passives))
}
