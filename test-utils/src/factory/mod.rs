//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let game = factory::create_game(&db).await?;
//! let role = factory::create_role(&db).await?;
//! let player = factory::create_player(&db, &game.game_code, role.id).await?;
//!
//! // Role referencing two abilities and one passive
//! let (role, abilities, passives) =
//!     factory::helpers::create_role_with_children(&db, 2, 1).await?;
//! ```
//!
//! # Available Factories
//!
//! - `game` - Create game entities
//! - `role` - Create role entities (id arrays written verbatim)
//! - `ability` - Create ability entities
//! - `passive` - Create passive entities
//! - `player` - Create player entities
//! - `alliance` - Create alliance entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod ability;
pub mod alliance;
pub mod game;
pub mod helpers;
pub mod passive;
pub mod player;
pub mod role;

pub use ability::create_ability;
pub use alliance::create_alliance;
pub use game::create_game;
pub use passive::create_passive;
pub use player::create_player;
pub use role::create_role;
