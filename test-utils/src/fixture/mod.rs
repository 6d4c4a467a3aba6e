//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversion and assembly logic that runs over entity models.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let role = fixture::role::entity();
//! let seer = fixture::role::entity_with_ids(vec![1, 2], vec![]);
//! ```

pub mod ability;
pub mod alliance;
pub mod game;
pub mod passive;
pub mod player;
pub mod role;

pub use ability::entity as ability_entity;
pub use alliance::entity as alliance_entity;
pub use game::entity as game_entity;
pub use passive::entity as passive_entity;
pub use player::entity as player_entity;
pub use role::entity as role_entity;
