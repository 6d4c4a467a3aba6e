//! SeaORM entity models for the roleboard store.
//!
//! Six tables back the game graph. Role to ability, role to passive and alliance to
//! player relations have no join tables; they live in JSON array columns on the
//! owning row (see [`array`]).

pub mod prelude;

pub mod ability;
pub mod alliance;
pub mod array;
pub mod game;
pub mod passive;
pub mod player;
pub mod role;
