//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that
//! SeaORM types (array column newtypes, active models) never leak into callers.
//! They serialize with serde for whatever transport sits upstream.

pub mod ability;
pub mod alliance;
pub mod game;
pub mod passive;
pub mod player;
pub mod role;

/// Display-name comparison used by every name-keyed lookup: exact after case folding.
///
/// Player lookup, role lookup and alliance membership all go through this so the three
/// cannot drift apart.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
