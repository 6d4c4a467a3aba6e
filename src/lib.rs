//! Persistence layer for a social-deduction game.
//!
//! Games, players, roles, abilities, passives and alliances live in a relational store
//! accessed through SeaORM. Repositories in [`data`] do thin CRUD; services in
//! [`service`] build the composite read models (player with role, role with resolved
//! abilities and passives) and resolve alliance membership by player name.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
