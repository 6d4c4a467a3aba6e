//! Database repository layer for all game entities.
//!
//! Each repository wraps a borrowed connection, which may be a plain
//! `DatabaseConnection` or an open transaction, and converts entity models to domain
//! models at this boundary. Repositories return `DbErr`; mapping to [`StoreError`]
//! happens in the service layer where the operation name is known.
//!
//! [`StoreError`]: crate::error::StoreError

pub mod ability;
pub mod alliance;
pub mod game;
pub mod join;
pub mod passive;
pub mod player;
pub mod resolver;
pub mod role;


use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    ColumnTrait,
};

/// Outcome of a lookup by display name, which the schema does not keep unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch<T> {
    Missing,
    Unique(T),
    /// More than one row matched; holds the number of matches.
    Ambiguous(usize),
}

impl<T> NameMatch<T> {
    pub fn from_matches(mut matches: Vec<T>) -> Self {
        match matches.len() {
            0 => Self::Missing,
            1 => matches.pop().map_or(Self::Missing, Self::Unique),
            n => Self::Ambiguous(n),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NameMatch<U> {
        match self {
            Self::Missing => NameMatch::Missing,
            Self::Unique(value) => NameMatch::Unique(f(value)),
            Self::Ambiguous(n) => NameMatch::Ambiguous(n),
        }
    }
}

/// Case-insensitive equality on a name column, table-qualified so it is safe in joins.
pub(crate) fn name_matches<C: ColumnTrait>(column: C, name: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((column.entity_name(), column)))).eq(name.to_lowercase())
}
