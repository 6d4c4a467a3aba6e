//! Resolution of embedded id arrays into child rows.
//!
//! Roles store their abilities and passives as arrays of ids rather than through a join
//! table. The store does not enforce that those ids exist, so resolution reports the ids
//! it could not match next to the rows it found instead of failing.

use std::collections::{BTreeSet, HashMap, HashSet};

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// A table whose rows are referenced by id from an array column elsewhere.
pub trait ArrayReferenced: EntityTrait {
    /// Primary key column matched against the referencing array.
    fn id_column() -> Self::Column;

    fn id_of(model: &Self::Model) -> i32;
}

impl ArrayReferenced for entity::ability::Entity {
    fn id_column() -> Self::Column {
        entity::ability::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }
}

impl ArrayReferenced for entity::passive::Entity {
    fn id_column() -> Self::Column {
        entity::passive::Column::Id
    }

    fn id_of(model: &Self::Model) -> i32 {
        model.id
    }
}

/// Result of resolving one id array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Matched rows ordered by first appearance of their id, duplicates collapsed.
    pub items: Vec<T>,
    /// Distinct ids with no matching row, in input order.
    pub unresolved: Vec<i32>,
}

impl<T> Default for Resolved<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            unresolved: Vec::new(),
        }
    }
}

impl<T: Clone> Resolved<T> {
    /// Builds the result for `ids` from rows already fetched and keyed by id.
    pub fn from_lookup(ids: &[i32], lookup: &HashMap<i32, T>) -> Self {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut resolved = Self::default();

        for &id in ids {
            if !seen.insert(id) {
                continue;
            }
            match lookup.get(&id) {
                Some(item) => resolved.items.push(item.clone()),
                None => resolved.unresolved.push(id),
            }
        }

        resolved
    }
}

impl<T> Resolved<T> {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves id arrays against an [`ArrayReferenced`] table.
///
/// Works over any connection, so it can run inside the transaction of the aggregation
/// that needs it.
pub struct ArrayRefResolver<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArrayRefResolver<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves a single id array.
    ///
    /// # Returns
    /// - `Ok(Resolved)` - Matched rows plus unmatched ids; empty without a query for empty input
    /// - `Err(DbErr)` - Database error during the lookup
    pub async fn resolve<E: ArrayReferenced>(
        &self,
        ids: &[i32],
    ) -> Result<Resolved<E::Model>, DbErr>
    where
        E::Model: Clone,
    {
        let mut resolved = self.resolve_many::<E>(&[ids]).await?;
        Ok(resolved.pop().unwrap_or_default())
    }

    /// Resolves several id arrays with one `IN (...)` query over the union of their ids.
    ///
    /// The output has one entry per input array, in the same order.
    ///
    /// # Returns
    /// - `Ok(Vec<Resolved>)` - One result per input array
    /// - `Err(DbErr)` - Database error during the lookup
    pub async fn resolve_many<E: ArrayReferenced>(
        &self,
        arrays: &[&[i32]],
    ) -> Result<Vec<Resolved<E::Model>>, DbErr>
    where
        E::Model: Clone,
    {
        let all_ids: BTreeSet<i32> = arrays.iter().flat_map(|ids| ids.iter().copied()).collect();

        let lookup: HashMap<i32, E::Model> = if all_ids.is_empty() {
            HashMap::new()
        } else {
            E::find()
                .filter(E::id_column().is_in(all_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|model| (E::id_of(&model), model))
                .collect()
        };

        Ok(arrays
            .iter()
            .map(|ids| Resolved::from_lookup(ids, &lookup))
            .collect())
    }
}
