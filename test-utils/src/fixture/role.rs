//! Role fixtures for creating in-memory test data.

use entity::{array::IdList, role};

/// Default test role name.
pub const DEFAULT_NAME: &str = "Villager";

/// Default test role alignment.
pub const DEFAULT_ALIGNMENT: &str = "good";

/// Creates a role entity model with default values and empty id arrays.
pub fn entity() -> role::Model {
    entity_with_ids(Vec::new(), Vec::new())
}

/// Creates a role entity model referencing the given ability and passive ids.
pub fn entity_with_ids(ability_ids: Vec<i32>, passive_ids: Vec<i32>) -> role::Model {
    role::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        alignment: DEFAULT_ALIGNMENT.to_string(),
        ability_ids: IdList(ability_ids),
        passive_ids: IdList(passive_ids),
    }
}
