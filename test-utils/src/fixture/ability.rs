//! Ability fixtures for creating in-memory test data.

use entity::{ability, array::NameList};

/// Creates an ability entity model with the given id.
///
/// # Default Values
/// - name: `"Ability {id}"`
/// - charges: `1`
/// - any_ability: `false`
/// - categories: `["investigation"]`
pub fn entity(id: i32) -> ability::Model {
    ability::Model {
        id,
        name: format!("Ability {}", id),
        description: "Test ability description".to_string(),
        charges: 1,
        any_ability: false,
        role_specific: String::new(),
        categories: NameList(vec!["investigation".to_string()]),
    }
}
