//! Passive fixtures for creating in-memory test data.

use entity::passive;

/// Creates a passive entity model with the given id.
pub fn entity(id: i32) -> passive::Model {
    passive::Model {
        id,
        name: format!("Passive {}", id),
        description: "Test passive description".to_string(),
    }
}
