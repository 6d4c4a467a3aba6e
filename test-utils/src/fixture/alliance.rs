//! Alliance fixtures for creating in-memory test data.

use entity::{alliance, array::NameList};

use crate::fixture::game::DEFAULT_GAME_CODE;

/// Creates an alliance entity model with the given members and version `1`.
pub fn entity(members: &[&str]) -> alliance::Model {
    alliance::Model {
        id: 1,
        name: "Test Alliance".to_string(),
        game_code: DEFAULT_GAME_CODE.to_string(),
        description: None,
        members: NameList(members.iter().map(|m| m.to_string()).collect()),
        color: Some("#aa3333".to_string()),
        version: 1,
    }
}
