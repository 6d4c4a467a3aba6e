use serde::Serialize;

/// Static passive definition, referenced from roles by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passive {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Passive {
    pub fn from_entity(entity: entity::passive::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePassiveParams {
    pub name: String,
    pub description: String,
}
