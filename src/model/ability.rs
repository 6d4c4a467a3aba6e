use serde::Serialize;

/// Static ability definition, referenced from roles by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ability {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub charges: i32,
    /// Usable as an "any ability" pick regardless of role.
    pub any_ability: bool,
    /// Name of the role this ability is tied to, empty when shared.
    pub role_specific: String,
    pub categories: Vec<String>,
}

impl Ability {
    pub fn from_entity(entity: entity::ability::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            charges: entity.charges,
            any_ability: entity.any_ability,
            role_specific: entity.role_specific,
            categories: entity.categories.into_inner(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAbilityParams {
    pub name: String,
    pub description: String,
    pub charges: i32,
    pub any_ability: bool,
    pub role_specific: String,
    pub categories: Vec<String>,
}
