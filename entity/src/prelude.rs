pub use super::ability::Entity as Ability;
pub use super::alliance::Entity as Alliance;
pub use super::game::Entity as Game;
pub use super::passive::Entity as Passive;
pub use super::player::Entity as Player;
pub use super::role::Entity as Role;
