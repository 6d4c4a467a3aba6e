use sea_orm::entity::prelude::*;

use crate::array::NameList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alliances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub game_code: String,
    pub description: Option<String>,
    /// Player display names. Name-keyed, so renaming a player does not follow here.
    pub members: NameList,
    pub color: Option<String>,
    /// Bumped on every membership write; used for compare-and-swap updates.
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
