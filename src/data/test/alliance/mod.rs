use crate::{
    data::alliance::{AllianceRepository, MembersUpdate},
    model::alliance::{CreateAllianceParams, UpdateAllianceParams},
};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, alliance::AllianceFactory},
};

mod create;
mod get_by_member;
mod update;
mod update_members;
