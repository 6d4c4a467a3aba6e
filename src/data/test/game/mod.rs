use crate::data::game::GameRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_by_code;
mod get_by_code;
