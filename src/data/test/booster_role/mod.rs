use crate::data::booster_role::BoosterRoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::create_booster_role};

mod delete;
mod find_role_id;
