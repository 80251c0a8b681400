use crate::{
    data::custom_role::CustomRoleRepository,
    model::{
        custom_role::UpsertCustomRoleParam,
        role::{RoleAttributes, RoleColor},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::custom_role::CustomRoleFactory};

mod delete;
mod find;
mod upsert;
