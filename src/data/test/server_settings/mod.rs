use crate::{
    data::server_settings::ServerSettingsRepository,
    model::settings::{AttributeMode, OptionMap, ServerSettings},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::server_settings::ServerSettingsFactory};

mod find;
mod get_or_create;
mod save;
