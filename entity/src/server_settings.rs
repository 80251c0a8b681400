use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub name_setting: i32,
    pub icon_setting: i32,
    pub color_setting: i32,
    pub alphanumeric_only: bool,
    pub name_options: String,
    pub icon_options: String,
    pub color_options: String,
    pub approval_channel: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
