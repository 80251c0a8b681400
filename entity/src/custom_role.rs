use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "custom_role")]
pub struct Model {
    /// `{guild_id}-{user_id}`
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub guild_id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub role_id: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
