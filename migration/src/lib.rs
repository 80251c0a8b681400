pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_server_settings_table;
mod m20260901_000002_create_custom_role_table;
mod m20260901_000003_create_booster_role_table;
mod m20260902_000004_create_pending_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_server_settings_table::Migration),
            Box::new(m20260901_000002_create_custom_role_table::Migration),
            Box::new(m20260901_000003_create_booster_role_table::Migration),
            Box::new(m20260902_000004_create_pending_review_table::Migration),
        ]
    }
}
