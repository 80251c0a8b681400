//! SeaORM entities for the bot's SQLite store.

pub mod prelude;

pub mod booster_role;
pub mod custom_role;
pub mod pending_review;
pub mod server_settings;
