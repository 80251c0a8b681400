mod booster_role;
mod custom_role;
mod pending_review;
mod server_settings;
