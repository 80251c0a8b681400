pub use super::booster_role::Entity as BoosterRole;
pub use super::custom_role::Entity as CustomRole;
pub use super::pending_review::Entity as PendingReview;
pub use super::server_settings::Entity as ServerSettings;
