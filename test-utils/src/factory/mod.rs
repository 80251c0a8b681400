//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting rows with sensible defaults, reducing
//! boilerplate in tests. Each table has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let record = factory::create_custom_role(&db, 1, 2).await?;
//!     let review = factory::pending_review::PendingReviewFactory::new(&db)
//!         .guild_id(1)
//!         .requester_id(2)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `server_settings` - Create server settings rows
//! - `custom_role` - Create custom role records
//! - `booster_role` - Create legacy booster role mappings
//! - `pending_review` - Create pending review rows
//! - `helpers` - Unique id generation

pub mod booster_role;
pub mod custom_role;
pub mod helpers;
pub mod pending_review;
pub mod server_settings;

pub use booster_role::create_booster_role;
pub use custom_role::create_custom_role;
pub use pending_review::create_pending_review;
pub use server_settings::create_server_settings;
