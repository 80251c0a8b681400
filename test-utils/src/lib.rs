//! Turbo Test Utils
//!
//! Provides shared testing utilities for the bot's repository and service tests. This crate
//! offers a builder for creating test contexts backed by in-memory SQLite databases,
//! factories for seeding rows, and helpers for building Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::CustomRole;
//!
//! #[tokio::test]
//! async fn test_custom_role_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(CustomRole)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
