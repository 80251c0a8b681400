//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that the
//! service and bot layers never depend on database-specific structures. String snowflakes
//! from the store are parsed into `u64` here, and JSON columns are decoded into typed maps.

pub mod custom_role;
pub mod pending_review;
pub mod policy;
pub mod role;
pub mod settings;
