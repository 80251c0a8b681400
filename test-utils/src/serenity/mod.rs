//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::role::{create_test_booster_role, create_test_role};
//!
//! let member_role = create_test_role(222222222, "Member", 0x00FF00, 1);
//! let booster_role = create_test_booster_role(333333333, 2);
//! ```

pub mod role;

pub use role::{create_test_booster_role, create_test_role};
