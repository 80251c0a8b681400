//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each table the
//! bot owns. Repositories use SeaORM entity models internally and return domain models so the
//! service layer never touches database-specific structures.

pub mod booster_role;
pub mod custom_role;
pub mod pending_review;
pub mod server_settings;

#[cfg(test)]
mod test;
