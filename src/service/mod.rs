//! Service layer containing the bot's business logic.
//!
//! Services coordinate repositories and the Discord gateway. They never build SQL or touch
//! entity models directly, and they report user mistakes as `RequestError`s so the bot layer
//! can answer with the exact reason.

pub mod boost;
pub mod policy;
pub mod review;
pub mod role_applier;
pub mod role_request;
pub mod settings;
pub mod transfer;

#[cfg(test)]
mod test;
