//! Discord bot integration.
//!
//! The bot answers the `/customrole`, `/settings` and `/transfer` slash commands, handles the
//! approve and deny buttons of review messages, and reacts to members gaining or losing their
//! boost. Command and component handlers only translate between Discord payloads and the
//! services in [`crate::service`]; all role logic lives there.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and role data for the cache
//! - `GUILD_MESSAGES` - Receive message deletions to discard orphaned reviews
//! - `GUILD_MEMBERS` - Receive member updates to track boost status (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod component;
pub mod handler;
pub mod reply;
pub mod start;
