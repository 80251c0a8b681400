//! Error types and user-facing error replies.
//!
//! `AppError` is the top-level error type returned by services and repositories. It wraps
//! the domain-specific errors in this module and knows how to render itself as the title and
//! description of an ephemeral reply, so every interaction can be answered even when the
//! handler fails.

pub mod config;
pub mod internal;
pub mod request;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, request::RequestError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Request errors carry the exact
/// message shown to the user, platform errors are shown with their raw text, and store or
/// internal errors are logged and replaced with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Validation or policy error caused by the user's input.
    ///
    /// Reported ephemerally with the specific reason. Never changes any state.
    #[error(transparent)]
    RequestErr(#[from] RequestError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error from the delayed message cleanup jobs.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected internal state such as a malformed pending review payload.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Builds the title and description shown to the user for this error.
    ///
    /// Request errors are shown verbatim. Discord errors include the raw error text since
    /// they usually explain what went wrong (missing permissions, invalid icon, etc.). All
    /// other errors are logged and replaced with a generic message.
    ///
    /// # Returns
    /// - `(title, description)` - Text for an error embed
    pub fn user_facing(&self) -> (String, String) {
        match self {
            Self::RequestErr(err) => (err.title().to_string(), err.to_string()),
            Self::DiscordErr(err) => (
                "Error".to_string(),
                format!(
                    "An error occurred while talking to Discord. Please try again later.\n```{}```",
                    err
                ),
            ),
            err => {
                tracing::error!("{}", err);
                (
                    "Error".to_string(),
                    "An error occurred! Please try again later.".to_string(),
                )
            }
        }
    }
}
