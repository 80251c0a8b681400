use thiserror::Error;

use crate::model::{policy::PolicyFlag, settings::Attribute};

/// Errors caused by a user's request.
///
/// The display text of each variant is the exact description shown to the user in an
/// ephemeral reply, and `title()` supplies the embed title. None of these errors change any
/// stored state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("This command can only be used within a server.")]
    NotInGuild,

    #[error("You must be a server booster to use this command!")]
    NotBooster,

    #[error("You're already waiting for a review!")]
    AlreadyPending,

    #[error("You do not have permission to use this command!")]
    MissingPermission,

    #[error("Please provide a valid role name!")]
    MissingName,

    #[error("Please provide a valid hexadecimal role color!\nFor example, `#00CCFF`.")]
    InvalidColor,

    #[error("Please use a valid role icon that is under 2048 kilobytes in size!")]
    InvalidIcon,

    #[error("{}", .0.message())]
    Rejected(PolicyFlag),

    #[error(
        "You were flagged for review, but this server has no review channel!\nPlease inform a staff member ASAP!"
    )]
    NoReviewChannel,

    #[error("Set a review channel with `/settings review` before requiring review for {}.", .0.plural())]
    ReviewChannelRequired(Attribute),

    #[error("The review channel cannot be removed while {} still require review.", .0.plural())]
    ReviewStillRequired(Attribute),

    #[error("Invalid choices: {0}\nUse the format `Label=value; Other Label=other value`.")]
    InvalidChoices(String),

    #[error("The start role must be higher than the end role!")]
    StartBelowEnd,

    #[error("There are no roles between the start and end roles!")]
    NoRolesInRange,

    #[error("That role could not be found in this server.")]
    UnknownRole,
}

impl RequestError {
    /// Embed title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotBooster | Self::MissingPermission => "Access Denied",
            Self::AlreadyPending => "Woah there, slow down!",
            Self::InvalidIcon => "Invalid Icon",
            Self::Rejected(flag) => flag.title(),
            Self::NoReviewChannel => "Error",
            _ => "Invalid Input",
        }
    }
}
