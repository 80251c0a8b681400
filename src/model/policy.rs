//! Policy flags raised against a requested role change.

use crate::model::settings::Attribute;

/// A single finding of the policy checker.
///
/// Flags are either rejections (the request is refused with `message()`) or review markers
/// (the request may proceed but a moderator has to approve it first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyFlag {
    Alphanumeric,
    UnsupportedName,
    UnsupportedIcon,
    NameRequiresReview,
    IconRequiresReview,
    NamesDisabled,
    IconsDisabled,
    UnsupportedColor,
    ColorRequiresReview,
    ColorsDisabled,
}

impl PolicyFlag {
    /// Order in which rejecting flags are reported when several are raised.
    pub const REJECTION_PRIORITY: [PolicyFlag; 7] = [
        PolicyFlag::NamesDisabled,
        PolicyFlag::IconsDisabled,
        PolicyFlag::ColorsDisabled,
        PolicyFlag::Alphanumeric,
        PolicyFlag::UnsupportedName,
        PolicyFlag::UnsupportedIcon,
        PolicyFlag::UnsupportedColor,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Self::Alphanumeric => {
                "Your role name must only contain alphanumeric characters (0-9, A-Z, a-z, and spaces)."
            }
            Self::UnsupportedName => "Your role name is unsupported. Please try a different name.",
            Self::UnsupportedIcon => "Your role icon is unsupported. Please try a different icon.",
            Self::UnsupportedColor => {
                "Your role color is unsupported. Please try a different color."
            }
            Self::NameRequiresReview => "Name",
            Self::IconRequiresReview => "Icon",
            Self::ColorRequiresReview => "Color",
            Self::NamesDisabled => "Custom role names are disabled on this server.",
            Self::IconsDisabled => "Custom role icons are disabled on this server.",
            Self::ColorsDisabled => "Custom role colors are disabled on this server.",
        }
    }

    /// Embed title used when this flag rejects a request.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Alphanumeric | Self::UnsupportedName => "Invalid Name",
            Self::UnsupportedIcon => "Invalid Icon",
            Self::UnsupportedColor => "Invalid Color",
            _ => "Invalid Input",
        }
    }

    /// Attribute this flag was raised for.
    pub fn attribute(&self) -> Attribute {
        match self {
            Self::Alphanumeric
            | Self::UnsupportedName
            | Self::NameRequiresReview
            | Self::NamesDisabled => Attribute::Name,
            Self::UnsupportedIcon | Self::IconRequiresReview | Self::IconsDisabled => {
                Attribute::Icon
            }
            Self::UnsupportedColor | Self::ColorRequiresReview | Self::ColorsDisabled => {
                Attribute::Color
            }
        }
    }

    pub fn is_review(&self) -> bool {
        matches!(
            self,
            Self::NameRequiresReview | Self::IconRequiresReview | Self::ColorRequiresReview
        )
    }

    pub fn is_rejection(&self) -> bool {
        !self.is_review()
    }
}
