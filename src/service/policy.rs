//! Policy checks for requested role changes.
//!
//! [`check`] evaluates a request against a server's settings and returns every raised
//! [`PolicyFlag`] in a fixed order. [`decide`] turns those flags into what the caller should
//! do: apply the change, reject it with one specific reason, or send it for review.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{
    policy::PolicyFlag,
    role::RoleColor,
    settings::{Attribute, AttributeMode, ServerSettings},
};

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").expect("valid alphanumeric regex"));

/// A role change as seen by the policy checker.
///
/// `name` and `color` are the final values the role would get, including values filled in
/// from the existing role. The `submitted_*` flags say which attributes the member actually
/// asked to change.
#[derive(Debug, Clone)]
pub struct PolicyRequest<'a> {
    pub name: &'a str,
    pub icon: Option<&'a str>,
    pub color: RoleColor,
    pub submitted_name: bool,
    pub submitted_icon: bool,
    pub submitted_color: bool,
}

/// What to do with a checked request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    /// No flags were raised.
    Apply,
    /// Only review flags were raised; the listed attributes need a moderator's approval.
    Review(Vec<PolicyFlag>),
    /// The request is refused for this reason.
    Reject(PolicyFlag),
}

/// Evaluates a request against server settings.
///
/// Flags are evaluated independently in this order: alphanumeric, unsupported name,
/// unsupported icon, name review, icon review, names disabled, icons disabled, then
/// unsupported color, color review and colors disabled.
///
/// # Arguments
/// - `settings` - Settings of the guild the request was made in
/// - `request` - The requested change
///
/// # Returns
/// - `Vec<PolicyFlag>` - Raised flags; empty when the change may be applied immediately
pub fn check(settings: &ServerSettings, request: &PolicyRequest<'_>) -> Vec<PolicyFlag> {
    let mut flags = Vec::new();

    let name_mode = settings.mode(Attribute::Name);
    let icon_mode = settings.mode(Attribute::Icon);
    let color_mode = settings.mode(Attribute::Color);

    if settings.alphanumeric_only && request.submitted_name && !ALPHANUMERIC.is_match(request.name)
    {
        flags.push(PolicyFlag::Alphanumeric);
    }

    if name_mode == AttributeMode::FromSelection
        && !settings
            .options(Attribute::Name)
            .values()
            .any(|value| value == request.name)
    {
        flags.push(PolicyFlag::UnsupportedName);
    }

    if icon_mode == AttributeMode::FromSelection && request.submitted_icon {
        let icon = request.icon.unwrap_or_default();
        if !settings
            .options(Attribute::Icon)
            .values()
            .any(|value| value == icon)
        {
            flags.push(PolicyFlag::UnsupportedIcon);
        }
    }

    if name_mode == AttributeMode::RequireReview && request.submitted_name {
        flags.push(PolicyFlag::NameRequiresReview);
    }
    if icon_mode == AttributeMode::RequireReview && request.submitted_icon {
        flags.push(PolicyFlag::IconRequiresReview);
    }
    if name_mode == AttributeMode::Disabled && request.submitted_name {
        flags.push(PolicyFlag::NamesDisabled);
    }
    if icon_mode == AttributeMode::Disabled && request.submitted_icon {
        flags.push(PolicyFlag::IconsDisabled);
    }

    if color_mode == AttributeMode::FromSelection && request.submitted_color {
        let color = request.color.to_string();
        if !settings
            .options(Attribute::Color)
            .values()
            .any(|value| value.eq_ignore_ascii_case(&color))
        {
            flags.push(PolicyFlag::UnsupportedColor);
        }
    }
    if color_mode == AttributeMode::RequireReview && request.submitted_color {
        flags.push(PolicyFlag::ColorRequiresReview);
    }
    if color_mode == AttributeMode::Disabled && request.submitted_color {
        flags.push(PolicyFlag::ColorsDisabled);
    }

    flags
}

/// Chooses the outcome for a set of raised flags.
///
/// Any rejecting flag wins over review flags. When several rejecting flags are raised the
/// one reported is picked by [`PolicyFlag::REJECTION_PRIORITY`]: disabled attributes first,
/// then alphanumeric, unsupported name, unsupported icon and unsupported color.
pub fn decide(flags: &[PolicyFlag]) -> PolicyDecision {
    if flags.is_empty() {
        return PolicyDecision::Apply;
    }

    if let Some(flag) = PolicyFlag::REJECTION_PRIORITY
        .into_iter()
        .find(|flag| flags.contains(flag))
    {
        return PolicyDecision::Reject(flag);
    }

    PolicyDecision::Review(flags.iter().copied().filter(PolicyFlag::is_review).collect())
}
