//! Requested role attributes.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::error::request::RequestError;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));

/// A role color, written and parsed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoleColor(pub u32);

impl RoleColor {
    /// Raw RGB value as used by the Discord API.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for RoleColor {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !HEX_COLOR.is_match(s) {
            return Err(RequestError::InvalidColor);
        }

        u32::from_str_radix(&s[1..], 16)
            .map(RoleColor)
            .map_err(|_| RequestError::InvalidColor)
    }
}

impl TryFrom<String> for RoleColor {
    type Error = RequestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RoleColor> for String {
    fn from(color: RoleColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for RoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FF_FF)
    }
}

/// The full set of attributes a custom role is created or edited with.
///
/// `icon` is the URL of the role icon; `None` means the role has no icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAttributes {
    pub name: String,
    pub color: RoleColor,
    pub icon: Option<String>,
}
