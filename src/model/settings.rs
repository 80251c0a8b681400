//! Per-server role customization settings.
//!
//! `ServerSettings` is the typed form of a `server_settings` row. All defaults are
//! materialized once in [`ServerSettings::new`], so readers never have to fall back to
//! default values themselves.

use sea_orm::DbErr;
use std::collections::BTreeMap;

use crate::{error::request::RequestError, model::role::RoleColor, util::parse::parse_id};

/// Label → value choices offered in [`AttributeMode::FromSelection`] mode.
pub type OptionMap = BTreeMap<String, String>;

/// How boosters may customize one attribute of their role.
///
/// Stored as an integer: `0` always allow, `1` from selection, `2` require review,
/// `3` disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeMode {
    #[default]
    AlwaysAllow,
    FromSelection,
    RequireReview,
    Disabled,
}

impl AttributeMode {
    pub const ALL: [AttributeMode; 4] = [
        AttributeMode::AlwaysAllow,
        AttributeMode::FromSelection,
        AttributeMode::RequireReview,
        AttributeMode::Disabled,
    ];

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::AlwaysAllow),
            1 => Some(Self::FromSelection),
            2 => Some(Self::RequireReview),
            3 => Some(Self::Disabled),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            Self::AlwaysAllow => 0,
            Self::FromSelection => 1,
            Self::RequireReview => 2,
            Self::Disabled => 3,
        }
    }

    /// Human readable name, also used for slash command choices.
    pub fn label(self) -> &'static str {
        match self {
            Self::AlwaysAllow => "Always Allow",
            Self::FromSelection => "From Selection",
            Self::RequireReview => "Require Approval",
            Self::Disabled => "Never Allow",
        }
    }
}

/// A customizable role attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Name,
    Icon,
    Color,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Attribute::Name, Attribute::Icon, Attribute::Color];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Icon => "Icon",
            Self::Color => "Color",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Self::Name => "names",
            Self::Icon => "icons",
            Self::Color => "colors",
        }
    }
}

/// Role customization settings for a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    pub name_setting: AttributeMode,
    pub icon_setting: AttributeMode,
    pub color_setting: AttributeMode,
    /// Restrict submitted names to letters, digits and spaces.
    pub alphanumeric_only: bool,
    pub name_options: OptionMap,
    pub icon_options: OptionMap,
    pub color_options: OptionMap,
    /// Channel review requests are posted to; `None` when unset.
    pub approval_channel: Option<u64>,
}

impl ServerSettings {
    /// Creates the default settings for a guild.
    ///
    /// Every attribute is always allowed, names are unrestricted and no review channel is
    /// configured. The selection maps hold a single placeholder choice each.
    pub fn new(guild_id: u64) -> Self {
        Self {
            guild_id,
            name_setting: AttributeMode::AlwaysAllow,
            icon_setting: AttributeMode::AlwaysAllow,
            color_setting: AttributeMode::AlwaysAllow,
            alphanumeric_only: false,
            name_options: OptionMap::from([("Default".to_string(), "Personal Role".to_string())]),
            icon_options: OptionMap::from([("None".to_string(), "NONE".to_string())]),
            color_options: OptionMap::from([("None".to_string(), "#000000".to_string())]),
            approval_channel: None,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Unparsable id, unknown mode value or malformed option JSON
    pub fn from_entity(entity: entity::server_settings::Model) -> Result<Self, DbErr> {
        let approval_channel = match entity.approval_channel.as_str() {
            "" => None,
            value => Some(parse_id("approval_channel", value)?),
        };

        Ok(Self {
            guild_id: parse_id("guild_id", &entity.guild_id)?,
            name_setting: parse_mode("name_setting", entity.name_setting)?,
            icon_setting: parse_mode("icon_setting", entity.icon_setting)?,
            color_setting: parse_mode("color_setting", entity.color_setting)?,
            alphanumeric_only: entity.alphanumeric_only,
            name_options: parse_options("name_options", &entity.name_options)?,
            icon_options: parse_options("icon_options", &entity.icon_options)?,
            color_options: parse_options("color_options", &entity.color_options)?,
            approval_channel,
        })
    }

    /// Converts the settings into a fully-set active model for insert or update.
    pub fn to_active_model(&self) -> entity::server_settings::ActiveModel {
        use sea_orm::ActiveValue::Set;

        entity::server_settings::ActiveModel {
            guild_id: Set(self.guild_id.to_string()),
            name_setting: Set(self.name_setting.as_i32()),
            icon_setting: Set(self.icon_setting.as_i32()),
            color_setting: Set(self.color_setting.as_i32()),
            alphanumeric_only: Set(self.alphanumeric_only),
            name_options: Set(encode_options(&self.name_options)),
            icon_options: Set(encode_options(&self.icon_options)),
            color_options: Set(encode_options(&self.color_options)),
            approval_channel: Set(self
                .approval_channel
                .map(|id| id.to_string())
                .unwrap_or_default()),
        }
    }

    pub fn mode(&self, attribute: Attribute) -> AttributeMode {
        match attribute {
            Attribute::Name => self.name_setting,
            Attribute::Icon => self.icon_setting,
            Attribute::Color => self.color_setting,
        }
    }

    pub fn set_mode(&mut self, attribute: Attribute, mode: AttributeMode) {
        match attribute {
            Attribute::Name => self.name_setting = mode,
            Attribute::Icon => self.icon_setting = mode,
            Attribute::Color => self.color_setting = mode,
        }
    }

    pub fn options(&self, attribute: Attribute) -> &OptionMap {
        match attribute {
            Attribute::Name => &self.name_options,
            Attribute::Icon => &self.icon_options,
            Attribute::Color => &self.color_options,
        }
    }

    pub fn set_options(&mut self, attribute: Attribute, options: OptionMap) {
        match attribute {
            Attribute::Name => self.name_options = options,
            Attribute::Icon => self.icon_options = options,
            Attribute::Color => self.color_options = options,
        }
    }

    /// Returns the first attribute currently in review mode, if any.
    pub fn attribute_requiring_review(&self) -> Option<Attribute> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| self.mode(*attribute) == AttributeMode::RequireReview)
    }
}

/// Parses user supplied selection choices.
///
/// The expected format is `Label=value` pairs separated by `;`, e.g.
/// `Red=#FF0000; Blue=#0000FF`. Color choices must be valid hex colors and are normalized
/// to `#RRGGBB`.
///
/// # Arguments
/// - `attribute` - Attribute the choices are for
/// - `input` - Raw text from the slash command
///
/// # Returns
/// - `Ok(OptionMap)` - At least one parsed choice
/// - `Err(RequestError::InvalidChoices)` - Empty input, missing `=`, blank label or value,
///   duplicate label, or invalid color
pub fn parse_choices(attribute: Attribute, input: &str) -> Result<OptionMap, RequestError> {
    let mut options = OptionMap::new();

    for entry in input.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((label, value)) = entry.split_once('=') else {
            return Err(RequestError::InvalidChoices(format!(
                "`{}` is missing an `=`",
                entry
            )));
        };

        let (label, value) = (label.trim(), value.trim());
        if label.is_empty() || value.is_empty() {
            return Err(RequestError::InvalidChoices(format!(
                "`{}` needs both a label and a value",
                entry
            )));
        }

        let value = match attribute {
            Attribute::Color => value
                .parse::<RoleColor>()
                .map_err(|_| {
                    RequestError::InvalidChoices(format!("`{}` is not a hex color", value))
                })?
                .to_string(),
            _ => value.to_string(),
        };

        if options.insert(label.to_string(), value).is_some() {
            return Err(RequestError::InvalidChoices(format!(
                "`{}` is listed more than once",
                label
            )));
        }
    }

    if options.is_empty() {
        return Err(RequestError::InvalidChoices(
            "at least one choice is required".to_string(),
        ));
    }

    Ok(options)
}

fn parse_mode(field: &str, value: i32) -> Result<AttributeMode, DbErr> {
    AttributeMode::from_i32(value)
        .ok_or_else(|| DbErr::Custom(format!("Invalid {} value: {}", field, value)))
}

fn parse_options(field: &str, value: &str) -> Result<OptionMap, DbErr> {
    serde_json::from_str(value)
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}

fn encode_options(options: &OptionMap) -> String {
    // A map of strings always serializes
    serde_json::to_string(options).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let settings = ServerSettings::new(42);

        assert_eq!(settings.guild_id, 42);
        for attribute in Attribute::ALL {
            assert_eq!(settings.mode(attribute), AttributeMode::AlwaysAllow);
        }
        assert!(!settings.alphanumeric_only);
        assert_eq!(settings.approval_channel, None);
        assert_eq!(
            settings.name_options.get("Default").map(String::as_str),
            Some("Personal Role")
        );
        assert_eq!(settings.attribute_requiring_review(), None);
    }

    #[test]
    fn mode_integers_round_trip() {
        for mode in AttributeMode::ALL {
            assert_eq!(AttributeMode::from_i32(mode.as_i32()), Some(mode));
        }
        assert_eq!(AttributeMode::from_i32(4), None);
        assert_eq!(AttributeMode::from_i32(-1), None);
    }

    #[test]
    fn entity_conversion_preserves_every_field() {
        let mut settings = ServerSettings::new(123456789);
        settings.icon_setting = AttributeMode::RequireReview;
        settings.color_setting = AttributeMode::FromSelection;
        settings.alphanumeric_only = true;
        settings.color_options = OptionMap::from([("Red".to_string(), "#FF0000".to_string())]);
        settings.approval_channel = Some(555);

        let active = settings.to_active_model();
        let model = entity::server_settings::Model {
            guild_id: active.guild_id.unwrap(),
            name_setting: active.name_setting.unwrap(),
            icon_setting: active.icon_setting.unwrap(),
            color_setting: active.color_setting.unwrap(),
            alphanumeric_only: active.alphanumeric_only.unwrap(),
            name_options: active.name_options.unwrap(),
            icon_options: active.icon_options.unwrap(),
            color_options: active.color_options.unwrap(),
            approval_channel: active.approval_channel.unwrap(),
        };
        assert_eq!(model.approval_channel, "555");

        assert_eq!(ServerSettings::from_entity(model).unwrap(), settings);
    }

    #[test]
    fn rejects_unknown_mode_in_store() {
        let mut active = ServerSettings::new(1).to_active_model();
        active.name_setting = sea_orm::ActiveValue::Set(9);
        let model = entity::server_settings::Model {
            guild_id: active.guild_id.unwrap(),
            name_setting: active.name_setting.unwrap(),
            icon_setting: active.icon_setting.unwrap(),
            color_setting: active.color_setting.unwrap(),
            alphanumeric_only: active.alphanumeric_only.unwrap(),
            name_options: active.name_options.unwrap(),
            icon_options: active.icon_options.unwrap(),
            color_options: active.color_options.unwrap(),
            approval_channel: active.approval_channel.unwrap(),
        };

        assert!(matches!(
            ServerSettings::from_entity(model),
            Err(DbErr::Custom(_))
        ));
    }

    #[test]
    fn parses_choice_lists() {
        let options = parse_choices(Attribute::Name, "Booster = Shiny Booster; VIP=VIP ").unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options["Booster"], "Shiny Booster");
        assert_eq!(options["VIP"], "VIP");
    }

    #[test]
    fn normalizes_color_choices() {
        let options = parse_choices(Attribute::Color, "Sky=#00ccff").unwrap();
        assert_eq!(options["Sky"], "#00CCFF");

        assert!(matches!(
            parse_choices(Attribute::Color, "Sky=blue"),
            Err(RequestError::InvalidChoices(_))
        ));
    }

    #[test]
    fn rejects_bad_choice_lists() {
        for input in ["", " ; ", "NoEquals", "=value", "Label=", "A=1; A=2"] {
            assert!(
                matches!(
                    parse_choices(Attribute::Name, input),
                    Err(RequestError::InvalidChoices(_))
                ),
                "{input:?} should be rejected"
            );
        }
    }
}
