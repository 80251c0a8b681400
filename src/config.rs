use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://turbo.db?mode=rwc";
const DEFAULT_ICON_BOOST_REQUIREMENT: u64 = 7;
const DEFAULT_REVIEW_DELETE_DELAY_SECS: u64 = 5;

pub struct Config {
    pub discord_bot_token: String,
    pub discord_application_id: u64,

    pub database_url: String,

    /// Boosts a guild needs before role icons are set.
    pub icon_boost_requirement: u64,
    /// Delay before a resolved review message is deleted.
    pub review_delete_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is not set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable could not be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_bot_token = required("DISCORD_BOT_TOKEN")?;
        let application_id = required("DISCORD_APPLICATION_ID")?;
        let discord_application_id =
            match parse_u64("DISCORD_APPLICATION_ID", application_id.clone())? {
                0 => {
                    return Err(ConfigError::InvalidEnvVar {
                        name: "DISCORD_APPLICATION_ID".to_string(),
                        value: application_id,
                    }
                    .into())
                }
                id => id,
            };

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let icon_boost_requirement = match lookup("ICON_BOOST_REQUIREMENT") {
            Some(value) => parse_u64("ICON_BOOST_REQUIREMENT", value)?,
            None => DEFAULT_ICON_BOOST_REQUIREMENT,
        };
        let review_delete_delay = match lookup("REVIEW_DELETE_DELAY_SECS") {
            Some(value) => parse_u64("REVIEW_DELETE_DELAY_SECS", value)?,
            None => DEFAULT_REVIEW_DELETE_DELAY_SECS,
        };

        Ok(Self {
            discord_bot_token,
            discord_application_id,
            database_url,
            icon_boost_requirement,
            review_delete_delay: Duration::from_secs(review_delete_delay),
        })
    }
}

fn parse_u64(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
