//! Embeds used to answer interactions.

use serenity::all::{CreateEmbed, Mention, RoleId};

use crate::{
    error::AppError,
    model::settings::{Attribute, ServerSettings},
};

pub const SUCCESS_COLOR: u32 = 0x57F287;
pub const PENDING_COLOR: u32 = 0xFEE75C;
pub const ERROR_COLOR: u32 = 0xED4245;
pub const INFO_COLOR: u32 = 0x00CCFF;

pub fn quick_embed(
    title: impl Into<String>,
    description: impl Into<String>,
    color: u32,
) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(color)
}

pub fn success(description: impl Into<String>) -> CreateEmbed {
    quick_embed("Success", description, SUCCESS_COLOR)
}

/// Error embed for a failed command or component handler.
pub fn error(err: &AppError) -> CreateEmbed {
    let (title, description) = err.user_facing();
    quick_embed(title, description, ERROR_COLOR)
}

pub fn role_mention(role_id: u64) -> Mention {
    Mention::Role(RoleId::new(role_id))
}

/// Summary of a guild's settings, shown after every `/settings` invocation.
pub fn settings_summary(settings: &ServerSettings) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Server Settings")
        .colour(INFO_COLOR)
        .field(
            "Alphanumeric names only",
            if settings.alphanumeric_only { "Yes" } else { "No" },
            false,
        );

    for attribute in Attribute::ALL {
        let options = settings.options(attribute);
        let mut value = settings.mode(attribute).label().to_string();
        if !options.is_empty() {
            let choices = options
                .iter()
                .map(|(label, value)| format!("`{}` = `{}`", label, value))
                .collect::<Vec<_>>()
                .join("\n");
            value = format!("{}\n{}", value, choices);
        }
        embed = embed.field(attribute.label(), value, false);
    }

    let review_channel = match settings.approval_channel {
        Some(channel_id) => format!("<#{}>", channel_id),
        None => "Not set".to_string(),
    };

    embed.field("Review channel", review_channel, false)
}
