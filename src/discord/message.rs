//! Builders for the review message and its buttons.

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateMessage, Mention, UserId,
};

use crate::discord::ReviewPost;

pub const APPROVE_BUTTON_ID: &str = "approve";
pub const DENY_BUTTON_ID: &str = "deny";
/// Prefix of the `delete_review:{channel_id}:{message_id}` button id.
pub const DELETE_REVIEW_PREFIX: &str = "delete_review";

/// Builds the embed describing a requested role change.
///
/// The requested color tints the embed. The name field is only present when a name was
/// requested, and the icon is shown as the embed image.
pub fn review_embed(post: &ReviewPost) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Custom Role Review")
        .description(format!(
            "A custom role has been requested by {}.",
            Mention::User(UserId::new(post.requester_id))
        ))
        .colour(post.color.value());

    if let Some(name) = &post.name {
        embed = embed.field("Name", name, false);
    }

    if let Some(icon) = &post.icon {
        embed = embed
            .field("Icon", "The requested icon is shown below.", false)
            .image(icon);
    }

    embed
}

pub fn review_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(APPROVE_BUTTON_ID)
            .label("Approve")
            .style(ButtonStyle::Success),
        CreateButton::new(DENY_BUTTON_ID)
            .label("Deny")
            .style(ButtonStyle::Danger),
    ])
}

pub fn review_message(post: &ReviewPost) -> CreateMessage {
    CreateMessage::new()
        .embed(review_embed(post))
        .components(vec![review_buttons()])
}

pub fn delete_review_custom_id(channel_id: u64, message_id: u64) -> String {
    format!("{}:{}:{}", DELETE_REVIEW_PREFIX, channel_id, message_id)
}

/// Button offered when a review button is pressed on a message with no pending request.
pub fn delete_review_button(channel_id: u64, message_id: u64) -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(delete_review_custom_id(
        channel_id, message_id,
    ))
    .label("Delete message")
    .style(ButtonStyle::Danger)])
}
