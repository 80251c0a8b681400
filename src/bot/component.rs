//! Review message buttons.
//!
//! `approve` and `deny` resolve the pending request of the message they are attached to.
//! When no request is stored for the message the moderator is told so and offered a
//! `delete_review:{channel_id}:{message_id}` button to remove the stale message.

use serenity::all::{ComponentInteraction, Context, CreateEmbed, EditInteractionResponse};

use crate::{
    bot::{command::can_manage_roles, reply},
    discord::message::{
        delete_review_button, APPROVE_BUTTON_ID, DELETE_REVIEW_PREFIX, DENY_BUTTON_ID,
    },
    error::{request::RequestError, AppError},
    service::review::{ReviewDecision, ReviewOutcome, ReviewService},
    state::BotState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    Review(ReviewDecision),
    DeleteReview { channel_id: u64, message_id: u64 },
}

impl ComponentAction {
    /// Parses a button custom id, returning `None` for ids this bot does not own.
    pub fn parse(custom_id: &str) -> Option<Self> {
        match custom_id {
            APPROVE_BUTTON_ID => return Some(Self::Review(ReviewDecision::Approve)),
            DENY_BUTTON_ID => return Some(Self::Review(ReviewDecision::Deny)),
            _ => {}
        }

        let mut parts = custom_id.split(':');
        if parts.next()? != DELETE_REVIEW_PREFIX {
            return None;
        }
        let channel_id = parts.next()?.parse().ok()?;
        let message_id = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self::DeleteReview {
            channel_id,
            message_id,
        })
    }
}

/// Handles a button press and answers it ephemerally.
pub async fn dispatch(ctx: &Context, state: &BotState, component: &ComponentInteraction) {
    let Some(action) = ComponentAction::parse(&component.data.custom_id) else {
        tracing::debug!("Ignoring unknown component {}", component.data.custom_id);
        return;
    };

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!(
            "Failed to acknowledge button {} from user {}: {}",
            component.data.custom_id,
            component.user.id,
            e
        );
        return;
    }

    let response = match run(state, component, action).await {
        Ok(response) => response,
        Err(e) => EditInteractionResponse::new().embed(reply::error(&e)),
    };

    if let Err(e) = component.edit_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to reply to button {}: {}",
            component.data.custom_id,
            e
        );
    }
}

async fn run(
    state: &BotState,
    component: &ComponentInteraction,
    action: ComponentAction,
) -> Result<EditInteractionResponse, AppError> {
    if !can_manage_roles(component.member.as_ref()) {
        return Err(RequestError::MissingPermission.into());
    }

    let service = ReviewService::new(
        &state.db,
        state.discord.as_ref(),
        &state.in_flight,
        &state.cleanup,
        state.config.icon_boost_requirement,
    );

    match action {
        ComponentAction::Review(decision) => {
            let channel_id = component.channel_id.get();
            let message_id = component.message.id.get();
            let outcome = service
                .resolve(message_id, decision, component.user.id.get())
                .await?;

            let mut response = EditInteractionResponse::new().embed(outcome_embed(&outcome));
            if outcome == ReviewOutcome::NoMatchingRequest {
                response =
                    response.components(vec![delete_review_button(channel_id, message_id)]);
            }
            Ok(response)
        }
        ComponentAction::DeleteReview {
            channel_id,
            message_id,
        } => {
            service.discard(message_id).await?;
            state.discord.delete_message(channel_id, message_id).await?;

            Ok(EditInteractionResponse::new()
                .embed(reply::success("The review message has been deleted.")))
        }
    }
}

fn outcome_embed(outcome: &ReviewOutcome) -> CreateEmbed {
    match outcome {
        ReviewOutcome::Approved { role_id } => reply::success(format!(
            "The request was approved and {} has been applied.",
            reply::role_mention(*role_id)
        )),
        ReviewOutcome::Denied => reply::quick_embed(
            "Denied",
            "The request was denied.",
            reply::ERROR_COLOR,
        ),
        ReviewOutcome::ApplyFailed(error) => reply::quick_embed(
            "Error",
            format!(
                "The request was approved, but the role could not be applied.\n```{}```",
                error
            ),
            reply::ERROR_COLOR,
        ),
        ReviewOutcome::NoMatchingRequest => reply::quick_embed(
            "No Matching Request",
            "There is no pending request for this message. It may have been resolved already.",
            reply::ERROR_COLOR,
        ),
    }
}
