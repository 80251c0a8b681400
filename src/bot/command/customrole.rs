use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed,
    ResolvedValue,
};

use crate::{
    bot::reply,
    error::{request::RequestError, AppError},
    service::role_request::{RoleRequest, RoleRequestOutcome, RoleRequestService},
    state::BotState,
};

pub const NAME: &str = "customrole";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Create a custom role for yourself!")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "name",
            "The name of your role.",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "color",
                "The hexadecimal color of your role. For example, #00CCFF.",
            )
            .min_length(7)
            .max_length(7),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            "icon",
            "A URL for the icon of the role. Type \"NONE\" to remove it.",
        ))
}

pub async fn run(state: &BotState, command: &CommandInteraction) -> Result<CreateEmbed, AppError> {
    let guild_id = command.guild_id.ok_or(RequestError::NotInGuild)?;

    let mut request = RoleRequest {
        guild_id: guild_id.get(),
        user_id: command.user.id.get(),
        is_booster: command
            .member
            .as_ref()
            .is_some_and(|member| member.premium_since.is_some()),
        ..Default::default()
    };

    for option in command.data.options() {
        let ResolvedValue::String(value) = option.value else {
            continue;
        };
        match option.name {
            "name" => request.name = Some(value.to_string()),
            "color" => request.color = Some(value.to_string()),
            "icon" => request.icon = Some(value.to_string()),
            _ => {}
        }
    }

    let outcome = RoleRequestService::new(
        &state.db,
        state.discord.as_ref(),
        &state.in_flight,
        &state.cleanup,
        state.config.icon_boost_requirement,
    )
    .request(request)
    .await?;

    Ok(outcome_embed(&outcome))
}

fn outcome_embed(outcome: &RoleRequestOutcome) -> CreateEmbed {
    match outcome {
        RoleRequestOutcome::Current {
            role_id,
            color,
            icon,
        } => {
            let embed = reply::quick_embed(
                "Role Information",
                format!("Your personal role is {}.", reply::role_mention(*role_id)),
                color.value(),
            );
            match icon {
                Some(icon) => embed.image(icon),
                None => embed,
            }
        }
        RoleRequestOutcome::Applied { role_id, created } => reply::success(format!(
            "Your custom role, {}, has been {}!",
            reply::role_mention(*role_id),
            if *created { "created" } else { "updated" }
        )),
        RoleRequestOutcome::Submitted { updating: true } => reply::quick_embed(
            "Review",
            "Your updated role is being reviewed.\nPlease be patient while a moderator checks your role!",
            reply::PENDING_COLOR,
        ),
        RoleRequestOutcome::Submitted { updating: false } => reply::quick_embed(
            "Submitted",
            "Your new role is being reviewed.\nPlease be patient while a moderator checks your role!",
            reply::PENDING_COLOR,
        ),
    }
}
