use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed,
    Permissions, ResolvedValue,
};

use crate::{
    bot::{command::can_manage_roles, reply},
    error::{request::RequestError, AppError},
    service::transfer::TransferService,
    state::BotState,
};

pub const NAME: &str = "transfer";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Transfer outdated booster roles to Turbo's database.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "start_role",
                "The top (first) role that you would like to start the transfer at.",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "end_role",
                "The bottom (final) role that you would like to stop the transfer at.",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "inclusive",
                "Should the transfer INCLUDE the start/end roles?",
            )
            .required(true),
        )
}

pub async fn run(state: &BotState, command: &CommandInteraction) -> Result<CreateEmbed, AppError> {
    let guild_id = command.guild_id.ok_or(RequestError::NotInGuild)?;
    if !can_manage_roles(command.member.as_deref()) {
        return Err(RequestError::MissingPermission.into());
    }

    let mut start_role = None;
    let mut end_role = None;
    let mut inclusive = false;
    for option in command.data.options() {
        match (option.name, option.value) {
            ("start_role", ResolvedValue::Role(role)) => start_role = Some(role.id.get()),
            ("end_role", ResolvedValue::Role(role)) => end_role = Some(role.id.get()),
            ("inclusive", ResolvedValue::Boolean(value)) => inclusive = value,
            _ => {}
        }
    }
    let (Some(start_role), Some(end_role)) = (start_role, end_role) else {
        return Err(RequestError::UnknownRole.into());
    };

    let summary = TransferService::new(&state.db, state.discord.as_ref())
        .transfer(guild_id.get(), start_role, end_role, inclusive)
        .await?;

    Ok(reply::quick_embed(
        "Transfer Complete",
        format!(
            "Transferred {} roles.\n{} roles had no members and were skipped.",
            summary.transferred, summary.empty
        ),
        reply::SUCCESS_COLOR,
    ))
}
