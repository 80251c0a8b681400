use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    CreateEmbed, Permissions, ResolvedOption, ResolvedValue,
};

use crate::{
    bot::{command::can_manage_roles, reply},
    error::{request::RequestError, AppError},
    model::settings::{Attribute, AttributeMode},
    service::settings::{SettingsChange, SettingsService},
    state::BotState,
};

pub const NAME: &str = "settings";

fn mode_subcommand(attribute: Attribute) -> CreateCommandOption {
    let mut option = CreateCommandOption::new(
        CommandOptionType::Integer,
        "option",
        "The mode to set the option to.",
    )
    .required(true);
    for mode in AttributeMode::ALL {
        option = option.add_int_choice(mode.label(), mode.as_i32());
    }

    CreateCommandOption::new(
        CommandOptionType::SubCommand,
        attribute.label().to_lowercase(),
        format!(
            "Set how boosters customize their role {}.",
            attribute.label().to_lowercase()
        ),
    )
    .add_sub_option(option)
    .add_sub_option(CreateCommandOption::new(
        CommandOptionType::String,
        "choices",
        "Allowed values for From Selection, as `Label=value; Other Label=other value`.",
    ))
}

pub fn register() -> CreateCommand {
    let mut command = CreateCommand::new(NAME)
        .description("Change the settings for the server.")
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "alphanumeric",
                "Only allow letters, digits and spaces in role names.",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "enabled",
                    "Whether role names must be alphanumeric.",
                )
                .required(true),
            ),
        );

    for attribute in Attribute::ALL {
        command = command.add_option(mode_subcommand(attribute));
    }

    command
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "review",
                "Set the channel role reviews are posted in. Leave empty to clear it.",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "The review channel.",
                )
                .channel_types(vec![ChannelType::Text]),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "show",
            "Show the current settings.",
        ))
}

pub async fn run(state: &BotState, command: &CommandInteraction) -> Result<CreateEmbed, AppError> {
    let guild_id = command.guild_id.ok_or(RequestError::NotInGuild)?;
    if !can_manage_roles(command.member.as_deref()) {
        return Err(RequestError::MissingPermission.into());
    }

    let service = SettingsService::new(&state.db);
    let options = command.data.options();
    let change = match options.first() {
        Some(ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(sub_options),
            ..
        }) => parse_change(name, sub_options),
        _ => None,
    };

    let settings = match change {
        Some(change) => service.update(guild_id.get(), change).await?,
        None => service.get(guild_id.get()).await?,
    };

    Ok(reply::settings_summary(&settings))
}

/// Translates a subcommand into a settings change; `None` for `show`.
fn parse_change(subcommand: &str, options: &[ResolvedOption<'_>]) -> Option<SettingsChange> {
    let mut enabled = None;
    let mut mode = None;
    let mut choices = None;
    let mut channel = None;

    for option in options {
        match (option.name, &option.value) {
            ("enabled", ResolvedValue::Boolean(value)) => enabled = Some(*value),
            ("option", ResolvedValue::Integer(value)) => {
                mode = i32::try_from(*value).ok().and_then(AttributeMode::from_i32)
            }
            ("choices", ResolvedValue::String(value)) => choices = Some(value.to_string()),
            ("channel", ResolvedValue::Channel(value)) => channel = Some(value.id.get()),
            _ => {}
        }
    }

    let attribute = match subcommand {
        "alphanumeric" => return enabled.map(SettingsChange::Alphanumeric),
        "review" => return Some(SettingsChange::ReviewChannel(channel)),
        "name" => Attribute::Name,
        "icon" => Attribute::Icon,
        "color" => Attribute::Color,
        _ => return None,
    };

    mode.map(|mode| SettingsChange::Mode {
        attribute,
        mode,
        choices,
    })
}
