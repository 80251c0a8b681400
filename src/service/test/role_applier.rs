use super::*;
use crate::{
    data::{booster_role::BoosterRoleRepository, custom_role::CustomRoleRepository},
    discord::fake::{role, FakeFailure},
    error::AppError,
    model::role::{RoleAttributes, RoleColor},
    service::role_applier::RoleApplier,
};
use test_utils::factory::{create_booster_role, custom_role::CustomRoleFactory};

fn attributes(name: &str, icon: Option<&str>) -> RoleAttributes {
    RoleAttributes {
        name: name.to_string(),
        color: RoleColor(0x00CCFF),
        icon: icon.map(str::to_string),
    }
}

/// Tests applying attributes for a member without a role.
///
/// Verifies that a role is created just above the booster role, given to the member, and
/// recorded together with its id.
///
/// Expected: Ok with a newly created role
#[tokio::test(flavor = "multi_thread")]
async fn creates_role_above_booster_role() -> Result<(), AppError> {
    let harness = Harness::new().await;
    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);

    let applied = applier
        .apply(GUILD_ID, USER_ID, &attributes("Explorer", None))
        .await?;

    assert!(applied.created);
    {
        let state = harness.discord.state();
        assert_eq!(
            state.created_roles,
            vec![(attributes("Explorer", None), Some(3))]
        );
        assert_eq!(state.added_member_roles, vec![(USER_ID, applied.role_id)]);
        assert!(state.icon_updates.is_empty());
    }

    let record = CustomRoleRepository::new(harness.db())
        .find(GUILD_ID, USER_ID)
        .await?
        .unwrap();
    assert_eq!(record.attributes, attributes("Explorer", None));
    assert_eq!(record.role_id, Some(applied.role_id));

    Ok(())
}

/// Tests applying attributes when the member's role still exists.
///
/// Expected: Ok with the role edited in place and no new role created
#[tokio::test(flavor = "multi_thread")]
async fn edits_existing_role() -> Result<(), AppError> {
    let mut guild = guild_with_booster_role(GUILD_ID, ICON_BOOST_REQUIREMENT);
    guild.roles.push(role(700, "Old Name", 0xFF0000, 3));
    let harness = Harness::with_guild(guild).await;
    CustomRoleFactory::new(harness.db(), GUILD_ID, USER_ID)
        .name("Old Name")
        .color("#FF0000")
        .role_id(Some(700))
        .build()
        .await?;

    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);
    let applied = applier
        .apply(GUILD_ID, USER_ID, &attributes("New Name", None))
        .await?;

    assert_eq!(applied.role_id, 700);
    assert!(!applied.created);
    let state = harness.discord.state();
    assert!(state.created_roles.is_empty());
    assert!(state.added_member_roles.is_empty());
    assert_eq!(
        state.edited_roles,
        vec![(700, "New Name".to_string(), RoleColor(0x00CCFF))]
    );

    Ok(())
}

/// Tests recreating a role that was deleted from the guild.
///
/// Expected: Ok with a new role created and the record pointing at it
#[tokio::test(flavor = "multi_thread")]
async fn recreates_role_missing_from_guild() -> Result<(), AppError> {
    let harness = Harness::new().await;
    CustomRoleFactory::new(harness.db(), GUILD_ID, USER_ID)
        .role_id(Some(700))
        .build()
        .await?;

    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);
    let applied = applier
        .apply(GUILD_ID, USER_ID, &attributes("Explorer", None))
        .await?;

    assert!(applied.created);
    assert_ne!(applied.role_id, 700);
    let record = CustomRoleRepository::new(harness.db())
        .find(GUILD_ID, USER_ID)
        .await?
        .unwrap();
    assert_eq!(record.role_id, Some(applied.role_id));

    Ok(())
}

/// Tests that a legacy mapping is used and then folded into the record.
///
/// Expected: Ok with the legacy role edited and the mapping removed
#[tokio::test(flavor = "multi_thread")]
async fn migrates_legacy_mapping() -> Result<(), AppError> {
    let mut guild = guild_with_booster_role(GUILD_ID, ICON_BOOST_REQUIREMENT);
    guild.roles.push(role(700, "Legacy", 0, 3));
    let harness = Harness::with_guild(guild).await;
    create_booster_role(harness.db(), GUILD_ID, USER_ID, 700).await?;

    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);
    let applied = applier
        .apply(GUILD_ID, USER_ID, &attributes("Explorer", None))
        .await?;

    assert_eq!(applied.role_id, 700);
    assert!(BoosterRoleRepository::new(harness.db())
        .find_role_id(GUILD_ID, USER_ID)
        .await?
        .is_none());
    let record = CustomRoleRepository::new(harness.db())
        .find(GUILD_ID, USER_ID)
        .await?
        .unwrap();
    assert_eq!(record.role_id, Some(700));

    Ok(())
}

/// Tests that icons are only set when the guild has enough boosts.
///
/// Expected: Ok with the role created but no icon call made
#[tokio::test(flavor = "multi_thread")]
async fn skips_icon_below_boost_requirement() -> Result<(), AppError> {
    let harness = Harness::with_guild(guild_with_booster_role(GUILD_ID, 2)).await;

    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);
    applier
        .apply(
            GUILD_ID,
            USER_ID,
            &attributes("Explorer", Some("https://cdn.example/icon.png")),
        )
        .await?;

    assert!(harness.discord.state().icon_updates.is_empty());

    Ok(())
}

/// Tests that a failing icon update does not fail the whole change.
///
/// Expected: Ok with the role created and the icon stored in the record
#[tokio::test(flavor = "multi_thread")]
async fn icon_failure_is_isolated() -> Result<(), AppError> {
    let harness = Harness::with_discord(
        FakeDiscord::new(guild_with_booster_role(GUILD_ID, ICON_BOOST_REQUIREMENT))
            .failing(FakeFailure::SetRoleIcon),
    )
    .await;

    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);
    let applied = applier
        .apply(
            GUILD_ID,
            USER_ID,
            &attributes("Explorer", Some("https://cdn.example/icon.png")),
        )
        .await?;

    assert!(applied.created);
    let record = CustomRoleRepository::new(harness.db())
        .find(GUILD_ID, USER_ID)
        .await?
        .unwrap();
    assert_eq!(
        record.attributes.icon.as_deref(),
        Some("https://cdn.example/icon.png")
    );

    Ok(())
}

/// Tests that a failed role creation stores nothing.
///
/// Expected: Err(AppError::DiscordErr) and no record written
#[tokio::test(flavor = "multi_thread")]
async fn creation_failure_writes_no_record() -> Result<(), AppError> {
    let harness = Harness::with_discord(
        FakeDiscord::new(guild_with_booster_role(GUILD_ID, ICON_BOOST_REQUIREMENT))
            .failing(FakeFailure::CreateRole),
    )
    .await;

    let applier = RoleApplier::new(harness.db(), harness.discord.as_ref(), ICON_BOOST_REQUIREMENT);
    let result = applier
        .apply(GUILD_ID, USER_ID, &attributes("Explorer", None))
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert!(CustomRoleRepository::new(harness.db())
        .find(GUILD_ID, USER_ID)
        .await?
        .is_none());

    Ok(())
}
