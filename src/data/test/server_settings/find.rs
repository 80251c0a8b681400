use super::*;

/// Tests finding settings for a guild that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);
    let result = repo.find(123).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests converting a stored row into domain settings.
///
/// Verifies that modes, option JSON and the review channel column are decoded.
///
/// Expected: Ok(Some) with every field decoded
#[tokio::test]
async fn decodes_stored_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ServerSettingsFactory::new(db, 123)
        .name_setting(2)
        .color_setting(1)
        .alphanumeric_only(true)
        .color_options(r##"{"Red":"#FF0000","Blue":"#0000FF"}"##)
        .approval_channel("456")
        .build()
        .await?;

    let repo = ServerSettingsRepository::new(db);
    let settings = repo.find(123).await?.unwrap();

    assert_eq!(settings.guild_id, 123);
    assert_eq!(settings.name_setting, AttributeMode::RequireReview);
    assert_eq!(settings.icon_setting, AttributeMode::AlwaysAllow);
    assert_eq!(settings.color_setting, AttributeMode::FromSelection);
    assert!(settings.alphanumeric_only);
    assert_eq!(
        settings.color_options.get("Red").map(String::as_str),
        Some("#FF0000")
    );
    assert_eq!(settings.approval_channel, Some(456));

    Ok(())
}

/// Tests reading a row with an unknown mode value.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_mode() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ServerSettingsFactory::new(db, 123)
        .icon_setting(9)
        .build()
        .await?;

    let repo = ServerSettingsRepository::new(db);
    let result = repo.find(123).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
