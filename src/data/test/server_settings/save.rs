use super::*;

/// Tests that saved settings read back identically.
///
/// Expected: Ok with the saved settings returned by both `save` and `find`
#[tokio::test]
async fn saved_settings_read_back_identically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut settings = ServerSettings::new(123);
    settings.name_setting = AttributeMode::FromSelection;
    settings.icon_setting = AttributeMode::Disabled;
    settings.color_setting = AttributeMode::RequireReview;
    settings.alphanumeric_only = true;
    settings.name_options = OptionMap::from([
        ("Explorer".to_string(), "Explorer".to_string()),
        ("Builder".to_string(), "Builder".to_string()),
    ]);
    settings.approval_channel = Some(456);

    let repo = ServerSettingsRepository::new(db);
    let saved = repo.save(&settings).await?;

    assert_eq!(saved, settings);
    assert_eq!(repo.find(123).await?, Some(settings));

    Ok(())
}

/// Tests replacing an existing settings row.
///
/// Verifies that every column is overwritten, including clearing the review channel.
///
/// Expected: Ok with the new values stored
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ServerSettingsFactory::new(db, 123)
        .name_setting(2)
        .approval_channel("456")
        .build()
        .await?;

    let repo = ServerSettingsRepository::new(db);
    let mut settings = repo.find(123).await?.unwrap();
    settings.name_setting = AttributeMode::AlwaysAllow;
    settings.approval_channel = None;
    repo.save(&settings).await?;

    let stored = repo.find(123).await?.unwrap();
    assert_eq!(stored.name_setting, AttributeMode::AlwaysAllow);
    assert_eq!(stored.approval_channel, None);

    Ok(())
}
