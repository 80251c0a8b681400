use super::*;

/// Tests reading settings of a guild for the first time.
///
/// Verifies that the defaults are materialized and stored, so a later `find` returns them.
///
/// Expected: Ok with default settings, row persisted
#[tokio::test]
async fn creates_defaults_on_first_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);
    let settings = repo.get_or_create(123).await?;

    assert_eq!(settings, ServerSettings::new(123));
    assert_eq!(repo.find(123).await?, Some(ServerSettings::new(123)));

    Ok(())
}

/// Tests reading settings of an already configured guild.
///
/// Expected: Ok with the stored settings, not the defaults
#[tokio::test]
async fn returns_existing_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ServerSettingsFactory::new(db, 123)
        .name_setting(3)
        .build()
        .await?;

    let repo = ServerSettingsRepository::new(db);
    let settings = repo.get_or_create(123).await?;

    assert_eq!(settings.name_setting, AttributeMode::Disabled);

    Ok(())
}

/// Tests that repeated reads do not create duplicate rows.
///
/// Expected: Ok with a single row in the table
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerSettingsRepository::new(db);
    repo.get_or_create(123).await?;
    repo.get_or_create(123).await?;

    let count = entity::prelude::ServerSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
