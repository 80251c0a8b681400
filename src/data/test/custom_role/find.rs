use super::*;

/// Tests finding a stored record.
///
/// Verifies that the color is parsed and an empty icon column reads as no icon.
///
/// Expected: Ok(Some) with decoded attributes
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CustomRoleFactory::new(db, 1, 2)
        .name("Explorer")
        .color("#00CCFF")
        .role_id(Some(300))
        .build()
        .await?;

    let repo = CustomRoleRepository::new(db);
    let record = repo.find(1, 2).await?.unwrap();

    assert_eq!(record.guild_id, 1);
    assert_eq!(record.user_id, 2);
    assert_eq!(record.attributes.name, "Explorer");
    assert_eq!(record.attributes.color, RoleColor(0x00CCFF));
    assert_eq!(record.attributes.icon, None);
    assert_eq!(record.role_id, Some(300));

    Ok(())
}

/// Tests that records are scoped to their guild.
///
/// Expected: Ok(None) for the same user in another guild
#[tokio::test]
async fn returns_none_for_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CustomRoleFactory::new(db, 1, 2).build().await?;

    let repo = CustomRoleRepository::new(db);

    assert!(repo.find(9, 2).await?.is_none());

    Ok(())
}

/// Tests reading a record with a corrupt color.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_invalid_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CustomRoleFactory::new(db, 1, 2)
        .color("blue")
        .build()
        .await?;

    let repo = CustomRoleRepository::new(db);

    assert!(matches!(repo.find(1, 2).await, Err(DbErr::Custom(_))));

    Ok(())
}
