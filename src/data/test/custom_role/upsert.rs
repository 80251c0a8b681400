use super::*;

fn param(name: &str, icon: Option<&str>, role_id: Option<u64>) -> UpsertCustomRoleParam {
    UpsertCustomRoleParam {
        guild_id: 1,
        user_id: 2,
        attributes: RoleAttributes {
            name: name.to_string(),
            color: RoleColor(0x00CCFF),
            icon: icon.map(str::to_string),
        },
        role_id,
    }
}

/// Tests inserting a new record.
///
/// Expected: Ok with the record stored as given
#[tokio::test]
async fn inserts_new_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomRoleRepository::new(db);
    let record = repo
        .upsert(param("Explorer", Some("https://cdn.example/icon.png"), Some(300)))
        .await?;

    assert_eq!(record.attributes.name, "Explorer");
    assert_eq!(
        record.attributes.icon.as_deref(),
        Some("https://cdn.example/icon.png")
    );
    assert_eq!(record.role_id, Some(300));
    assert_eq!(repo.find(1, 2).await?, Some(record));

    Ok(())
}

/// Tests replacing an existing record.
///
/// Verifies that name, icon and role id are overwritten and `updated_at` moves forward.
///
/// Expected: Ok with the new values
#[tokio::test]
async fn replaces_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = CustomRoleFactory::new(db, 1, 2)
        .name("Old")
        .icon("https://cdn.example/old.png")
        .role_id(Some(300))
        .build()
        .await?;

    let repo = CustomRoleRepository::new(db);
    let record = repo.upsert(param("New", None, Some(301))).await?;

    assert_eq!(record.attributes.name, "New");
    assert_eq!(record.attributes.icon, None);
    assert_eq!(record.role_id, Some(301));
    assert!(record.updated_at >= original.updated_at);

    Ok(())
}
