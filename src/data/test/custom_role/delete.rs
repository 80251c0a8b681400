use super::*;

/// Tests deleting an existing record.
///
/// Expected: Ok(true) and the record is gone
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CustomRoleFactory::new(db, 1, 2).build().await?;

    let repo = CustomRoleRepository::new(db);

    assert!(repo.delete(1, 2).await?);
    assert!(repo.find(1, 2).await?.is_none());

    Ok(())
}

/// Tests deleting a record that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomRoleRepository::new(db);

    assert!(!repo.delete(1, 2).await?);

    Ok(())
}
