use super::*;

/// Tests removing a legacy mapping.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_mapping_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BoosterRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_booster_role(db, 1, 2, 300).await?;

    let repo = BoosterRoleRepository::new(db);

    assert!(repo.delete(1, 2).await?);
    assert!(!repo.delete(1, 2).await?);
    assert_eq!(repo.find_role_id(1, 2).await?, None);

    Ok(())
}
