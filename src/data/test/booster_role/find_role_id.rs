use super::*;

/// Tests reading a legacy mapping.
///
/// Expected: Ok(Some) with the mapped role id
#[tokio::test]
async fn finds_mapped_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BoosterRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_booster_role(db, 1, 2, 300).await?;

    let repo = BoosterRoleRepository::new(db);

    assert_eq!(repo.find_role_id(1, 2).await?, Some(300));
    assert_eq!(repo.find_role_id(1, 3).await?, None);

    Ok(())
}
