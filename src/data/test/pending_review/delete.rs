use super::*;

/// Tests deleting a pending review.
///
/// Expected: Ok(true) for the stored review, Ok(false) afterwards
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PendingReviewFactory::new(db).message_id(500).build().await?;

    let repo = PendingReviewRepository::new(db);

    assert!(repo.delete(500).await?);
    assert!(!repo.delete(500).await?);

    Ok(())
}
