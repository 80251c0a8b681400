use super::*;

/// Tests claiming a pending review.
///
/// Verifies that the review is returned and removed, so a second claim on the same message
/// gets nothing.
///
/// Expected: Ok(Some) once, then Ok(None)
#[tokio::test]
async fn claims_review_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = PendingReviewFactory::new(db)
        .message_id(500)
        .guild_id(1)
        .requester_id(2)
        .build()
        .await?;

    let repo = PendingReviewRepository::new(db);
    let first = repo.take(500).await?;
    let second = repo.take(500).await?;

    let claimed = first.unwrap();
    assert_eq!(claimed.message_id.to_string(), stored.message_id);
    assert_eq!(claimed.requester_id, 2);
    assert!(second.is_none());
    assert!(repo.find_by_message_id(500).await?.is_none());

    Ok(())
}

/// Tests claiming a review from a message that never had one.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingReviewRepository::new(db);

    assert!(repo.take(500).await?.is_none());

    Ok(())
}

/// Tests that a malformed payload is still claimed.
///
/// The repository does not interpret payloads, so the row is removed and the caller decides
/// how to treat it.
///
/// Expected: Ok(Some) with a payload that fails to decode
#[tokio::test]
async fn claims_review_with_malformed_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PendingReviewFactory::new(db)
        .message_id(500)
        .payload("not json")
        .build()
        .await?;

    let repo = PendingReviewRepository::new(db);
    let review = repo.take(500).await?.unwrap();

    assert!(review.role_change().is_err());

    Ok(())
}
