use super::*;

/// Tests persisting a role change review.
///
/// Verifies that the payload is stored as JSON and can be read back through
/// `find_by_message_id`.
///
/// Expected: Ok with the review stored under its message id
#[tokio::test]
async fn stores_review_with_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payload = RoleChangePayload {
        name: "Explorer".to_string(),
        color: RoleColor(0x00CCFF),
        icon: None,
        requester_id: 2,
    };

    let repo = PendingReviewRepository::new(db);
    let review = repo
        .create(CreatePendingReviewParam {
            message_id: 500,
            guild_id: 1,
            channel_id: 40,
            payload: payload.clone(),
        })
        .await?;

    assert_eq!(review.message_id, 500);
    assert_eq!(review.guild_id, 1);
    assert_eq!(review.channel_id, 40);
    assert_eq!(review.requester_id, 2);
    assert_eq!(review.role_change().unwrap(), payload);

    let found = repo.find_by_message_id(500).await?;
    assert_eq!(found, Some(review));

    Ok(())
}

/// Tests looking up a message without a review.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingReviewRepository::new(db);

    assert!(repo.find_by_message_id(500).await?.is_none());

    Ok(())
}
