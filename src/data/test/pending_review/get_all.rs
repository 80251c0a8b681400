use super::*;

/// Tests listing pending reviews across guilds.
///
/// Expected: Ok with every stored review
#[tokio::test]
async fn lists_every_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_pending_review(db, 1, 10).await?;
    create_pending_review(db, 1, 11).await?;
    create_pending_review(db, 2, 10).await?;

    let repo = PendingReviewRepository::new(db);
    let reviews = repo.get_all().await?;

    assert_eq!(reviews.len(), 3);
    let mut owners: Vec<(u64, u64)> = reviews
        .iter()
        .map(|review| (review.guild_id, review.requester_id))
        .collect();
    owners.sort();
    assert_eq!(owners, vec![(1, 10), (1, 11), (2, 10)]);

    Ok(())
}

/// Tests listing with no pending reviews.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PendingReview)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PendingReviewRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
