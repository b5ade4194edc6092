use super::*;

/// Tests the status filter on the order listing.
///
/// Expected: Ok with only the matching status, or everything unfiltered
#[tokio::test]
async fn status_filter_restricts_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let paid = factory::shop_order::ShopOrderFactory::new(db, player.id)
        .status(ORDER_STATUS_PAID)
        .build()
        .await?;
    factory::shop_order::ShopOrderFactory::new(db, player.id)
        .status(ORDER_STATUS_PENDING)
        .build()
        .await?;

    let repo = ShopOrderRepository::new(db);

    let (only_paid, total) = repo.get_paginated(Some(ORDER_STATUS_PAID), 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(only_paid[0].id, paid.id);

    let (_, total) = repo.get_paginated(None, 0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}
