use super::*;

/// Tests folding paid orders into per-product totals.
///
/// Expected: Ok with one row per product type, sorted, and only paid
/// orders counted
#[tokio::test]
async fn folds_paid_orders_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    factory::shop_order::ShopOrderFactory::new(db, player.id)
        .product_type("booster_pack")
        .amount_cents(999)
        .status(ORDER_STATUS_PAID)
        .build()
        .await?;
    factory::shop_order::ShopOrderFactory::new(db, player.id)
        .product_type("booster_pack")
        .amount_cents(999)
        .status(ORDER_STATUS_PAID)
        .build()
        .await?;
    factory::shop_order::ShopOrderFactory::new(db, player.id)
        .product_type("starter_deck")
        .amount_cents(2499)
        .status(ORDER_STATUS_PAID)
        .build()
        .await?;
    // Pending revenue must not count
    factory::shop_order::ShopOrderFactory::new(db, player.id)
        .product_type("starter_deck")
        .amount_cents(2499)
        .status(ORDER_STATUS_PENDING)
        .build()
        .await?;

    let repo = ShopOrderRepository::new(db);
    let totals = repo.revenue_by_product().await?;

    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0].product_type, "booster_pack");
    assert_eq!(totals[0].orders, 2);
    assert_eq!(totals[0].revenue_cents, 1998);
    assert_eq!(totals[1].product_type, "starter_deck");
    assert_eq!(totals[1].orders, 1);
    assert_eq!(totals[1].revenue_cents, 2499);

    Ok(())
}

/// Tests the fold with no paid orders at all.
///
/// Expected: Ok with an empty set of totals
#[tokio::test]
async fn no_paid_orders_yields_empty_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    factory::shop_order::ShopOrderFactory::new(db, player.id)
        .status(ORDER_STATUS_PENDING)
        .build()
        .await?;

    let repo = ShopOrderRepository::new(db);
    let totals = repo.revenue_by_product().await?;

    assert!(totals.is_empty());

    Ok(())
}
