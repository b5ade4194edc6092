use super::*;

/// Tests looking up an order by its Stripe checkout session.
///
/// Expected: Ok(Some) for the stored session id, Ok(None) otherwise
#[tokio::test]
async fn finds_order_by_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let order = factory::shop_order::ShopOrderFactory::new(db, player.id)
        .stripe_session_id(Some("cs_test_123".to_string()))
        .build()
        .await?;

    let repo = ShopOrderRepository::new(db);

    let found = repo.find_by_session_id("cs_test_123").await?;
    assert_eq!(found.map(|o| o.id), Some(order.id));

    let missing = repo.find_by_session_id("cs_test_999").await?;
    assert!(missing.is_none());

    Ok(())
}
