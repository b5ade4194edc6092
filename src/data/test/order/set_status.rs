use super::*;

/// Tests moving an order through a status change.
///
/// Expected: Ok with the status replaced and updated_at advanced
#[tokio::test]
async fn moves_order_to_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let order = factory::create_order(db, player.id).await?;

    let repo = ShopOrderRepository::new(db);
    repo.set_status(order.id, ORDER_STATUS_REFUNDED).await?;

    let updated = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(updated.status, ORDER_STATUS_REFUNDED);
    assert!(updated.updated_at >= order.updated_at);

    Ok(())
}
