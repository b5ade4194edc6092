use super::*;

/// Tests the idempotency lookup by Stripe event id.
///
/// Expected: Ok(Some) for a recorded event, Ok(None) for an unseen one
#[tokio::test]
async fn finds_recorded_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentEventRepository::new(db);
    let recorded = repo
        .record("evt_seen", "payment_intent.payment_failed", json!({}), true, None)
        .await?;

    let found = repo.find_by_stripe_id("evt_seen").await?;
    assert_eq!(found.map(|e| e.id), Some(recorded.id));

    let missing = repo.find_by_stripe_id("evt_unseen").await?;
    assert!(missing.is_none());

    Ok(())
}
