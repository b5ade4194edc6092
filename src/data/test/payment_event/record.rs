use super::*;

/// Tests recording a processed webhook delivery.
///
/// Expected: Ok with the payload stored verbatim and no error note
#[tokio::test]
async fn records_processed_delivery() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payload = json!({"id": "evt_1", "type": "checkout.session.completed"});

    let repo = PaymentEventRepository::new(db);
    let event = repo
        .record("evt_1", "checkout.session.completed", payload.clone(), true, None)
        .await?;

    assert_eq!(event.stripe_event_id, "evt_1");
    assert_eq!(event.event_type, "checkout.session.completed");
    assert_eq!(event.payload, payload);
    assert!(event.processed);
    assert!(event.error.is_none());

    Ok(())
}

/// Tests recording a delivery the dispatcher could not act on.
///
/// Expected: Ok with processed false and the note stored
#[tokio::test]
async fn records_unprocessed_delivery_with_note() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentEventRepository::new(db);
    let event = repo
        .record(
            "evt_2",
            "checkout.session.completed",
            json!({"id": "evt_2"}),
            false,
            Some("no matching order".to_string()),
        )
        .await?;

    assert!(!event.processed);
    assert_eq!(event.error.as_deref(), Some("no matching order"));

    Ok(())
}

/// Tests recording the same Stripe event id twice.
///
/// The unique key is what makes duplicate deliveries detectable.
///
/// Expected: Err from the unique stripe_event_id column
#[tokio::test]
async fn rejects_duplicate_event_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_billing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PaymentEventRepository::new(db);
    repo.record("evt_3", "charge.refunded", json!({}), true, None)
        .await?;
    let result = repo
        .record("evt_3", "charge.refunded", json!({}), true, None)
        .await;

    assert!(result.is_err());

    Ok(())
}
