//! Tests for the in-memory payment store

use latebind_domain::value_objects::Payment;
use latebind_providers::{Error, InMemoryPaymentStore, PaymentStore};

fn store() -> InMemoryPaymentStore {
    InMemoryPaymentStore::new()
        .with_payments("loc-a", [Payment::new(1, 100), Payment::new(2, 200)])
        .with_payments("loc-b", [Payment::new(1, 500)])
}

#[tokio::test]
async fn test_fetch_reads_the_right_database() {
    let store = store();

    assert_eq!(
        store.fetch_payment("loc-a", 1).await.unwrap(),
        Payment::new(1, 100)
    );
    assert_eq!(
        store.fetch_payment("loc-b", 1).await.unwrap(),
        Payment::new(1, 500)
    );
}

#[tokio::test]
async fn test_missing_payment_and_database_fail() {
    let store = store();

    assert_eq!(
        store.fetch_payment("loc-b", 2).await.unwrap_err(),
        Error::fetch("loc-b", 2, "payment not found")
    );
    assert_eq!(
        store.fetch_payment("loc-z", 1).await.unwrap_err(),
        Error::fetch("loc-z", 1, "unknown database")
    );
}

#[tokio::test]
async fn test_insert_replaces_same_id() {
    let store = store();
    store.insert("loc-a", Payment::new(1, 150));

    assert_eq!(store.payment_count("loc-a"), 2);
    assert_eq!(store.fetch_payment("loc-a", 1).await.unwrap().amount, 150);
}
