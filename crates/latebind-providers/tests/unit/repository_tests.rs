//! Tests for location-bound payment repositories

use std::sync::Arc;

use latebind_domain::value_objects::{PartnerContext, Payment};
use latebind_providers::{
    InMemoryPaymentStore, LocatedPaymentRepository, PaymentRepository, PaymentStore,
    located_repository_builder,
};

fn store() -> Arc<dyn PaymentStore> {
    Arc::new(
        InMemoryPaymentStore::new()
            .with_payments("loc-a", [Payment::new(1, 100)])
            .with_payments("loc-b", [Payment::new(1, 500)]),
    )
}

#[tokio::test]
async fn test_repository_reads_its_own_location() {
    let store = store();
    let a = LocatedPaymentRepository::new("loc-a", Arc::clone(&store));
    let b = LocatedPaymentRepository::for_partner(&PartnerContext::new("B", "loc-b"), store);

    assert_eq!(a.get_payment(1).await.unwrap().amount, 100);
    assert_eq!(b.get_payment(1).await.unwrap().amount, 500);
    assert_eq!(b.database_location(), "loc-b");
}

#[tokio::test]
async fn test_builder_binds_to_partner_location() {
    let build = located_repository_builder(store());

    let repository = build(&PartnerContext::new("A", "loc-a")).unwrap();

    assert_eq!(repository.database_location(), "loc-a");
    assert_eq!(repository.get_payment(1).await.unwrap(), Payment::new(1, 100));
}

#[test]
fn test_debug_shows_location_and_store() {
    let repository = LocatedPaymentRepository::new("loc-a", store());
    let debug = format!("{repository:?}");

    assert!(debug.contains("loc-a"));
    assert!(debug.contains("in_memory"));
}
