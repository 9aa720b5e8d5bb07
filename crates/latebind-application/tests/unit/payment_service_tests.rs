//! Tests for the payment use case

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use latebind_application::partner::{
    DeferredPaymentRepository, DirectoryPaymentRepositoryFactory, ScopedContextProvider,
};
use latebind_application::ports::{
    CurrentPartnerProvider, PaymentRepositoryFactory, PaymentServiceInterface,
};
use latebind_application::PaymentService;
use latebind_domain::Error;
use latebind_domain::value_objects::Payment;

use crate::test_utils::{CountingDirectory, FixedRepository, counting_builder};

fn scoped_service(partner_name: Option<&str>) -> (PaymentService, Arc<AtomicUsize>) {
    let directory = Arc::new(CountingDirectory::new(&[("yesncf", "loc-yes")]));
    let partner = Arc::new(ScopedContextProvider::new(directory));
    if let Some(name) = partner_name {
        partner.provide_partner_name(name).unwrap();
    }
    let builds = Arc::new(AtomicUsize::new(0));
    let repository = Arc::new(DeferredPaymentRepository::new(
        partner,
        counting_builder(
            builds.clone(),
            vec![Payment::new(1, 100), Payment::new(2, 200)],
        ),
    ));
    (PaymentService::new(repository), builds)
}

#[tokio::test]
async fn test_derived_payment_adds_one() {
    let (service, builds) = scoped_service(Some("yesncf"));

    let first = service.compute_derived_payment(1).await.unwrap();
    let second = service.compute_derived_payment(2).await.unwrap();

    assert_eq!(first, Payment::new(1, 101));
    assert_eq!(second, Payment::new(2, 201));
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_without_partner_fails() {
    let (service, _) = scoped_service(None);

    let err = service.compute_derived_payment(1).await.unwrap_err();
    assert!(matches!(err, Error::NotProvided { .. }));
}

#[tokio::test]
async fn test_missing_payment_propagates_fetch_error() {
    let (service, _) = scoped_service(Some("yesncf"));

    let err = service.compute_derived_payment(9).await.unwrap_err();
    assert_eq!(err, Error::fetch("loc-yes", 9, "payment not found"));
}

#[tokio::test]
async fn test_with_ready_repository() {
    let service = PaymentService::with_repository(Arc::new(FixedRepository::new(
        "loc-ready",
        vec![Payment::new(7, 500)],
    )));

    let payment = service.compute_derived_payment(7).await.unwrap();
    assert_eq!(payment, Payment::new(7, 501));
}

#[tokio::test]
async fn test_factory_looks_up_partner_on_every_call() {
    let directory = Arc::new(CountingDirectory::new(&[("yesncf", "loc-yes")]));
    let builds = Arc::new(AtomicUsize::new(0));
    let factory = DirectoryPaymentRepositoryFactory::new(
        directory.clone(),
        counting_builder(builds.clone(), vec![Payment::new(1, 100)]),
    );

    let first = factory.create("yesncf").await.unwrap();
    let second = factory.create("yesncf").await.unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.database_location(), "loc-yes");
    assert_eq!(directory.calls(), 2);
    assert_eq!(builds.load(Ordering::SeqCst), 2);
    assert!(factory.create("ghost").await.is_err());
}
