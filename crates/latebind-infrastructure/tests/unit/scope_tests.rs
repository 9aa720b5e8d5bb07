//! Tests for the composition and request scopes

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use latebind_domain::Error;
use latebind_domain::value_objects::{ExecutionContext, Payment};
use latebind_infrastructure::Composition;
use latebind_infrastructure::config::AppConfig;
use latebind_providers::{InMemoryPartnerDirectory, InMemoryPaymentStore};

fn composition() -> Composition {
    let directory = InMemoryPartnerDirectory::new()
        .with_partner("A", "loc-a")
        .with_partner("B", "loc-b");
    let store = InMemoryPaymentStore::new()
        .with_payments("loc-a", [Payment::new(1, 100)])
        .with_payments("loc-b", [Payment::new(1, 500)]);
    Composition::new(Arc::new(directory), Arc::new(store))
}

#[test]
fn test_singletons_are_shared() {
    let composition = composition();

    assert!(Arc::ptr_eq(&composition.directory(), &composition.directory()));
    assert!(Arc::ptr_eq(
        &composition.payment_repository_factory(),
        &composition.payment_repository_factory()
    ));
    assert!(Arc::ptr_eq(&composition.clone().store(), &composition.store()));
}

#[test]
fn test_scoped_instances_are_per_scope() {
    let composition = composition();
    let first = composition.create_scope();
    let second = composition.create_scope();

    assert!(Arc::ptr_eq(
        &first.payment_repository(),
        &first.payment_repository()
    ));
    assert!(!Arc::ptr_eq(
        &first.payment_repository(),
        &second.payment_repository()
    ));
    assert!(Arc::ptr_eq(
        &first.execution_context_injector(),
        &first.execution_context_injector()
    ));
    assert_ne!(first.id(), second.id());
}

#[tokio::test]
async fn test_transient_services_share_the_scoped_repository() {
    let composition = composition();
    let scope = composition.create_scope();
    scope.current_partner_provider().provide_partner_name("A").unwrap();

    let first = scope.payment_service();
    let second = scope.payment_service();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.compute_derived_payment(1).await.unwrap(), Payment::new(1, 101));
    assert_eq!(second.compute_derived_payment(1).await.unwrap(), Payment::new(1, 101));
    let repository = scope.payment_repository().get().await.unwrap();
    assert!(Arc::ptr_eq(
        &repository,
        &scope.payment_repository().get().await.unwrap()
    ));
}

#[test]
fn test_payment_root_shares_one_service_per_resolution() {
    let scope = composition().create_scope();

    let first = scope.resolve_payment_root();
    let second = scope.resolve_payment_root();

    assert!(first.shares_service());
    assert!(second.shares_service());
    assert!(!Arc::ptr_eq(&first.service, &second.service));
}

#[tokio::test]
async fn test_independent_scopes_resolve_their_own_partner() {
    let composition = composition();
    let scope_a = composition.create_scope();
    let scope_b = composition.create_scope();
    scope_a.current_partner_provider().provide_partner_name("A").unwrap();
    scope_b.current_partner_provider().provide_partner_name("B").unwrap();

    let partner_a = scope_a.current_partner_provider();
    let partner_b = scope_b.current_partner_provider();
    let (a, b) = tokio::join!(partner_a.partner_context(), partner_b.partner_context());
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_ne!(a, b);
    assert_eq!(a.database_location(), "loc-a");
    assert_eq!(b.database_location(), "loc-b");

    let payment_a = scope_a.payment_service().compute_derived_payment(1).await.unwrap();
    let payment_b = scope_b.payment_service().compute_derived_payment(1).await.unwrap();
    assert_eq!(payment_a.amount, 101);
    assert_eq!(payment_b.amount, 501);
    assert_eq!(scope_a.partner_name(), Some("A"));
}

#[tokio::test]
async fn test_seeded_composition_serves_demo_partners() {
    let composition = Composition::from_config(&AppConfig::default());
    let scope = composition.create_scope();
    scope
        .current_partner_provider()
        .provide_partner_name("helloexo")
        .unwrap();

    let payment = scope.payment_service().compute_derived_payment(2).await.unwrap();

    assert_eq!(payment, Payment::new(2, 601));
}

#[tokio::test]
async fn test_unknown_partner_fails_in_scope() {
    let scope = composition().create_scope();
    scope
        .current_partner_provider()
        .provide_partner_name("ghost")
        .unwrap();

    let err = scope
        .payment_service()
        .compute_derived_payment(1)
        .await
        .unwrap_err();

    assert_eq!(err, Error::lookup("ghost", "unknown partner"));
}

#[tokio::test]
async fn test_scope_wires_execution_context_services() {
    let scope = composition().create_scope();
    let service = scope.sample_service();
    let async_service = scope.sample_async_service();
    let context = ExecutionContext::generate();

    scope.execution_context_injector().inject(Some(context)).unwrap();
    scope.execution_context_async_injector().inject(context.id).unwrap();

    assert_eq!(service.execution_context().unwrap(), Some(context));
    assert_eq!(async_service.execution_context().await.unwrap(), context);
}

#[test]
fn test_dispose_runs_hooks_once_in_reverse_order() {
    let scope = composition().create_scope();
    let order = Arc::new(Mutex::new(Vec::new()));
    for name in ["repository", "partner"] {
        let order = Arc::clone(&order);
        scope.on_dispose(move || order.lock().unwrap().push(name));
    }

    scope.dispose();
    scope.dispose();

    assert!(scope.is_disposed());
    assert_eq!(*order.lock().unwrap(), vec!["partner", "repository"]);
}

#[test]
fn test_drop_disposes_scope() {
    let runs = Arc::new(AtomicUsize::new(0));
    {
        let scope = composition().create_scope();
        let runs = Arc::clone(&runs);
        scope.on_dispose(move || {
            runs.fetch_add(1, Ordering::SeqCst);
        });
    }

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_hook_after_dispose_runs_immediately() {
    let scope = composition().create_scope();
    scope.dispose();

    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    scope.on_dispose(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    drop(scope);

    assert_eq!(runs.load(Ordering::SeqCst), 1);
}
