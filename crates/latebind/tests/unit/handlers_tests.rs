//! Tests for the request handlers

use latebind::handlers::{ManualPaymentController, PartnerController, PaymentController};
use latebind::infrastructure::AppConfig;
use latebind::infrastructure::config::types::YESNCF_LOCATION;
use latebind::{Composition, Error, Payment};

fn composition() -> Composition {
    Composition::from_config(&AppConfig::default())
}

#[tokio::test]
async fn test_payment_controller_serves_each_partner() {
    let composition = composition();

    let yesncf = PaymentController::from_scope(&composition.create_scope())
        .get_payment("yesncf", 1)
        .await
        .unwrap();
    let helloexo = PaymentController::from_scope(&composition.create_scope())
        .get_payment("helloexo", 1)
        .await
        .unwrap();

    assert_eq!(yesncf, Payment::new(1, 101));
    assert_eq!(helloexo, Payment::new(1, 501));
}

#[tokio::test]
async fn test_second_request_in_same_scope_is_rejected() {
    let composition = composition();
    let scope = composition.create_scope();
    let controller = PaymentController::from_scope(&scope);

    controller.get_payment("yesncf", 1).await.unwrap();
    let err = controller.get_payment("helloexo", 1).await.unwrap_err();

    assert!(matches!(err, Error::AlreadyProvided { .. }));
    assert_eq!(scope.partner_name(), Some("yesncf"));
}

#[tokio::test]
async fn test_manual_controller_matches_scoped_controller() {
    let composition = composition();
    let manual = ManualPaymentController::from_composition(&composition);

    let first = manual.get_payment("helloexo", 2).await.unwrap();
    let second = manual.get_payment("yesncf", 2).await.unwrap();

    assert_eq!(first, Payment::new(2, 601));
    assert_eq!(second, Payment::new(2, 201));
}

#[tokio::test]
async fn test_manual_controller_reports_unknown_partner() {
    let manual = ManualPaymentController::from_composition(&composition());

    let err = manual.get_payment("ghost", 1).await.unwrap_err();

    assert_eq!(err, Error::lookup("ghost", "unknown partner"));
}

#[tokio::test]
async fn test_partner_controller_resolves_context() {
    let composition = composition();
    let scope = composition.create_scope();

    let context = PartnerController::from_scope(&scope)
        .get_partner_context("yesncf")
        .await
        .unwrap();

    assert_eq!(context.database_location(), YESNCF_LOCATION);
}

#[tokio::test]
async fn test_blank_partner_is_invalid() {
    let scope = composition().create_scope();

    let err = PaymentController::from_scope(&scope)
        .get_payment(" ", 1)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidArgument { .. }));
}
