//! Request handlers
//!
//! Controllers live for one request. They are built from the request scope,
//! or from the composition when the partner is passed explicitly, and are the
//! only place where the partner name enters the scope.

use std::sync::Arc;

use latebind_application::ports::{
    CurrentPartnerProvider, PaymentRepositoryFactory, PaymentServiceInterface,
};
use latebind_application::services::PaymentService;
use latebind_domain::error::Result;
use latebind_domain::value_objects::{PartnerContext, Payment};
use latebind_infrastructure::{Composition, RequestScope};
use tracing::debug;

/// Serves derived payments through the scope's deferred repository
pub struct PaymentController {
    partner: Arc<dyn CurrentPartnerProvider>,
    payments: Arc<dyn PaymentServiceInterface>,
}

impl PaymentController {
    /// Create a controller over its collaborators
    pub fn new(
        partner: Arc<dyn CurrentPartnerProvider>,
        payments: Arc<dyn PaymentServiceInterface>,
    ) -> Self {
        Self { partner, payments }
    }

    /// Create a controller wired from a request scope
    pub fn from_scope(scope: &RequestScope) -> Self {
        Self::new(scope.current_partner_provider(), scope.payment_service())
    }

    /// Provide the partner of the request, then compute the derived payment
    pub async fn get_payment(&self, partner_name: &str, payment_id: i32) -> Result<Payment> {
        debug!(partner = partner_name, payment_id, "Payment requested");
        self.partner.provide_partner_name(partner_name)?;
        self.payments.compute_derived_payment(payment_id).await
    }
}

/// Serves derived payments with a repository built per call
pub struct ManualPaymentController {
    factory: Arc<dyn PaymentRepositoryFactory>,
}

impl ManualPaymentController {
    /// Create a controller over a repository factory
    pub fn new(factory: Arc<dyn PaymentRepositoryFactory>) -> Self {
        Self { factory }
    }

    /// Create a controller using the composition's repository factory
    pub fn from_composition(composition: &Composition) -> Self {
        Self::new(composition.payment_repository_factory())
    }

    /// Build a repository for `partner_name` and compute the derived payment
    pub async fn get_payment(&self, partner_name: &str, payment_id: i32) -> Result<Payment> {
        debug!(partner = partner_name, payment_id, "Manual payment requested");
        let repository = self.factory.create(partner_name).await?;
        PaymentService::with_repository(repository)
            .compute_derived_payment(payment_id)
            .await
    }
}

/// Serves the resolved partner context
pub struct PartnerController {
    partner: Arc<dyn CurrentPartnerProvider>,
}

impl PartnerController {
    /// Create a controller over the scope's partner provider
    pub fn new(partner: Arc<dyn CurrentPartnerProvider>) -> Self {
        Self { partner }
    }

    /// Create a controller wired from a request scope
    pub fn from_scope(scope: &RequestScope) -> Self {
        Self::new(scope.current_partner_provider())
    }

    /// Provide the partner of the request and resolve its context
    pub async fn get_partner_context(&self, partner_name: &str) -> Result<PartnerContext> {
        self.partner.provide_partner_name(partner_name)?;
        self.partner.partner_context().await
    }
}
