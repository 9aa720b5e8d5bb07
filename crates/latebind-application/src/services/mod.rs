//! Application services

pub mod payment;

pub use payment::PaymentService;
