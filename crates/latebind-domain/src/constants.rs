//! Domain layer constants

/// Label of the deferred partner name in error messages
pub const PARTNER_NAME: &str = "Partner name";

/// Label of the deferred execution context in error messages
pub const EXECUTION_CONTEXT: &str = "ExecutionContext";

/// Amount added to a stored payment by the derived payment use case
pub const DERIVED_PAYMENT_INCREMENT: i64 = 1;
