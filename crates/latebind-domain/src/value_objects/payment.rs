//! Payment value object

use serde::{Deserialize, Serialize};

/// Payment record stored in a partner database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment identifier, unique within one partner database
    pub id: i32,
    /// Payment amount
    pub amount: i64,
}

impl Payment {
    /// Create a new payment
    pub fn new(id: i32, amount: i64) -> Self {
        Self { id, amount }
    }
}
