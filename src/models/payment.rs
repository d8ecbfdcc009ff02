use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Outcome of a single submission attempt.
///
/// Created once per attempt and replaces any prior result, no history is
/// retained. At any time the checkout holds exactly one of: no result yet,
/// a success result, or a failure result.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentResult {
    pub succeeded: bool,
    /// Opaque card token returned by the gateway, if tokenization got that far
    pub token_id: Option<String>,
    /// Charge id assigned by the checkout backend on success
    pub charge_id: Option<String>,
    /// Display amount, converted back from the minor units on the wire
    pub amount: Decimal,
    pub description: Option<String>,
    pub failure_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentResult {
    pub fn settled(
        token_id: String,
        charge_id: Option<String>,
        amount: Decimal,
        description: Option<String>,
    ) -> Self {
        Self {
            succeeded: true,
            token_id: Some(token_id),
            charge_id,
            amount,
            description,
            failure_message: None,
            created_at: Utc::now(),
        }
    }

    pub fn failed(token_id: Option<String>, amount: Decimal, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            token_id,
            charge_id: None,
            amount,
            description: None,
            failure_message: Some(message.into()),
            created_at: Utc::now(),
        }
    }
}
