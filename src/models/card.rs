/// Raw card fields as collected by the checkout form. Only ever forwarded
/// to the gateway token endpoint, never to the charge backend.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    pub cvc: String,
}

/// Validation state of the card input.
///
/// Mirrors the change notifications of a card input widget: either the
/// input is complete, or it carries an inline error, or it is still being
/// filled in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardInputState {
    pub has_error: bool,
    pub error_message: Option<String>,
    pub is_complete: bool,
}

impl CardInputState {
    pub fn complete() -> Self {
        Self {
            has_error: false,
            error_message: None,
            is_complete: true,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            has_error: true,
            error_message: Some(message.into()),
            is_complete: false,
        }
    }
}
