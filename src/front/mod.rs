pub mod checkout;
pub mod errors;
pub mod forms;
pub mod routes;
pub mod store;
pub mod templates;

use crate::services;

pub struct AppState {
    /// `None` until the gateway publishable key is configured; submissions
    /// are rejected locally while it is absent
    pub tokenizer: Option<services::ImplCardTokenizer>,
    pub charge_api: services::ImplChargeApi,
}
