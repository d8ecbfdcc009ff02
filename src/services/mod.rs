pub mod charge;
pub mod tokenizer;

use crate::models;
use async_trait::async_trait;

/// Gateway collaborator that exchanges raw card data for an opaque token.
///
/// Card numbers only ever travel to this collaborator; the charge backend
/// sees the token alone.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardTokenizer {
    async fn create_card_token(
        &self,
        card: &models::card::CardDetails,
        billing: &models::billing::BillingDetails,
    ) -> anyhow::Result<String>;
}

/// Backend collaborator that settles a charge for a previously created token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChargeApi {
    async fn create_charge(
        &self,
        request: &models::gateway::ChargeRequest,
    ) -> anyhow::Result<models::gateway::ChargeResponse>;
}

pub type ImplCardTokenizer = Box<dyn CardTokenizer>;
pub type ImplChargeApi = Box<dyn ChargeApi>;
