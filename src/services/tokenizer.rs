//! # Gateway Tokenizer
//!
//! HTTP client for the payment gateway card-token API. Exchanges the card
//! fields plus the billing name for an opaque, single-use token.

use crate::{config, consts, models, utils};
use anyhow::bail;
use async_trait::async_trait;
use log::error;

/// Tokenizer backed by the gateway REST API
pub struct GatewayTokenizer {
    endpoint: String,
    public_key: String,
}

impl GatewayTokenizer {
    pub fn new() -> Self {
        Self {
            endpoint: consts::GATEWAY_ENDPOINT_CARD_TOKENS.to_string(),
            public_key: config::APP_CONFIG.gateway_public_key.clone(),
        }
    }
}

#[async_trait]
impl super::CardTokenizer for GatewayTokenizer {
    async fn create_card_token(
        &self,
        card: &models::card::CardDetails,
        billing: &models::billing::BillingDetails,
    ) -> anyhow::Result<String> {
        let request = models::gateway::CardTokenRequest {
            number: card.number.clone(),
            exp_month: card.exp_month,
            exp_year: card.exp_year,
            cvc: card.cvc.clone(),
            name: billing.name.clone(),
        };

        let response = utils::REQUEST_CLIENT
            .post(&self.endpoint)
            .header("accept", "application/json")
            .bearer_auth(&self.public_key)
            .form(&request)
            .send()
            .await?;

        let body = response
            .json::<models::gateway::CardTokenResponse>()
            .await?;

        if let Some(gateway_error) = body.error {
            error!("card token request declined: {}", gateway_error.message);
            bail!("{}", gateway_error.message);
        }

        match body.id {
            Some(token) => Ok(token),
            None => bail!("gateway returned neither a token nor an error"),
        }
    }
}
