//! # Charge Endpoint Client
//!
//! HTTP client for the external backend that settles charges. Posts the
//! `{id, amount}` body as JSON with a fresh idempotency key per request.

use crate::{config, models, utils};
use anyhow::{Context, bail};
use async_trait::async_trait;
use log::error;
use uuid::Uuid;

/// Charge client posting to the configured checkout backend
pub struct ChargeEndpointClient {
    endpoint: String,
}

impl ChargeEndpointClient {
    pub fn new() -> Self {
        Self {
            endpoint: config::APP_CONFIG.charge_endpoint(),
        }
    }
}

#[async_trait]
impl super::ChargeApi for ChargeEndpointClient {
    async fn create_charge(
        &self,
        request: &models::gateway::ChargeRequest,
    ) -> anyhow::Result<models::gateway::ChargeResponse> {
        let response = utils::REQUEST_CLIENT
            .post(&self.endpoint)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("X-Idempotency-Key", Uuid::new_v4().to_string())
            .json(request)
            .send()
            .await
            .context("charge endpoint is unreachable")?;

        if !response.status().is_success() {
            error!("{:#?}", response.json::<serde_json::Value>().await);
            bail!("charge endpoint returned an error status");
        }

        Ok(response.json::<models::gateway::ChargeResponse>().await?)
    }
}
