//! Wire schemas for the payment gateway and the external charge endpoint.

/// Form body sent to the gateway card-token endpoint.
#[derive(serde::Serialize, Debug, Default)]
pub struct CardTokenRequest {
    #[serde(rename = "card[number]")]
    pub number: String,
    #[serde(rename = "card[exp_month]")]
    pub exp_month: u32,
    #[serde(rename = "card[exp_year]")]
    pub exp_year: u32,
    #[serde(rename = "card[cvc]")]
    pub cvc: String,
    #[serde(rename = "card[name]")]
    pub name: String,
}

/// Gateway answer: a token id, or a decline with a message.
#[derive(serde::Deserialize, Debug, Default)]
pub struct CardTokenResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub error: Option<GatewayError>,
}

#[derive(serde::Deserialize, Debug)]
pub struct GatewayError {
    pub message: String,
}

/// Body posted to the charge endpoint. `id` is the card token and `amount`
/// is in integer minor units.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ChargeRequest {
    pub id: String,
    pub amount: u64,
}

/// Charge endpoint response. `payment` is present on success, `message`
/// on business failure; transport failures never get this far.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default)]
pub struct ChargeResponse {
    pub status: bool,
    #[serde(default)]
    pub payment: Option<ChargePayment>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Settled payment details, `amount` in minor units.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct ChargePayment {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub description: Option<String>,
}
