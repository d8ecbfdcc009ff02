use crate::{
    api, config, consts,
    front::{AppState, errors, forms, templates},
    utils,
};
use ntex::{http, web};
use serde_json::json;

#[web::get("")]
async fn get_checkout_view() -> Result<impl web::Responder, web::Error> {
    let context = tera::Context::from_value(json!({
        "product_name": consts::PRODUCT_NAME,
        "product_description": consts::PRODUCT_DESCRIPTION,
        "product_price": utils::format_currency(consts::PRODUCT_PRICE),
        "gateway_public_key": &config::APP_CONFIG.gateway_public_key,
        "back_error_url": format!("{}/checkout", config::APP_CONFIG.base_url()),
    }))
    .unwrap_or_default();

    let content = templates::WEB_TEMPLATES
        .render("checkout.html", &context)
        .map_err(|e| {
            errors::ServerError::TemplateError(format!(
                "at /checkout endpoint the template couldnt be rendered: {}",
                e
            ))
        })?;

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(content))
}

#[derive(serde::Serialize)]
struct CheckoutSettledResponse {
    charge_id: Option<String>,
    amount: String,
    description: Option<String>,
}

#[derive(serde::Serialize)]
struct CheckoutFailedResponse {
    message: String,
}

#[web::post("/process")]
async fn process_checkout(
    app_state: web::types::State<AppState>,
    request_body: web::types::Json<forms::checkout::CheckoutFormData>,
) -> Result<impl web::Responder, web::Error> {
    let form = request_body.0;

    let mut flow = api::checkout::CheckoutFlow::new(
        app_state.tokenizer.as_ref(),
        &app_state.charge_api,
        consts::PRODUCT_PRICE,
    );
    flow.edit_billing(form.billing_details());
    flow.edit_card(form.card_details(), form.card_input_state());

    match flow.submit().await {
        api::checkout::SubmitOutcome::GatewayNotReady => Err(errors::ServerError::ExternalServiceError(
            "payment gateway is not configured".to_string(),
        )
        .into()),
        api::checkout::SubmitOutcome::FocusCardField => {
            let message = flow
                .card_input()
                .error_message
                .clone()
                .unwrap_or_else(|| "card details are incomplete".to_string());
            Err(errors::UserError::FormInputValueError(message).into())
        }
        api::checkout::SubmitOutcome::Settled => match flow.result() {
            Some(result) if result.succeeded => {
                Ok(web::HttpResponse::Created().json(&CheckoutSettledResponse {
                    charge_id: result.charge_id.clone(),
                    amount: utils::format_currency(result.amount),
                    description: result.description.clone(),
                }))
            }
            Some(result) => Ok(
                web::HttpResponse::build(http::StatusCode::PAYMENT_REQUIRED).json(
                    &CheckoutFailedResponse {
                        message: result
                            .failure_message
                            .clone()
                            .unwrap_or_else(|| "the payment was declined".to_string()),
                    },
                ),
            ),
            None => Err(errors::ServerError::InternalServerError(
                "settled submission without a result".to_string(),
            )
            .into()),
        },
    }
}
