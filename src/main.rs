//! # Store Checkout Web Application
//!
//! Single-product storefront: renders the product page, collects billing
//! and card details, exchanges the card data for a gateway token and
//! settles the charge through the configured checkout backend.

#![recursion_limit = "256"]

pub mod api;
pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

use ntex::web;
use ntex_cors::Cors;
use rust_decimal::prelude::ToPrimitive;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    configure_and_run_server().await
}

/// Creates application state with the external collaborators.
///
/// The tokenizer is only wired up when a gateway publishable key is
/// configured; without it every submission is rejected before any
/// network call.
fn create_app_state() -> front::AppState {
    let tokenizer = (!config::APP_CONFIG.gateway_public_key.is_empty()).then(|| {
        Box::new(services::tokenizer::GatewayTokenizer::new()) as services::ImplCardTokenizer
    });

    front::AppState {
        tokenizer,
        charge_api: Box::new(services::charge::ChargeEndpointClient::new()),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server() -> anyhow::Result<()> {
    let server_addr = (
        "0.0.0.0",
        config::APP_CONFIG.web_server_port.to_u16().unwrap_or(8080),
    );

    web::server(move || {
        web::App::new()
            .wrap(
                Cors::new()
                    .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS"])
                    .allowed_origin("http://localhost:8080")
                    .allowed_origin(&config::APP_CONFIG.base_url())
                    .allowed_origin("https://api.stripe.com")
                    .finish(),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state())
            .configure(front::routes::checkout)
            .service((
                ntex_files::Files::new("/static", "web/static/"),
                front::store::serve_favicon,
                front::store::index,
            ))
            .default_service(
                web::route()
                    .guard(web::guard::Not(web::guard::Get()))
                    .to(front::store::serve_not_found),
            )
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
