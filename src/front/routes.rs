//! Frontend route configuration module.
//!
//! Routes are grouped by functionality into logical scopes.

use super::checkout;
use ntex::web;

/// Configures the checkout routes.
///
/// # Routes
/// - `GET /checkout` - Checkout form view
/// - `POST /checkout/process` - Run one payment submission
pub fn checkout(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/checkout").service((checkout::get_checkout_view, checkout::process_checkout)),
    );
}
