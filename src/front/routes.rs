//! Frontend route configuration module.
//!
//! Routes are grouped by view into scopes.

use super::{checkout, thank_you};
use ntex::web;

/// Configures checkout routes.
///
/// # Routes
/// - `GET /checkout?product_id={id}` - Checkout page view
/// - `POST /checkout/submit?product_id={id}` - Validate payment fields and redirect
/// - `POST /checkout/field` - Live formatting of a single input value
pub fn checkout(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/checkout").service((
        checkout::get_checkout_view,
        checkout::submit_payment,
        checkout::format_field_value,
    )));
}

/// Configures the order confirmation route.
///
/// # Routes
/// - `GET /thank-you?product_id={id}` - Confirmation of the purchased product
pub fn thank_you(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/thank-you").service((thank_you::get_thank_you_view,)));
}
