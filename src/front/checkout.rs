use log::info;
use ntex::{http, web};
use serde_json::json;

use crate::{
    api, consts,
    front::{AppState, errors, forms, templates, utils},
    models::{
        self,
        payment_form::{FieldId, PaymentFormState},
    },
    services::notification::PageNotifier,
};

fn render_checkout_view(
    product: &models::product::Product,
    form_state: &PaymentFormState,
    error_messages: &[String],
    focus: Option<FieldId>,
) -> Result<String, web::Error> {
    let context = utils::build_context(
        "/checkout",
        json!({
            "product": product,
            "total_price": models::product::format_price(product.discounted_price),
            "form": form_state,
            "errors": error_messages,
            "focus": focus.map(|field| field.html_id()),
            "editing_keys": consts::ALLOWED_EDITING_KEYS,
        }),
    )?;

    Ok(templates::WEB_TEMPLATES
        .render("checkout.html", &context)
        .map_err(|e| {
            errors::ServerError::TemplateError(format!(
                "at /checkout endpoint the template couldnt be rendered: {e}"
            ))
        })?)
}

#[web::get("")]
async fn get_checkout_view(
    app_state: web::types::State<AppState>,
    query: web::types::Query<forms::payment::ProductQuery>,
) -> Result<impl web::Responder, web::Error> {
    let product = api::product::resolve_product(query.product_id.as_deref(), &*app_state.catalog)
        .map_err(|_| errors::UserError::ProductNotFound)?;

    let content = render_checkout_view(&product, &PaymentFormState::default(), &[], None)?;

    Ok(utils::html_response(http::StatusCode::OK, content))
}

/// Formats the posted values like the page's change handlers, then
/// validates them all at once. Rejections render the form again with
/// every error message and the first invalid input focused.
#[web::post("/submit")]
async fn submit_payment(
    app_state: web::types::State<AppState>,
    query: web::types::Query<forms::payment::ProductQuery>,
    form: web::types::Form<forms::payment::PaymentForm>,
) -> Result<web::HttpResponse, web::Error> {
    let product = api::product::resolve_product(query.product_id.as_deref(), &*app_state.catalog)
        .map_err(|_| errors::UserError::ProductNotFound)?;

    let focus = forms::payment::FocusSlot::default();
    let mut checkout_form = form.0.into_checkout_form(product.id, &focus);
    for field in FieldId::ALL {
        checkout_form.on_input(field);
    }

    let mut notifier = PageNotifier::default();
    match checkout_form.submit(&mut notifier, &*app_state.clock) {
        Ok(navigation_target) => utils::redirect_to(&navigation_target.to_string()),
        Err(checkout_errors) => {
            info!(
                "checkout for product {} rejected with {} invalid fields",
                product.id,
                checkout_errors.len()
            );
            let content = render_checkout_view(
                &product,
                &checkout_form.state(),
                notifier.messages(),
                focus.get(),
            )?;

            Ok(utils::html_response(http::StatusCode::BAD_REQUEST, content))
        }
    }
}

/// Live formatting of a single input, used by the page as the user types
#[web::post("/field")]
async fn format_field_value(
    request_body: web::types::Json<forms::payment::FieldFormatRequest>,
) -> Result<impl web::Responder, web::Error> {
    let request = request_body.0;

    Ok(
        web::HttpResponse::Ok().json(&forms::payment::FieldFormatResponse {
            value: api::checkout::format_field(request.field, &request.value),
        }),
    )
}
