//! Order confirmation view, reached after an accepted checkout

use ntex::{http, web};
use serde_json::json;

use crate::{
    api, consts,
    front::{AppState, errors, forms, templates, utils},
    models,
};

#[web::get("")]
async fn get_thank_you_view(
    app_state: web::types::State<AppState>,
    query: web::types::Query<forms::payment::ProductQuery>,
) -> Result<impl web::Responder, web::Error> {
    let product = api::product::resolve_product(query.product_id.as_deref(), &*app_state.catalog)
        .map_err(|_| errors::UserError::ProductNotFound)?;

    let context = utils::build_context(
        "/thank-you",
        json!({
            "product": &product,
            "image_url": format!("{}/{}", consts::IMAGES_URL_PREFIX, product.image_file_name),
            "order_total": models::product::format_price(product.discounted_price),
        }),
    )?;

    let content = templates::WEB_TEMPLATES
        .render("thank_you.html", &context)
        .map_err(|e| {
            errors::ServerError::TemplateError(format!(
                "at /thank-you endpoint the template couldnt be rendered: {e}"
            ))
        })?;

    Ok(utils::html_response(http::StatusCode::OK, content))
}

#[cfg(test)]
mod tests {
    use crate::front::{routes, test_utils};
    use ntex::{http, web, web::test};

    #[ntex::test]
    async fn test_thank_you_view_shows_order() {
        let app = test::init_service(
            web::App::new()
                .state(test_utils::test_app_state())
                .configure(routes::thank_you),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/thank-you?product_id=1")
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), http::StatusCode::OK);
        let body = test::read_body(response).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("Canvas Tote"));
        assert!(body.contains("Sturdy everyday bag"));
        assert!(body.contains("Order Total: $19.99"));
    }

    #[ntex::test]
    async fn test_thank_you_view_missing_product() {
        let app = test::init_service(
            web::App::new()
                .state(test_utils::test_app_state())
                .configure(routes::thank_you),
        )
        .await;
        let request = test::TestRequest::get()
            .uri("/thank-you?product_id=0")
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), http::StatusCode::NOT_FOUND);
    }
}
