use super::templates;
use derive_more::{Display, Error};
use log::{error, warn};
use ntex::{http, web};

#[derive(Debug, Display, Error)]
pub enum UserError {
    ProductNotFound,
    UrlNotFound,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        let mut context = tera::Context::new();
        warn!("{:#?}", self);

        let template_name = match self {
            UserError::ProductNotFound => {
                context.insert(
                    "msg_details",
                    "Product not found. Please go back and pick an item.",
                );
                "errors/not_found.html"
            }
            UserError::UrlNotFound => {
                context.insert("msg_details", "Page not found.");
                "errors/not_found.html"
            }
        };

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/html; charset=utf-8")
            .body(
                templates::WEB_TEMPLATES
                    .render(template_name, &context)
                    .unwrap_or(self.to_string()),
            )
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::ProductNotFound | UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    TemplateError(#[error(not(source))] String),
    InternalServerError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::TemplateError(msg) => format!("[TemplateError] {:#?}", msg),
            ServerError::InternalServerError(msg) => format!("[InternalServerError] {:#?}", msg),
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        web::HttpResponse::build(self.status_code())
            .set_header("content-type", "text/html; charset=utf-8")
            .body(
                templates::WEB_TEMPLATES
                    .render("errors/internal_error.html", &tera::Context::new())
                    .unwrap_or(self.to_string()),
            )
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
