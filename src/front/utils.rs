use super::errors;

/// [ntext responder](ntex::web::HttpResponse) to redirect to `url`
pub fn redirect_to(url: &str) -> Result<ntex::web::HttpResponse, ntex::web::Error> {
    Ok(ntex::web::HttpResponse::Found()
        .header("location", url)
        .finish())
}

/// Wraps a rendered page in an html response with `status`
pub fn html_response(status: ntex::http::StatusCode, content: String) -> ntex::web::HttpResponse {
    ntex::web::HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(content)
}

/// Template context from a json object; `view` names the page in the error
pub fn build_context(
    view: &str,
    value: serde_json::Value,
) -> Result<tera::Context, errors::ServerError> {
    tera::Context::from_value(value).map_err(|e| {
        errors::ServerError::TemplateError(format!(
            "at {view} endpoint the template context couldnt be built: {e}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_context_from_object() {
        let context = build_context("/checkout", json!({"total_price": "$19.99"})).unwrap();

        assert_eq!(
            context.get("total_price"),
            Some(&json!("$19.99"))
        );
    }

    #[test]
    fn test_build_context_rejects_non_object() {
        let result = build_context("/checkout", json!(["not", "an", "object"]));

        assert!(matches!(result, Err(errors::ServerError::TemplateError(_))));
    }
}
