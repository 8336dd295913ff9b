use log::error;
use std::sync::LazyLock;
use tera::Tera;

/// Templates are compiled into the binary so it runs from any directory
const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("../../web/templates/base.html")),
    ("checkout.html", include_str!("../../web/templates/checkout.html")),
    ("thank_you.html", include_str!("../../web/templates/thank_you.html")),
    (
        "errors/not_found.html",
        include_str!("../../web/templates/errors/not_found.html"),
    ),
    (
        "errors/internal_error.html",
        include_str!("../../web/templates/errors/internal_error.html"),
    ),
];

fn build_templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    Ok(tera)
}

/// A broken template set is logged once; every render then fails
pub static WEB_TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    build_templates().unwrap_or_else(|e| {
        error!("web templates couldnt be parsed: {e}");
        Tera::default()
    })
});
