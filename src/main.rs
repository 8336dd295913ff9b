//! # Storefront
//!
//! Checkout and order confirmation views for an in-memory product
//! catalog. The checkout form formats and validates the payment fields
//! before sending the buyer to the confirmation page.

pub mod api;
pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod models;
pub mod repo;
pub mod services;

use anyhow::Context;
use log::info;
use ntex::web;

use crate::repo::CatalogRepo;

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    config::init_config()?;

    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;

    logger::setup_simple_logger(app_config.is_prod())?;

    let catalog = repo::json_catalog::JsonCatalog::from_file(&app_config.catalog_path)?;
    info!(
        "catalog loaded from {} with {} products",
        app_config.catalog_path,
        catalog.products().len()
    );

    configure_and_run_server(catalog).await
}

/// Creates application state from the provided services
fn create_app_state(catalog: repo::json_catalog::JsonCatalog) -> front::AppState {
    front::AppState {
        catalog: Box::new(catalog),
        clock: Box::new(services::clock::SystemClock),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(catalog: repo::json_catalog::JsonCatalog) -> anyhow::Result<()> {
    let app_config = config::APP_CONFIG
        .get()
        .context("failed to get app config")?;
    let server_addr = (app_config.web_server_host.as_str(), app_config.web_server_port);
    let images_dir = app_config.images_dir.clone();

    info!("serving storefront at {}", app_config.base_url());

    web::server(move || {
        web::App::new()
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(catalog.clone()))
            .configure(front::routes::checkout)
            .configure(front::routes::thank_you)
            .service(ntex_files::Files::new(
                consts::IMAGES_URL_PREFIX,
                images_dir.as_str(),
            ))
            .default_service(web::route().to(front::server::serve_not_found))
    })
    .bind(server_addr)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
