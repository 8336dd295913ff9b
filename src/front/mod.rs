pub mod checkout;
pub mod errors;
pub mod forms;
pub mod routes;
pub mod server;
pub mod templates;
pub mod thank_you;
pub mod utils;

use crate::{repo, services};

pub struct AppState {
    pub catalog: repo::ImplCatalogRepo,
    pub clock: services::ImplClock,
}
