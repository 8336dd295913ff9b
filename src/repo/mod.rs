pub mod json_catalog;

use crate::models;

/// Read-only product catalog
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepo {
    /// Exact match on the product id
    fn find_by_id(&self, product_id: i64) -> Option<models::product::Product>;

    /// All products in catalog order
    fn products(&self) -> Vec<models::product::Product>;
}

pub type ImplCatalogRepo = Box<dyn CatalogRepo>;
