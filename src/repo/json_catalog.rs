//! Catalog loaded once from a JSON file and kept in memory.

use anyhow::{Context, bail};
use std::{collections::HashSet, fs, sync::Arc};

use crate::{models, repo::CatalogRepo};

#[derive(Clone, Debug, Default)]
pub struct JsonCatalog {
    products: Arc<Vec<models::product::Product>>,
}

impl JsonCatalog {
    /// Reads a `{ "products": [...] }` file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("catalog file {path} couldnt be read"))?;

        let catalog_file = serde_json::from_str::<models::product::CatalogFile>(&raw)
            .with_context(|| format!("catalog file {path} is not a valid catalog"))?;

        Self::from_products(catalog_file.products)
    }

    /// Builds the catalog keeping the given order; ids must be unique
    pub fn from_products(products: Vec<models::product::Product>) -> anyhow::Result<Self> {
        let mut seen_ids = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen_ids.insert(product.id) {
                bail!("product id {} appears more than once in the catalog", product.id);
            }
        }

        Ok(Self {
            products: Arc::new(products),
        })
    }
}

impl CatalogRepo for JsonCatalog {
    fn find_by_id(&self, product_id: i64) -> Option<models::product::Product> {
        self.products.iter().find(|p| p.id == product_id).cloned()
    }

    fn products(&self) -> Vec<models::product::Product> {
        self.products.to_vec()
    }
}
