use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub discounted_price: Decimal,
    pub image_file_name: String,
}

/// Shape of the catalog file: `{ "products": [...] }`
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    pub products: Vec<Product>,
}

/// Renders a price as dollars with two decimals, e.g. `$19.99`
pub fn format_price(value: Decimal) -> String {
    format!(
        "${:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
