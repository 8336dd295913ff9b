use log::warn;

use crate::{api::CheckoutError, models, repo::CatalogRepo};

/// Reads a numeric literal: integers, `0x` hex, or a float with no
/// fractional part (`1.0`, `1e0`)
fn parse_numeric_id(value: &str) -> Option<i64> {
    if let Ok(product_id) = value.parse::<i64>() {
        return Some(product_id);
    }

    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }

    let number = value.parse::<f64>().ok()?;
    let in_range = number.is_finite() && number.abs() < i64::MAX as f64;
    if !in_range || number.fract() != 0.0 {
        return None;
    }

    Some(number as i64)
}

/// Parses the `product_id` query value.
///
/// Missing, empty, non numeric, fractional and zero ids are all
/// rejected; the catalog never holds a product with id zero.
pub fn parse_product_id(raw_product_id: Option<&str>) -> Option<i64> {
    raw_product_id
        .map(str::trim)
        .and_then(parse_numeric_id)
        .filter(|product_id| *product_id != 0)
}

/// Looks up the product a checkout or confirmation view was opened for
pub fn resolve_product(
    raw_product_id: Option<&str>,
    catalog: &dyn CatalogRepo,
) -> Result<models::product::Product, CheckoutError> {
    let product = parse_product_id(raw_product_id).and_then(|id| catalog.find_by_id(id));

    product.ok_or_else(|| {
        warn!("no product for product_id {raw_product_id:?}");
        CheckoutError::ProductNotFound
    })
}
