//! Test fixtures shared by the unit tests.

use paintshop_core::ProductId;

use crate::facet::{AreaId, CategoryId, ColorId, FinishId};
use crate::product::Product;

pub fn product(product_type: &str, area: &str, finish: &str, color: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(),
        name: format!("{product_type} {finish} {color}"),
        product_type: CategoryId::new(product_type).unwrap(),
        area: AreaId::new(area).unwrap(),
        finish: FinishId::new(finish).unwrap(),
        color: ColorId::new(color).unwrap(),
        price,
    }
}

/// Same attributes, only prices differ.
pub fn priced(prices: &[f64]) -> Vec<Product> {
    prices
        .iter()
        .map(|&p| product("interior-paint", "walls", "matt", "white", p))
        .collect()
}

/// A small mixed catalog.
pub fn catalog() -> Vec<Product> {
    vec![
        product("interior-paint", "walls", "matt", "white", 39.0),
        product("interior-paint", "ceilings", "matt", "white", 29.0),
        product("interior-paint", "walls", "satin", "beige", 45.0),
        product("exterior-paint", "facades", "matt", "grey", 89.0),
        product("exterior-paint", "facades", "satin", "anthracite", 99.0),
        product("primer", "metal", "matt", "grey", 24.0),
        product("varnish", "wood", "gloss", "black", 54.0),
        product("enamel", "metal", "gloss", "red", 64.0),
        product("floor-coating", "floors", "semi-gloss", "grey", 149.0),
        product("wood-stain", "wood", "satin", "green", 34.0),
    ]
}
