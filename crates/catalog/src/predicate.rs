//! Filter predicate engine: per-facet inclusion tests, AND-composed.

use crate::facet::Facet;
use crate::product::Product;
use crate::selection::FilterSelection;

/// Does `product` pass the constraint `selection` places on `facet`?
///
/// An unset facet places no constraint.
pub fn facet_matches(facet: Facet, product: &Product, selection: &FilterSelection) -> bool {
    match facet {
        Facet::ProductType => selection
            .product_type()
            .is_none_or(|want| *want == product.product_type),
        Facet::Area => selection.area().is_none_or(|want| *want == product.area),
        Facet::Finish => selection.finish().is_none_or(|want| *want == product.finish),
        Facet::Color => selection.color().is_none_or(|want| *want == product.color),
        Facet::Price => selection
            .price_range()
            .is_none_or(|range| range.contains(product.price)),
    }
}

/// Conjunction over every facet; stops at the first failing one.
pub fn matches(product: &Product, selection: &FilterSelection) -> bool {
    Facet::ALL
        .into_iter()
        .all(|facet| facet_matches(facet, product, selection))
}

/// Matching products, in catalog order.
pub fn filter<'a>(
    catalog: &'a [Product],
    selection: &'a FilterSelection,
) -> impl Iterator<Item = &'a Product> + 'a {
    catalog.iter().filter(move |p| matches(p, selection))
}

pub fn count_matching(catalog: &[Product], selection: &FilterSelection) -> usize {
    if selection.is_empty() {
        return catalog.len();
    }
    filter(catalog, selection).count()
}
