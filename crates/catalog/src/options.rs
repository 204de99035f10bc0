//! Filter option providers: the selectable values of each facet.
//!
//! Lists are ordered and immutable once built. `StaticOptions` carries the
//! compiled-in paint catalog; `DerivedOptions` builds the lists from whatever
//! product set the data source delivered.

use serde::{Deserialize, Serialize};

use crate::facet::{AreaId, CategoryId, ColorId, Facet, FacetValue, FinishId};
use crate::price::PriceBounds;
use crate::product::Product;

/// Swatch used when a color has no known display value.
pub const UNKNOWN_SWATCH: &str = "#cccccc";

/// One selectable value of a discrete facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption<Id> {
    pub id: Id,
    pub display_name: String,
}

/// A selectable color, with the swatch the sidebar paints next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: ColorId,
    pub display_name: String,
    /// `#rrggbb`
    pub swatch: String,
}

/// Source of option lists for every facet.
pub trait OptionProvider {
    fn product_types(&self) -> &[FacetOption<CategoryId>];

    fn areas(&self) -> &[FacetOption<AreaId>];

    fn finishes(&self) -> &[FacetOption<FinishId>];

    fn colors(&self) -> &[ColorOption];

    fn price_bounds(&self) -> PriceBounds;

    /// Selectable values of a discrete facet, in display order.
    ///
    /// The price facet has no discrete values and yields an empty list.
    fn values(&self, facet: Facet) -> Vec<FacetValue> {
        match facet {
            Facet::ProductType => self
                .product_types()
                .iter()
                .map(|o| FacetValue::ProductType(o.id.clone()))
                .collect(),
            Facet::Area => self.areas().iter().map(|o| FacetValue::Area(o.id.clone())).collect(),
            Facet::Finish => self
                .finishes()
                .iter()
                .map(|o| FacetValue::Finish(o.id.clone()))
                .collect(),
            Facet::Color => self.colors().iter().map(|o| FacetValue::Color(o.id.clone())).collect(),
            Facet::Price => Vec::new(),
        }
    }

    /// Human-readable label for an active filter chip.
    fn display_name_for(&self, value: &FacetValue) -> Option<String> {
        fn find<Id: PartialEq>(options: &[FacetOption<Id>], id: &Id) -> Option<String> {
            options.iter().find(|o| &o.id == id).map(|o| o.display_name.clone())
        }

        match value {
            FacetValue::ProductType(id) => find(self.product_types(), id),
            FacetValue::Area(id) => find(self.areas(), id),
            FacetValue::Finish(id) => find(self.finishes(), id),
            FacetValue::Color(id) => self
                .colors()
                .iter()
                .find(|o| &o.id == id)
                .map(|o| o.display_name.clone()),
            FacetValue::Price(range) => Some(format!("{} - {}", range.min(), range.max())),
        }
    }
}

fn option<Id>(id: Id, display_name: &str) -> FacetOption<Id> {
    FacetOption {
        id,
        display_name: display_name.to_string(),
    }
}

fn color(id: &'static str, display_name: &str, swatch: &str) -> ColorOption {
    ColorOption {
        id: ColorId::from_static(id),
        display_name: display_name.to_string(),
        swatch: swatch.to_string(),
    }
}

/// Compiled-in option lists of the paint catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticOptions {
    product_types: Vec<FacetOption<CategoryId>>,
    areas: Vec<FacetOption<AreaId>>,
    finishes: Vec<FacetOption<FinishId>>,
    colors: Vec<ColorOption>,
    price_bounds: PriceBounds,
}

impl StaticOptions {
    pub fn new() -> Self {
        let product_types = [
            ("interior-paint", "Interior paint"),
            ("exterior-paint", "Exterior paint"),
            ("primer", "Primer"),
            ("varnish", "Varnish"),
            ("enamel", "Enamel"),
            ("wood-stain", "Wood stain"),
            ("floor-coating", "Floor coating"),
        ]
        .into_iter()
        .map(|(id, name)| option(CategoryId::from_static(id), name))
        .collect();

        let areas = [
            ("walls", "Walls"),
            ("ceilings", "Ceilings"),
            ("facades", "Facades"),
            ("wood", "Wood"),
            ("metal", "Metal"),
            ("floors", "Floors"),
            ("bathrooms-kitchens", "Bathrooms & kitchens"),
        ]
        .into_iter()
        .map(|(id, name)| option(AreaId::from_static(id), name))
        .collect();

        let finishes = [
            ("matt", "Matt"),
            ("satin", "Satin"),
            ("semi-gloss", "Semi-gloss"),
            ("gloss", "Gloss"),
        ]
        .into_iter()
        .map(|(id, name)| option(FinishId::from_static(id), name))
        .collect();

        let colors = vec![
            color("white", "White", "#ffffff"),
            color("off-white", "Off-white", "#f5f0e6"),
            color("beige", "Beige", "#d8c8a8"),
            color("grey", "Grey", "#9e9e9e"),
            color("anthracite", "Anthracite", "#383e42"),
            color("black", "Black", "#1c1c1c"),
            color("blue", "Blue", "#3a6ea5"),
            color("green", "Green", "#5b8c5a"),
            color("red", "Red", "#b3362f"),
            color("yellow", "Yellow", "#e8c547"),
        ];

        Self {
            product_types,
            areas,
            finishes,
            colors,
            price_bounds: PriceBounds::default(),
        }
    }

    /// Replace the catalog-wide price bounds (e.g. from configuration).
    pub fn with_price_bounds(mut self, bounds: PriceBounds) -> Self {
        self.price_bounds = bounds;
        self
    }
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionProvider for StaticOptions {
    fn product_types(&self) -> &[FacetOption<CategoryId>] {
        &self.product_types
    }

    fn areas(&self) -> &[FacetOption<AreaId>] {
        &self.areas
    }

    fn finishes(&self) -> &[FacetOption<FinishId>] {
        &self.finishes
    }

    fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    fn price_bounds(&self) -> PriceBounds {
        self.price_bounds
    }
}

/// `semi-gloss` → `Semi gloss`.
fn humanize(slug: &str) -> String {
    let spaced = slug.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn push_distinct<Id: PartialEq + AsRef<str> + Clone>(list: &mut Vec<FacetOption<Id>>, id: &Id) {
    if !list.iter().any(|o| &o.id == id) {
        list.push(FacetOption {
            id: id.clone(),
            display_name: humanize(id.as_ref()),
        });
    }
}

/// Option lists built from the distinct values present in a product set.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedOptions {
    product_types: Vec<FacetOption<CategoryId>>,
    areas: Vec<FacetOption<AreaId>>,
    finishes: Vec<FacetOption<FinishId>>,
    colors: Vec<ColorOption>,
    price_bounds: PriceBounds,
}

impl DerivedOptions {
    /// Values appear in first-seen order. Price bounds span the cheapest and
    /// the most expensive product; an empty catalog keeps the default bounds.
    pub fn from_products(products: &[Product]) -> Self {
        let mut product_types = Vec::new();
        let mut areas = Vec::new();
        let mut finishes = Vec::new();
        let mut colors: Vec<ColorOption> = Vec::new();
        let mut lowest = f64::INFINITY;
        let mut highest = f64::NEG_INFINITY;

        for p in products {
            push_distinct(&mut product_types, &p.product_type);
            push_distinct(&mut areas, &p.area);
            push_distinct(&mut finishes, &p.finish);
            if !colors.iter().any(|c| c.id == p.color) {
                colors.push(ColorOption {
                    id: p.color.clone(),
                    display_name: humanize(p.color.as_str()),
                    swatch: UNKNOWN_SWATCH.to_string(),
                });
            }
            if p.price.is_finite() {
                lowest = lowest.min(p.price);
                highest = highest.max(p.price);
            }
        }

        let price_bounds = PriceBounds::new(lowest.max(0.0), highest).unwrap_or_default();

        Self {
            product_types,
            areas,
            finishes,
            colors,
            price_bounds,
        }
    }
}

impl OptionProvider for DerivedOptions {
    fn product_types(&self) -> &[FacetOption<CategoryId>] {
        &self.product_types
    }

    fn areas(&self) -> &[FacetOption<AreaId>] {
        &self.areas
    }

    fn finishes(&self) -> &[FacetOption<FinishId>] {
        &self.finishes
    }

    fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    fn price_bounds(&self) -> PriceBounds {
        self.price_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{catalog, priced};
    use crate::price::PriceRange;

    #[test]
    fn static_slugs_are_valid() {
        let opts = StaticOptions::new();
        for o in opts.product_types() {
            assert!(CategoryId::new(o.id.as_str()).is_ok());
        }
        for o in opts.areas() {
            assert!(AreaId::new(o.id.as_str()).is_ok());
        }
        for o in opts.finishes() {
            assert!(FinishId::new(o.id.as_str()).is_ok());
        }
        for o in opts.colors() {
            assert!(ColorId::new(o.id.as_str()).is_ok());
            assert_eq!(o.swatch.len(), 7);
            assert!(o.swatch.starts_with('#'));
        }
    }

    #[test]
    fn static_lists_are_ordered_and_non_empty() {
        let opts = StaticOptions::default();
        assert_eq!(opts.finishes()[0].id.as_str(), "matt");
        assert_eq!(opts.values(Facet::Finish).len(), opts.finishes().len());
        assert!(opts.values(Facet::Price).is_empty());
        assert_eq!(opts.price_bounds(), PriceBounds::default());
    }

    #[test]
    fn price_bounds_can_be_overridden() {
        let bounds = PriceBounds::new(5.0, 250.0).unwrap();
        let opts = StaticOptions::new().with_price_bounds(bounds);
        assert_eq!(opts.price_bounds(), bounds);
    }

    #[test]
    fn display_names_resolve_for_chips() {
        let opts = StaticOptions::new();
        let finish = FacetValue::Finish(FinishId::new("semi-gloss").unwrap());
        assert_eq!(opts.display_name_for(&finish).as_deref(), Some("Semi-gloss"));

        let unknown = FacetValue::Color(ColorId::new("mauve").unwrap());
        assert_eq!(opts.display_name_for(&unknown), None);

        let price = FacetValue::Price(PriceRange::new(50.0, 500.0).unwrap());
        assert_eq!(opts.display_name_for(&price).as_deref(), Some("50 - 500"));
    }

    #[test]
    fn derived_options_follow_first_seen_order() {
        let derived = DerivedOptions::from_products(&catalog());
        let types: Vec<&str> = derived.product_types().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(
            types,
            vec!["interior-paint", "exterior-paint", "primer", "varnish", "enamel", "floor-coating", "wood-stain"]
        );
        assert_eq!(derived.finishes()[2].display_name, "Gloss");
        assert_eq!(derived.finishes()[3].display_name, "Semi gloss");
        assert!(derived.colors().iter().all(|c| c.swatch == UNKNOWN_SWATCH));
    }

    #[test]
    fn derived_price_bounds_span_catalog() {
        let derived = DerivedOptions::from_products(&priced(&[10.0, 50.0, 900.0]));
        assert_eq!(derived.price_bounds(), PriceBounds::new(10.0, 900.0).unwrap());
    }

    #[test]
    fn derived_from_empty_catalog_keeps_defaults() {
        let derived = DerivedOptions::from_products(&[]);
        assert!(derived.product_types().is_empty());
        assert_eq!(derived.price_bounds(), PriceBounds::default());
    }
}
