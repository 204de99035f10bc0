//! Catalog filter engine for the paint shop storefront.
//!
//! Pure, synchronous domain logic: option providers, the facet predicate
//! engine, the filter state controller and the derived catalog view. Fetching
//! products and rendering markup happen elsewhere.

pub mod config;
pub mod controller;
pub mod facet;
pub mod options;
pub mod predicate;
pub mod price;
pub mod product;
pub mod query;
pub mod selection;
pub mod sidebar;
pub mod view;

#[cfg(test)]
pub(crate) mod fixtures;

pub use config::CatalogConfig;
pub use controller::{
    CatalogController, FILTER_STREAM, FilterCommand, FilterEvent, FilterState, SelectionBus,
    SelectionChanged,
};
pub use facet::{AreaId, CategoryId, ColorId, Facet, FacetValue, FinishId};
pub use options::{ColorOption, DerivedOptions, FacetOption, OptionProvider, StaticOptions};
pub use predicate::{count_matching, facet_matches, filter, matches};
pub use price::{PriceBounds, PriceRange};
pub use product::Product;
pub use query::{from_query_string, to_query_string};
pub use selection::FilterSelection;
pub use sidebar::{SidebarLayout, SidebarSection};
pub use view::{CatalogView, OptionCount, option_counts, recompute};
