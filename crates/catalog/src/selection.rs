//! The filter selection value object and its pure transitions.

use serde::{Deserialize, Serialize};

use paintshop_core::ValueObject;

use crate::facet::{AreaId, CategoryId, ColorId, Facet, FacetValue, FinishId};
use crate::price::PriceRange;

/// Current filter selection: at most one value per facet.
///
/// `None` means "no constraint from this facet". Transitions return a new
/// value; the owner swaps it in as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    product_type: Option<CategoryId>,
    area: Option<AreaId>,
    finish: Option<FinishId>,
    color: Option<ColorId>,
    price_range: Option<PriceRange>,
}

impl ValueObject for FilterSelection {}

impl FilterSelection {
    /// Every facet unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_type(&self) -> Option<&CategoryId> {
        self.product_type.as_ref()
    }

    pub fn area(&self) -> Option<&AreaId> {
        self.area.as_ref()
    }

    pub fn finish(&self) -> Option<&FinishId> {
        self.finish.as_ref()
    }

    pub fn color(&self) -> Option<&ColorId> {
        self.color.as_ref()
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    pub fn get(&self, facet: Facet) -> Option<FacetValue> {
        match facet {
            Facet::ProductType => self.product_type.clone().map(FacetValue::ProductType),
            Facet::Area => self.area.clone().map(FacetValue::Area),
            Facet::Finish => self.finish.clone().map(FacetValue::Finish),
            Facet::Color => self.color.clone().map(FacetValue::Color),
            Facet::Price => self.price_range.map(FacetValue::Price),
        }
    }

    pub fn is_set(&self, facet: Facet) -> bool {
        match facet {
            Facet::ProductType => self.product_type.is_some(),
            Facet::Area => self.area.is_some(),
            Facet::Finish => self.finish.is_some(),
            Facet::Color => self.color.is_some(),
            Facet::Price => self.price_range.is_some(),
        }
    }

    /// Is `value` exactly the facet's current selection?
    pub fn is_selected(&self, value: &FacetValue) -> bool {
        match value {
            FacetValue::ProductType(v) => self.product_type.as_ref() == Some(v),
            FacetValue::Area(v) => self.area.as_ref() == Some(v),
            FacetValue::Finish(v) => self.finish.as_ref() == Some(v),
            FacetValue::Color(v) => self.color.as_ref() == Some(v),
            FacetValue::Price(r) => self.price_range.as_ref() == Some(r),
        }
    }

    pub fn active_facets(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL.into_iter().filter(|f| self.is_set(*f))
    }

    /// Number of constrained facets. A price range only exists with both
    /// bounds, so it counts exactly when present.
    pub fn active_facet_count(&self) -> usize {
        self.active_facets().count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_facet_count() == 0
    }

    /// Active values in facet order.
    pub fn values(&self) -> Vec<FacetValue> {
        Facet::ALL.into_iter().filter_map(|f| self.get(f)).collect()
    }

    /// Set a facet unconditionally.
    pub fn with(mut self, value: FacetValue) -> Self {
        match value {
            FacetValue::ProductType(v) => self.product_type = Some(v),
            FacetValue::Area(v) => self.area = Some(v),
            FacetValue::Finish(v) => self.finish = Some(v),
            FacetValue::Color(v) => self.color = Some(v),
            FacetValue::Price(r) => self.price_range = Some(r),
        }
        self
    }

    /// Unset a facet.
    pub fn without(mut self, facet: Facet) -> Self {
        match facet {
            Facet::ProductType => self.product_type = None,
            Facet::Area => self.area = None,
            Facet::Finish => self.finish = None,
            Facet::Color => self.color = None,
            Facet::Price => self.price_range = None,
        }
        self
    }

    /// Toggle-to-clear: re-selecting the active value unsets the facet,
    /// any other value replaces it.
    pub fn toggled(&self, value: FacetValue) -> Self {
        if self.is_selected(&value) {
            self.clone().without(value.facet())
        } else {
            self.clone().with(value)
        }
    }
}
