//! Catalog view model: counts derived from (catalog, selection).

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, FacetValue};
use crate::predicate::{count_matching, matches};
use crate::product::Product;
use crate::selection::FilterSelection;

/// Derived catalog counts. Never stored independently of its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogView {
    pub total_count: usize,
    pub filtered_count: usize,
    pub active_facet_count: usize,
}

impl CatalogView {
    /// Share of the catalog currently shown, `0.0..=100.0`.
    ///
    /// An empty catalog shows 0 %.
    pub fn percentage_shown(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.filtered_count as f64 / self.total_count as f64 * 100.0
    }

    pub fn hidden_count(&self) -> usize {
        self.total_count.saturating_sub(self.filtered_count)
    }

    pub fn is_filtered(&self) -> bool {
        self.active_facet_count > 0
    }

    /// Result header text, e.g. `Showing 3 of 5 products`.
    pub fn count_label(&self) -> String {
        let noun = if self.total_count == 1 { "product" } else { "products" };
        format!("Showing {} of {} {}", self.filtered_count, self.total_count, noun)
    }
}

/// Pure recomputation; cheap enough to run on every selection change.
pub fn recompute(catalog: &[Product], selection: &FilterSelection) -> CatalogView {
    CatalogView {
        total_count: catalog.len(),
        filtered_count: count_matching(catalog, selection),
        active_facet_count: selection.active_facet_count(),
    }
}

/// Live result count next to one selectable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionCount {
    pub value: FacetValue,
    /// Products that would be shown if `value` were the facet's selection.
    pub count: usize,
    pub selected: bool,
}

/// Live counts for every value of a discrete `facet` present in `catalog`,
/// in first-seen order.
///
/// Each count holds the other facets fixed and replaces this facet's
/// selection with the option's value, so it is what the user would see after
/// clicking that option. The price facet has no discrete options.
pub fn option_counts(catalog: &[Product], selection: &FilterSelection, facet: Facet) -> Vec<OptionCount> {
    if facet.is_range() {
        return Vec::new();
    }

    let others = selection.clone().without(facet);
    let mut tally: Vec<(FacetValue, usize)> = Vec::new();

    for product in catalog {
        let Some(value) = product.discrete_value(facet) else {
            continue;
        };
        let hit = usize::from(matches(product, &others));
        match tally.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += hit,
            None => tally.push((value, hit)),
        }
    }

    tally
        .into_iter()
        .map(|(value, count)| OptionCount {
            selected: selection.is_selected(&value),
            value,
            count,
        })
        .collect()
}
