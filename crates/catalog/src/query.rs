//! URL query-string codec for a filter selection.
//!
//! Format: `type=interior-paint&area=walls&finish=matt&color=white&price=50-500`.
//! Slugs never need percent-encoding, so none is applied.

use paintshop_core::{DomainError, DomainResult};

use crate::facet::{Facet, FacetValue};
use crate::selection::FilterSelection;

/// Encode the set facets in facet order; empty when nothing is selected.
pub fn to_query_string(selection: &FilterSelection) -> String {
    selection
        .values()
        .iter()
        .map(|v| format!("{}={}", v.facet().query_key(), v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a query string produced by [`to_query_string`] (or typed by hand).
///
/// A leading `?` and empty pairs are tolerated, unknown keys are ignored, a
/// repeated key keeps the last value. Malformed values are rejected.
pub fn from_query_string(query: &str) -> DomainResult<FilterSelection> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut selection = FilterSelection::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| DomainError::invalid_argument(format!("query pair {pair:?} has no value")))?;

        let facet: Facet = match key.parse() {
            Ok(facet) => facet,
            Err(_) => {
                tracing::debug!(key, "ignoring unknown query parameter");
                continue;
            }
        };

        selection = selection.with(FacetValue::parse(facet, raw)?);
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{CategoryId, ColorId, FinishId};
    use crate::price::PriceRange;

    #[test]
    fn empty_selection_encodes_to_empty_string() {
        assert_eq!(to_query_string(&FilterSelection::new()), "");
        assert_eq!(from_query_string("").unwrap(), FilterSelection::new());
        assert_eq!(from_query_string("?").unwrap(), FilterSelection::new());
    }

    #[test]
    fn encodes_in_facet_order() {
        let s = FilterSelection::new()
            .with(FacetValue::Price(PriceRange::new(50.0, 500.0).unwrap()))
            .with(FacetValue::Color(ColorId::new("white").unwrap()))
            .with(FacetValue::ProductType(CategoryId::new("interior-paint").unwrap()));
        assert_eq!(to_query_string(&s), "type=interior-paint&color=white&price=50-500");
        assert_eq!(from_query_string(&to_query_string(&s)).unwrap(), s);
    }

    #[test]
    fn decodes_hand_written_queries() {
        let s = from_query_string("?finish=matt&&utm_source=mail&finish=gloss").unwrap();
        assert_eq!(s.finish(), Some(&FinishId::new("gloss").unwrap()));
        assert_eq!(s.active_facet_count(), 1);
    }

    #[test]
    fn malformed_values_are_invalid_argument() {
        for bad in ["price=500-50", "price=cheap", "finish=Matt", "color"] {
            let err = from_query_string(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }
}
