//! Facets (filter dimensions) and the identifiers of their selectable values.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use paintshop_core::{DomainError, DomainResult};

use crate::price::PriceRange;

/// Slugs are lowercase ASCII letters, digits, `-` and `_`.
fn validate_slug(raw: &str) -> Result<(), String> {
    if raw.is_empty() {
        return Err("empty slug".to_string());
    }
    if let Some(bad) = raw
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(format!("invalid character {bad:?} in {raw:?}"));
    }
    Ok(())
}

macro_rules! impl_slug_newtype {
    ($(#[$meta:meta])* $t:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $t(String);

        impl $t {
            pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
                let raw = raw.into();
                validate_slug(&raw)
                    .map_err(|e| DomainError::invalid_argument(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }

            /// Compiled-in option data; slugs are checked by the option tests.
            pub(crate) fn from_static(raw: &'static str) -> Self {
                debug_assert!(validate_slug(raw).is_ok(), "bad static slug {raw}");
                Self(raw.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_slug_newtype!(
    /// Product type / category (e.g. `interior-paint`, `primer`).
    CategoryId,
    "CategoryId"
);
impl_slug_newtype!(
    /// Area of application (e.g. `walls`, `facades`).
    AreaId,
    "AreaId"
);
impl_slug_newtype!(
    /// Surface finish (e.g. `matt`, `gloss`).
    FinishId,
    "FinishId"
);
impl_slug_newtype!(
    /// Color family (e.g. `white`, `anthracite`).
    ColorId,
    "ColorId"
);

/// One independent filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    ProductType,
    Area,
    Finish,
    Color,
    Price,
}

impl Facet {
    /// All facets in evaluation and default sidebar order.
    pub const ALL: [Facet; 5] = [
        Facet::ProductType,
        Facet::Area,
        Facet::Finish,
        Facet::Color,
        Facet::Price,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::ProductType => "product_type",
            Facet::Area => "area",
            Facet::Finish => "finish",
            Facet::Color => "color",
            Facet::Price => "price",
        }
    }

    /// Short key used in URL query strings.
    pub fn query_key(self) -> &'static str {
        match self {
            Facet::ProductType => "type",
            other => other.as_str(),
        }
    }

    /// Sidebar heading.
    pub fn label(self) -> &'static str {
        match self {
            Facet::ProductType => "Product type",
            Facet::Area => "Area of application",
            Facet::Finish => "Finish",
            Facet::Color => "Color",
            Facet::Price => "Price",
        }
    }

    /// Range facets select an interval instead of a single value.
    pub fn is_range(self) -> bool {
        matches!(self, Facet::Price)
    }
}

impl core::fmt::Display for Facet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product_type" | "productType" | "type" => Ok(Facet::ProductType),
            "area" => Ok(Facet::Area),
            "finish" => Ok(Facet::Finish),
            "color" => Ok(Facet::Color),
            "price" | "price_range" | "priceRange" => Ok(Facet::Price),
            other => Err(DomainError::invalid_argument(format!("unknown facet: {other:?}"))),
        }
    }
}

/// A concrete selection for one facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "snake_case")]
pub enum FacetValue {
    ProductType(CategoryId),
    Area(AreaId),
    Finish(FinishId),
    Color(ColorId),
    Price(PriceRange),
}

impl FacetValue {
    pub fn facet(&self) -> Facet {
        match self {
            FacetValue::ProductType(_) => Facet::ProductType,
            FacetValue::Area(_) => Facet::Area,
            FacetValue::Finish(_) => Facet::Finish,
            FacetValue::Color(_) => Facet::Color,
            FacetValue::Price(_) => Facet::Price,
        }
    }

    /// Parse a raw (already user-validated) value for `facet`.
    ///
    /// Discrete facets take a slug; the price facet takes `MIN-MAX`.
    pub fn parse(facet: Facet, raw: &str) -> DomainResult<Self> {
        Ok(match facet {
            Facet::ProductType => FacetValue::ProductType(raw.parse()?),
            Facet::Area => FacetValue::Area(raw.parse()?),
            Facet::Finish => FacetValue::Finish(raw.parse()?),
            Facet::Color => FacetValue::Color(raw.parse()?),
            Facet::Price => FacetValue::Price(raw.parse()?),
        })
    }
}

impl core::fmt::Display for FacetValue {
    /// Value part only (`matt`, `50-500`), as used in query strings.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FacetValue::ProductType(v) => core::fmt::Display::fmt(v, f),
            FacetValue::Area(v) => core::fmt::Display::fmt(v, f),
            FacetValue::Finish(v) => core::fmt::Display::fmt(v, f),
            FacetValue::Color(v) => core::fmt::Display::fmt(v, f),
            FacetValue::Price(r) => core::fmt::Display::fmt(r, f),
        }
    }
}
