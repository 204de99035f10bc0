//! Price range facet values and catalog-wide price bounds.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use paintshop_core::{DomainError, DomainResult, ValueObject};

/// Default catalog-wide lower price bound.
pub const DEFAULT_PRICE_MIN: f64 = 0.0;
/// Default catalog-wide upper price bound.
pub const DEFAULT_PRICE_MAX: f64 = 1000.0;

#[derive(Deserialize)]
struct PriceRangeRepr {
    min: f64,
    max: f64,
}

/// Inclusive price interval, `min <= max`, both finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl ValueObject for PriceRange {}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(DomainError::invalid_argument(format!(
                "price range bounds must be finite (min={min}, max={max})"
            )));
        }
        if min > max {
            return Err(DomainError::invalid_argument(format!(
                "price range min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Boundary-inclusive membership test.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_within(&self, bounds: PriceBounds) -> bool {
        self.min >= bounds.min() && self.max <= bounds.max()
    }
}

impl<'de> Deserialize<'de> for PriceRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = PriceRangeRepr::deserialize(deserializer)?;
        Self::new(repr.min, repr.max).map_err(serde::de::Error::custom)
    }
}

impl core::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = DomainError;

    /// Parses `MIN-MAX`, e.g. `50-500`, `12.5-80` or `5e-1-10`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The separator is the first `-` that is neither a leading sign nor
        // the sign of an exponent.
        let bytes = s.as_bytes();
        let split = (1..bytes.len())
            .find(|&i| bytes[i] == b'-' && !matches!(bytes[i - 1], b'e' | b'E'))
            .ok_or_else(|| DomainError::invalid_argument(format!("price range {s:?}: expected MIN-MAX")))?;
        let (min, max) = (&s[..split], &s[split + 1..]);
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| DomainError::invalid_argument(format!("price range {s:?}: {e}")))
        };
        Self::new(parse(min)?, parse(max)?)
    }
}

/// Catalog-wide bounds a price range must stay within.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    min: f64,
    max: f64,
}

impl PriceBounds {
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(DomainError::invalid_argument(format!(
                "invalid price bounds [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// The widest selectable range (slider fully open).
    pub fn full_range(&self) -> PriceRange {
        PriceRange {
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}
