//! Catalog configuration (price bounds).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use paintshop_core::{DomainError, DomainResult};

use crate::price::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PriceBounds};

pub const PRICE_MIN_ENV: &str = "PAINTSHOP_PRICE_MIN";
pub const PRICE_MAX_ENV: &str = "PAINTSHOP_PRICE_MAX";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub price_min: f64,
    pub price_max: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl CatalogConfig {
    /// Read bounds from the environment; missing or unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: f64| match lookup(key) {
            None => default,
            Some(raw) => raw.trim().parse::<f64>().unwrap_or_else(|e| {
                tracing::warn!(key, value = %raw, error = %e, "invalid price bound; using default");
                default
            }),
        };

        Self {
            price_min: read(PRICE_MIN_ENV, DEFAULT_PRICE_MIN),
            price_max: read(PRICE_MAX_ENV, DEFAULT_PRICE_MAX),
        }
    }

    /// Load from a JSON file; absent keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.price_bounds().map(|_| ())
    }

    pub fn price_bounds(&self) -> DomainResult<PriceBounds> {
        PriceBounds::new(self.price_min, self.price_max).map_err(|_| {
            DomainError::validation(format!(
                "price bounds must be finite, non-negative and ordered (min={}, max={})",
                self.price_min, self.price_max
            ))
        })
    }
}
