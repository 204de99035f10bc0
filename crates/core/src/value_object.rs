//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two of them with the same attribute values
/// are interchangeable. To "modify" one, build a new value and replace the
/// old one wholesale, which keeps every transition observable as a single
/// swap.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct PriceRange {
///     min: f64,
///     max: f64,
/// }
///
/// impl ValueObject for PriceRange {}
///
/// assert_eq!(PriceRange { min: 0.0, max: 50.0 }, PriceRange { min: 0.0, max: 50.0 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
