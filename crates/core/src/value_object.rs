//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are never modified in place; two value
/// objects with equal attributes are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Coordinates { latitude: f64, longitude: f64 }
///
/// impl ValueObject for Coordinates {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
