//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attributes are equal, whether or not they share storage.
/// To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Unit(String);
///
/// impl ValueObject for Unit {}
///
/// assert_eq!(Unit("kg".into()), Unit("kg".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
