//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute
/// values: two [`Price`](crate::Price) values of fifty cents are the same
/// price, whereas two items that happen to share a name are still distinct
/// entities. To "modify" a value object, build a new one.
///
/// The bounds keep value objects cheap to copy, comparable by value, and
/// debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
