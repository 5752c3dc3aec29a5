//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; to
/// "modify" one, build a new value. A product draft is the canonical example
/// here: it has no identity of its own until the sink accepts it.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
