//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; identity
/// does not matter. `Email { to, subject, body }` is a value object, a `Product`
/// with a `ProductId` is an entity.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
