//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter. To
/// "modify" a value object, create a new one with the new values.
///
/// Example:
/// - `Price::parse("19.99")` is a value object: two prices parsed from the
///   same string are equal.
/// - `CatalogItem { id: ItemId(...), .. }` is an entity: two items with the
///   same field values but different IDs are different items.
///
/// The trait requires `Clone` (values are cheap to copy), `PartialEq`
/// (compared by attributes), and `Debug` (helpful for logging, testing).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
