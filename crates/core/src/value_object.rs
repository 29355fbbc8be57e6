//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Product { name: "Tomato", price: 1.50 }`
///   equals any other product with the same name and price)
/// - **Entity**: has an identity key (a `Dish` is identified by its name, even
///   if the products inside differ)
///
/// ## Copies
///
/// Value objects are copied into the containers that hold them. Mutating one
/// copy never leaks into another, so containers stay independent owners.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Garnish {
///     name: String,
/// }
///
/// impl ValueObject for Garnish {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
