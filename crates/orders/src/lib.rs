//! Orders domain module.
//!
//! A table's order of dishes and beverages and its price aggregation.
//! Pure domain logic (no IO, no storage).

pub mod order;

pub use order::{Order, TableNumber};
