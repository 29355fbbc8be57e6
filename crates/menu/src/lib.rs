//! Menu domain module.
//!
//! Products, and the dishes and beverages composed from them. Pure domain
//! logic (no IO, no storage).

pub mod beverage;
pub mod dish;
pub mod product;
pub mod product_list;

pub use beverage::Beverage;
pub use dish::Dish;
pub use product::Product;
pub use product_list::ProductList;
