use serde::{Deserialize, Serialize};

use bistro_core::{Entity, Price, Priced};

use crate::product::Product;
use crate::product_list::ProductList;

/// A named drink made from fruits (products).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beverage {
    name: String,
    fruits: ProductList,
}

impl Beverage {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fruits: ProductList::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fruits(&self) -> &[Product] {
        self.fruits.as_slice()
    }

    pub fn add_fruit(&mut self, fruit: Product) {
        self.fruits.push(fruit);
    }

    /// Removes the first fruit equal to `fruit`; `None` if there is none.
    pub fn remove_fruit(&mut self, fruit: &Product) -> Option<Product> {
        self.fruits.remove_first(fruit)
    }

    /// Structural comparison: same name and same fruits in the same order.
    pub fn same_contents(&self, other: &Self) -> bool {
        self.name == other.name && self.fruits == other.fruits
    }
}

impl Priced for Beverage {
    fn total_price(&self) -> Price {
        self.fruits.total_price()
    }
}

impl Entity for Beverage {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

/// Name-only, like [`crate::Dish`].
impl PartialEq for Beverage {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Beverage {}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> Product {
        Product::new("Apple", Price::from_cents(100))
    }

    fn orange() -> Product {
        Product::new("Orange", Price::from_cents(150))
    }

    fn juice() -> Beverage {
        let mut beverage = Beverage::new("Juice");
        beverage.add_fruit(apple());
        beverage.add_fruit(orange());
        beverage
    }

    #[test]
    fn juice_totals_two_fifty() {
        assert_eq!(juice().total_price(), Price::from_cents(250));
    }

    #[test]
    fn fruits_keep_insertion_order() {
        let beverage = juice();
        let names: Vec<&str> = beverage.fruits().iter().map(Product::name).collect();
        assert_eq!(names, ["Apple", "Orange"]);
    }

    #[test]
    fn new_beverage_is_empty_and_free() {
        let beverage = Beverage::new("Water");
        assert_eq!(beverage.name(), "Water");
        assert!(beverage.fruits().is_empty());
        assert_eq!(beverage.total_price(), Price::ZERO);
    }

    #[test]
    fn remove_fruit_removes_first_duplicate_only() {
        let mut beverage = juice();
        beverage.add_fruit(apple());

        assert_eq!(beverage.remove_fruit(&apple()), Some(apple()));
        assert_eq!(beverage.fruits(), &[orange(), apple()]);
        assert_eq!(beverage.total_price(), Price::from_cents(250));
    }

    #[test]
    fn remove_fruit_then_missing_fruit() {
        let mut beverage = juice();

        assert_eq!(beverage.remove_fruit(&apple()), Some(apple()));
        assert_eq!(beverage.remove_fruit(&apple()), None);
        assert_eq!(beverage.fruits(), &[orange()]);
        assert_eq!(beverage.total_price(), Price::from_cents(150));
    }

    #[test]
    fn equality_ignores_fruits() {
        let plain = Beverage::new("Juice");
        assert_eq!(juice(), plain);
        assert!(!juice().same_contents(&plain));
        assert_ne!(juice(), Beverage::new("Smoothie"));
    }

    #[test]
    fn serializes_fruits_field() {
        let json = serde_json::to_value(juice()).unwrap();
        assert_eq!(json["fruits"][0]["name"], "Apple");
        assert!(json.get("products").is_none());
    }
}
