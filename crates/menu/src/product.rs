use serde::{Deserialize, Serialize};

use bistro_core::{Price, Priced, ValueObject};

/// A named, priced ingredient.
///
/// Equality is structural over `(name, price)`. Containers hold their own
/// copies, so changing a product through one container never affects another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Price,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Overwrites the name. Empty names are accepted.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Overwrites the price. Negative prices are accepted.
    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }
}

impl ValueObject for Product {}

impl Priced for Product {
    fn total_price(&self) -> Price {
        self.price
    }
}
