use serde::{Deserialize, Serialize};

use bistro_core::{Entity, Price, Priced};

use crate::product::Product;
use crate::product_list::ProductList;

/// A named food item built from products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    name: String,
    products: ProductList,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: ProductList::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product equal to `product`; `None` if there is none.
    pub fn remove_product(&mut self, product: &Product) -> Option<Product> {
        self.products.remove_first(product)
    }

    /// Structural comparison: same name and same products in the same order.
    pub fn same_contents(&self, other: &Self) -> bool {
        self.name == other.name && self.products == other.products
    }
}

impl Priced for Dish {
    fn total_price(&self) -> Price {
        self.products.total_price()
    }
}

impl Entity for Dish {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

/// Dishes compare by name only; use [`Dish::same_contents`] to compare
/// products as well.
impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl Eq for Dish {}
