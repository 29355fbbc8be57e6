//! Ordered product container shared by dishes and beverages.

use serde::{Deserialize, Serialize};

use bistro_core::{Price, Priced};

use crate::product::Product;

/// Products in insertion order. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductList(Vec<Product>);

impl ProductList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends to the end. Always succeeds.
    pub fn push(&mut self, product: Product) {
        self.0.push(product);
    }

    /// Removes the first product equal to `product`, keeping the order of the
    /// rest. Returns the removed product, or `None` (and leaves the list
    /// untouched) when no element matches.
    pub fn remove_first(&mut self, product: &Product) -> Option<Product> {
        let index = self.0.iter().position(|p| p == product)?;
        Some(self.0.remove(index))
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Priced for ProductList {
    fn total_price(&self) -> Price {
        self.0.total_price()
    }
}

impl FromIterator<Product> for ProductList {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
