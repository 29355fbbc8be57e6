//! Price aggregation over composed menu items.

use crate::money::Price;

/// Anything with a price computed on demand from its contents.
///
/// Totals are never cached; every call walks the current contents.
pub trait Priced {
    fn total_price(&self) -> Price;
}

impl<T: Priced> Priced for [T] {
    fn total_price(&self) -> Price {
        self.iter().map(Priced::total_price).sum()
    }
}

impl<T: Priced> Priced for Vec<T> {
    fn total_price(&self) -> Price {
        self.as_slice().total_price()
    }
}

impl Priced for Price {
    fn total_price(&self) -> Price {
        *self
    }
}
