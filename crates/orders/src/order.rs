use serde::{Deserialize, Serialize};

use bistro_core::{Price, Priced};
use bistro_menu::{Beverage, Dish};

/// Table an order belongs to. Any integer is accepted, including zero and
/// negative numbers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(pub i32);

impl TableNumber {
    pub fn new(number: i32) -> Self {
        Self(number)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for TableNumber {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for TableNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A table's dishes and beverages.
///
/// The table number is fixed at construction. There is no status lifecycle:
/// an order is a plain aggregate that can be edited for as long as it lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    table_number: TableNumber,
    dishes: Vec<Dish>,
    beverages: Vec<Beverage>,
}

impl Order {
    pub fn new(table_number: impl Into<TableNumber>) -> Self {
        Self {
            table_number: table_number.into(),
            dishes: Vec::new(),
            beverages: Vec::new(),
        }
    }

    pub fn table_number(&self) -> TableNumber {
        self.table_number
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    pub fn add_dish(&mut self, dish: Dish) {
        self.dishes.push(dish);
    }

    pub fn add_beverage(&mut self, beverage: Beverage) {
        self.beverages.push(beverage);
    }

    /// Removes the first dish with the same name as `dish` (contents are not
    /// compared). Returns the removed dish, or `None` if no dish matched.
    pub fn remove_dish(&mut self, dish: &Dish) -> Option<Dish> {
        remove_first(&mut self.dishes, dish)
    }

    /// Removes the first beverage with the same name as `beverage`.
    pub fn remove_beverage(&mut self, beverage: &Beverage) -> Option<Beverage> {
        remove_first(&mut self.beverages, beverage)
    }

    pub fn dishes_total(&self) -> Price {
        self.dishes.total_price()
    }

    pub fn beverages_total(&self) -> Price {
        self.beverages.total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty() && self.beverages.is_empty()
    }
}

impl Priced for Order {
    fn total_price(&self) -> Price {
        self.dishes_total() + self.beverages_total()
    }
}

fn remove_first<T: PartialEq>(items: &mut Vec<T>, target: &T) -> Option<T> {
    let index = items.iter().position(|item| item == target)?;
    Some(items.remove(index))
}
