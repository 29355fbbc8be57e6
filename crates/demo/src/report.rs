//! Order report rendering (text and JSON).

use core::fmt;

use serde::Serialize;

use bistro_core::{Price, Priced};
use bistro_menu::{Beverage, Dish, Product};
use bistro_orders::{Order, TableNumber};

use crate::config::ReportFormat;

/// Renders `order` in the requested format.
pub fn render(order: &Order, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(TextReport(order).to_string()),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&OrderReport::from(order))?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Plain-text report: order total, then each dish and beverage with its
/// ingredients. Every dish and beverage block ends with a blank line.
pub struct TextReport<'a>(pub &'a Order);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "Total price of the order: ${}", Amount(order.total_price()))?;

        writeln!(f, "Details of the order:")?;
        for dish in order.dishes() {
            writeln!(f, "Dish: {}, Price: ${}", dish.name(), Amount(dish.total_price()))?;
            writeln!(f, "Products:")?;
            write_items(f, dish.products())?;
            writeln!(f)?;
        }

        writeln!(f, "Beverages in the order:")?;
        for beverage in order.beverages() {
            writeln!(
                f,
                "Beverage: {}, Price: ${}",
                beverage.name(),
                Amount(beverage.total_price())
            )?;
            writeln!(f, "Fruits:")?;
            write_items(f, beverage.fruits())?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Product]) -> fmt::Result {
    for item in items {
        writeln!(f, "- {}: ${}", item.name(), Amount(item.price()))?;
    }
    Ok(())
}

/// Report amount: trailing fractional zeros are dropped (`3.50` prints as
/// `3.5`, `2.00` as `2`).
pub struct Amount(pub Price);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = self.0.to_string();
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        f.write_str(trimmed)
    }
}

/// JSON shape of the report. Prices are in cents.
#[derive(Debug, Serialize)]
pub struct OrderReport<'a> {
    pub table_number: TableNumber,
    pub total_price: Price,
    pub dishes: Vec<DishReport<'a>>,
    pub beverages: Vec<BeverageReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct DishReport<'a> {
    pub name: &'a str,
    pub total_price: Price,
    pub products: &'a [Product],
}

#[derive(Debug, Serialize)]
pub struct BeverageReport<'a> {
    pub name: &'a str,
    pub total_price: Price,
    pub fruits: &'a [Product],
}

impl<'a> From<&'a Order> for OrderReport<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            table_number: order.table_number(),
            total_price: order.total_price(),
            dishes: order.dishes().iter().map(DishReport::from).collect(),
            beverages: order.beverages().iter().map(BeverageReport::from).collect(),
        }
    }
}

impl<'a> From<&'a Dish> for DishReport<'a> {
    fn from(dish: &'a Dish) -> Self {
        Self {
            name: dish.name(),
            total_price: dish.total_price(),
            products: dish.products(),
        }
    }
}

impl<'a> From<&'a Beverage> for BeverageReport<'a> {
    fn from(beverage: &'a Beverage) -> Self {
        Self {
            name: beverage.name(),
            total_price: beverage.total_price(),
            fruits: beverage.fruits(),
        }
    }
}
