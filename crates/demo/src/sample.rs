//! Hardcoded sample menu and order.

use bistro_core::{DomainResult, Price};
use bistro_menu::{Beverage, Dish, Product};
use bistro_orders::{Order, TableNumber};

fn product(name: &str, price: &str) -> DomainResult<Product> {
    Ok(Product::new(name, price.parse::<Price>()?))
}

/// Salad and Fruit Salad plus a Juice, served at `table`.
pub fn sample_order(table: TableNumber) -> DomainResult<Order> {
    let tomato = product("Tomato", "1.5")?;
    let potato = product("Potato", "2.0")?;
    let apple = product("Apple", "1.0")?;
    let orange = product("Orange", "1.5")?;

    let mut salad = Dish::new("Salad");
    salad.add_product(tomato);
    salad.add_product(potato);

    let mut fruit_salad = Dish::new("Fruit Salad");
    fruit_salad.add_product(apple.clone());
    fruit_salad.add_product(orange.clone());

    let mut juice = Beverage::new("Juice");
    juice.add_fruit(apple);
    juice.add_fruit(orange);

    let mut order = Order::new(table);
    order.add_dish(salad);
    order.add_dish(fruit_salad);
    order.add_beverage(juice);

    Ok(order)
}
