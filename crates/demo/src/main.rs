use anyhow::Context;

use bistro_core::Priced;
use bistro_demo::{DemoConfig, render, sample_order};

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    bistro_observability::init(config.log_format);

    tracing::info!(table = %config.table_number, "building sample order");
    let order = sample_order(config.table_number).context("failed to build sample order")?;

    tracing::info!(
        dishes = order.dishes().len(),
        beverages = order.beverages().len(),
        total_cents = order.total_price().cents(),
        "order priced"
    );

    let report = render(&order, config.report_format).context("failed to render report")?;
    print!("{report}");

    tracing::info!(format = ?config.report_format, "report written");
    Ok(())
}
