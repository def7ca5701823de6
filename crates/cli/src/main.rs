use std::io;

use anyhow::Context;

use stockyard_cli::Shell;
use stockyard_core::WarehouseId;
use stockyard_inventory::Warehouse;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn main() -> anyhow::Result<()> {
    stockyard_observability::init();

    let id = env_or("STOCKYARD_WAREHOUSE_ID", "WH-001");
    let name = env_or("STOCKYARD_WAREHOUSE_NAME", "Central Depot");
    let location = env_or("STOCKYARD_WAREHOUSE_LOCATION", "Dock Road 1");

    let warehouse = Warehouse::new(
        WarehouseId::new(id).context("invalid STOCKYARD_WAREHOUSE_ID")?,
        name,
        location,
    );
    tracing::info!(warehouse = %warehouse.id(), location = warehouse.location(), "starting shell");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(warehouse, stdin, stdout)
        .run()
        .context("shell terminated on an IO error")?;

    Ok(())
}
