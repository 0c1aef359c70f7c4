use std::io;

use anyhow::Context;
use stockroom_cli::{Config, Menu};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init_with_default("warn");

    let config = Config::from_args(std::env::args_os().skip(1));
    let mut inventory = Inventory::new(&config.file);
    let outcome = inventory
        .load()
        .with_context(|| format!("failed to read inventory file {}", config.file.display()))?;

    let stdin = io::stdin();
    let mut menu = Menu::new(inventory, stdin.lock(), io::stdout());
    menu.announce_load(&outcome)?;
    menu.run()?;

    Ok(())
}
