//! `glassdesk` entry point: seeds the inventory and prints the inventory screen.

use glassdesk_inventory::InventoryViewModel;
use glassdesk_shell::{AppConfig, InventoryScreen, chrome_for, load_inventory};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    glassdesk_observability::init_with(&config.observability);

    for key in &config.defaulted {
        tracing::warn!(key = *key, "environment variable not set; using default");
    }

    let items = load_inventory(&config)?;
    let screen = InventoryScreen::new(chrome_for(config.platform));
    tracing::info!(platform = ?config.platform, chrome = screen.chrome().name(), "starting");

    let view_model = InventoryViewModel::new(items);
    for line in screen.render(view_model.state()) {
        println!("{line}");
    }
    Ok(())
}
