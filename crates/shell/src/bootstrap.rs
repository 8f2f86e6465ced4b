//! Seeding the inventory at application start.

use std::path::{Path, PathBuf};

use thiserror::Error;

use glassdesk_inventory::{InventoryItem, seed};

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Items for a fresh session: the configured seed file, or the built-in fixture.
pub fn load_inventory(config: &AppConfig) -> Result<Vec<InventoryItem>, SeedError> {
    let Some(path) = config.inventory_seed.as_deref() else {
        let items = seed::fixture();
        tracing::info!(items = items.len(), "seeded inventory from built-in fixture");
        return Ok(items);
    };
    let items = load_seed_file(path)?;
    tracing::info!(items = items.len(), path = %path.display(), "seeded inventory from file");
    Ok(items)
}

fn load_seed_file(path: &Path) -> Result<Vec<InventoryItem>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    seed::from_json(&json).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
