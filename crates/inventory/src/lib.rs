//! Inventory domain module for the glass shop.
//!
//! Pure, deterministic derivations over an in-memory stock list: filter tabs,
//! search, summary metrics and clamped quantity adjustment (no IO, no UI).

pub mod filter;
pub mod item;
pub mod seed;
pub mod state;
pub mod stock;
pub mod summary;
pub mod view_model;

pub use filter::{CategoryFilter, EmptyState, compute_visible_items, matches_search};
pub use item::{GlassType, InventoryItem, InventoryItemId, ItemDraft, NewInventoryItem};
pub use state::{FilterTab, InventoryState};
pub use stock::{QuantityAdjusted, StockAdjustment, adjust_quantity};
pub use summary::{InventorySummary, compute_summary};
pub use view_model::InventoryViewModel;
