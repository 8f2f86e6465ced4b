//! Quantity adjustment with immutable update semantics.

use serde::{Deserialize, Serialize};

use glassdesk_core::Entity;

use crate::item::{InventoryItem, InventoryItemId};

/// Record of a quantity change, suitable for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityAdjusted {
    pub item_id: InventoryItemId,
    pub part_number: String,
    pub from: u32,
    pub to: u32,
}

impl QuantityAdjusted {
    /// A located item whose quantity did not move (e.g. decrementing zero).
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Result of [`adjust_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    pub items: Vec<InventoryItem>,
    /// `None` when no item carries the requested id.
    pub change: Option<QuantityAdjusted>,
}

/// Apply `delta` to the item with `item_id`, clamping at zero.
///
/// An unknown id is not an error: the returned collection equals the input.
pub fn adjust_quantity(
    items: &[InventoryItem],
    item_id: &InventoryItemId,
    delta: i64,
) -> StockAdjustment {
    let mut change = None;
    let items = items
        .iter()
        .map(|item| {
            if change.is_some() || item.id() != item_id {
                return item.clone();
            }
            let to = clamped(item.quantity(), delta);
            change = Some(QuantityAdjusted {
                item_id: item_id.clone(),
                part_number: item.part_number().to_string(),
                from: item.quantity(),
                to,
            });
            item.with_quantity(to)
        })
        .collect();

    StockAdjustment { items, change }
}

fn clamped(current: u32, delta: i64) -> u32 {
    let next = i64::from(current).saturating_add(delta);
    next.clamp(0, i64::from(u32::MAX)) as u32
}
