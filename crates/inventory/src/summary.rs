//! Aggregate metrics shown in the inventory summary cards and tab labels.

use serde::{Deserialize, Serialize};

use glassdesk_core::Money;

use crate::item::{GlassType, InventoryItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total_count: usize,
    pub low_stock_count: usize,
    pub windshield_count: usize,
    pub back_glass_count: usize,
    /// Sum of unit cost × quantity, exact in cents.
    pub total_value: Money,
}

/// Single pass over the full collection (filters do not affect the summary).
pub fn compute_summary(items: &[InventoryItem]) -> InventorySummary {
    items
        .iter()
        .fold(InventorySummary::default(), |mut acc, item| {
            acc.total_count += 1;
            if item.is_low_stock() {
                acc.low_stock_count += 1;
            }
            match item.glass_type() {
                GlassType::Windshield => acc.windshield_count += 1,
                GlassType::BackGlass => acc.back_glass_count += 1,
            }
            acc.total_value = acc.total_value.saturating_add(item.stock_value());
            acc
        })
}
