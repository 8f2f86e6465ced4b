//! Plain-text presenter for the inventory screen.

use glassdesk_core::Entity;
use glassdesk_inventory::{InventoryItem, InventoryState};

use crate::navigation::{Tab, TabChrome};

pub const TITLE: &str = "Inventory";
pub const SEARCH_PLACEHOLDER: &str = "Search by make, model, or part number...";

/// Renders an [`InventoryState`] through the selected chrome.
pub struct InventoryScreen {
    chrome: Box<dyn TabChrome>,
}

impl InventoryScreen {
    pub fn new(chrome: Box<dyn TabChrome>) -> Self {
        Self { chrome }
    }

    pub fn chrome(&self) -> &dyn TabChrome {
        self.chrome.as_ref()
    }

    pub fn render(&self, state: &InventoryState) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(title) = self.chrome.navigation_title(TITLE) {
            lines.push(title);
        }
        if let Some(header) = self.chrome.in_content_header(TITLE) {
            lines.push(header);
        }

        let summary = state.summary();
        lines.push(format!(
            "Total Items: {} | Low Stock: {} | Total Value: {}",
            summary.total_count, summary.low_stock_count, summary.total_value.compact()
        ));

        if state.search_text().is_empty() {
            lines.push(format!("Search: {SEARCH_PLACEHOLDER}"));
        } else {
            lines.push(format!("Search: {} (x)", state.search_text()));
        }

        let tabs = state
            .filter_tabs()
            .into_iter()
            .map(|tab| {
                if tab.active {
                    format!("[{}]", tab.label)
                } else {
                    tab.label
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(tabs);

        match state.empty_state() {
            Some(empty) => {
                lines.push(empty.title().to_string());
                lines.push(empty.hint().to_string());
            }
            None => {
                for item in state.visible_items() {
                    lines.extend(render_item(&item));
                }
            }
        }

        let padding = self.chrome.bottom_padding();
        if padding > 0 {
            lines.push(format!("(bottom padding: {padding})"));
        }
        lines.push(self.chrome.render_tab_bar(Tab::Inventory));
        lines
    }

    /// Details sheet for the selected item, if one is selected.
    pub fn render_details(&self, state: &InventoryState) -> Option<Vec<String>> {
        let item = state.selected_item()?;
        let mut lines = vec![format!("Item Details: {}", item.id())];
        lines.extend(render_item(item).into_iter().skip(1));
        Some(lines)
    }
}

fn render_item(item: &InventoryItem) -> Vec<String> {
    let mut title = format!("{} {}", item.vehicle_make(), item.vehicle_model());
    if item.is_low_stock() {
        title.push_str(" [Low]");
    }

    let mut lines = vec![
        "----".to_string(),
        format!("{title} ({})", item.glass_type()),
        item.year_range().to_string(),
        format!("Part #: {}", item.part_number()),
        item.manufacturer().to_string(),
        item.location().to_string(),
    ];
    if !item.features().is_empty() {
        lines.push(item.features().join(", "));
    }
    lines.push(format!(
        "In Stock: {} units (Min: {} units)",
        item.quantity(),
        item.min_quantity()
    ));
    lines.push(format!(
        "Unit Cost: {} | Total: {}",
        item.unit_cost(),
        item.stock_value()
    ));
    lines
}
