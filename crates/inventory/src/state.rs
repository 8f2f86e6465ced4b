//! Explicit immutable inventory state plus pure transitions.

use glassdesk_core::{DomainError, DomainResult, Entity, ExpectedVersion};

use crate::filter::{CategoryFilter, EmptyState, compute_visible_items};
use crate::item::{InventoryItem, InventoryItemId, NewInventoryItem};
use crate::stock::{QuantityAdjusted, adjust_quantity};
use crate::summary::{InventorySummary, compute_summary};

/// A filter tab as rendered: which filter, its label, and whether it is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: CategoryFilter,
    pub label: String,
    pub active: bool,
}

/// Everything the inventory screen derives from.
///
/// Transitions never mutate in place; each returns the next state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InventoryState {
    items: Vec<InventoryItem>,
    category: CategoryFilter,
    search_text: String,
    selected: Option<InventoryItemId>,
    version: u64,
}

impl InventoryState {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Number of effective changes to the collection since seeding: added
    /// items and quantities that actually moved.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_search_text(&self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self.clone()
        }
    }

    pub fn cleared_search(&self) -> Self {
        self.with_search_text(String::new())
    }

    /// Adjust one item's quantity. The version moves only when a quantity moved.
    pub fn adjusted(
        &self,
        item_id: &InventoryItemId,
        delta: i64,
    ) -> (Self, Option<QuantityAdjusted>) {
        let adjustment = adjust_quantity(&self.items, item_id, delta);
        let moved = adjustment.change.as_ref().is_some_and(|c| !c.is_noop());
        let next = Self {
            items: adjustment.items,
            category: self.category,
            search_text: self.search_text.clone(),
            selected: self.selected.clone(),
            version: if moved { self.version + 1 } else { self.version },
        };
        (next, adjustment.change)
    }

    /// Like [`Self::adjusted`], but rejects a stale `expected` version first.
    pub fn adjusted_expecting(
        &self,
        expected: ExpectedVersion,
        item_id: &InventoryItemId,
        delta: i64,
    ) -> DomainResult<(Self, Option<QuantityAdjusted>)> {
        expected.check(self.version)?;
        Ok(self.adjusted(item_id, delta))
    }

    /// Append a new item. Duplicate ids are a conflict; the rest of the
    /// collection keeps its order.
    pub fn with_added_item(&self, new: NewInventoryItem) -> DomainResult<Self> {
        let item = InventoryItem::new(new)?;
        if self.items.iter().any(|existing| existing.same_identity_as(&item)) {
            return Err(DomainError::conflict(format!(
                "item already exists: {}",
                item.id()
            )));
        }
        let mut items = self.items.clone();
        items.push(item);
        Ok(Self {
            items,
            version: self.version + 1,
            ..self.clone()
        })
    }

    /// Select an item for the details view. Unknown ids leave the selection as is.
    pub fn with_selected(&self, item_id: &InventoryItemId) -> Self {
        if !self.items.iter().any(|item| item.id() == item_id) {
            return self.clone();
        }
        Self {
            selected: Some(item_id.clone()),
            ..self.clone()
        }
    }

    pub fn cleared_selection(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }

    /// Current record of the selected item, reflecting later quantity changes.
    pub fn selected_item(&self) -> Option<&InventoryItem> {
        let selected = self.selected.as_ref()?;
        self.items.iter().find(|item| item.id() == selected)
    }

    pub fn visible_items(&self) -> Vec<InventoryItem> {
        compute_visible_items(&self.items, self.category, &self.search_text)
    }

    pub fn summary(&self) -> InventorySummary {
        compute_summary(&self.items)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        EmptyState::classify(
            self.items.len(),
            self.visible_items().len(),
            &self.search_text,
        )
    }

    pub fn filter_tabs(&self) -> Vec<FilterTab> {
        let summary = self.summary();
        CategoryFilter::TABS
            .iter()
            .map(|&filter| FilterTab {
                filter,
                label: filter.label(&summary),
                active: filter == self.category,
            })
            .collect()
    }
}
