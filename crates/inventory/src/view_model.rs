//! Single-owner view model: replaces state wholesale and notifies observers.

use glassdesk_core::DomainResult;

use crate::filter::CategoryFilter;
use crate::item::{InventoryItem, InventoryItemId, ItemDraft};
use crate::state::InventoryState;
use crate::stock::QuantityAdjusted;

type Observer = Box<dyn Fn(&InventoryState)>;

/// Owner of the current [`InventoryState`].
///
/// Every event handler computes the next state from the current one, swaps it
/// in, and calls each subscriber so the presentation layer can re-render.
pub struct InventoryViewModel {
    state: InventoryState,
    observers: Vec<Observer>,
}

impl InventoryViewModel {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            state: InventoryState::new(items),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Register a render callback. It is not invoked for the current state.
    pub fn subscribe(&mut self, observer: impl Fn(&InventoryState) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        tracing::debug!(?category, "inventory filter tab selected");
        let next = self.state.with_category(category);
        self.replace(next);
    }

    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        let next = self.state.with_search_text(search_text);
        tracing::debug!(search_text = next.search_text(), "inventory search changed");
        self.replace(next);
    }

    pub fn clear_search(&mut self) {
        let next = self.state.cleared_search();
        self.replace(next);
    }

    pub fn adjust_quantity(&mut self, item_id: &InventoryItemId, delta: i64) -> Option<QuantityAdjusted> {
        let (next, change) = self.state.adjusted(item_id, delta);
        match &change {
            Some(c) => tracing::info!(
                item_id = %c.item_id,
                part_number = %c.part_number,
                from = c.from,
                to = c.to,
                "inventory quantity updated"
            ),
            None => tracing::debug!(%item_id, delta, "quantity adjustment for unknown item ignored"),
        }
        self.replace(next);
        change
    }

    /// Save a draft from the add-item form under a freshly minted id.
    pub fn add_item(&mut self, draft: ItemDraft) -> DomainResult<InventoryItemId> {
        let id = InventoryItemId::generate();
        let part_number = draft.part_number.clone();
        let next = match self.state.with_added_item(draft.into_new_item(id.clone())) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(%part_number, error = %err, "inventory item rejected");
                return Err(err);
            }
        };
        tracing::info!(item_id = %id, %part_number, "inventory item added");
        self.replace(next);
        Ok(id)
    }

    pub fn view_details(&mut self, item_id: &InventoryItemId) {
        tracing::info!(%item_id, "view item details");
        let next = self.state.with_selected(item_id);
        self.replace(next);
    }

    pub fn close_details(&mut self) {
        let next = self.state.cleared_selection();
        self.replace(next);
    }

    fn replace(&mut self, next: InventoryState) {
        self.state = next;
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

impl core::fmt::Debug for InventoryViewModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryViewModel")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
