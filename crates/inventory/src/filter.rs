//! Category/search predicates and the visible-item derivation.

use serde::{Deserialize, Serialize};

use crate::item::{GlassType, InventoryItem};
use crate::summary::InventorySummary;

/// Mutually exclusive filter tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Windshield,
    BackGlass,
    LowStock,
}

impl CategoryFilter {
    /// Tabs in display order.
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Windshield,
        CategoryFilter::BackGlass,
        CategoryFilter::LowStock,
    ];

    pub fn matches(self, item: &InventoryItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Windshield => item.glass_type() == GlassType::Windshield,
            CategoryFilter::BackGlass => item.glass_type() == GlassType::BackGlass,
            CategoryFilter::LowStock => item.is_low_stock(),
        }
    }

    /// Tab label; category tabs carry their count, the low-stock tab does not.
    pub fn label(self, summary: &InventorySummary) -> String {
        match self {
            CategoryFilter::All => format!("All ({})", summary.total_count),
            CategoryFilter::Windshield => format!("Windshield ({})", summary.windshield_count),
            CategoryFilter::BackGlass => format!("Back Glass ({})", summary.back_glass_count),
            CategoryFilter::LowStock => "Low Stock".to_string(),
        }
    }
}

/// Case-insensitive substring match over make, model, part number and manufacturer.
///
/// Empty text matches everything. The text is not trimmed.
pub fn matches_search(item: &InventoryItem, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    [
        item.vehicle_make(),
        item.vehicle_model(),
        item.part_number(),
        item.manufacturer(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Items passing both the category and the search predicate, in collection order.
pub fn compute_visible_items(
    items: &[InventoryItem],
    category: CategoryFilter,
    search_text: &str,
) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| category.matches(item) && matches_search(item, search_text))
        .cloned()
        .collect()
}

/// Why the visible list is empty, so the screen can pick the right hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection itself has no items; `searching` records whether a
    /// search was active at the time.
    NoItems { searching: bool },
    /// Items exist but none match the (non-empty) search text.
    NoMatchesForSearch,
    /// Items exist but none pass the category tab.
    NoMatchesForFilter,
}

impl EmptyState {
    pub fn classify(total: usize, visible: usize, search_text: &str) -> Option<Self> {
        if visible > 0 {
            None
        } else if total == 0 {
            Some(EmptyState::NoItems {
                searching: !search_text.is_empty(),
            })
        } else if !search_text.is_empty() {
            Some(EmptyState::NoMatchesForSearch)
        } else {
            Some(EmptyState::NoMatchesForFilter)
        }
    }

    pub fn title(self) -> &'static str {
        "No items found"
    }

    /// The hint follows the search text alone, whatever the cause.
    pub fn hint(self) -> &'static str {
        match self {
            EmptyState::NoMatchesForSearch | EmptyState::NoItems { searching: true } => {
                "Try a different search term"
            }
            EmptyState::NoMatchesForFilter | EmptyState::NoItems { searching: false } => {
                "Add your first inventory item"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::test_support::{item, vehicle};
    use glassdesk_core::Entity;
    use proptest::prelude::*;

    fn ids(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.id().as_str()).collect()
    }

    fn pair() -> Vec<InventoryItem> {
        vec![
            item("A", GlassType::Windshield, 2, 3),
            item("B", GlassType::BackGlass, 5, 2),
        ]
    }

    #[test]
    fn all_with_empty_search_returns_everything_in_order() {
        let items = pair();
        assert_eq!(compute_visible_items(&items, CategoryFilter::All, ""), items);
    }

    #[test]
    fn low_stock_tab_selects_items_at_or_below_threshold() {
        let items = pair();
        let visible = compute_visible_items(&items, CategoryFilter::LowStock, "");
        assert_eq!(ids(&visible), vec!["A"]);
    }

    #[test]
    fn category_tabs_match_exact_glass_type() {
        let items = pair();
        assert_eq!(
            ids(&compute_visible_items(&items, CategoryFilter::Windshield, "")),
            vec!["A"]
        );
        assert_eq!(
            ids(&compute_visible_items(&items, CategoryFilter::BackGlass, "")),
            vec!["B"]
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![
            vehicle("1", "Honda", "Accord", "FW03456", "Pilkington"),
            vehicle("2", "Toyota", "Camry", "BG02134", "Safelite"),
            vehicle("3", "Ford", "F-150", "FW04789", "PPG"),
        ];
        assert_eq!(ids(&compute_visible_items(&items, CategoryFilter::All, "hon")), vec!["1"]);
        assert_eq!(ids(&compute_visible_items(&items, CategoryFilter::All, "CAM")), vec!["2"]);
        assert_eq!(ids(&compute_visible_items(&items, CategoryFilter::All, "fw0")), vec!["1", "3"]);
        assert_eq!(ids(&compute_visible_items(&items, CategoryFilter::All, "ppg")), vec!["3"]);
        assert!(compute_visible_items(&items, CategoryFilter::All, "civic").is_empty());
    }

    #[test]
    fn search_does_not_look_at_location_or_features() {
        let items = vec![vehicle("1", "Honda", "Accord", "FW03456", "Pilkington")];
        assert!(compute_visible_items(&items, CategoryFilter::All, "shelf").is_empty());
    }

    #[test]
    fn whitespace_search_is_not_treated_as_empty() {
        let items = vec![vehicle("1", "Honda", "Accord", "FW03456", "Pilkington")];
        assert!(compute_visible_items(&items, CategoryFilter::All, " ").is_empty());
    }

    #[test]
    fn both_predicates_must_pass() {
        let items = vec![
            vehicle("1", "Honda", "Accord", "FW03456", "Pilkington"),
            item("2", GlassType::BackGlass, 1, 3),
        ];
        assert!(compute_visible_items(&items, CategoryFilter::BackGlass, "hon").is_empty());
        assert_eq!(
            ids(&compute_visible_items(&items, CategoryFilter::Windshield, "hon")),
            vec!["1"]
        );
    }

    #[test]
    fn empty_state_distinguishes_causes() {
        assert_eq!(EmptyState::classify(3, 2, "x"), None);
        assert_eq!(
            EmptyState::classify(0, 0, ""),
            Some(EmptyState::NoItems { searching: false })
        );
        assert_eq!(
            EmptyState::classify(0, 0, "x"),
            Some(EmptyState::NoItems { searching: true })
        );
        assert_eq!(
            EmptyState::classify(3, 0, "x"),
            Some(EmptyState::NoMatchesForSearch)
        );
        assert_eq!(
            EmptyState::classify(3, 0, ""),
            Some(EmptyState::NoMatchesForFilter)
        );
        assert_eq!(
            EmptyState::NoMatchesForSearch.hint(),
            "Try a different search term"
        );
        assert_eq!(
            EmptyState::NoMatchesForFilter.hint(),
            "Add your first inventory item"
        );
    }

    #[test]
    fn hint_follows_search_text_even_without_items() {
        let hint = |search: &str| EmptyState::classify(0, 0, search).map(EmptyState::hint);
        assert_eq!(hint("honda"), Some("Try a different search term"));
        assert_eq!(hint(""), Some("Add your first inventory item"));
    }

    fn arb_item() -> impl Strategy<Value = InventoryItem> {
        (
            "[a-z0-9]{1,8}",
            prop_oneof![Just(GlassType::Windshield), Just(GlassType::BackGlass)],
            0u32..20,
            0u32..20,
        )
            .prop_map(|(id, glass_type, quantity, min)| item(&id, glass_type, quantity, min))
    }

    fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
        prop_oneof![
            Just(CategoryFilter::All),
            Just(CategoryFilter::Windshield),
            Just(CategoryFilter::BackGlass),
            Just(CategoryFilter::LowStock),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: `All` + empty search is the identity.
        #[test]
        fn all_unfiltered_is_identity(items in prop::collection::vec(arb_item(), 0..20)) {
            prop_assert_eq!(compute_visible_items(&items, CategoryFilter::All, ""), items);
        }

        /// Property: recomputation with identical inputs yields an identical result.
        #[test]
        fn visible_items_is_idempotent(
            items in prop::collection::vec(arb_item(), 0..20),
            filter in arb_filter(),
            search in "[a-zA-Z0-9 -]{0,4}",
        ) {
            let first = compute_visible_items(&items, filter, &search);
            let second = compute_visible_items(&items, filter, &search);
            prop_assert_eq!(&first, &second);

            // Output is an order-preserving subsequence of the input.
            let mut cursor = items.iter();
            for visible in &first {
                prop_assert!(cursor.any(|i| i == visible));
            }
        }

        /// Property: the low-stock tab agrees with the item-level predicate.
        #[test]
        fn low_stock_tab_agrees_with_predicate(items in prop::collection::vec(arb_item(), 0..20)) {
            let visible = compute_visible_items(&items, CategoryFilter::LowStock, "");
            let expected: Vec<InventoryItem> = items
                .iter()
                .filter(|i| i.quantity() <= i.min_quantity())
                .cloned()
                .collect();
            prop_assert_eq!(visible, expected);
        }
    }
}
