//! Seed data loaded at application start.

use glassdesk_core::{DomainResult, Money};

use crate::item::{GlassType, InventoryItem, InventoryItemId, NewInventoryItem};

/// Parse a JSON array of item records (same shape as [`NewInventoryItem`]).
///
/// Every record passes through item validation.
pub fn from_json(json: &str) -> serde_json::Result<Vec<InventoryItem>> {
    serde_json::from_str(json)
}

/// Built-in stock list used when no seed file is configured.
///
/// The rows are constants covered by `fixture_rows_all_validate`; a row that
/// fails validation is a programming error and panics.
pub fn fixture() -> Vec<InventoryItem> {
    try_fixture().expect("built-in inventory fixture rows are valid")
}

/// The built-in rows, each passed through item validation.
pub fn try_fixture() -> DomainResult<Vec<InventoryItem>> {
    use GlassType::{BackGlass, Windshield};

    #[rustfmt::skip]
    let rows: [(&str, GlassType, &str, &str, &str, &str, &str, u32, u32, &str, &[&str], u64); 7] = [
        ("1", Windshield, "Pilkington", "FW03456", "Honda", "Accord", "2018-2023", 8, 3, "Shelf A-12",
            &["Rain Sensor", "Heated", "Acoustic"], 285),
        ("2", BackGlass, "Safelite", "BG02134", "Toyota", "Camry", "2019-2024", 5, 2, "Shelf B-08",
            &["Heated", "Defrost"], 195),
        ("3", Windshield, "PPG", "FW04789", "Ford", "F-150", "2020-2024", 2, 3, "Shelf A-15",
            &["Rain Sensor", "HUD Compatible"], 425),
        ("4", Windshield, "Pilkington", "FW05123", "Tesla", "Model 3", "2021-2024", 4, 2, "Shelf A-20",
            &["Rain Sensor", "Heated", "Acoustic", "HUD Compatible"], 650),
        ("5", BackGlass, "Safelite", "BG03456", "Chevrolet", "Silverado", "2019-2023", 6, 3, "Shelf B-12",
            &["Heated", "Privacy Tint"], 225),
        ("6", Windshield, "PPG", "FW06789", "Nissan", "Altima", "2020-2024", 1, 2, "Shelf A-18",
            &["Rain Sensor", "Acoustic"], 295),
        ("7", BackGlass, "Pilkington", "BG04567", "Honda", "CR-V", "2018-2023", 7, 3, "Shelf B-15",
            &["Heated", "Defrost", "Privacy Tint"], 215),
    ];

    rows.into_iter()
        .map(
            |(id, glass_type, manufacturer, part_number, make, model, years, qty, min, location, features, dollars)| {
                InventoryItem::new(NewInventoryItem {
                    id: InventoryItemId::new(id)?,
                    glass_type,
                    manufacturer: manufacturer.to_string(),
                    part_number: part_number.to_string(),
                    vehicle_make: make.to_string(),
                    vehicle_model: model.to_string(),
                    year_range: years.to_string(),
                    quantity: qty,
                    min_quantity: min,
                    location: location.to_string(),
                    features: features.iter().map(|f| f.to_string()).collect(),
                    unit_cost: Money::from_dollars(dollars),
                })
            },
        )
        .collect()
}
