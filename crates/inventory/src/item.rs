use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use glassdesk_core::{DomainError, DomainResult, Entity, Money};

/// Inventory item identifier: an opaque token, stable for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(String);

impl InventoryItemId {
    pub fn new(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::invalid_id("InventoryItemId: cannot be blank"));
        }
        Ok(Self(raw))
    }

    /// Mint a fresh identifier (UUIDv7, time-ordered). Prefer explicit ids in tests.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InventoryItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Glass part classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlassType {
    Windshield,
    #[serde(rename = "Back Glass")]
    BackGlass,
}

impl GlassType {
    pub fn label(self) -> &'static str {
        match self {
            GlassType::Windshield => "Windshield",
            GlassType::BackGlass => "Back Glass",
        }
    }
}

impl core::fmt::Display for GlassType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for creating an [`InventoryItem`]; also the seed-file record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub id: InventoryItemId,
    pub glass_type: GlassType,
    pub manufacturer: String,
    pub part_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub year_range: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub location: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Unit cost in cents.
    pub unit_cost: Money,
}

/// Form contents for a part entered at runtime; the id is assigned on save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub glass_type: GlassType,
    pub manufacturer: String,
    pub part_number: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub year_range: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub location: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub unit_cost: Money,
}

impl ItemDraft {
    pub fn into_new_item(self, id: InventoryItemId) -> NewInventoryItem {
        NewInventoryItem {
            id,
            glass_type: self.glass_type,
            manufacturer: self.manufacturer,
            part_number: self.part_number,
            vehicle_make: self.vehicle_make,
            vehicle_model: self.vehicle_model,
            year_range: self.year_range,
            quantity: self.quantity,
            min_quantity: self.min_quantity,
            location: self.location,
            features: self.features,
            unit_cost: self.unit_cost,
        }
    }
}

/// One stocked glass part.
///
/// Quantity is the only attribute that changes after creation, and only
/// through [`crate::stock::adjust_quantity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewInventoryItem")]
pub struct InventoryItem {
    id: InventoryItemId,
    glass_type: GlassType,
    manufacturer: String,
    part_number: String,
    vehicle_make: String,
    vehicle_model: String,
    year_range: String,
    quantity: u32,
    min_quantity: u32,
    location: String,
    features: Vec<String>,
    unit_cost: Money,
}

impl InventoryItem {
    pub fn new(new: NewInventoryItem) -> DomainResult<Self> {
        if new.id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("InventoryItemId: cannot be blank"));
        }
        for (field, value) in [
            ("manufacturer", &new.manufacturer),
            ("part number", &new.part_number),
            ("vehicle make", &new.vehicle_make),
            ("vehicle model", &new.vehicle_model),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{field} cannot be empty")));
            }
        }

        Ok(Self {
            id: new.id,
            glass_type: new.glass_type,
            manufacturer: new.manufacturer,
            part_number: new.part_number,
            vehicle_make: new.vehicle_make,
            vehicle_model: new.vehicle_model,
            year_range: new.year_range,
            quantity: new.quantity,
            min_quantity: new.min_quantity,
            location: new.location,
            features: new.features,
            unit_cost: new.unit_cost,
        })
    }

    pub fn glass_type(&self) -> GlassType {
        self.glass_type
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    pub fn vehicle_make(&self) -> &str {
        &self.vehicle_make
    }

    pub fn vehicle_model(&self) -> &str {
        &self.vehicle_model
    }

    pub fn year_range(&self) -> &str {
        &self.year_range
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn min_quantity(&self) -> u32 {
        self.min_quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn unit_cost(&self) -> Money {
        self.unit_cost
    }

    /// Low stock is inclusive: sitting exactly at the threshold already counts.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// Unit cost extended by on-hand quantity.
    pub fn stock_value(&self) -> Money {
        self.unit_cost.times(self.quantity)
    }

    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewInventoryItem> for InventoryItem {
    type Error = DomainError;

    fn try_from(value: NewInventoryItem) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::item;
    use super::*;

    fn new_item() -> NewInventoryItem {
        NewInventoryItem {
            id: InventoryItemId::new("1").unwrap(),
            glass_type: GlassType::Windshield,
            manufacturer: "Pilkington".to_string(),
            part_number: "FW03456".to_string(),
            vehicle_make: "Honda".to_string(),
            vehicle_model: "Accord".to_string(),
            year_range: "2018-2023".to_string(),
            quantity: 8,
            min_quantity: 3,
            location: "Shelf A-12".to_string(),
            features: vec!["Rain Sensor".to_string(), "Heated".to_string()],
            unit_cost: Money::from_dollars(285),
        }
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(matches!(
            InventoryItemId::new("   "),
            Err(DomainError::InvalidId(_))
        ));
        assert!("".parse::<InventoryItemId>().is_err());
    }

    #[test]
    fn draft_takes_the_assigned_id() {
        let id = InventoryItemId::generate();
        let new = test_support::draft("Kia", "Sorento", "BG07001").into_new_item(id.clone());
        let item = InventoryItem::new(new).unwrap();
        assert_eq!(item.id(), &id);
        assert_eq!(item.part_number(), "BG07001");
        assert_eq!(item.features(), ["Heated".to_string()]);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(InventoryItemId::generate(), InventoryItemId::generate());
    }

    #[test]
    fn blank_part_number_is_rejected() {
        let mut new = new_item();
        new.part_number = " ".to_string();
        match InventoryItem::new(new).unwrap_err() {
            DomainError::Validation(msg) if msg.contains("part number") => {}
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn low_stock_is_inclusive_of_threshold() {
        assert!(item("a", GlassType::Windshield, 2, 3).is_low_stock());
        assert!(item("b", GlassType::Windshield, 3, 3).is_low_stock());
        assert!(!item("c", GlassType::Windshield, 4, 3).is_low_stock());
        assert!(item("d", GlassType::BackGlass, 0, 0).is_low_stock());
    }

    #[test]
    fn stock_value_multiplies_unit_cost() {
        let item = InventoryItem::new(new_item()).unwrap();
        assert_eq!(item.stock_value(), Money::from_dollars(285 * 8));
    }

    #[test]
    fn with_quantity_keeps_everything_else() {
        let before = InventoryItem::new(new_item()).unwrap();
        let after = before.with_quantity(0);
        assert_eq!(after.quantity(), 0);
        assert_eq!(after.min_quantity(), before.min_quantity());
        assert_eq!(after.id(), before.id());
        assert_eq!(after.features(), before.features());
        assert_eq!(after.with_quantity(8), before);
        assert!(after.same_identity_as(&before));
        assert!(!after.same_identity_as(&item("other", GlassType::Windshield, 0, 0)));
    }

    #[test]
    fn deserializing_runs_validation() {
        let json = r#"{
            "id": "9",
            "glass_type": "Back Glass",
            "manufacturer": "Safelite",
            "part_number": "",
            "vehicle_make": "Toyota",
            "vehicle_model": "Camry",
            "year_range": "2019-2024",
            "quantity": 5,
            "min_quantity": 2,
            "location": "Shelf B-08",
            "unit_cost": 19500
        }"#;
        let err = serde_json::from_str::<InventoryItem>(json).unwrap_err();
        assert!(err.to_string().contains("part number cannot be empty"));

        let ok = json.replace(r#""part_number": """#, r#""part_number": "BG02134""#);
        let item: InventoryItem = serde_json::from_str(&ok).unwrap();
        assert_eq!(item.glass_type(), GlassType::BackGlass);
        assert!(item.features().is_empty());
        assert_eq!(item.unit_cost(), Money::from_dollars(195));
    }
}
