//! Catalog item models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BowlError, Result};

/// Stable identifier of a catalog item.
pub type ItemId = u32;

/// A single orderable ingredient as served by `GET /ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub calories: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub protein: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub carbs: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub fat: Decimal,
}

impl Item {
    /// Returns the name of the first negative numeric field, if any.
    fn negative_field(&self) -> Option<&'static str> {
        [
            ("price", self.price),
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ]
        .into_iter()
        .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
        .map(|(name, _)| name)
    }
}

/// Built-in ingredient table used when `/ingredients` is unavailable.
///
/// Columns: id, name, price, calories, protein in tenths of a gram, carbs, fat.
const FALLBACK_ITEMS: [(ItemId, &str, i64, i64, i64, i64, i64); 10] = [
    (1, "Lettuce", 20, 5, 5, 1, 0),
    (2, "Tomato", 15, 10, 3, 2, 0),
    (3, "Cucumber", 12, 8, 4, 2, 0),
    (4, "Carrot", 18, 25, 5, 6, 0),
    (5, "Corn", 25, 80, 20, 18, 1),
    (6, "Cheese", 40, 90, 50, 1, 7),
    (7, "Chicken", 60, 120, 200, 0, 5),
    (8, "Avocado", 50, 160, 20, 8, 15),
    (9, "Olives", 30, 40, 5, 2, 4),
    (10, "Spinach", 22, 7, 8, 1, 0),
];

/// The ordered, immutable list of items available for one session.
///
/// A catalog is never empty and never contains two items with the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping the order in which items were given.
    ///
    /// # Errors
    ///
    /// Returns [`BowlError::InvalidCatalog`] if the list is empty, contains a
    /// duplicate id, or an item carries a negative value.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(BowlError::InvalidCatalog("no items".to_string()));
        }

        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.id, pos).is_some() {
                return Err(BowlError::InvalidCatalog(format!(
                    "duplicate item id {}",
                    item.id
                )));
            }
            if let Some(field) = item.negative_field() {
                return Err(BowlError::InvalidCatalog(format!(
                    "item {} has negative {field}",
                    item.id
                )));
            }
        }

        Ok(Self { items, index })
    }

    /// Returns the built-in ten-item catalog.
    pub fn fallback() -> Self {
        let items: Vec<Item> = FALLBACK_ITEMS
            .iter()
            .map(
                |&(id, name, price, calories, protein_tenths, carbs, fat)| Item {
                    id,
                    name: name.to_string(),
                    price: Decimal::from(price),
                    calories: Decimal::from(calories),
                    protein: Decimal::new(protein_tenths, 1).normalize(),
                    carbs: Decimal::from(carbs),
                    fat: Decimal::from(fat),
                },
            )
            .collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(pos, item)| (item.id, pos))
            .collect();
        Self { items, index }
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Returns all items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
