// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::price;

pub const DEFAULT_ICON: &str = "glass-wine";
pub const NEW_DRINK_NAME: &str = "Nouvelle Boisson";
pub const MAX_NAME_CHARS: usize = 15;

pub const DRINK_ICONS: [&str; 9] = [
    "glass-wine",
    "beer",
    "cup",
    "bottle-soda-classic",
    "glass-cocktail",
    "coffee",
    "glass-mug",
    "glass-champagne",
    "glass-cider",
];

/// One sellable item on the board, as held in memory and carried in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkRecord {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub price_text: String,
    pub count: u32,
    pub icon: String,
}

impl DrinkRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: truncate_name(&name.into()),
            price,
            price_text: price::format(price),
            count: 0,
            icon: DEFAULT_ICON.to_string(),
        }
    }

    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.count) * self.price
    }
}

/// Persisted shape of a drink. Every field but `id` may be missing or null in older blobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDrink {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_text: Option<String>,
}

impl StoredDrink {
    /// Price is taken from the edit text, which is dropped.
    pub fn from_record(record: &DrinkRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: Some(record.name.clone()),
            price: Some(price::parse(&record.price_text)),
            count: Some(i64::from(record.count)),
            icon: Some(record.icon.clone()),
            price_text: None,
        }
    }

    pub fn into_record(self) -> DrinkRecord {
        let price = self.price.unwrap_or_default().max(Decimal::ZERO);
        let price_text = self.price_text.unwrap_or_else(|| price::format(price));
        let count = self.count.unwrap_or_default().max(0);
        DrinkRecord {
            id: self.id,
            name: self.name.unwrap_or_default(),
            price,
            price_text,
            count: u32::try_from(count).unwrap_or(u32::MAX),
            icon: DEFAULT_ICON.to_string(),
        }
    }
}

pub fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}

pub fn is_known_icon(icon: &str) -> bool {
    DRINK_ICONS.contains(&icon)
}
