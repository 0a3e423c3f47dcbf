// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::ledger::DrinkLedger;
use crate::models::DrinkRecord;

/// Serialized copy of the board, the payload handed from the board to the order summary.
///
/// Includes the unsaved price text. Later changes to the board never reach a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(String);

impl Snapshot {
    pub fn capture(ledger: &DrinkLedger) -> Result<Self, serde_json::Error> {
        Ok(Self(serde_json::to_string(ledger.records())?))
    }

    pub fn from_payload(payload: impl Into<String>) -> Self {
        Self(payload.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn records(&self) -> Result<Vec<DrinkRecord>, serde_json::Error> {
        serde_json::from_str(&self.0)
    }

    pub fn summarize(&self) -> Result<OrderSummary, serde_json::Error> {
        Ok(OrderSummary::compute(&self.records()?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl OrderSummary {
    /// Drinks with a zero count are left out.
    pub fn compute(records: &[DrinkRecord]) -> Self {
        let line_items: Vec<LineItem> = records
            .iter()
            .filter(|r| r.count > 0)
            .map(|r| LineItem {
                id: r.id.clone(),
                name: r.name.clone(),
                count: r.count,
                price: r.price,
                subtotal: r.subtotal(),
            })
            .collect();
        let total = line_items.iter().map(|l| l.subtotal).sum();
        Self { line_items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}
