// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The drink ledger: the ordered board of drinks and the operations that change it.
//!
//! Every operation takes the current ledger by reference and returns the next one, so a board
//! session can hand old values to the save queue or a snapshot without aliasing the live one.

use log::debug;
use rust_decimal::Decimal;

use crate::models::{self, DrinkRecord, NEW_DRINK_NAME};
use crate::price;

/// One editable field of a drink, with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum DrinkField {
    Name(String),
    PriceText(String),
    Count(u32),
    Icon(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerOp {
    Update { index: usize, field: DrinkField },
    Increment(usize),
    Decrement(usize),
    AddDrink,
    ResetAll,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrinkLedger {
    records: Vec<DrinkRecord>,
}

impl DrinkLedger {
    pub fn from_records(records: Vec<DrinkRecord>) -> Self {
        Self { records }
    }

    /// The built-in board used before anything has been stored.
    pub fn seeded() -> Self {
        let seed: [(&str, &str, Decimal); 9] = [
            ("1", "Air", Decimal::ZERO),
            ("2", "Coca", Decimal::new(2, 0)),
            ("3", "Coca 0", Decimal::new(2, 0)),
            ("4", "Coca Citron", Decimal::new(25, 1)),
            ("5", "Leffe", Decimal::new(3, 0)),
            ("6", "Jupiler", Decimal::new(3, 0)),
            ("7", "Bière rubis", Decimal::new(35, 1)),
            ("8", "Orangina", Decimal::new(25, 1)),
            ("9", "Sprite", Decimal::new(2, 0)),
        ];
        Self::from_records(
            seed.into_iter()
                .map(|(id, name, price)| DrinkRecord::new(id, name, price))
                .collect(),
        )
    }

    pub fn records(&self) -> &[DrinkRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&DrinkRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn apply(&self, op: LedgerOp) -> Self {
        match op {
            LedgerOp::Update { index, field } => self.update_field(index, field),
            LedgerOp::Increment(index) => self.increment(index),
            LedgerOp::Decrement(index) => self.decrement(index),
            LedgerOp::AddDrink => self.add_drink(),
            LedgerOp::ResetAll => self.reset_all(),
        }
    }

    /// Replace one field of the drink at `index`.
    ///
    /// Out-of-range indexes, price text that is not a valid partial price and icons outside the
    /// catalog leave the ledger unchanged. Names are cut to the display limit.
    pub fn update_field(&self, index: usize, field: DrinkField) -> Self {
        let mut next = self.clone();
        let Some(record) = next.records.get_mut(index) else {
            debug!("update of drink #{} ignored: board has {}", index, self.len());
            return next;
        };
        match field {
            DrinkField::Name(name) => record.name = models::truncate_name(&name),
            DrinkField::PriceText(text) => {
                if price::is_valid_partial(&text) {
                    record.price_text = text;
                } else {
                    debug!("rejected price text '{}' for {}", text, record.id);
                }
            }
            DrinkField::Count(count) => record.count = count,
            DrinkField::Icon(icon) => {
                if models::is_known_icon(&icon) {
                    record.icon = icon;
                } else {
                    debug!("unknown icon '{}' for {}", icon, record.id);
                }
            }
        }
        next
    }

    pub fn increment(&self, index: usize) -> Self {
        match self.records.get(index) {
            Some(r) => self.update_field(index, DrinkField::Count(r.count.saturating_add(1))),
            None => self.clone(),
        }
    }

    /// Counts never go below zero.
    pub fn decrement(&self, index: usize) -> Self {
        match self.records.get(index) {
            Some(r) => self.update_field(index, DrinkField::Count(r.count.saturating_sub(1))),
            None => self.clone(),
        }
    }

    pub fn add_drink(&self) -> Self {
        self.add_drink_at(chrono::Utc::now().timestamp_millis())
    }

    /// Append a blank drink whose id derives from `millis`, bumped past any id already taken.
    pub fn add_drink_at(&self, millis: i64) -> Self {
        let mut stamp = millis;
        while self.position(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        let mut next = self.clone();
        next.records
            .push(DrinkRecord::new(stamp.to_string(), NEW_DRINK_NAME, Decimal::ZERO));
        next
    }

    /// Zero every counter and resync the price text with the stored price, dropping any edit
    /// that was never saved.
    pub fn reset_all(&self) -> Self {
        let records = self
            .records
            .iter()
            .map(|r| DrinkRecord {
                count: 0,
                price_text: price::format(r.price),
                ..r.clone()
            })
            .collect();
        Self { records }
    }
}
