// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use barcount::ledger::{DrinkField, DrinkLedger, LedgerOp};
use barcount::models::{DEFAULT_ICON, NEW_DRINK_NAME};
use rust_decimal::Decimal;
use std::collections::HashSet;

#[test]
fn seeded_board() {
    let ledger = DrinkLedger::seeded();
    assert_eq!(ledger.len(), 9);
    let coca_citron = ledger.get(3).unwrap();
    assert_eq!(coca_citron.name, "Coca Citron");
    assert_eq!(coca_citron.price, Decimal::new(25, 1));
    assert_eq!(coca_citron.price_text, "2,50");
    assert!(ledger.records().iter().all(|r| r.count == 0 && r.icon == DEFAULT_ICON));
}

#[test]
fn decrement_clamps_at_zero() {
    let ledger = DrinkLedger::seeded();
    let after = ledger.decrement(0);
    assert_eq!(after.get(0).unwrap().count, 0);

    let after = ledger.increment(0).increment(0).decrement(0);
    assert_eq!(after.get(0).unwrap().count, 1);
}

#[test]
fn operations_leave_the_old_ledger_alone() {
    let ledger = DrinkLedger::seeded();
    let next = ledger.apply(LedgerOp::Increment(2));
    assert_eq!(ledger.get(2).unwrap().count, 0);
    assert_eq!(next.get(2).unwrap().count, 1);
}

#[test]
fn out_of_range_update_is_noop() {
    let ledger = DrinkLedger::seeded();
    let next = ledger.update_field(42, DrinkField::Count(7));
    assert_eq!(next, ledger);
    assert_eq!(ledger.increment(9), ledger);
    assert_eq!(ledger.decrement(100), ledger);
}

#[test]
fn rejected_price_text_keeps_previous_text() {
    let ledger = DrinkLedger::seeded().update_field(1, DrinkField::PriceText("2,7".into()));
    assert_eq!(ledger.get(1).unwrap().price_text, "2,7");

    for bad in ["1234", "2.70", "2,755", "abc"] {
        let next = ledger.update_field(1, DrinkField::PriceText(bad.into()));
        assert_eq!(next.get(1).unwrap().price_text, "2,7", "{:?}", bad);
    }

    let cleared = ledger.update_field(1, DrinkField::PriceText(String::new()));
    assert_eq!(cleared.get(1).unwrap().price_text, "");
}

#[test]
fn names_are_capped() {
    let ledger = DrinkLedger::seeded()
        .update_field(0, DrinkField::Name("Limonade maison extra".into()));
    assert_eq!(ledger.get(0).unwrap().name, "Limonade maison");

    let ledger = ledger.update_field(0, DrinkField::Name("Thé".into()));
    assert_eq!(ledger.get(0).unwrap().name, "Thé");
}

#[test]
fn icon_must_come_from_catalog() {
    let ledger = DrinkLedger::seeded().update_field(0, DrinkField::Icon("beer".into()));
    assert_eq!(ledger.get(0).unwrap().icon, "beer");
    let ledger = ledger.update_field(0, DrinkField::Icon("rocket".into()));
    assert_eq!(ledger.get(0).unwrap().icon, "beer");
}

#[test]
fn add_drink_appends_blank_record_with_fresh_id() {
    let ledger = DrinkLedger::seeded();
    let next = ledger.add_drink();
    assert_eq!(next.len(), ledger.len() + 1);
    let added = next.get(ledger.len()).unwrap();
    assert_eq!(added.count, 0);
    assert!(added.price.is_zero());
    assert_eq!(added.price_text, "0,00");
    assert_eq!(added.name, NEW_DRINK_NAME);
    assert!(ledger.position(&added.id).is_none());
}

#[test]
fn add_drink_skips_taken_ids() {
    // seed ids are "1".."9", so a clock reading of 1 has to move past them
    let ledger = DrinkLedger::seeded().add_drink_at(1).add_drink_at(1);
    let ids: Vec<&str> = ledger.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(&ids[9..], &["10", "11"]);
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn reset_all_zeroes_counts_and_resyncs_price_text() {
    let ledger = DrinkLedger::seeded()
        .increment(1)
        .increment(1)
        .increment(4)
        .update_field(1, DrinkField::PriceText("9,".into()))
        .update_field(4, DrinkField::Icon("beer".into()));

    let reset = ledger.apply(LedgerOp::ResetAll);
    for (before, after) in ledger.records().iter().zip(reset.records()) {
        assert_eq!(after.count, 0);
        assert_eq!(after.price_text, barcount::price::format(before.price));
        assert_eq!(after.price, before.price);
        assert_eq!(after.name, before.name);
        assert_eq!(after.id, before.id);
        assert_eq!(after.icon, before.icon);
    }
    assert_eq!(reset.get(1).unwrap().price_text, "2,00");
}
