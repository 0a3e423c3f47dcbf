// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use barcount::persistence::{PersistenceBridge, STORAGE_KEY};
use barcount::store::{KvStore, MemoryStore, StoreError};
use barcount::{cli, commands};
use rust_decimal::Decimal;
use std::sync::Arc;

fn setup() -> (Arc<MemoryStore>, Arc<PersistenceBridge>) {
    let store = Arc::new(MemoryStore::new());
    let bridge = Arc::new(PersistenceBridge::new(Arc::clone(&store)));
    (store, bridge)
}

/// Reads work, writes always fail.
struct ReadOnlyStore(MemoryStore);

impl KvStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.get_item(key)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk full".into()))
    }
}

fn read_only_with(blob: &str) -> Arc<PersistenceBridge> {
    let inner = MemoryStore::new();
    inner.set_item(STORAGE_KEY, blob).unwrap();
    Arc::new(PersistenceBridge::new(ReadOnlyStore(inner)))
}

fn run(bridge: &Arc<PersistenceBridge>, args: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("drink", m)) => commands::drinks::handle(bridge, m),
        Some(("order", m)) => commands::orders::handle(bridge, m),
        _ => panic!("command not parsed"),
    }
}

#[test]
fn inc_trims_position_and_repeats() {
    let (_store, bridge) = setup();
    run(
        &bridge,
        &["barcount", "drink", "inc", "--at", " 2 ", "--times", "3"],
    )
    .unwrap();
    run(&bridge, &["barcount", "drink", "dec", "--at", "2"]).unwrap();

    let ledger = bridge.load();
    assert_eq!(ledger.get(1).unwrap().count, 2);
}

#[test]
fn inc_rejects_position_off_the_board() {
    let (store, bridge) = setup();
    let err = run(&bridge, &["barcount", "drink", "inc", "--at", "10"]).unwrap_err();
    assert!(err.to_string().contains("No drink at position 10"));
    assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
}

#[test]
fn add_names_and_prices_new_drink() {
    let (_store, bridge) = setup();
    run(
        &bridge,
        &["barcount", "drink", "add", "--name", " Kriek ", "--price", "3,5"],
    )
    .unwrap();

    let ledger = bridge.load();
    assert_eq!(ledger.len(), 10);
    let kriek = ledger.get(9).unwrap();
    assert_eq!(kriek.name, "Kriek");
    assert_eq!(kriek.price, Decimal::new(35, 1));
    assert_eq!(kriek.price_text, "3,50");
    assert_eq!(kriek.count, 0);
}

#[test]
fn set_rejects_malformed_price() {
    let (store, bridge) = setup();
    let err = run(
        &bridge,
        &["barcount", "drink", "set", "--at", "1", "--price", "12.50"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Rejected price"));
    assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
}

#[test]
fn set_updates_fields() {
    let (_store, bridge) = setup();
    run(
        &bridge,
        &[
            "barcount", "drink", "set", "--at", "3", "--name", "Coca Zero", "--count", "4",
            "--icon", "cup",
        ],
    )
    .unwrap();

    let drink = bridge.load().get(2).cloned().unwrap();
    assert_eq!(drink.name, "Coca Zero");
    assert_eq!(drink.count, 4);
    // the icon is fixed again on load
    assert_eq!(drink.icon, "glass-wine");
}

#[test]
fn reset_zeroes_board() {
    let (_store, bridge) = setup();
    run(&bridge, &["barcount", "drink", "inc", "--at", "5"]).unwrap();
    run(&bridge, &["barcount", "drink", "reset"]).unwrap();
    assert!(bridge.load().records().iter().all(|r| r.count == 0));
}

#[test]
fn checkout_resets_stored_counts() {
    let (_store, bridge) = setup();
    run(&bridge, &["barcount", "drink", "inc", "--at", "5", "--times", "2"]).unwrap();
    run(&bridge, &["barcount", "order", "total", "--json"]).unwrap();
    assert_eq!(bridge.load().get(4).unwrap().count, 2);

    run(&bridge, &["barcount", "order", "checkout"]).unwrap();
    assert!(bridge.load().records().iter().all(|r| r.count == 0));
}

#[test]
fn checkout_on_empty_store_is_quiet() {
    let (store, bridge) = setup();
    run(&bridge, &["barcount", "order", "checkout"]).unwrap();
    assert!(store.get_item(STORAGE_KEY).unwrap().is_none());
}

#[test]
fn inc_and_dec_with_huge_times_apply_once() {
    let (_store, bridge) = setup();
    run(
        &bridge,
        &["barcount", "drink", "inc", "--at", "1", "--times", "4294967295"],
    )
    .unwrap();
    assert_eq!(bridge.load().get(0).unwrap().count, u32::MAX);

    run(&bridge, &["barcount", "drink", "inc", "--at", "1"]).unwrap();
    assert_eq!(bridge.load().get(0).unwrap().count, u32::MAX);

    run(
        &bridge,
        &["barcount", "drink", "dec", "--at", "1", "--times", "4294967290"],
    )
    .unwrap();
    assert_eq!(bridge.load().get(0).unwrap().count, 5);

    run(
        &bridge,
        &["barcount", "drink", "dec", "--at", "1", "--times", "4000000000"],
    )
    .unwrap();
    assert_eq!(bridge.load().get(0).unwrap().count, 0);
}

#[test]
fn checkout_reports_failed_reset() {
    let bridge = read_only_with(r#"[{"id":"1","name":"Leffe","price":3,"count":2}]"#);
    let err = run(&bridge, &["barcount", "order", "checkout"]).unwrap_err();
    assert_eq!(err.to_string(), "could not reset the counters");
}

#[test]
fn checkout_reports_unreadable_stored_board() {
    let (store, bridge) = setup();
    store.set_item(STORAGE_KEY, "[{broken").unwrap();
    let err = run(&bridge, &["barcount", "order", "checkout"]).unwrap_err();
    assert_eq!(err.to_string(), "could not reset the counters");
    assert_eq!(store.get_item(STORAGE_KEY).unwrap().unwrap(), "[{broken");
}

#[test]
fn command_groups_need_a_subcommand() {
    for group in ["drink", "order"] {
        let res = cli::build_cli().try_get_matches_from(["barcount", group]);
        assert!(res.is_err(), "bare `{}` should show help", group);
    }
}
