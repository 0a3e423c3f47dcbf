// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::sync::Arc;
use std::thread::JoinHandle;
use thiserror::Error;

use crate::ledger::DrinkLedger;
use crate::models::StoredDrink;
use crate::store::{KvStore, StoreError};

pub const STORAGE_KEY: &str = "drinks_data";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed drinks blob: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    NothingStored,
    Reset(usize),
}

/// Moves the ledger in and out of a single key-value slot.
pub struct PersistenceBridge {
    store: Box<dyn KvStore>,
    key: String,
}

impl PersistenceBridge {
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: impl KvStore + 'static, key: &str) -> Self {
        Self {
            store: Box::new(store),
            key: key.to_string(),
        }
    }

    /// Decode the stored blob, backfilling the price text and forcing the fixed icon.
    /// `Ok(None)` when nothing has been stored yet.
    pub fn try_load(&self) -> Result<Option<DrinkLedger>, PersistError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        let stored: Vec<StoredDrink> = serde_json::from_str(&raw)?;
        let records = stored.into_iter().map(StoredDrink::into_record).collect();
        Ok(Some(DrinkLedger::from_records(records)))
    }

    pub fn load(&self) -> DrinkLedger {
        self.load_or(DrinkLedger::seeded())
    }

    /// Like [`try_load`](Self::try_load), but keeps `current` when nothing is stored or the
    /// read fails.
    pub fn load_or(&self, current: DrinkLedger) -> DrinkLedger {
        match self.try_load() {
            Ok(Some(ledger)) => {
                debug!("loaded {} drinks from '{}'", ledger.len(), self.key);
                ledger
            }
            Ok(None) => current,
            Err(err) => {
                warn!("could not load drinks from '{}': {}", self.key, err);
                current
            }
        }
    }

    pub fn encode(ledger: &DrinkLedger) -> Result<String, serde_json::Error> {
        let stored: Vec<StoredDrink> = ledger
            .records()
            .iter()
            .map(StoredDrink::from_record)
            .collect();
        serde_json::to_string(&stored)
    }

    pub fn try_save(&self, ledger: &DrinkLedger) -> Result<(), PersistError> {
        let blob = Self::encode(ledger)?;
        self.store.set_item(&self.key, &blob)?;
        Ok(())
    }

    /// Failures are logged and dropped; the next save overwrites the whole slot anyway.
    pub fn save(&self, ledger: &DrinkLedger) {
        match self.try_save(ledger) {
            Ok(()) => debug!("saved {} drinks to '{}'", ledger.len(), self.key),
            Err(err) => error!("could not save drinks to '{}': {}", self.key, err),
        }
    }

    /// Zero the count of every stored drink, leaving every other field as stored.
    pub fn reset_persisted_counts(&self) -> Result<ResetOutcome, PersistError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(ResetOutcome::NothingStored);
        };
        let mut drinks: Vec<Value> = serde_json::from_str(&raw)?;
        for drink in drinks.iter_mut() {
            if let Some(obj) = drink.as_object_mut() {
                obj.insert("count".to_string(), Value::from(0));
            }
        }
        self.store.set_item(&self.key, &serde_json::to_string(&drinks)?)?;
        info!("reset counters of {} stored drinks", drinks.len());
        Ok(ResetOutcome::Reset(drinks.len()))
    }
}

enum Job {
    Save(DrinkLedger),
    Flush(Sender<()>),
}

/// Single-writer save queue.
///
/// Submissions never block. The worker writes saves in submission order and skips any save that
/// a newer one has already superseded, so the slot always ends up holding the last ledger
/// submitted.
pub struct PersistQueue {
    tx: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl PersistQueue {
    pub fn spawn(bridge: Arc<PersistenceBridge>) -> Self {
        let (tx, rx) = channel::unbounded();
        let worker = std::thread::Builder::new()
            .name("barcount-persist".to_string())
            .spawn(move || run_worker(&bridge, &rx))
            .map_err(|err| error!("could not start persist worker: {}", err))
            .ok();
        Self {
            tx: Some(tx),
            worker,
        }
    }

    pub fn submit(&self, ledger: DrinkLedger) {
        if let Some(tx) = &self.tx {
            if tx.send(Job::Save(ledger)).is_err() {
                error!("persist worker is gone, save dropped");
            }
        }
    }

    /// Block until every save submitted so far has been written.
    pub fn flush(&self) {
        let Some(tx) = &self.tx else { return };
        let (ack_tx, ack_rx) = channel::bounded(1);
        if tx.send(Job::Flush(ack_tx)).is_err() || ack_rx.recv().is_err() {
            error!("persist worker is gone, flush skipped");
        }
    }
}

impl Drop for PersistQueue {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("persist worker panicked");
            }
        }
    }
}

fn run_worker(bridge: &PersistenceBridge, rx: &Receiver<Job>) {
    while let Ok(first) = rx.recv() {
        let mut latest = None;
        let mut waiters = Vec::new();
        for job in std::iter::once(first).chain(rx.try_iter()) {
            match job {
                Job::Save(ledger) => latest = Some(ledger),
                Job::Flush(ack) => waiters.push(ack),
            }
        }
        if let Some(ledger) = latest {
            bridge.save(&ledger);
        }
        for ack in waiters {
            let _ = ack.send(());
        }
    }
}
