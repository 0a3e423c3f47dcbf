// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::info;
use std::sync::Arc;

use crate::ledger::{DrinkLedger, LedgerOp};
use crate::persistence::{PersistError, PersistQueue, PersistenceBridge, ResetOutcome};
use crate::summary::Snapshot;

/// A board session: the live ledger plus the queue that persists it.
pub struct Board {
    ledger: DrinkLedger,
    bridge: Arc<PersistenceBridge>,
    queue: PersistQueue,
}

impl Board {
    /// Starts from the seeded board and replaces it with the stored one when it loads.
    pub fn open(bridge: Arc<PersistenceBridge>) -> Self {
        let ledger = bridge.load();
        let queue = PersistQueue::spawn(Arc::clone(&bridge));
        Self {
            ledger,
            bridge,
            queue,
        }
    }

    pub fn ledger(&self) -> &DrinkLedger {
        &self.ledger
    }

    /// Apply `op` and queue a save of the whole board without waiting for it.
    pub fn apply(&mut self, op: LedgerOp) -> &DrinkLedger {
        self.ledger = self.ledger.apply(op);
        self.queue.submit(self.ledger.clone());
        &self.ledger
    }

    pub fn snapshot(&self) -> Result<Snapshot, serde_json::Error> {
        Snapshot::capture(&self.ledger)
    }

    /// Confirm the current order: zero the stored counters, then reload the board.
    pub fn confirm_order(&mut self) -> Result<ResetOutcome, PersistError> {
        self.queue.flush();
        let outcome = self.bridge.reset_persisted_counts()?;
        self.reload();
        Ok(outcome)
    }

    pub fn reload(&mut self) {
        self.queue.flush();
        self.ledger = self.bridge.load_or(self.ledger.clone());
        info!("board reloaded with {} drinks", self.ledger.len());
    }

    /// Wait for pending saves and end the session.
    pub fn close(self) {
        self.queue.flush();
    }
}
