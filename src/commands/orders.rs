// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::board::Board;
use crate::persistence::{PersistenceBridge, ResetOutcome};
use crate::price::format_amount;
use crate::summary::{OrderSummary, Snapshot};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result, anyhow};
use log::error;
use std::sync::Arc;

pub fn handle(bridge: &Arc<PersistenceBridge>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("total", sub)) => {
            let board = Board::open(Arc::clone(bridge));
            let snapshot = board.snapshot()?;
            board.close();
            total(&snapshot, sub)?;
        }
        Some(("checkout", _)) => checkout(bridge)?,
        _ => {}
    }
    Ok(())
}

fn total(snapshot: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let summary = snapshot
        .summarize()
        .context("Unreadable board snapshot")?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        print_summary(&summary);
    }
    Ok(())
}

pub fn summary_rows(summary: &OrderSummary) -> Vec<Vec<String>> {
    summary
        .line_items
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                format!("{} × {}", l.count, format_amount(l.price)),
                format_amount(l.subtotal),
            ]
        })
        .collect()
}

fn print_summary(summary: &OrderSummary) {
    if summary.is_empty() {
        println!("No drinks selected.");
        return;
    }
    println!(
        "{}",
        pretty_table(&["Drink", "Qty", "Subtotal"], summary_rows(summary))
    );
    println!("Total: {}", format_amount(summary.total));
}

/// Show the order from a snapshot, then zero the stored counters and reload the board.
fn checkout(bridge: &Arc<PersistenceBridge>) -> Result<()> {
    let mut board = Board::open(Arc::clone(bridge));
    let summary = board
        .snapshot()?
        .summarize()
        .context("Unreadable board snapshot")?;
    print_summary(&summary);
    let outcome = board.confirm_order();
    board.close();
    match outcome {
        Ok(ResetOutcome::Reset(n)) => {
            println!("Counters reset for {} drinks", n);
            Ok(())
        }
        Ok(ResetOutcome::NothingStored) => Ok(()),
        Err(err) => {
            error!("checkout reset failed: {}", err);
            Err(anyhow!("could not reset the counters"))
        }
    }
}
