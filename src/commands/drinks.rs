// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::board::Board;
use crate::ledger::{DrinkField, DrinkLedger, LedgerOp};
use crate::models::DRINK_ICONS;
use crate::persistence::PersistenceBridge;
use crate::price;
use crate::utils::{index_for_position, maybe_print_json, pretty_table};
use anyhow::{Context, Result, anyhow};
use std::sync::Arc;

pub fn handle(bridge: &Arc<PersistenceBridge>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("icons", _)) => {
            let rows = DRINK_ICONS.iter().map(|i| vec![i.to_string()]).collect();
            println!("{}", pretty_table(&["Icon"], rows));
            Ok(())
        }
        Some((name, sub)) => {
            let mut board = Board::open(Arc::clone(bridge));
            let res = edit(&mut board, name, sub);
            board.close();
            res
        }
        None => Ok(()),
    }
}

fn edit(board: &mut Board, name: &str, sub: &clap::ArgMatches) -> Result<()> {
    match name {
        "list" => list(board.ledger(), sub)?,
        "add" => add(board, sub)?,
        "inc" | "dec" => {
            let index = index_for_position(board.ledger(), position(sub)?)?;
            let raw = sub.get_one::<String>("times").unwrap();
            let times = raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid --times '{}'", raw))?;
            let current = board.ledger().get(index).map_or(0, |d| d.count);
            let count = if name == "inc" {
                current.saturating_add(times)
            } else {
                current.saturating_sub(times)
            };
            board.apply(LedgerOp::Update {
                index,
                field: DrinkField::Count(count),
            });
            if let Some(d) = board.ledger().get(index) {
                println!("{}: {}", d.name, d.count);
            }
        }
        "set" => set(board, sub)?,
        "reset" => {
            board.apply(LedgerOp::ResetAll);
            println!("Counters reset for {} drinks", board.ledger().len());
        }
        _ => {}
    }
    Ok(())
}

fn position(sub: &clap::ArgMatches) -> Result<usize> {
    let raw = sub.get_one::<String>("at").unwrap();
    raw.trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid position '{}'", raw))
}

pub fn board_rows(ledger: &DrinkLedger) -> Vec<Vec<String>> {
    ledger
        .records()
        .iter()
        .enumerate()
        .map(|(i, d)| {
            vec![
                (i + 1).to_string(),
                d.name.clone(),
                format!("{} {}", d.price_text, price::CURRENCY_SUFFIX),
                d.count.to_string(),
                d.icon.clone(),
            ]
        })
        .collect()
}

fn list(ledger: &DrinkLedger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &ledger.records())? {
        println!(
            "{}",
            pretty_table(&["#", "Name", "Price", "Count", "Icon"], board_rows(ledger))
        );
    }
    Ok(())
}

fn checked_price(raw: &str) -> Result<String> {
    let text = raw.trim();
    if !price::is_valid_partial(text) {
        return Err(anyhow!(
            "Rejected price '{}': use up to 3 digits and 2 decimals, e.g. 2,50",
            text
        ));
    }
    Ok(text.to_string())
}

fn add(board: &mut Board, sub: &clap::ArgMatches) -> Result<()> {
    let price_text = sub
        .get_one::<String>("price")
        .map(|p| checked_price(p))
        .transpose()?;
    board.apply(LedgerOp::AddDrink);
    let index = board.ledger().len() - 1;
    if let Some(name) = sub.get_one::<String>("name") {
        board.apply(LedgerOp::Update {
            index,
            field: DrinkField::Name(name.trim().to_string()),
        });
    }
    if let Some(text) = price_text {
        board.apply(LedgerOp::Update {
            index,
            field: DrinkField::PriceText(text),
        });
    }
    if let Some(d) = board.ledger().get(index) {
        println!(
            "Added drink '{}' at {} ({} {})",
            d.name,
            index + 1,
            d.price_text,
            price::CURRENCY_SUFFIX
        );
    }
    Ok(())
}

fn set(board: &mut Board, sub: &clap::ArgMatches) -> Result<()> {
    let index = index_for_position(board.ledger(), position(sub)?)?;
    let mut fields = Vec::new();
    if let Some(name) = sub.get_one::<String>("name") {
        fields.push(DrinkField::Name(name.trim().to_string()));
    }
    if let Some(raw) = sub.get_one::<String>("price") {
        fields.push(DrinkField::PriceText(checked_price(raw)?));
    }
    if let Some(raw) = sub.get_one::<String>("count") {
        let count = raw
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Invalid count '{}'", raw))?;
        fields.push(DrinkField::Count(count));
    }
    if let Some(raw) = sub.get_one::<String>("icon") {
        let icon = raw.trim().to_string();
        if !DRINK_ICONS.contains(&icon.as_str()) {
            return Err(anyhow!("Unknown icon '{}' (see `drink icons`)", icon));
        }
        fields.push(DrinkField::Icon(icon));
    }
    for field in fields {
        board.apply(LedgerOp::Update { index, field });
    }
    if let Some(d) = board.ledger().get(index) {
        println!(
            "Updated drink {}: '{}' {} {}, count {}",
            index + 1,
            d.name,
            d.price_text,
            price::CURRENCY_SUFFIX,
            d.count
        );
    }
    Ok(())
}
