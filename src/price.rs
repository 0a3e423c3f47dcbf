// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Comma-decimal price text: "5,50" <-> 5.5.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const CURRENCY_SUFFIX: &str = "€";

static PARTIAL_PRICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{0,3}(,[0-9]{0,2})?$").expect("partial price regex"));

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?)([0-9]*)(?:\.([0-9]*))?").expect("leading number regex")
});

/// Parse user price text into a non-negative amount.
///
/// Only the first comma is treated as the decimal separator and anything after the leading
/// number is ignored, so "5," reads as 5 and "2,5x" as 2.5. Empty, unreadable or negative input
/// gives zero; this never fails.
pub fn parse(text: &str) -> Decimal {
    let normalized = text.replacen(',', ".", 1);
    let Some(caps) = LEADING_NUMBER.captures(&normalized) else {
        return Decimal::ZERO;
    };
    let sign = caps.get(1).map_or("", |m| m.as_str());
    let int = caps.get(2).map_or("", |m| m.as_str());
    let frac = caps.get(3).map_or("", |m| m.as_str());
    if int.is_empty() && frac.is_empty() {
        return Decimal::ZERO;
    }
    let literal = format!(
        "{}.{}",
        if int.is_empty() { "0" } else { int },
        if frac.is_empty() { "0" } else { frac }
    );
    if sign == "-" {
        return Decimal::ZERO;
    }
    Decimal::from_str(&literal).unwrap_or(Decimal::ZERO)
}

/// Two decimals, comma separator: 5.5 -> "5,50".
pub fn format(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded).replace('.', ",")
}

pub fn format_amount(amount: Decimal) -> String {
    format!("{} {}", format(amount), CURRENCY_SUFFIX)
}

/// Keystroke gate for the price field: up to three integer digits, optionally a comma and up to
/// two decimals. The empty string is accepted so the field can be cleared.
pub fn is_valid_partial(text: &str) -> bool {
    text.is_empty() || PARTIAL_PRICE.is_match(text)
}
