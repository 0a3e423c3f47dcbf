// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod board;
pub mod cli;
pub mod commands;
pub mod db;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod persistence;
pub mod price;
pub mod store;
pub mod summary;
pub mod utils;
