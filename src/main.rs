// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::sync::Arc;

use barcount::persistence::PersistenceBridge;
use barcount::store::SqliteStore;
use barcount::{cli, commands, db, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init_logger(matches.get_count("verbose")).context("Failed to start logging")?;

    let path = db::resolve_path(matches.get_one::<String>("db").map(String::as_str))?;
    let conn = db::open_or_init(&path)?;
    let bridge = Arc::new(PersistenceBridge::new(SqliteStore::new(conn)));

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("drink", sub)) => commands::drinks::handle(&bridge, sub)?,
        Some(("order", sub)) => commands::orders::handle(&bridge, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
