// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use log::{Level, LevelFilter};

/// Other crates only get to log warnings and errors.
const EXTERNAL_LEVELS: [Level; 2] = [Level::Warn, Level::Error];

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

pub fn init_logger(verbosity: u8) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let now = chrono::Local::now();
            out.finish(format_args!(
                "{:<5} {} {} {}",
                record.level(),
                now.format("%H:%M:%S"),
                record.target(),
                message
            ))
        })
        .level(level_for(verbosity))
        .filter(|meta| is_local(meta.target()) || EXTERNAL_LEVELS.contains(&meta.level()))
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn is_local(target: &str) -> bool {
    target.split("::").next() == Some("barcount")
}
