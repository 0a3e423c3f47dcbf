// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn at_arg() -> Arg {
    Arg::new("at")
        .long("at")
        .required(true)
        .value_name("POS")
        .help("Board position, as shown by `drink list`")
}

fn times_arg() -> Arg {
    Arg::new("times")
        .long("times")
        .default_value("1")
        .value_name("N")
}

pub fn build_cli() -> Command {
    Command::new("barcount")
        .about("Tally drink orders, see the total, reset after checkout")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("Data file (defaults to $BARCOUNT_DB, then the platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the data file"))
        .subcommand(
            Command::new("drink")
                .about("Edit the drinks board")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(json_flags(Command::new("list").about("Show the board")))
                .subcommand(
                    Command::new("add")
                        .about("Add a drink")
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("price").long("price").help("Price, e.g. 2,50")),
                )
                .subcommand(
                    Command::new("inc")
                        .about("Count orders of a drink")
                        .arg(at_arg())
                        .arg(times_arg()),
                )
                .subcommand(
                    Command::new("dec")
                        .about("Take back orders of a drink")
                        .arg(at_arg())
                        .arg(times_arg()),
                )
                .subcommand(
                    Command::new("set")
                        .about("Change a drink")
                        .arg(at_arg())
                        .arg(Arg::new("name").long("name"))
                        .arg(Arg::new("price").long("price").help("Price, e.g. 2,50"))
                        .arg(Arg::new("count").long("count"))
                        .arg(Arg::new("icon").long("icon")),
                )
                .subcommand(
                    Command::new("reset").about("Zero every counter and resync price text"),
                )
                .subcommand(Command::new("icons").about("List the drink icons")),
        )
        .subcommand(
            Command::new("order")
                .about("Order summary")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(json_flags(
                    Command::new("total").about("Show the current order and its total"),
                ))
                .subcommand(
                    Command::new("checkout")
                        .about("Show the order, then reset the stored counters"),
                ),
        )
}
