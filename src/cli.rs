// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

const KINDS: [&str; 3] = ["daily", "tea", "mahjong"];
const TYPES: [&str; 2] = ["expense", "income"];
const SUGAR: [&str; 5] = ["none", "slight", "half", "less", "full"];
const ICE: [&str; 5] = ["hot", "no-ice", "light-ice", "less-ice", "regular"];

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Record id")
}

fn date_arg() -> Arg {
    Arg::new("date").long("date").help("Day as YYYY-MM-DD (default: today)")
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .allow_hyphen_values(true)
        .help("Positive amount")
}

fn daily_fields(cmd: Command) -> Command {
    cmd.arg(date_arg())
        .arg(
            Arg::new("type")
                .long("type")
                .value_parser(TYPES)
                .help("income or expense"),
        )
        .arg(Arg::new("sub").long("sub").help("Category from the live list"))
        .arg(amount_arg())
        .arg(Arg::new("note").long("note"))
}

fn tea_fields(cmd: Command) -> Command {
    cmd.arg(date_arg())
        .arg(Arg::new("shop").long("shop"))
        .arg(Arg::new("item").long("item"))
        .arg(Arg::new("sugar").long("sugar").value_parser(SUGAR))
        .arg(Arg::new("ice").long("ice").value_parser(ICE))
        .arg(amount_arg())
        .arg(
            Arg::new("rating")
                .long("rating")
                .help("0-5 in half steps, e.g. 3.5"),
        )
}

fn mahjong_fields(cmd: Command) -> Command {
    cmd.arg(date_arg())
        .arg(
            Arg::new("win")
                .long("win")
                .action(ArgAction::SetTrue)
                .conflicts_with("loss"),
        )
        .arg(Arg::new("loss").long("loss").action(ArgAction::SetTrue))
        .arg(amount_arg())
}

fn list_mover(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").required(true).help("Entry to drag"))
        .arg(
            Arg::new("over")
                .long("over")
                .required(true)
                .help("Entry whose position it takes"),
        )
}

pub fn build_cli() -> Command {
    Command::new("daybook")
        .about("Daybook: daily income/expense, tea drinks and mahjong sessions")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Database file (default: $DAYBOOK_DB or the platform data dir)"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .default_value("warn")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        )
        .arg(
            Arg::new("yes")
                .long("yes")
                .short('y')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Answer yes to confirmations"),
        )
        .subcommand(Command::new("init").about("Create the database and default categories"))
        .subcommand(
            Command::new("daily")
                .about("Income and expense entries")
                .subcommand(daily_fields(
                    Command::new("add").arg(
                        Arg::new("template")
                            .long("template")
                            .help("Start from a saved template (id or name)"),
                    ),
                ))
                .subcommand(daily_fields(Command::new("edit").arg(id_arg())))
                .subcommand(daily_fields(Command::new("save-template"))),
        )
        .subcommand(
            Command::new("tea")
                .about("Tea drink purchases")
                .subcommand(tea_fields(Command::new("add")))
                .subcommand(tea_fields(Command::new("edit").arg(id_arg())))
                .subcommand(
                    Command::new("shops")
                        .about("Shops seen before, or items of one shop")
                        .arg(Arg::new("shop").long("shop")),
                ),
        )
        .subcommand(
            Command::new("mahjong")
                .about("Mahjong sessions")
                .subcommand(mahjong_fields(
                    Command::new("add").arg(
                        Arg::new("player")
                            .long("player")
                            .action(ArgAction::Append)
                            .help("Roster player; pick exactly three"),
                    ),
                ))
                .subcommand(mahjong_fields(
                    Command::new("edit").arg(id_arg()).arg(
                        Arg::new("toggle")
                            .long("toggle")
                            .action(ArgAction::Append)
                            .help("Select or deselect a player"),
                    ),
                )),
        )
        .subcommand(
            Command::new("record")
                .about("Stored records")
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("kind").long("kind").value_parser(KINDS))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(Command::new("show").arg(id_arg()))
                .subcommand(Command::new("delete").arg(id_arg()))
                .subcommand(Command::new("duplicate").arg(id_arg())),
        )
        .subcommand(json_flags(
            Command::new("calendar")
                .about("Month calendar with per-day totals")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("daily")
                        .value_parser(KINDS),
                )
                .arg(Arg::new("month").long("month").help("YYYY-MM (default: this month)"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Selected day, YYYY-MM-DD (default: today)"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("search")
                .about("Free-text search over one record kind")
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("daily")
                        .value_parser(KINDS),
                )
                .arg(Arg::new("query").required(true).allow_hyphen_values(true)),
        ))
        .subcommand(
            Command::new("category")
                .about("Expense and income categories")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .global(true)
                        .default_value("expense")
                        .value_parser(TYPES),
                )
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(list_mover(Command::new("move"))),
        )
        .subcommand(
            Command::new("player")
                .about("Mahjong player roster")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(list_mover(Command::new("move"))),
        )
        .subcommand(
            Command::new("template")
                .about("Saved daily-entry templates")
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("rename")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("records")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(Arg::new("out").long("out").required(true))
                    .arg(Arg::new("kind").long("kind").value_parser(KINDS)),
            ),
        )
        .subcommand(
            Command::new("doctor").about("Report records pointing at removed categories or players"),
        )
}
