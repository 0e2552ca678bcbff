// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use daybook::notify::ConsoleNotifier;
use daybook::{cli, commands, db};

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    let level = matches
        .get_one::<String>("log_level")
        .map(String::as_str)
        .unwrap_or("warn");
    init_logger(level);

    let notifier = ConsoleNotifier::new();
    match run(&matches, &notifier) {
        Ok(()) if notifier.had_error() => ExitCode::FAILURE,
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("exiting with error: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &clap::ArgMatches, notifier: &ConsoleNotifier) -> Result<()> {
    let db_arg = matches.get_one::<PathBuf>("db");
    let conn = db::open_or_init(db_arg.map(PathBuf::as_path))?;
    debug!(command = ?matches.subcommand_name(), "dispatch");

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database initialized at {}",
                db::db_path(db_arg.map(PathBuf::as_path))?.display()
            );
        }
        Some(("daily", sub)) => commands::daily::handle(&conn, sub, notifier)?,
        Some(("tea", sub)) => commands::tea::handle(&conn, sub, notifier)?,
        Some(("mahjong", sub)) => commands::mahjong::handle(&conn, sub, notifier)?,
        Some(("record", sub)) => commands::records::handle(&conn, sub, notifier)?,
        Some(("calendar", sub)) => commands::calendar::handle(&conn, sub)?,
        Some(("search", sub)) => commands::search::handle(&conn, sub)?,
        Some(("category", sub)) => commands::categories::handle(&conn, sub, notifier)?,
        Some(("player", sub)) => commands::players::handle(&conn, sub, notifier)?,
        Some(("template", sub)) => commands::templates::handle(&conn, sub, notifier)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// `RUST_LOG` wins; otherwise `--log-level` applies to this crate only.
fn init_logger(level: &str) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
