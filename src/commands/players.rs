// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::notify::Notifier;
use crate::settings::PlayerSettings;
use crate::store::ConfigStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let settings = PlayerSettings::new(ConfigStore::new(conn));
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            settings.add(name, notifier)?;
        }
        Some(("list", sub)) => {
            let names = settings.list()?;
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &names)? {
                if names.is_empty() {
                    println!("No players yet");
                    return Ok(());
                }
                let data = names
                    .into_iter()
                    .enumerate()
                    .map(|(i, n)| vec![(i + 1).to_string(), n])
                    .collect();
                println!("{}", pretty_table(&["#", "Player"], data));
            }
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            if settings.remove(name)? {
                notifier.success(&format!("Removed player '{}'", name));
            } else {
                notifier.error(&format!("Player '{}' not found", name));
            }
        }
        Some(("move", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let over = sub.get_one::<String>("over").unwrap().trim();
            if settings.reorder(name, over)? {
                notifier.success(&format!("Moved '{}' to the place of '{}'", name, over));
            } else {
                notifier.error(&format!("Nothing to move: '{}' over '{}'", name, over));
            }
        }
        _ => {}
    }
    Ok(())
}
