// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::notify::{ConsoleConfirm, Notifier};
use crate::settings::TemplateSettings;
use crate::store::TemplateStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let mut settings = TemplateSettings::new(TemplateStore::load(conn)?);
    match m.subcommand() {
        Some(("list", sub)) => {
            let templates = settings.templates();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &templates)? {
                if templates.is_empty() {
                    println!("No templates yet; save one with `daybook daily save-template`");
                    return Ok(());
                }
                let data = templates
                    .iter()
                    .map(|t| {
                        vec![
                            t.id.clone(),
                            t.name.clone(),
                            t.r#type.to_string(),
                            t.sub_category.clone(),
                            fmt_money(&t.amount),
                            t.note.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["ID", "Name", "Type", "Category", "Amount", "Note"], data)
                );
            }
        }
        Some(("rename", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            let name = sub.get_one::<String>("name").unwrap();
            if settings.rename(id, name)? {
                notifier.success(&format!("Renamed template {}", id));
            } else {
                notifier.error(&format!("Template {} not renamed", id));
            }
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap().trim();
            let confirm = ConsoleConfirm::new(sub.get_flag("yes"));
            if settings.delete(id, &confirm)? {
                notifier.success(&format!("Deleted template {}", id));
            }
        }
        _ => {}
    }
    Ok(())
}
