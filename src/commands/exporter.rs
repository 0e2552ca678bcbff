// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

use crate::models::{Entry, RecordKind};
use crate::store::RecordStore;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("records", sub)) => export_records(conn, sub),
        _ => Ok(()),
    }
}

/// Flat row shape shared by every kind; columns a kind lacks stay empty.
#[derive(Debug, Serialize)]
struct ExportRow {
    id: i64,
    category: String,
    date: String,
    amount: String,
    r#type: String,
    sub_category: String,
    note: String,
    shop: String,
    item: String,
    sugar: String,
    ice: String,
    rating: String,
    players: String,
    is_win: String,
}

fn export_records(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let mut records = RecordStore::new(conn).all()?;
    if let Some(kind) = sub.get_one::<String>("kind") {
        let kind: RecordKind = kind.parse()?;
        records.retain(|r| r.kind() == kind);
    }
    records.sort_by(|a, b| a.date().cmp(&b.date()).then(a.id.cmp(&b.id)));

    if fmt == "json" {
        std::fs::write(out, serde_json::to_string_pretty(&records)?)
            .with_context(|| format!("Write {}", out))?;
    } else {
        let mut wtr = csv::Writer::from_path(out).with_context(|| format!("Open {}", out))?;
        for r in &records {
            let mut row = ExportRow {
                id: r.id,
                category: r.kind().to_string(),
                date: r.date().to_string(),
                amount: r.amount().to_string(),
                r#type: String::new(),
                sub_category: String::new(),
                note: String::new(),
                shop: String::new(),
                item: String::new(),
                sugar: String::new(),
                ice: String::new(),
                rating: String::new(),
                players: String::new(),
                is_win: String::new(),
            };
            match &r.entry {
                Entry::Daily(d) => {
                    row.r#type = d.r#type.to_string();
                    row.sub_category = d.sub_category.clone();
                    row.note = d.note.clone().unwrap_or_default();
                }
                Entry::Tea(t) => {
                    row.shop = t.shop.clone();
                    row.item = t.item.clone();
                    row.sugar = t.sugar.to_string();
                    row.ice = t.ice.to_string();
                    row.rating = t.rating.to_string();
                }
                Entry::Mahjong(m) => {
                    row.players = m.players.join(";");
                    row.is_win = m.is_win.to_string();
                }
            }
            wtr.serialize(row)?;
        }
        wtr.flush()?;
    }
    info!(count = records.len(), out = %out, "export finished");
    println!("Exported {} records to {}", records.len(), out);
    Ok(())
}
