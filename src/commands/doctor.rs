// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Entry, Record, Template};
use crate::store::{ConfigStore, RecordStore, TemplateStore};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

/// Dangling references left behind by edits to the category lists or roster.
/// They are reported, never rewritten.
pub fn find_issues(
    records: &[Record],
    templates: &[Template],
    conn: &Connection,
) -> Result<Vec<Vec<String>>> {
    let config = ConfigStore::new(conn);
    let categories = config.categories()?;
    let roster = config.players()?;
    let mut rows = Vec::new();

    // 1) Daily records whose category was removed
    for r in records {
        match &r.entry {
            Entry::Daily(d) => {
                if !categories.for_type(d.r#type).contains(&d.sub_category) {
                    rows.push(vec![
                        "orphan_category".into(),
                        format!("#{} {} {}/{}", r.id, d.date, d.r#type, d.sub_category),
                    ]);
                }
            }
            // 2) Mahjong records naming players no longer on the roster
            Entry::Mahjong(m) => {
                for p in m.players.iter().filter(|p| !roster.contains(p)) {
                    rows.push(vec![
                        "unknown_player".into(),
                        format!("#{} {} {}", r.id, m.date, p),
                    ]);
                }
            }
            Entry::Tea(_) => {}
        }
    }

    // 3) Templates that would apply a removed category
    for t in templates {
        if !categories.for_type(t.r#type).contains(&t.sub_category) {
            rows.push(vec![
                "template_orphan_category".into(),
                format!("{} '{}' {}/{}", t.id, t.name, t.r#type, t.sub_category),
            ]);
        }
    }
    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let records = RecordStore::new(conn).all()?;
    let templates = TemplateStore::load(conn)?;
    let rows = find_issues(&records, templates.list(), conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
