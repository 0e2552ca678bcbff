// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::calendar::CalendarView;
use crate::models::{Record, RecordKind};
use crate::store::RecordStore;
use crate::utils::{RECORD_HEADERS, maybe_print_json, pretty_table, record_row};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let hits = query_rows(conn, m)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &hits)? {
        println!("{} results", hits.len());
        if !hits.is_empty() {
            let rows = hits.iter().map(record_row).collect();
            println!("{}", pretty_table(&RECORD_HEADERS, rows));
        }
    }
    Ok(())
}

pub fn query_rows(conn: &Connection, m: &clap::ArgMatches) -> Result<Vec<Record>> {
    let kind: RecordKind = m.get_one::<String>("kind").unwrap().parse()?;
    let query = m.get_one::<String>("query").unwrap();
    let mut view = CalendarView::new(kind);
    view.toggle_search();
    view.set_query(query);
    let records = RecordStore::new(conn).all()?;
    Ok(view.display_records(&records))
}
