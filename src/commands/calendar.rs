// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;

use crate::calendar::{CalendarView, DayInfo, MonthSummary};
use crate::models::{Record, RecordKind};
use crate::store::RecordStore;
use crate::utils::{
    RECORD_HEADERS, fmt_money, fmt_signed, maybe_print_json, parse_date, parse_month,
    pretty_table, record_row, today,
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Serialize)]
pub struct CalendarReport {
    pub kind: RecordKind,
    pub year: i32,
    pub month: u32,
    pub selected: NaiveDate,
    pub summary: MonthSummary,
    pub days: Vec<DayInfo>,
    pub records: Vec<Record>,
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let (view, report) = build(conn, m)?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let records = RecordStore::new(conn).all()?;
    print_grid(&view, &records)?;
    let s = &report.summary;
    println!(
        "{}-{:02} {}: in {}  out {}  net {}  ({} entries)",
        report.year,
        report.month,
        report.kind,
        fmt_money(&s.income),
        fmt_money(&s.expense),
        fmt_signed(&s.net),
        s.entries
    );
    println!("{} · {} records", report.selected, report.records.len());
    if !report.records.is_empty() {
        let rows = report.records.iter().map(record_row).collect();
        println!("{}", pretty_table(&RECORD_HEADERS, rows));
    }
    Ok(())
}

/// Resolve the view from arguments and derive everything it shows.
pub fn build(conn: &Connection, m: &clap::ArgMatches) -> Result<(CalendarView, CalendarReport)> {
    let kind: RecordKind = m
        .get_one::<String>("kind")
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(RecordKind::Daily);
    let selected = match m.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let mut view = CalendarView::starting_at(kind, selected);
    if let Some(month) = m.get_one::<String>("month") {
        let (y, mo) = parse_month(month)?;
        view.change_year(y);
        view.change_month(mo)?;
    }

    let records = RecordStore::new(conn).all()?;
    let days = view
        .grid(&records)?
        .into_iter()
        .flatten()
        .flatten()
        .collect();
    let report = CalendarReport {
        kind,
        year: view.year(),
        month: view.month(),
        selected: view.selected(),
        summary: view.summary(&records),
        days,
        records: view.display_records(&records),
    };
    Ok((view, report))
}

fn cell_text(info: &DayInfo, kind: RecordKind, selected: NaiveDate) -> String {
    let day = if info.date == selected {
        format!("[{}]", info.date.day())
    } else {
        info.date.day().to_string()
    };
    if !info.has_data {
        return day;
    }
    let counts = match kind {
        RecordKind::Daily => format!("+{} -{}", info.income_count, info.expense_count),
        RecordKind::Tea | RecordKind::Mahjong => format!("x{}", info.count),
    };
    format!("{}\n{}\n{}", day, counts, fmt_signed(&info.total))
}

fn print_grid(view: &CalendarView, records: &[Record]) -> Result<()> {
    let rows = view
        .grid(records)?
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|cell| match cell {
                    Some(info) => cell_text(&info, view.kind(), view.selected()),
                    None => String::new(),
                })
                .collect()
        })
        .collect();
    println!("{}", pretty_table(&WEEKDAYS, rows));
    Ok(())
}
