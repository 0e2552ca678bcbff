// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

use crate::models::{Entry, Record};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> Result<(i32, u32)> {
    let s = s.trim();
    let (y, m) = s
        .split_once('-')
        .ok_or_else(|| anyhow!("Invalid month '{}', expected YYYY-MM", s))?;
    let year: i32 = y
        .parse()
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    let month: u32 = m
        .parse()
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Invalid month number {}", month));
    }
    Ok((year, month))
}

pub fn fmt_money(d: &Decimal) -> String {
    let v = d.round_dp(2).normalize();
    if v.is_sign_negative() {
        format!("-${}", v.abs())
    } else {
        format!("${}", v)
    }
}

/// Signed display used in calendar cells: `+600`, `-80`, `0`.
pub fn fmt_signed(d: &Decimal) -> String {
    let v = d.round_dp(2).normalize();
    if v > Decimal::ZERO {
        format!("+{}", v)
    } else {
        v.to_string()
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub const RECORD_HEADERS: [&str; 6] = ["ID", "Date", "Kind", "Detail", "Amount", "Extra"];

/// One listing row per record, shared by list, calendar and search output.
pub fn record_row(r: &Record) -> Vec<String> {
    let extra = match &r.entry {
        Entry::Daily(d) => format!("{} {}", d.r#type, d.note.as_deref().unwrap_or("")),
        Entry::Tea(t) => format!("{} sugar, {}, {}★", t.sugar, t.ice, t.rating),
        Entry::Mahjong(m) => (if m.is_win { "win" } else { "loss" }).to_string(),
    };
    vec![
        r.id.to_string(),
        r.date().to_string(),
        r.kind().to_string(),
        r.entry.label(),
        fmt_signed(&r.entry.signed_amount()),
        extra.trim().to_string(),
    ]
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // arrays go out one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
