// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Entry, EntryType, Record, RecordKind};

/// What a calendar cell shows for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub has_data: bool,
    /// Signed: income and wins add, expenses, losses and tea subtract.
    pub total: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    /// Entries of tea or mahjong kind.
    pub count: usize,
}

pub fn aggregate_day(records: &[Record], kind: RecordKind, date: NaiveDate) -> DayInfo {
    let mut info = DayInfo {
        date,
        has_data: false,
        total: Decimal::ZERO,
        income_count: 0,
        expense_count: 0,
        count: 0,
    };
    for r in records
        .iter()
        .filter(|r| r.kind() == kind && r.date() == date)
    {
        info.has_data = true;
        info.total += r.entry.signed_amount();
        match &r.entry {
            Entry::Daily(d) => match d.r#type {
                EntryType::Income => info.income_count += 1,
                EntryType::Expense => info.expense_count += 1,
            },
            Entry::Tea(_) | Entry::Mahjong(_) => info.count += 1,
        }
    }
    info
}

/// Income, expense and net for one month of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub entries: usize,
}

pub fn summarize_month(records: &[Record], kind: RecordKind, year: i32, month: u32) -> MonthSummary {
    let mut s = MonthSummary {
        income: Decimal::ZERO,
        expense: Decimal::ZERO,
        net: Decimal::ZERO,
        entries: 0,
    };
    for r in records.iter().filter(|r| {
        r.kind() == kind && r.date().year() == year && r.date().month() == month
    }) {
        let signed = r.entry.signed_amount();
        if signed > Decimal::ZERO {
            s.income += signed;
        } else {
            s.expense -= signed;
        }
        s.net += signed;
        s.entries += 1;
    }
    s
}

pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;
    Ok((next - first).num_days() as u32)
}

/// Blank cells before the 1st in a Monday-first week.
pub fn leading_blanks(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow!("Invalid month {}-{:02}", year, month))?;
    Ok(first.weekday().num_days_from_monday())
}

/// Month laid out in weeks of seven cells; `None` pads before the 1st and after the last day.
pub fn month_grid(
    records: &[Record],
    kind: RecordKind,
    year: i32,
    month: u32,
) -> Result<Vec<Vec<Option<DayInfo>>>> {
    let mut cells: Vec<Option<DayInfo>> = Vec::new();
    for _ in 0..leading_blanks(year, month)? {
        cells.push(None);
    }
    for day in 1..=days_in_month(year, month)? {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| anyhow!("Invalid day {}-{:02}-{:02}", year, month, day))?;
        cells.push(Some(aggregate_day(records, kind, date)));
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    Ok(cells.chunks(7).map(|w| w.to_vec()).collect())
}
