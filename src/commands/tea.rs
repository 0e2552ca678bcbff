// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::error::ValidationError;
use crate::forms::{Submitted, TeaForm, item_suggestions, shop_suggestions};
use crate::models::{Ice, Rating, RecordKind, Sugar};
use crate::notify::Notifier;
use crate::store::RecordStore;
use crate::utils::{fmt_money, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let mut form = TeaForm::new();
            submit(conn, &mut form, sub, notifier)?;
        }
        Some(("edit", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let record = RecordStore::new(conn).require(id)?;
            let mut form = TeaForm::edit(&record)?;
            submit(conn, &mut form, sub, notifier)?;
        }
        Some(("shops", sub)) => shops(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn fill(form: &mut TeaForm, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<bool> {
    if let Some(d) = sub.get_one::<String>("date") {
        form.date = parse_date(d)?;
    }
    if let Some(s) = sub.get_one::<String>("shop") {
        form.shop = s.clone();
    }
    if let Some(i) = sub.get_one::<String>("item") {
        form.item = i.clone();
    }
    if let Some(s) = sub.get_one::<String>("sugar") {
        form.sugar = s.parse::<Sugar>()?;
    }
    if let Some(i) = sub.get_one::<String>("ice") {
        form.ice = i.parse::<Ice>()?;
    }
    if let Some(r) = sub.get_one::<String>("rating") {
        form.rating = r.parse::<Rating>()?;
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        if !form.amount.set_text(a.trim()) {
            notifier.error(&ValidationError::RejectedAmountInput(a.clone()).to_string());
            return Ok(false);
        }
    }
    Ok(true)
}

fn submit(
    conn: &Connection,
    form: &mut TeaForm,
    sub: &clap::ArgMatches,
    notifier: &dyn Notifier,
) -> Result<()> {
    if !fill(form, sub, notifier)? {
        return Ok(());
    }
    let mut store = RecordStore::new(conn);
    match form.submit(&mut store, notifier)? {
        Submitted::Added(r) => notifier.success(&format!(
            "Recorded tea #{} on {}: {}",
            r.id,
            r.date(),
            fmt_money(&r.amount())
        )),
        Submitted::Updated(r) => notifier.success(&format!("Updated tea #{}", r.id)),
        Submitted::Rejected(_) => {}
    }
    Ok(())
}

fn shops(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let records = RecordStore::new(conn).of_kind(RecordKind::Tea)?;
    match sub.get_one::<String>("shop") {
        Some(shop) => {
            let rows = item_suggestions(&records, shop.trim())
                .into_iter()
                .map(|i| vec![i])
                .collect();
            println!("{}", pretty_table(&["Item"], rows));
        }
        None => {
            let rows = shop_suggestions(&records)
                .into_iter()
                .map(|s| vec![s])
                .collect();
            println!("{}", pretty_table(&["Shop"], rows));
        }
    }
    Ok(())
}
