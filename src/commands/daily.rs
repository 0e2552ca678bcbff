// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::error::ValidationError;
use crate::forms::{DailyForm, Submitted};
use crate::models::EntryType;
use crate::notify::Notifier;
use crate::store::{ConfigStore, RecordStore, TemplateStore};
use crate::utils::{fmt_money, parse_date};

pub fn handle(conn: &Connection, m: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub, notifier)?,
        Some(("edit", sub)) => edit(conn, sub, notifier)?,
        Some(("save-template", sub)) => save_template(conn, sub, notifier)?,
        _ => {}
    }
    Ok(())
}

/// Copy command-line fields into the form. Returns false when input was refused.
fn fill(form: &mut DailyForm, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<bool> {
    if let Some(d) = sub.get_one::<String>("date") {
        form.date = parse_date(d)?;
    }
    if let Some(t) = sub.get_one::<String>("type") {
        form.set_type(t.parse::<EntryType>()?);
    }
    if let Some(s) = sub.get_one::<String>("sub") {
        let s = s.trim();
        if !form.set_sub_category(s) {
            notifier.error(&format!(
                "Unknown {} category '{}'",
                form.entry_type(),
                s
            ));
            return Ok(false);
        }
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        if !form.amount.set_text(a.trim()) {
            notifier.error(&ValidationError::RejectedAmountInput(a.clone()).to_string());
            return Ok(false);
        }
    }
    if let Some(n) = sub.get_one::<String>("note") {
        form.note = n.clone();
    }
    Ok(true)
}

fn report(outcome: &Submitted, notifier: &dyn Notifier) {
    match outcome {
        Submitted::Added(r) => notifier.success(&format!(
            "Recorded daily #{} on {}: {}",
            r.id,
            r.date(),
            fmt_money(&r.entry.signed_amount())
        )),
        Submitted::Updated(r) => notifier.success(&format!("Updated daily #{}", r.id)),
        Submitted::Rejected(_) => {}
    }
}

fn add(conn: &Connection, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let categories = ConfigStore::new(conn).categories()?;
    let mut form = DailyForm::new(categories);
    if let Some(key) = sub.get_one::<String>("template") {
        let templates = TemplateStore::load(conn)?;
        match templates.find(key.trim()) {
            Some(t) => form.apply_template(t),
            None => {
                notifier.error(&format!("Template '{}' not found", key.trim()));
                return Ok(());
            }
        }
    }
    if !fill(&mut form, sub, notifier)? {
        return Ok(());
    }
    let mut store = RecordStore::new(conn);
    let outcome = form.submit(&mut store, notifier)?;
    report(&outcome, notifier);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut store = RecordStore::new(conn);
    let record = store.require(id)?;
    let mut form = DailyForm::edit(&record, ConfigStore::new(conn).categories()?)?;
    if !fill(&mut form, sub, notifier)? {
        return Ok(());
    }
    let outcome = form.submit(&mut store, notifier)?;
    report(&outcome, notifier);
    Ok(())
}

fn save_template(conn: &Connection, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let mut form = DailyForm::new(ConfigStore::new(conn).categories()?);
    if !fill(&mut form, sub, notifier)? {
        return Ok(());
    }
    let mut templates = TemplateStore::load(conn)?;
    if let Some(t) = form.save_template(&mut templates, notifier)? {
        println!("Template {} '{}' ({} templates)", t.id, t.name, templates.len());
    }
    Ok(())
}
