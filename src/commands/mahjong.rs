// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use tracing::warn;

use crate::error::ValidationError;
use crate::forms::{MahjongForm, PLAYERS_PER_GAME, Submitted};
use crate::notify::Notifier;
use crate::store::{ConfigStore, RecordStore};
use crate::utils::{fmt_money, parse_date};

pub fn handle(conn: &Connection, m: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub, notifier)?,
        Some(("edit", sub)) => edit(conn, sub, notifier)?,
        _ => {}
    }
    Ok(())
}

fn fill(form: &mut MahjongForm, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<bool> {
    if let Some(d) = sub.get_one::<String>("date") {
        form.date = parse_date(d)?;
    }
    if sub.get_flag("win") {
        form.win = true;
    }
    if sub.get_flag("loss") {
        form.win = false;
    }
    if let Some(a) = sub.get_one::<String>("amount") {
        if !form.amount.set_text(a.trim()) {
            notifier.error(&ValidationError::RejectedAmountInput(a.clone()).to_string());
            return Ok(false);
        }
    }
    Ok(true)
}

/// A refused toggle changes nothing, so it is logged rather than reported as an error.
fn explain_refused_toggle(form: &MahjongForm, player: &str) {
    if !form.roster().iter().any(|p| p == player) {
        warn!(player, "not on the player roster, ignored");
    } else {
        warn!(player, seats = PLAYERS_PER_GAME, "all seats taken, ignored");
    }
}

fn submit(conn: &Connection, form: &mut MahjongForm, notifier: &dyn Notifier) -> Result<()> {
    let mut store = RecordStore::new(conn);
    match form.submit(&mut store, notifier)? {
        Submitted::Added(r) => notifier.success(&format!(
            "Recorded mahjong #{} on {}: {}",
            r.id,
            r.date(),
            fmt_money(&r.entry.signed_amount())
        )),
        Submitted::Updated(r) => notifier.success(&format!("Updated mahjong #{}", r.id)),
        Submitted::Rejected(_) => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let mut form = MahjongForm::new(ConfigStore::new(conn).players()?);
    if !fill(&mut form, sub, notifier)? {
        return Ok(());
    }
    for p in sub.get_many::<String>("player").into_iter().flatten() {
        let p = p.trim();
        if form.players().iter().any(|x| x == p) {
            continue;
        }
        if !form.toggle(p) {
            explain_refused_toggle(&form, p);
        }
    }
    submit(conn, &mut form, notifier)
}

fn edit(conn: &Connection, sub: &clap::ArgMatches, notifier: &dyn Notifier) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let record = RecordStore::new(conn).require(id)?;
    let mut form = MahjongForm::edit(&record, ConfigStore::new(conn).players()?)?;
    if !fill(&mut form, sub, notifier)? {
        return Ok(());
    }
    for p in sub.get_many::<String>("toggle").into_iter().flatten() {
        let p = p.trim();
        if !form.toggle(p) {
            explain_refused_toggle(&form, p);
        }
    }
    submit(conn, &mut form, notifier)
}
