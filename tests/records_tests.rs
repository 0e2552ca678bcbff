// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use daybook::commands::{daily, doctor, exporter, mahjong, records, search, tea};
use daybook::models::{DailyEntry, Entry, EntryType, RecordKind};
use daybook::notify::{MemoryNotifier, NoticeKind};
use daybook::store::{ConfigStore, RecordStore, TemplateStore};
use daybook::{cli, db};
use rusqlite::Connection;
use rust_decimal::Decimal;
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    db::seed_defaults(&conn).unwrap();
    conn
}

fn food(date: &str, amount: i64) -> Entry {
    Entry::Daily(DailyEntry {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        r#type: EntryType::Expense,
        sub_category: "Food".into(),
        amount: Decimal::from(amount),
        note: None,
    })
}

fn sub_of<'a>(m: &'a clap::ArgMatches, name: &str) -> &'a clap::ArgMatches {
    match m.subcommand() {
        Some((n, sub)) if n == name => sub,
        _ => panic!("no {} subcommand", name),
    }
}

#[test]
fn store_add_update_duplicate_delete() {
    let conn = setup();
    let store = RecordStore::new(&conn);
    let a = store.add(food("2025-07-01", 10)).unwrap();
    let b = store.add(food("2025-07-02", 20)).unwrap();
    assert_ne!(a.id, b.id);

    let mut changed = a.clone();
    changed.entry = food("2025-07-03", 15);
    store.update(&changed).unwrap();
    assert_eq!(store.require(a.id).unwrap(), changed);

    let copy = store.duplicate(b.id).unwrap();
    assert_ne!(copy.id, b.id);
    assert_eq!(copy.entry, b.entry);
    assert_eq!(store.all().unwrap().len(), 3);

    assert!(store.delete(a.id).unwrap());
    assert!(!store.delete(a.id).unwrap());
    assert!(store.get(a.id).unwrap().is_none());
    assert!(store.update(&changed).is_err());
    assert_eq!(store.of_kind(RecordKind::Tea).unwrap().len(), 0);
}

#[test]
fn daily_add_from_cli_stores_record() {
    let conn = setup();
    let notifier = MemoryNotifier::new();
    let m = cli::build_cli().get_matches_from([
        "daybook", "daily", "add", "--date", "2025-07-04", "--type", "income", "--sub", "Bonus",
        "--amount", "250.5", "--note", "Q2",
    ]);
    daily::handle(&conn, sub_of(&m, "daily"), &notifier).unwrap();

    let all = RecordStore::new(&conn).all().unwrap();
    assert_eq!(all.len(), 1);
    match &all[0].entry {
        Entry::Daily(d) => {
            assert_eq!(d.r#type, EntryType::Income);
            assert_eq!(d.sub_category, "Bonus");
            assert_eq!(d.amount, Decimal::new(2505, 1));
            assert_eq!(d.note.as_deref(), Some("Q2"));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(notifier.last().map(|(_, k)| k), Some(NoticeKind::Success));
}

#[test]
fn daily_add_refuses_negative_amount_and_unknown_category() {
    let conn = setup();
    let notifier = MemoryNotifier::new();
    for args in [
        vec!["daybook", "daily", "add", "--amount", "-5"],
        vec!["daybook", "daily", "add", "--amount", "5", "--sub", "Salary"],
        vec!["daybook", "daily", "add"],
    ] {
        let m = cli::build_cli().get_matches_from(args);
        daily::handle(&conn, sub_of(&m, "daily"), &notifier).unwrap();
    }
    assert!(RecordStore::new(&conn).all().unwrap().is_empty());
    assert_eq!(notifier.errors().len(), 3);
}

#[test]
fn daily_template_round_trip_through_cli() {
    let conn = setup();
    let notifier = MemoryNotifier::new();
    let m = cli::build_cli().get_matches_from([
        "daybook", "daily", "save-template", "--sub", "Transport", "--amount", "35", "--note",
        "bus",
    ]);
    daily::handle(&conn, sub_of(&m, "daily"), &notifier).unwrap();
    assert_eq!(TemplateStore::load(&conn).unwrap().len(), 1);

    let m = cli::build_cli().get_matches_from([
        "daybook", "daily", "add", "--template", "bus", "--date", "2025-07-09",
    ]);
    daily::handle(&conn, sub_of(&m, "daily"), &notifier).unwrap();
    let all = RecordStore::new(&conn).all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].amount(), Decimal::from(35));
    assert_eq!(all[0].entry.note(), Some("bus"));
}

#[test]
fn tea_add_and_edit_keep_id() {
    let conn = setup();
    let notifier = MemoryNotifier::new();
    let m = cli::build_cli().get_matches_from([
        "daybook", "tea", "add", "--shop", "Milk Shop", "--item", "Oolong", "--rating", "4.5",
        "--amount", "60", "--sugar", "less", "--ice", "hot",
    ]);
    tea::handle(&conn, sub_of(&m, "tea"), &notifier).unwrap();
    let id = RecordStore::new(&conn).all().unwrap()[0].id;

    let id_arg = id.to_string();
    let m = cli::build_cli().get_matches_from([
        "daybook", "tea", "edit", &id_arg, "--amount", "70",
    ]);
    tea::handle(&conn, sub_of(&m, "tea"), &notifier).unwrap();

    let all = RecordStore::new(&conn).all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
    match &all[0].entry {
        Entry::Tea(t) => {
            assert_eq!(t.amount, Decimal::from(70));
            assert_eq!(t.shop, "Milk Shop");
            assert_eq!(t.rating.to_string(), "4.5");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn mahjong_add_needs_three_roster_players() {
    let conn = setup();
    let config = ConfigStore::new(&conn);
    for p in ["Ann", "Bo", "Cy", "Dee"] {
        config.add_player(p).unwrap();
    }
    let notifier = MemoryNotifier::new();
    let m = cli::build_cli().get_matches_from([
        "daybook", "mahjong", "add", "--player", "Ann", "--player", "Bo", "--amount", "100",
    ]);
    mahjong::handle(&conn, sub_of(&m, "mahjong"), &notifier).unwrap();
    assert!(RecordStore::new(&conn).all().unwrap().is_empty());
    assert_eq!(notifier.errors(), vec!["Please pick exactly 3 players"]);

    let m = cli::build_cli().get_matches_from([
        "daybook", "mahjong", "add", "--player", "Ann", "--player", "Bo", "--player", "Cy",
        "--player", "Dee", "--loss", "--amount", "100",
    ]);
    mahjong::handle(&conn, sub_of(&m, "mahjong"), &notifier).unwrap();
    let all = RecordStore::new(&conn).all().unwrap();
    assert_eq!(all.len(), 1);
    match &all[0].entry {
        Entry::Mahjong(g) => {
            assert_eq!(g.players, vec!["Ann", "Bo", "Cy"]);
            assert!(!g.is_win);
        }
        other => panic!("unexpected {:?}", other),
    }
    // the refused fourth seat is not an error: a stored record never comes with one
    assert_eq!(notifier.errors().len(), 1);
    assert_eq!(notifier.last().map(|(_, k)| k), Some(NoticeKind::Success));
}

#[test]
fn mahjong_unknown_player_does_not_fail_a_stored_game() {
    let conn = setup();
    let config = ConfigStore::new(&conn);
    for p in ["Ann", "Bo", "Cy"] {
        config.add_player(p).unwrap();
    }
    let notifier = MemoryNotifier::new();
    let m = cli::build_cli().get_matches_from([
        "daybook", "mahjong", "add", "--player", "Ann", "--player", "Zed", "--player", "Bo",
        "--player", "Cy", "--amount", "40",
    ]);
    mahjong::handle(&conn, sub_of(&m, "mahjong"), &notifier).unwrap();
    assert_eq!(RecordStore::new(&conn).all().unwrap().len(), 1);
    assert!(notifier.errors().is_empty());
}

#[test]
fn record_list_sorts_newest_first_and_limits() {
    let conn = setup();
    let store = RecordStore::new(&conn);
    store.add(food("2025-06-30", 1)).unwrap();
    store.add(food("2025-07-02", 2)).unwrap();
    store.add(food("2025-07-01", 3)).unwrap();

    let m = cli::build_cli().get_matches_from([
        "daybook", "record", "list", "--month", "2025-07", "--limit", "1",
    ]);
    let rows = records::query_rows(&conn, sub_of(sub_of(&m, "record"), "list")).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount(), Decimal::from(2));
}

#[test]
fn record_delete_and_duplicate_through_cli() {
    let conn = setup();
    let notifier = MemoryNotifier::new();
    let first = RecordStore::new(&conn).add(food("2025-07-01", 9)).unwrap();
    let id = first.id.to_string();

    let m = cli::build_cli().get_matches_from(["daybook", "record", "duplicate", &id]);
    records::handle(&conn, sub_of(&m, "record"), &notifier).unwrap();
    assert_eq!(RecordStore::new(&conn).all().unwrap().len(), 2);

    let m = cli::build_cli().get_matches_from(["daybook", "-y", "record", "delete", &id]);
    records::handle(&conn, sub_of(&m, "record"), &notifier).unwrap();
    let left = RecordStore::new(&conn).all().unwrap();
    assert_eq!(left.len(), 1);
    assert_ne!(left[0].id, first.id);
    assert_eq!(left[0].entry, first.entry);
}

#[test]
fn search_command_goes_through_search_mode() {
    let conn = setup();
    let store = RecordStore::new(&conn);
    store.add(food("2025-07-01", 12)).unwrap();
    store.add(food("2025-07-05", 30)).unwrap();

    let m = cli::build_cli().get_matches_from(["daybook", "search", "FOOD"]);
    let hits = search::query_rows(&conn, sub_of(&m, "search")).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].date() > hits[1].date());

    let m = cli::build_cli().get_matches_from(["daybook", "search", "--kind", "tea", "food"]);
    assert!(search::query_rows(&conn, sub_of(&m, "search")).unwrap().is_empty());
}

#[test]
fn export_records_writes_json() {
    let conn = setup();
    RecordStore::new(&conn).add(food("2025-07-01", 12)).unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("records.json");
    let out_str = out.to_string_lossy().to_string();

    let m = cli::build_cli().get_matches_from([
        "daybook", "export", "records", "--format", "json", "--out", &out_str,
    ]);
    exporter::handle(&conn, sub_of(&m, "export")).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v[0]["category"], "daily");
    assert_eq!(v[0]["subCategory"], "Food");
    assert_eq!(v[0]["date"], "2025-07-01");
}

#[test]
fn export_records_writes_csv_with_flat_columns() {
    let conn = setup();
    RecordStore::new(&conn).add(food("2025-07-01", 12)).unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("records.csv");
    let out_str = out.to_string_lossy().to_string();

    let m = cli::build_cli().get_matches_from(["daybook", "export", "records", "--out", &out_str]);
    exporter::handle(&conn, sub_of(&m, "export")).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("id,category,date,amount,type,sub_category"));
    assert!(lines.next().unwrap().contains("daily,2025-07-01,12,expense,Food"));
}

#[test]
fn export_unknown_format_fails_before_writing() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("records.xml");
    let out_str = out.to_string_lossy().to_string();

    let m = cli::build_cli().get_matches_from([
        "daybook", "export", "records", "--format", "xml", "--out", &out_str,
    ]);
    let err = exporter::handle(&conn, sub_of(&m, "export")).unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
    assert!(!out.exists());
}

#[test]
fn doctor_reports_orphans_without_touching_records() {
    let conn = setup();
    let config = ConfigStore::new(&conn);
    let store = RecordStore::new(&conn);
    store.add(food("2025-07-01", 12)).unwrap();
    config.remove_category(EntryType::Expense, "Food").unwrap();

    let records = store.all().unwrap();
    let issues = doctor::find_issues(&records, &[], &conn).unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0][0], "orphan_category");
    assert_eq!(store.all().unwrap(), records);
}
