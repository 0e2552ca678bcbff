// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use daybook::calendar::{
    CalendarView, RecordAction, ViewMode, aggregate_day, days_in_month, leading_blanks, search,
};
use daybook::models::{
    DailyEntry, Entry, EntryType, Ice, MahjongEntry, Rating, Record, RecordId, RecordKind, Sugar,
    TeaEntry,
};
use daybook::store::RecordActions;
use rust_decimal::Decimal;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
}

fn daily(id: i64, date: NaiveDate, t: EntryType, sub: &str, amount: i64, note: &str) -> Record {
    Record {
        id,
        entry: Entry::Daily(DailyEntry {
            date,
            r#type: t,
            sub_category: sub.into(),
            amount: Decimal::from(amount),
            note: (!note.is_empty()).then(|| note.to_string()),
        }),
    }
}

fn tea(id: i64, date: NaiveDate, shop: &str, item: &str, amount: i64) -> Record {
    Record {
        id,
        entry: Entry::Tea(TeaEntry {
            date,
            shop: shop.into(),
            item: item.into(),
            sugar: Sugar::Half,
            ice: Ice::LessIce,
            amount: Decimal::from(amount),
            rating: Rating::from_halves(8).unwrap(),
        }),
    }
}

fn mahjong(id: i64, date: NaiveDate, win: bool, amount: i64) -> Record {
    Record {
        id,
        entry: Entry::Mahjong(MahjongEntry {
            date,
            players: vec!["Ann".into(), "Bo".into(), "Cy".into()],
            is_win: win,
            amount: Decimal::from(amount),
        }),
    }
}

fn sample() -> Vec<Record> {
    vec![
        daily(1, d(10), EntryType::Income, "Salary", 1000, "July pay"),
        daily(2, d(10), EntryType::Expense, "Food", 400, "Dinner party"),
        daily(3, d(12), EntryType::Expense, "Transport", 55, ""),
        mahjong(4, d(10), true, 500),
        mahjong(5, d(10), false, 200),
        tea(6, d(10), "Milk Shop", "Oolong Latte", 80),
        tea(7, d(2), "Corner Tea", "Black Tea", 45),
    ]
}

#[test]
fn day_totals_follow_sign_convention() {
    let records = sample();
    let daily_day = aggregate_day(&records, RecordKind::Daily, d(10));
    assert_eq!(daily_day.total, Decimal::from(600));
    assert_eq!((daily_day.income_count, daily_day.expense_count), (1, 1));
    assert!(daily_day.has_data);

    let mj = aggregate_day(&records, RecordKind::Mahjong, d(10));
    assert_eq!(mj.total, Decimal::from(300));
    assert_eq!(mj.count, 2);

    let t = aggregate_day(&records, RecordKind::Tea, d(10));
    assert_eq!(t.total, Decimal::from(-80));
    assert_eq!(t.count, 1);

    let empty = aggregate_day(&records, RecordKind::Tea, d(11));
    assert!(!empty.has_data);
    assert_eq!(empty.total, Decimal::ZERO);
}

#[test]
fn month_layout_is_monday_first() {
    // 2025-07-01 is a Tuesday
    assert_eq!(leading_blanks(2025, 7).unwrap(), 1);
    assert_eq!(days_in_month(2025, 7).unwrap(), 31);
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);

    let view = CalendarView::starting_at(RecordKind::Daily, d(10));
    let grid = view.grid(&sample()).unwrap();
    assert!(grid.iter().all(|w| w.len() == 7));
    assert!(grid[0][0].is_none());
    assert_eq!(grid[0][1].as_ref().unwrap().date, d(1));
    let days: usize = grid.iter().flatten().filter(|c| c.is_some()).count();
    assert_eq!(days, 31);
}

#[test]
fn calendar_mode_lists_selected_day_of_active_kind() {
    let records = sample();
    let mut view = CalendarView::starting_at(RecordKind::Daily, d(10));
    let ids: Vec<i64> = view.display_records(&records).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
    view.select_day(12).unwrap();
    let ids: Vec<i64> = view.display_records(&records).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(view.select_day(32).is_err());
}

#[test]
fn empty_search_returns_nothing() {
    let records = sample();
    assert!(search(&records, RecordKind::Daily, "").is_empty());
    assert!(search(&records, RecordKind::Daily, "   ").is_empty());

    let mut view = CalendarView::starting_at(RecordKind::Daily, d(10));
    view.toggle_search();
    assert_eq!(view.mode(), ViewMode::Search);
    assert!(view.display_records(&records).is_empty());
}

#[test]
fn search_matches_fields_case_insensitively_newest_first() {
    let records = sample();
    let ids = |kind: RecordKind, q: &str| -> Vec<i64> {
        search(&records, kind, q).iter().map(|r| r.id).collect()
    };

    assert_eq!(ids(RecordKind::Daily, "FOOD"), vec![2]);
    assert_eq!(ids(RecordKind::Daily, "party"), vec![2]);
    assert_eq!(ids(RecordKind::Daily, "5"), vec![3]);
    // amount "1000" and "400" both contain "0"; sorted by date descending
    assert_eq!(ids(RecordKind::Daily, "0"), vec![1, 2]);
    assert_eq!(ids(RecordKind::Tea, "tea"), vec![7]);
    assert_eq!(ids(RecordKind::Tea, "oolong"), vec![6]);
    assert_eq!(ids(RecordKind::Tea, "t"), vec![6, 7]);
    assert_eq!(ids(RecordKind::Mahjong, "cy"), vec![4, 5]);
    assert!(ids(RecordKind::Mahjong, "salary").is_empty());
}

#[test]
fn leaving_search_only_clears_query() {
    let mut view = CalendarView::starting_at(RecordKind::Tea, d(10));
    view.shift_month(-1);
    view.select_day(3).unwrap();
    view.toggle_search();
    view.set_query("milk");
    view.exit_search();

    assert_eq!(view.mode(), ViewMode::Calendar);
    assert_eq!(view.query(), "");
    assert_eq!((view.year(), view.month()), (2025, 6));
    assert_eq!(view.selected(), NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
}

#[test]
fn entering_search_starts_from_an_empty_query() {
    let records = sample();
    let mut view = CalendarView::starting_at(RecordKind::Daily, d(10));
    view.set_query("food");
    view.toggle_search();

    assert_eq!(view.mode(), ViewMode::Search);
    assert_eq!(view.query(), "");
    assert!(view.display_records(&records).is_empty());
    assert_eq!(view.selected(), d(10));

    view.set_query("food");
    let ids: Vec<i64> = view.display_records(&records).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn extreme_years_are_clamped_instead_of_overflowing() {
    let mut view = CalendarView::starting_at(RecordKind::Daily, d(1));
    view.change_year(i32::MAX);
    let top = view.year();
    assert!(top < i32::MAX);
    view.shift_month(i32::MAX);
    assert_eq!(view.year(), top);

    view.change_year(i32::MIN);
    let bottom = view.year();
    assert!(bottom > i32::MIN);
    view.shift_month(i32::MIN);
    assert_eq!(view.year(), bottom);
    assert!((1..=12).contains(&view.month()));
}

#[test]
fn shift_month_rolls_over_years() {
    let mut view = CalendarView::starting_at(RecordKind::Daily, d(1));
    view.change_month(12).unwrap();
    view.shift_month(1);
    assert_eq!((view.year(), view.month()), (2026, 1));
    view.shift_month(-13);
    assert_eq!((view.year(), view.month()), (2024, 12));
    assert!(view.change_month(13).is_err());
}

#[test]
fn month_summary_splits_income_and_expense() {
    let view = CalendarView::starting_at(RecordKind::Daily, d(1));
    let s = view.summary(&sample());
    assert_eq!(s.income, Decimal::from(1000));
    assert_eq!(s.expense, Decimal::from(455));
    assert_eq!(s.net, Decimal::from(545));
    assert_eq!(s.entries, 3);
}

#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl RecordActions for Recorder {
    fn edit(&mut self, record: &Record) -> anyhow::Result<()> {
        self.calls.push(format!("edit {}", record.id));
        Ok(())
    }

    fn duplicate(&mut self, id: RecordId) -> anyhow::Result<()> {
        self.calls.push(format!("duplicate {}", id));
        Ok(())
    }

    fn delete(&mut self, id: RecordId) -> anyhow::Result<()> {
        self.calls.push(format!("delete {}", id));
        Ok(())
    }
}

#[test]
fn actions_are_forwarded_in_both_modes() {
    let records = sample();
    let mut recorder = Recorder::default();
    let mut view = CalendarView::starting_at(RecordKind::Daily, d(10));
    view.dispatch(RecordAction::Edit(2), &records, &mut recorder)
        .unwrap();
    view.toggle_search();
    view.dispatch(RecordAction::Duplicate(2), &records, &mut recorder)
        .unwrap();
    view.dispatch(RecordAction::Delete(3), &records, &mut recorder)
        .unwrap();
    assert!(view
        .dispatch(RecordAction::Edit(99), &records, &mut recorder)
        .is_err());
    assert_eq!(recorder.calls, vec!["edit 2", "duplicate 2", "delete 3"]);
}

#[test]
fn day_info_and_jump_to_today() {
    let records = sample();
    let mut view = CalendarView::starting_at(RecordKind::Mahjong, d(1));
    let info = view.day_info(&records, 10).unwrap();
    assert_eq!(info.total, Decimal::from(300));
    assert!(view.day_info(&records, 0).is_err());

    view.shift_month(5);
    view.toggle_search();
    view.set_query("ann");
    view.jump_to_today();
    let today = daybook::utils::today();
    assert_eq!(view.selected(), today);
    assert_eq!(view.query(), "");
}
