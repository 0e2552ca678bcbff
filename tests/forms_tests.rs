// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use daybook::error::ValidationError;
use daybook::forms::{AmountInput, DailyForm, MahjongForm, Submitted, TeaForm};
use daybook::models::{CategoryConfig, Entry, EntryType, Rating, Record};
use daybook::notify::{MemoryNotifier, NoticeKind};
use daybook::store::RecordSink;
use rust_decimal::Decimal;

fn categories() -> CategoryConfig {
    CategoryConfig {
        expense: vec!["Food".into(), "Transport".into()],
        income: vec!["Salary".into(), "Bonus".into()],
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
}

/// Sink that counts calls so tests can prove nothing was invoked.
#[derive(Default)]
struct CountingSink {
    records: Vec<Record>,
    adds: usize,
    updates: usize,
}

impl RecordSink for CountingSink {
    fn add(&mut self, entry: Entry) -> anyhow::Result<Record> {
        self.adds += 1;
        self.records.add(entry)
    }

    fn update(&mut self, record: Record) -> anyhow::Result<Record> {
        self.updates += 1;
        self.records.update(record)
    }
}

#[test]
fn amount_input_filters_keystrokes() {
    let mut a = AmountInput::new();
    for c in "12e+-3".chars() {
        a.push_key(c);
    }
    assert_eq!(a.text(), "123");
    assert!(!a.set_text("-5"));
    assert_eq!(a.text(), "123");
    assert!(!a.set_text("abc"));
    assert!(a.set_text(""));
    assert_eq!(a.value(), None);
    assert!(a.set_text("0"));
    assert_eq!(a.value(), None);
    assert!(a.set_text("12.50"));
    assert_eq!(a.value(), Some(Decimal::new(1250, 2)));
}

#[test]
fn daily_rejects_empty_and_zero_amount_without_calling_sink() {
    let notifier = MemoryNotifier::new();
    let mut sink = CountingSink::default();
    let mut form = DailyForm::new(categories());

    let outcome = form.submit(&mut sink, &notifier).unwrap();
    assert_eq!(outcome, Submitted::Rejected(ValidationError::InvalidAmount));

    form.amount.set_text("0");
    form.note = "lunch".into();
    let outcome = form.submit(&mut sink, &notifier).unwrap();
    assert!(outcome.is_rejected());

    assert_eq!(sink.adds + sink.updates, 0);
    assert_eq!(form.note, "lunch");
    assert_eq!(form.amount.text(), "0");
    assert_eq!(
        notifier.errors(),
        vec!["Please enter a valid amount", "Please enter a valid amount"]
    );
}

#[test]
fn daily_add_builds_payload_and_clears_amount_and_note() {
    let notifier = MemoryNotifier::new();
    let mut sink = CountingSink::default();
    let mut form = DailyForm::new(categories());
    assert_eq!(form.sub_category(), "Food");
    form.date = day(3);
    form.amount.set_text("120");
    form.note = " noodles ".into();

    let outcome = form.submit(&mut sink, &notifier).unwrap();
    let record = outcome.record().unwrap().clone();
    match record.entry {
        Entry::Daily(d) => {
            assert_eq!(d.date, day(3));
            assert_eq!(d.r#type, EntryType::Expense);
            assert_eq!(d.sub_category, "Food");
            assert_eq!(d.amount, Decimal::from(120));
            assert_eq!(d.note.as_deref(), Some("noodles"));
        }
        other => panic!("unexpected entry {:?}", other),
    }
    assert_eq!(sink.adds, 1);
    assert!(form.amount.is_empty());
    assert!(form.note.is_empty());
    assert_eq!(form.date, day(3));
}

#[test]
fn daily_type_switch_falls_back_to_first_category() {
    let mut form = DailyForm::new(categories());
    assert!(form.set_sub_category("Transport"));
    form.set_type(EntryType::Income);
    assert_eq!(form.sub_category(), "Salary");
    assert!(!form.set_sub_category("Transport"));
    assert_eq!(form.sub_category(), "Salary");
}

#[test]
fn daily_edit_updates_same_id_and_keeps_orphaned_category() {
    let notifier = MemoryNotifier::new();
    let mut sink = CountingSink::default();
    let mut seed = DailyForm::new(categories());
    seed.date = day(1);
    seed.amount.set_text("50");
    let original = seed.submit(&mut sink, &notifier).unwrap().record().unwrap().clone();

    // "Food" is gone from the live list but the record keeps it
    let live = CategoryConfig {
        expense: vec!["Transport".into()],
        income: vec![],
    };
    let mut form = DailyForm::edit(&original, live).unwrap();
    form.set_type(EntryType::Expense);
    assert_eq!(form.sub_category(), "Food");
    form.amount.set_text("75");

    let outcome = form.submit(&mut sink, &notifier).unwrap();
    match outcome {
        Submitted::Updated(r) => {
            assert_eq!(r.id, original.id);
            assert_eq!(r.amount(), Decimal::from(75));
        }
        other => panic!("expected update, got {:?}", other),
    }
    assert_eq!(sink.adds, 1);
    assert_eq!(sink.updates, 1);
    assert_eq!(form.amount.text(), "75");
}

#[test]
fn tea_each_missing_field_blocks_submission() {
    let notifier = MemoryNotifier::new();
    let mut sink = CountingSink::default();

    let complete = || {
        let mut f = TeaForm::new();
        f.date = day(5);
        f.shop = "Milk Shop".into();
        f.item = "Oolong Latte".into();
        f.rating = Rating::from_halves(7).unwrap();
        f.amount.set_text("65");
        f
    };

    let mut no_shop = complete();
    no_shop.shop = "  ".into();
    let mut no_item = complete();
    no_item.item.clear();
    let mut no_rating = complete();
    no_rating.rating = Rating::default();
    let mut no_amount = complete();
    no_amount.amount.set_text("0");

    let expected = [
        ValidationError::MissingShop,
        ValidationError::MissingItem,
        ValidationError::MissingRating,
        ValidationError::InvalidAmount,
    ];
    for (mut form, err) in [no_shop, no_item, no_rating, no_amount]
        .into_iter()
        .zip(expected)
    {
        let outcome = form.submit(&mut sink, &notifier).unwrap();
        assert_eq!(outcome, Submitted::Rejected(err));
    }
    assert_eq!(sink.adds, 0);

    let mut ok = complete();
    let outcome = ok.submit(&mut sink, &notifier).unwrap();
    assert!(matches!(outcome, Submitted::Added(_)));
    assert!(ok.shop.is_empty() && ok.item.is_empty() && ok.amount.is_empty());
    assert!(ok.rating.is_zero());
    assert_eq!(ok.date, day(5));
}

#[test]
fn tea_suggestions_follow_existing_records() {
    let notifier = MemoryNotifier::new();
    let mut sink: Vec<Record> = Vec::new();
    for (shop, item) in [("A", "Black"), ("B", "Green"), ("A", "Milk"), ("A", "Black")] {
        let mut f = TeaForm::new();
        f.shop = shop.into();
        f.item = item.into();
        f.rating = Rating::from_halves(8).unwrap();
        f.amount.set_text("50");
        f.submit(&mut sink, &notifier).unwrap();
    }
    assert_eq!(daybook::forms::shop_suggestions(&sink), vec!["A", "B"]);
    let mut f = TeaForm::new();
    f.shop = "A".into();
    assert_eq!(f.item_suggestions(&sink), vec!["Black", "Milk"]);
}

#[test]
fn mahjong_fourth_player_is_not_added() {
    let roster: Vec<String> = ["Ann", "Bo", "Cy", "Dee"].iter().map(|s| s.to_string()).collect();
    let mut form = MahjongForm::new(roster);
    assert!(form.toggle("Ann"));
    assert!(form.toggle("Bo"));
    assert!(form.toggle("Cy"));
    assert!(!form.toggle("Dee"));
    assert_eq!(form.players(), ["Ann", "Bo", "Cy"]);
    assert!(!form.toggle("Zed"));
    assert!(form.toggle("Bo"));
    assert_eq!(form.players(), ["Ann", "Cy"]);
}

#[test]
fn mahjong_requires_three_players_and_positive_amount() {
    let notifier = MemoryNotifier::new();
    let mut sink = CountingSink::default();
    let roster: Vec<String> = ["Ann", "Bo", "Cy"].iter().map(|s| s.to_string()).collect();
    let mut form = MahjongForm::new(roster);
    form.amount.set_text("300");
    form.toggle("Ann");
    form.toggle("Bo");
    assert_eq!(
        form.submit(&mut sink, &notifier).unwrap(),
        Submitted::Rejected(ValidationError::PlayerCount)
    );

    form.toggle("Cy");
    form.amount.clear();
    assert_eq!(
        form.submit(&mut sink, &notifier).unwrap(),
        Submitted::Rejected(ValidationError::InvalidAmount)
    );
    assert_eq!(sink.adds, 0);

    form.amount.set_text("300");
    form.win = false;
    let outcome = form.submit(&mut sink, &notifier).unwrap();
    let r = outcome.record().unwrap();
    assert_eq!(r.entry.signed_amount(), Decimal::from(-300));
    assert!(form.players().is_empty());
    assert_eq!(
        notifier.last().map(|(_, k)| k),
        Some(NoticeKind::Error),
        "success is reported by the caller, not the form"
    );
}

#[test]
fn rating_accepts_half_steps_only() {
    let r: Rating = "3.5".parse().unwrap();
    assert_eq!(r.halves(), 7);
    assert_eq!(r.to_string(), "3.5");
    assert_eq!("5".parse::<Rating>().unwrap().to_string(), "5");
    assert!("3.2".parse::<Rating>().is_err());
    assert!("5.5".parse::<Rating>().is_err());
    assert!("-1".parse::<Rating>().is_err());
    assert!(Rating::from_halves(11).is_none());
}
