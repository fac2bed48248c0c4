// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use onlytime::expenses::{self, NewExpense};
use onlytime::store::{Store, expenses_key};
use serde_json::json;

fn setup() -> Store {
    Store::open_in_memory().unwrap()
}

fn new_expense(date: &str, amount: f64, title: &str) -> NewExpense {
    NewExpense {
        date: date.to_string(),
        amount,
        title: title.to_string(),
        category_id: "food".to_string(),
    }
}

#[test]
fn empty_month_is_empty_list() {
    let store = setup();
    assert!(expenses::list_for_month(&store, "2024-01").unwrap().is_empty());
}

#[test]
fn malformed_persisted_value_is_empty_list() {
    let store = setup();
    store.set(&expenses_key("2024-01"), &"garbage").unwrap();
    assert!(expenses::list_for_month(&store, "2024-01").unwrap().is_empty());

    store.set(&expenses_key("2024-01"), &json!({"not": "a list"})).unwrap();
    assert!(expenses::list_for_month(&store, "2024-01").unwrap().is_empty());
}

#[test]
fn newest_date_first() {
    let store = setup();
    store
        .set(
            &expenses_key("2024-01"),
            &json!([
                {"id": "a", "date": "2024-01-05", "amount": 10, "createdAt": 100},
                {"id": "b", "date": "2024-01-20", "amount": 20, "createdAt": 50},
            ]),
        )
        .unwrap();
    let list = expenses::list_for_month(&store, "2024-01").unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, "b");
    assert_eq!(list[1].id, "a");
}

#[test]
fn creation_time_breaks_date_ties() {
    let store = setup();
    store
        .set(
            &expenses_key("2024-01"),
            &json!([
                {"id": "older", "date": "2024-01-10", "amount": 10, "createdAt": 100},
                {"id": "newer", "date": "2024-01-10", "amount": 20, "createdAt": 200},
            ]),
        )
        .unwrap();
    let list = expenses::list_for_month(&store, "2024-01").unwrap();
    assert_eq!(list[0].id, "newer");
    assert_eq!(list[1].id, "older");
}

#[test]
fn structurally_invalid_entries_are_dropped() {
    let store = setup();
    store
        .set(
            &expenses_key("2024-01"),
            &json!([
                {"id": "ok", "date": "2024-01-10", "amount": 10},
                {"date": "2024-01-11", "amount": 5},
                {"id": "no-date", "amount": 5},
                {"id": "", "date": "2024-01-12", "amount": 5},
                {"id": "bad-amount", "date": "2024-01-13", "amount": "abc"},
                {"id": "no-amount", "date": "2024-01-14"},
                null,
                "string",
                42,
            ]),
        )
        .unwrap();
    let list = expenses::list_for_month(&store, "2024-01").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "ok");
}

#[test]
fn sanitize_fills_defaults() {
    let store = setup();
    store
        .set(
            &expenses_key("2024-01"),
            &json!([
                {"id": "a", "date": "2024-01-10", "amount": -5},
                {"id": "b", "date": "2024-01-11", "amount": "12,50", "categoryId": "  "},
                {"id": "c", "date": "2024-01-12", "amount": 3, "categoryId": " transport "},
            ]),
        )
        .unwrap();
    let list = expenses::list_for_month(&store, "2024-01").unwrap();
    let by_id = |id: &str| list.iter().find(|e| e.id == id).unwrap();

    assert_eq!(by_id("a").amount, 0.0);
    assert_eq!(by_id("a").category_id, "misc");
    assert!(by_id("a").created_at > 0);
    assert_eq!(by_id("a").title, "");

    assert_eq!(by_id("b").amount, 12.5);
    assert_eq!(by_id("b").category_id, "misc");

    assert_eq!(by_id("c").category_id, "transport");
}

#[test]
fn add_assigns_id_and_prepends() {
    let store = setup();
    let first = expenses::add(&store, "2024-01", new_expense("2024-01-10", 12.0, "Lunch")).unwrap();
    assert_eq!(first.len(), 1);
    assert!(!first[0].id.is_empty());
    assert!(first[0].created_at > 0);

    let second = expenses::add(&store, "2024-01", new_expense("2024-01-10", 8.0, "Coffee")).unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].title, "Coffee");
    assert_ne!(second[0].id, second[1].id);

    let persisted = expenses::list_for_month(&store, "2024-01").unwrap();
    assert_eq!(persisted.len(), 2);
}

#[test]
fn delete_removes_only_the_matching_id() {
    let store = setup();
    expenses::add(&store, "2024-01", new_expense("2024-01-10", 12.0, "Lunch")).unwrap();
    let list = expenses::add(&store, "2024-01", new_expense("2024-01-11", 8.0, "Coffee")).unwrap();
    let victim = list[0].id.clone();

    let remaining = expenses::delete(&store, "2024-01", &victim).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Lunch");

    let unchanged = expenses::delete(&store, "2024-01", "no-such-id").unwrap();
    assert_eq!(unchanged.len(), 1);
}

#[test]
fn months_are_isolated() {
    let store = setup();
    expenses::add(&store, "2024-01", new_expense("2024-01-10", 12.0, "Jan")).unwrap();
    expenses::add(&store, "2024-02", new_expense("2024-02-10", 20.0, "Feb")).unwrap();

    assert_eq!(expenses::list_for_month(&store, "2024-01").unwrap().len(), 1);
    assert_eq!(expenses::list_for_month(&store, "2024-02").unwrap().len(), 1);
    assert!(expenses::list_for_month(&store, "2024-03").unwrap().is_empty());
}

#[test]
fn range_spans_months_and_resorts() {
    let store = setup();
    expenses::add(&store, "2024-01", new_expense("2024-01-10", 12.0, "Jan")).unwrap();
    expenses::add(&store, "2024-03", new_expense("2024-03-05", 30.0, "Mar")).unwrap();
    expenses::add(&store, "2024-02", new_expense("2024-02-20", 20.0, "Feb")).unwrap();

    let all = expenses::list_for_range(&store, "2024-01", "2024-03").unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].title, "Mar");
    assert_eq!(all[1].title, "Feb");
    assert_eq!(all[2].title, "Jan");

    let partial = expenses::list_for_range(&store, "2024-02", "2024-03").unwrap();
    assert_eq!(partial.len(), 2);
}
