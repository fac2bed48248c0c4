// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::Value;
use uuid::Uuid;

use crate::dates::month_keys_between;
use crate::models::{DEFAULT_CATEGORY, Expense};
use crate::store::{Store, expenses_key};

/// Expense fields supplied by the caller; id and creation timestamp are
/// assigned on add.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub date: String,
    pub amount: f64,
    pub title: String,
    pub category_id: String,
}

/// Expenses persisted for one calendar month, newest date first (creation
/// time breaks ties). Entries that fail structural validation are dropped;
/// a missing or malformed value under the key is an empty list.
pub fn list_for_month(store: &Store, month_key: &str) -> Result<Vec<Expense>> {
    let raw = store.get(&expenses_key(month_key))?.unwrap_or(Value::Null);
    let Some(items) = raw.as_array() else {
        return Ok(Vec::new());
    };

    let now_ms = now_millis();
    let mut parsed: Vec<Expense> = items.iter().filter_map(|v| sanitize(v, now_ms)).collect();
    sort_newest_first(&mut parsed);
    Ok(parsed)
}

/// Expenses across every month from start to end inclusive, re-sorted with
/// the same comparator as a single month.
pub fn list_for_range(store: &Store, start_key: &str, end_key: &str) -> Result<Vec<Expense>> {
    let mut all = Vec::new();
    for month_key in month_keys_between(start_key, end_key) {
        all.extend(list_for_month(store, &month_key)?);
    }
    sort_newest_first(&mut all);
    Ok(all)
}

pub fn save_for_month(store: &Store, month_key: &str, expenses: &[Expense]) -> Result<()> {
    store.set(&expenses_key(month_key), &expenses)
}

/// Assign an id and creation timestamp, prepend, persist, return the updated
/// list. The caller is responsible for passing the month key matching the
/// expense's own date.
pub fn add(store: &Store, month_key: &str, new: NewExpense) -> Result<Vec<Expense>> {
    let existing = list_for_month(store, month_key)?;
    let expense = Expense {
        id: Uuid::new_v4().to_string(),
        date: new.date,
        amount: new.amount,
        title: new.title,
        category_id: new.category_id,
        created_at: now_millis(),
    };
    let mut updated = Vec::with_capacity(existing.len() + 1);
    updated.push(expense);
    updated.extend(existing);
    save_for_month(store, month_key, &updated)?;
    Ok(updated)
}

pub fn delete(store: &Store, month_key: &str, id: &str) -> Result<Vec<Expense>> {
    let mut existing = list_for_month(store, month_key)?;
    existing.retain(|e| e.id != id);
    save_for_month(store, month_key, &existing)?;
    Ok(existing)
}

fn sort_newest_first(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

fn sanitize(value: &Value, now_ms: i64) -> Option<Expense> {
    let obj = value.as_object()?;

    let id = obj.get("id")?.as_str()?.to_string();
    let date = obj.get("date")?.as_str()?.to_string();
    if id.is_empty() || date.is_empty() {
        return None;
    }

    let amount = coerce_amount(obj.get("amount").unwrap_or(&Value::Null))?;

    let title = obj
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let category_id = obj
        .get("categoryId")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();
    let created_at = obj
        .get("createdAt")
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .map(|n| n as i64)
        .unwrap_or(now_ms);

    Some(Expense {
        id,
        date,
        amount: amount.max(0.0),
        title,
        category_id,
        created_at,
    })
}

fn coerce_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite()),
        _ => None,
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
