// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::Local;

use crate::dates::{month_key_from_date, month_key_from_iso};
use crate::expenses::{self, NewExpense};
use crate::models::DEFAULT_CATEGORY;
use crate::money::{format_currency, format_hours_minutes, parse_locale_number, to_hours};
use crate::settings::{self, hourly_rate};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, parse_month, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("quick", sub)) => quick(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?.to_string(),
        None => Local::now().date_naive().to_string(),
    };
    let amount = parse_locale_number(sub.get_one::<String>("amount").unwrap());
    if amount <= 0.0 {
        return Err(anyhow!(
            "Invalid amount '{}'",
            sub.get_one::<String>("amount").unwrap()
        ));
    }
    let title = sub.get_one::<String>("title").unwrap().trim().to_string();
    let category_id = sub
        .get_one::<String>("category")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    // The partition always follows the expense's own date.
    let month_key = month_key_from_iso(&date);
    record(store, &month_key, date, amount, title, category_id)
}

fn quick(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let wanted = sub.get_one::<String>("preset").unwrap();
    let s = settings::load(store)?;
    let preset = s
        .quick_add_presets
        .iter()
        .find(|p| &p.id == wanted || &p.title == wanted)
        .ok_or_else(|| anyhow!("Preset '{}' not found", wanted))?;

    let date = Local::now().date_naive().to_string();
    let month_key = month_key_from_iso(&date);
    record(
        store,
        &month_key,
        date,
        preset.amount,
        preset.title.clone(),
        preset.category_id.clone(),
    )
}

fn record(
    store: &Store,
    month_key: &str,
    date: String,
    amount: f64,
    title: String,
    category_id: String,
) -> Result<()> {
    let s = settings::load(store)?;
    let rate = hourly_rate(&s);
    let label = if title.is_empty() { "Untitled" } else { &title };
    println!(
        "Recorded {} on {} for '{}'{}",
        format_currency(amount, s.currency),
        date,
        label,
        if rate > 0.0 {
            format!(" ({} of work)", format_hours_minutes(to_hours(amount, rate)))
        } else {
            String::new()
        }
    );
    expenses::add(
        store,
        month_key,
        NewExpense {
            date,
            amount,
            title,
            category_id,
        },
    )?;
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let rows = query_rows(store, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }

    let s = settings::load(store)?;
    let rate = hourly_rate(&s);
    let data = rows
        .iter()
        .map(|e| {
            vec![
                e.date.clone(),
                if e.title.is_empty() {
                    "Untitled".into()
                } else {
                    e.title.clone()
                },
                s.category_display_name(&e.category_id).to_string(),
                format_currency(e.amount, s.currency),
                if rate > 0.0 {
                    format_hours_minutes(to_hours(e.amount, rate))
                } else {
                    "-".into()
                },
                e.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Title", "Category", "Amount", "Work time", "Id"], data)
    );
    Ok(())
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<crate::models::Expense>> {
    let mut rows = match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(from), Some(to)) => {
            expenses::list_for_range(store, &parse_month(from)?, &parse_month(to)?)?
        }
        _ => {
            let month = match sub.get_one::<String>("month") {
                Some(m) => parse_month(m)?,
                None => month_key_from_date(Local::now().date_naive()),
            };
            expenses::list_for_month(store, &month)?
        }
    };
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => month_key_from_date(Local::now().date_naive()),
    };
    expenses::delete(store, &month, id)?;
    println!("Removed expense '{}' from {}", id, month);
    Ok(())
}
