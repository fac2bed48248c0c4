// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::Local;

use crate::analytics::{BudgetLevel, budget_status};
use crate::dates::month_key_from_date;
use crate::expenses::list_for_month;
use crate::models::CategoryBudget;
use crate::money::{format_currency, parse_locale_number};
use crate::settings::{self, hourly_rate};
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("report", sub)) => report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category_id = sub.get_one::<String>("category").unwrap().clone();
    let amount = sub
        .get_one::<String>("amount")
        .map(|v| parse_locale_number(v).max(0.0));
    let hours = sub
        .get_one::<String>("hours")
        .map(|v| parse_locale_number(v).max(0.0));
    if amount.is_none() && hours.is_none() {
        return Err(anyhow!("Provide --amount or --hours"));
    }

    let mut s = settings::load(store)?;
    s.category_budgets.retain(|b| b.category_id != category_id);
    s.category_budgets.push(CategoryBudget {
        category_id: category_id.clone(),
        monthly_budget_amount: amount,
        monthly_budget_hours: hours,
    });
    settings::save(store, &s)?;
    println!(
        "Budget set for '{}'",
        s.category_display_name(&category_id)
    );
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let category_id = sub.get_one::<String>("category").unwrap();
    let mut s = settings::load(store)?;
    let before = s.category_budgets.len();
    s.category_budgets.retain(|b| &b.category_id != category_id);
    if s.category_budgets.len() == before {
        println!("No budget for category '{}'", category_id);
    } else {
        settings::save(store, &s)?;
        println!("Removed budget for '{}'", category_id);
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let s = settings::load(store)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.category_budgets)? {
        return Ok(());
    }
    let rows = s
        .category_budgets
        .iter()
        .map(|b| {
            vec![
                s.category_display_name(&b.category_id).to_string(),
                b.monthly_budget_amount
                    .map(|a| format_currency(a, s.currency))
                    .unwrap_or_else(|| "-".into()),
                b.monthly_budget_hours
                    .map(|h| format!("{}h", h))
                    .unwrap_or_else(|| "-".into()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Budget", "Budget (hours)"], rows)
    );
    Ok(())
}

fn report(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => month_key_from_date(Local::now().date_naive()),
    };
    let s = settings::load(store)?;
    let rate = hourly_rate(&s);

    let mut spending = std::collections::BTreeMap::new();
    for e in list_for_month(store, &month)? {
        *spending.entry(e.category_id).or_insert(0.0) += e.amount;
    }
    let statuses = budget_status(&s, &spending, rate);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &statuses)? {
        return Ok(());
    }

    let rows = statuses
        .iter()
        .map(|st| {
            vec![
                s.category_display_name(&st.category_id).to_string(),
                format_currency(st.budget_amount, s.currency),
                format_currency(st.spent, s.currency),
                format!("{:.0}%", st.percentage),
                match st.level {
                    BudgetLevel::Exceeded => "EXCEEDED".into(),
                    BudgetLevel::AtRisk => "at risk".into(),
                    BudgetLevel::Ok => "ok".into(),
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Budget", "Spent", "Used", "Status"], rows)
    );
    Ok(())
}
