// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local};
use serde_json::json;

use crate::chart::{crossing_point, daily_points};
use crate::dates::{days_in_month, month_key_from_date, month_label};
use crate::expenses::list_for_month;
use crate::money::{format_currency, format_hours_minutes, to_hours};
use crate::settings::{self, effective_monthly_income, hourly_rate};
use crate::store::Store;
use crate::utils::maybe_print_json;

/// "Am I ahead or behind the money I have earned so far this month?"
/// Earnings accrue linearly across the days of the month.
pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let month_key = month_key_from_date(today);
    let dim = days_in_month(today.year(), today.month());

    let s = settings::load(store)?;
    let rate = hourly_rate(&s);
    let monthly_income = effective_monthly_income(&s);

    let expenses = list_for_month(store, &month_key)?;
    let spent: f64 = expenses.iter().map(|e| e.amount).sum();
    let earned = if monthly_income > 0.0 && dim > 0 {
        monthly_income / dim as f64 * today.day() as f64
    } else {
        0.0
    };
    let balance = earned - spent;

    let points = daily_points(&expenses, monthly_income, dim);
    let cross = crossing_point(&points);

    if sub.get_flag("json") || sub.get_flag("jsonl") {
        let payload = json!({
            "monthKey": month_key,
            "day": today.day(),
            "daysInMonth": dim,
            "earned": earned,
            "spent": spent,
            "balance": balance,
            "balanceHours": to_hours(balance, rate),
            "expenseCount": expenses.len(),
            "crossing": cross,
        });
        maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)?;
        return Ok(());
    }

    let ccy = s.currency;
    println!(
        "{} — day {}/{}",
        month_label(&month_key),
        today.day(),
        dim
    );
    println!("Earned so far:    {}", format_currency(earned, ccy));
    println!(
        "Spent this month: {} ({} expenses)",
        format_currency(spent, ccy),
        expenses.len()
    );
    let marker = if balance >= 0.0 { "ahead" } else { "behind" };
    println!(
        "Balance:          {} ({})",
        format_currency(balance, ccy),
        marker
    );
    if rate > 0.0 {
        println!(
            "In work time:     {} at {}/h",
            format_hours_minutes(to_hours(balance, rate)),
            format_currency(rate, ccy)
        );
    } else {
        println!("Set income and working hours to see balances as work time.");
    }
    match cross {
        Some(c) => println!("Spending overtook earning around day {:.1}.", c.period),
        None => {
            if spent > 0.0 {
                println!("Spending has not overtaken earning this month.");
            }
        }
    }
    Ok(())
}
