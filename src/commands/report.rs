// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Datelike, Local};

use crate::analytics::{
    ALL_RANGES, TimeRange, build_monthly_data, category_breakdown, summarize, top_category,
};
use crate::chart::{crossing_point, daily_points, monthly_points};
use crate::dates::{days_in_month, month_key_from_date};
use crate::expenses::list_for_month;
use crate::money::{format_currency, format_hours_minutes};
use crate::settings::{self, effective_monthly_income, hourly_rate};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("range", sub)) => range(store, sub)?,
        Some(("chart", sub)) => chart(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_range(sub: &clap::ArgMatches) -> Result<TimeRange> {
    let raw = sub.get_one::<String>("range").unwrap();
    TimeRange::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = ALL_RANGES.iter().map(|r| r.label()).collect();
        anyhow!("Unknown range '{}' (use {})", raw, known.join(", "))
    })
}

fn range(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let range = parse_range(sub)?;
    let today = Local::now().date_naive();
    let s = settings::load(store)?;
    let rate = hourly_rate(&s);

    let monthly = build_monthly_data(store, &s, range, today)?;
    let totals = summarize(&monthly, rate);
    let top = top_category(&monthly, rate);
    let breakdown = category_breakdown(&monthly, &s, rate);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &monthly)? {
        return Ok(());
    }

    let ccy = s.currency;
    let rows = monthly
        .iter()
        .map(|md| {
            vec![
                md.label.clone(),
                format_currency(md.earned, ccy),
                format_currency(md.spent, ccy),
                format_currency(md.balance, ccy),
                if rate > 0.0 {
                    format_hours_minutes(md.balance_hours)
                } else {
                    "-".into()
                },
                md.expense_count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Earned", "Spent", "Balance", "Balance (time)", "Expenses"],
            rows
        )
    );

    println!(
        "Totals over {}: earned {}, spent {}, balance {}{}",
        range.label(),
        format_currency(totals.earned, ccy),
        format_currency(totals.spent, ccy),
        format_currency(totals.balance, ccy),
        if rate > 0.0 {
            format!(" ({})", format_hours_minutes(totals.balance_hours))
        } else {
            String::new()
        }
    );

    if !top.category.is_empty() {
        println!(
            "Top category: {} at {}{}",
            s.category_display_name(&top.category),
            format_currency(top.amount, ccy),
            if rate > 0.0 {
                format!(" ({})", format_hours_minutes(top.hours))
            } else {
                String::new()
            }
        );
    }

    if !breakdown.is_empty() {
        let rows = breakdown
            .iter()
            .map(|item| {
                vec![
                    item.name.clone(),
                    format_currency(item.amount, ccy),
                    format!("{:.1}%", item.pct),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn chart(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let range = parse_range(sub)?;
    let today = Local::now().date_naive();
    let s = settings::load(store)?;

    // 1M is a day-by-day series over the current month; longer ranges
    // cumulate the monthly rows.
    let points = if range == TimeRange::OneMonth {
        let month_key = month_key_from_date(today);
        let expenses = list_for_month(store, &month_key)?;
        let dim = days_in_month(today.year(), today.month());
        daily_points(&expenses, effective_monthly_income(&s), dim)
    } else {
        let monthly = build_monthly_data(store, &s, range, today)?;
        monthly_points(&monthly)
    };

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        return Ok(());
    }

    let ccy = s.currency;
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.label.clone(),
                format_currency(p.earned, ccy),
                format_currency(p.spent, ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Period", "Earned (cum)", "Spent (cum)"], rows)
    );

    match crossing_point(&points) {
        Some(cross) => println!(
            "Spending overtakes earning around period {:.1} (≈ {})",
            cross.period,
            format_currency(cross.earned, ccy)
        ),
        None => println!("Spending never overtakes earning in this range."),
    }
    Ok(())
}
