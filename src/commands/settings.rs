// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::Value;
use uuid::Uuid;

use crate::models::IncomeSource;
use crate::money::{format_currency, format_hours_minutes, parse_locale_number};
use crate::settings::{
    effective_monthly_income, effective_monthly_working_hours, hourly_rate, normalize,
    weekly_commute_hours,
};
use crate::settings;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(store, sub)?,
        Some(("set", sub)) => set(store, sub)?,
        Some(("income", sub)) => income(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let s = settings::load(store)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }

    let rate = hourly_rate(&s);
    let ccy = s.currency;
    let rows = vec![
        vec![
            "Net monthly income".into(),
            format_currency(s.net_monthly_income, ccy),
        ],
        vec![
            "Gross monthly income".into(),
            format_currency(s.gross_monthly_income, ccy),
        ],
        vec!["Tax rate".into(), format!("{}%", s.tax_rate_percent)],
        vec!["Use gross income".into(), s.use_gross_income.to_string()],
        vec![
            "Weekly working hours".into(),
            s.weekly_working_hours.to_string(),
        ],
        vec!["Weeks per month".into(), s.weeks_per_month.to_string()],
        vec![
            "Commute minutes/day".into(),
            s.commute_minutes_per_day.to_string(),
        ],
        vec![
            "Working days/week".into(),
            s.working_days_per_week.to_string(),
        ],
        vec![
            "Overtime hours/week".into(),
            s.overtime_hours_per_week.to_string(),
        ],
        vec![
            "Income sources".into(),
            s.additional_income_sources.len().to_string(),
        ],
        vec![
            "Effective monthly income".into(),
            format_currency(effective_monthly_income(&s), ccy),
        ],
        vec![
            "Weekly commute hours".into(),
            format_hours_minutes(weekly_commute_hours(&s)),
        ],
        vec![
            "Monthly working hours".into(),
            format!("{:.2}", effective_monthly_working_hours(&s)),
        ],
        vec![
            "Hourly rate".into(),
            if rate > 0.0 {
                format!("{}/h", format_currency(rate, ccy))
            } else {
                "unset".into()
            },
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

// Raw CLI strings are patched into the stored JSON and pushed through
// normalize; no numeric parsing happens on this side of the boundary.
fn set(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let current = settings::load(store)?;
    let mut raw = serde_json::to_value(&current)?;
    let obj = raw.as_object_mut().expect("settings serialize to object");

    let string_fields = [
        ("net-income", "netMonthlyIncome"),
        ("gross-income", "grossMonthlyIncome"),
        ("tax-rate", "taxRatePercent"),
        ("weekly-hours", "weeklyWorkingHours"),
        ("weeks-per-month", "weeksPerMonth"),
        ("commute-minutes", "commuteMinutesPerDay"),
        ("working-days", "workingDaysPerWeek"),
        ("overtime-hours", "overtimeHoursPerWeek"),
        ("currency", "currency"),
    ];
    for (flag, field) in string_fields {
        if let Some(v) = sub.get_one::<String>(flag) {
            obj.insert(field.to_string(), Value::String(v.clone()));
        }
    }
    let bool_fields = [
        ("use-gross", "useGrossIncome"),
        ("prefer-time", "preferTimeDisplay"),
    ];
    for (flag, field) in bool_fields {
        if let Some(v) = sub.get_one::<String>(flag) {
            let b = matches!(v.to_lowercase().as_str(), "true" | "1" | "yes");
            obj.insert(field.to_string(), Value::Bool(b));
        }
    }

    let next = normalize(&raw);
    settings::save(store, &next)?;

    let rate = hourly_rate(&next);
    if rate > 0.0 {
        println!(
            "Settings saved. Hourly rate: {}/h",
            format_currency(rate, next.currency)
        );
    } else {
        println!("Settings saved. Hourly rate is unset (no working hours).");
    }
    Ok(())
}

fn income(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let mut s = settings::load(store)?;
            let source = IncomeSource {
                id: Uuid::new_v4().to_string(),
                name: sub.get_one::<String>("name").unwrap().clone(),
                amount: parse_locale_number(sub.get_one::<String>("amount").unwrap()).max(0.0),
                hours_per_month: parse_locale_number(sub.get_one::<String>("hours").unwrap())
                    .max(0.0),
            };
            println!("Added income source '{}' ({})", source.name, source.id);
            s.additional_income_sources.push(source);
            settings::save(store, &s)?;
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let mut s = settings::load(store)?;
            let before = s.additional_income_sources.len();
            s.additional_income_sources.retain(|src| &src.id != id);
            if s.additional_income_sources.len() == before {
                println!("No income source with id '{}'", id);
            } else {
                settings::save(store, &s)?;
                println!("Removed income source '{}'", id);
            }
        }
        Some(("list", sub)) => {
            let s = settings::load(store)?;
            if maybe_print_json(
                sub.get_flag("json"),
                sub.get_flag("jsonl"),
                &s.additional_income_sources,
            )? {
                return Ok(());
            }
            let rows = s
                .additional_income_sources
                .iter()
                .map(|src| {
                    vec![
                        src.id.clone(),
                        src.name.clone(),
                        format_currency(src.amount, s.currency),
                        format!("{}", src.hours_per_month),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(&["Id", "Name", "Amount", "Hours/month"], rows)
            );
        }
        _ => {}
    }
    Ok(())
}
