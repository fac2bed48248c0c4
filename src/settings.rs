// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::Value;

use crate::models::{
    CategoryBudget, Currency, CustomCategory, DEFAULT_CATEGORY, IncomeSource, QuickAddPreset,
    Settings,
};
use crate::store::{Store, settings_key};

pub const DEFAULT_WEEKLY_WORKING_HOURS: f64 = 40.0;
pub const DEFAULT_WEEKS_PER_MONTH: f64 = 4.33;
pub const DEFAULT_WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Coerce untrusted input into a fully-populated settings record. Never
/// fails: every field falls back to its default, malformed array entries are
/// dropped, ranges are clamped. Idempotent over its own output.
pub fn normalize(input: &Value) -> Settings {
    let obj = input.as_object();
    let field = |name: &str| -> &Value { obj.and_then(|o| o.get(name)).unwrap_or(&Value::Null) };

    let net_monthly_income = to_number(field("netMonthlyIncome"), 0.0).max(0.0);
    let gross_monthly_income = to_number(field("grossMonthlyIncome"), 0.0).max(0.0);
    let tax_rate_percent = to_number(field("taxRatePercent"), 0.0).clamp(0.0, 100.0);
    let use_gross_income = field("useGrossIncome").as_bool().unwrap_or(false);

    let weekly_working_hours =
        to_number(field("weeklyWorkingHours"), DEFAULT_WEEKLY_WORKING_HOURS).max(0.0);
    let weeks_per_month = to_number(field("weeksPerMonth"), DEFAULT_WEEKS_PER_MONTH).max(0.01);
    let commute_minutes_per_day = to_number(field("commuteMinutesPerDay"), 0.0).max(0.0);
    let working_days_per_week =
        to_number(field("workingDaysPerWeek"), DEFAULT_WORKING_DAYS_PER_WEEK).clamp(1.0, 7.0);
    let overtime_hours_per_week = to_number(field("overtimeHoursPerWeek"), 0.0).max(0.0);

    let additional_income_sources = to_array(field("additionalIncomeSources"))
        .iter()
        .filter_map(normalize_income_source)
        .collect();
    let quick_add_presets = to_array(field("quickAddPresets"))
        .iter()
        .filter_map(normalize_preset)
        .collect();
    let custom_categories = to_array(field("customCategories"))
        .iter()
        .filter_map(normalize_custom_category)
        .collect();

    let mut category_budgets: Vec<CategoryBudget> = Vec::new();
    for entry in to_array(field("categoryBudgets")) {
        if let Some(budget) = normalize_budget(entry) {
            // one budget per category, first occurrence wins
            if !category_budgets
                .iter()
                .any(|b| b.category_id == budget.category_id)
            {
                category_budgets.push(budget);
            }
        }
    }

    let prefer_time_display = field("preferTimeDisplay").as_bool().unwrap_or(false);
    let currency = field("currency")
        .as_str()
        .and_then(Currency::parse)
        .unwrap_or_default();

    Settings {
        net_monthly_income,
        gross_monthly_income,
        tax_rate_percent,
        use_gross_income,
        weekly_working_hours,
        weeks_per_month,
        commute_minutes_per_day,
        working_days_per_week,
        overtime_hours_per_week,
        additional_income_sources,
        quick_add_presets,
        custom_categories,
        category_budgets,
        prefer_time_display,
        currency,
    }
}

pub fn default_settings() -> Settings {
    normalize(&Value::Null)
}

fn normalize_income_source(value: &Value) -> Option<IncomeSource> {
    let obj = value.as_object()?;
    let id = nonempty_string(obj.get("id")?)?;
    Some(IncomeSource {
        id,
        name: obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        amount: to_number(obj.get("amount").unwrap_or(&Value::Null), 0.0).max(0.0),
        hours_per_month: to_number(obj.get("hoursPerMonth").unwrap_or(&Value::Null), 0.0).max(0.0),
    })
}

fn normalize_preset(value: &Value) -> Option<QuickAddPreset> {
    let obj = value.as_object()?;
    let id = nonempty_string(obj.get("id")?)?;
    Some(QuickAddPreset {
        id,
        title: obj
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        amount: to_number(obj.get("amount").unwrap_or(&Value::Null), 0.0).max(0.0),
        category_id: obj
            .get("categoryId")
            .and_then(|v| nonempty_string(v))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        emoji: obj
            .get("emoji")
            .and_then(Value::as_str)
            .map(|s| s.to_string()),
    })
}

fn normalize_custom_category(value: &Value) -> Option<CustomCategory> {
    let obj = value.as_object()?;
    let id = nonempty_string(obj.get("id")?)?;
    Some(CustomCategory {
        id,
        name: obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        emoji: obj
            .get("emoji")
            .and_then(Value::as_str)
            .map(|s| s.to_string()),
    })
}

fn normalize_budget(value: &Value) -> Option<CategoryBudget> {
    let obj = value.as_object()?;
    let category_id = nonempty_string(obj.get("categoryId")?)?;
    let amount = optional_non_negative(obj.get("monthlyBudgetAmount"));
    let hours = optional_non_negative(obj.get("monthlyBudgetHours"));
    if amount.is_none() && hours.is_none() {
        return None;
    }
    Some(CategoryBudget {
        category_id,
        monthly_budget_amount: amount,
        monthly_budget_hours: hours,
    })
}

fn to_number(value: &Value, fallback: f64) -> f64 {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => f,
            _ => fallback,
        },
        Value::String(s) => match s.trim().replace(',', ".").parse::<f64>() {
            Ok(f) if f.is_finite() => f,
            _ => fallback,
        },
        _ => fallback,
    }
}

fn optional_non_negative(value: Option<&Value>) -> Option<f64> {
    let n = to_number(value?, f64::NAN);
    if n.is_finite() { Some(n.max(0.0)) } else { None }
}

fn nonempty_string(value: &Value) -> Option<String> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn to_array(value: &Value) -> &[Value] {
    value.as_array().map(|v| v.as_slice()).unwrap_or(&[])
}

/// Primary income (net, or gross after tax when gross mode is active) plus
/// every additional income source.
pub fn effective_monthly_income(settings: &Settings) -> f64 {
    let primary = if settings.use_gross_income && settings.gross_monthly_income > 0.0 {
        settings.gross_monthly_income * (1.0 - settings.tax_rate_percent / 100.0)
    } else {
        settings.net_monthly_income
    };
    let additional: f64 = settings
        .additional_income_sources
        .iter()
        .map(|s| s.amount)
        .sum();
    primary + additional
}

pub fn weekly_commute_hours(settings: &Settings) -> f64 {
    settings.commute_minutes_per_day * settings.working_days_per_week / 60.0
}

/// Base hours plus unpaid overtime plus commute, scaled to a month, plus the
/// hours tied to additional income sources.
pub fn effective_monthly_working_hours(settings: &Settings) -> f64 {
    let weekly_total = settings.weekly_working_hours
        + settings.overtime_hours_per_week
        + weekly_commute_hours(settings);
    let additional: f64 = settings
        .additional_income_sources
        .iter()
        .map(|s| s.hours_per_month)
        .sum();
    weekly_total * settings.weeks_per_month + additional
}

/// The single conversion factor between money and time. 0 means "unset";
/// callers suppress time display rather than dividing by it.
pub fn hourly_rate(settings: &Settings) -> f64 {
    let monthly_hours = effective_monthly_working_hours(settings);
    if monthly_hours <= 0.0 {
        return 0.0;
    }
    effective_monthly_income(settings) / monthly_hours
}

pub fn load(store: &Store) -> Result<Settings> {
    let raw = store.get(&settings_key())?.unwrap_or(Value::Null);
    Ok(normalize(&raw))
}

pub fn save(store: &Store, settings: &Settings) -> Result<()> {
    store.set(&settings_key(), settings)
}
