// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dates::{days_in_month, month_key_back, month_key_from_date, month_label};
use crate::expenses::list_for_month;
use crate::models::{MonthlyData, Settings, TopCategory, TotalStats};
use crate::money::to_hours;
use crate::settings::{effective_monthly_income, hourly_rate};
use crate::store::Store;

/// The fixed set of reporting windows. Every range ends at the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    OneMonth,
    ThreeMonths,
    SixMonths,
    YearToDate,
    OneYear,
    ThreeYears,
    FiveYears,
}

pub const ALL_RANGES: &[TimeRange] = &[
    TimeRange::OneMonth,
    TimeRange::ThreeMonths,
    TimeRange::SixMonths,
    TimeRange::YearToDate,
    TimeRange::OneYear,
    TimeRange::ThreeYears,
    TimeRange::FiveYears,
];

impl TimeRange {
    pub fn parse(s: &str) -> Option<TimeRange> {
        match s.to_uppercase().as_str() {
            "1M" => Some(TimeRange::OneMonth),
            "3M" => Some(TimeRange::ThreeMonths),
            "6M" => Some(TimeRange::SixMonths),
            "YTD" => Some(TimeRange::YearToDate),
            "1Y" => Some(TimeRange::OneYear),
            "3Y" => Some(TimeRange::ThreeYears),
            "5Y" => Some(TimeRange::FiveYears),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneMonth => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::SixMonths => "6M",
            TimeRange::YearToDate => "YTD",
            TimeRange::OneYear => "1Y",
            TimeRange::ThreeYears => "3Y",
            TimeRange::FiveYears => "5Y",
        }
    }
}

/// Month keys covered by a range, oldest first, current month last.
pub fn month_keys(range: TimeRange, today: NaiveDate) -> Vec<String> {
    let months_back = |n: u32| -> Vec<String> {
        let mut keys: Vec<String> = (0..n).map(|i| month_key_back(today, i)).collect();
        keys.reverse();
        keys
    };

    match range {
        TimeRange::OneMonth => vec![month_key_from_date(today)],
        TimeRange::ThreeMonths => months_back(3),
        TimeRange::SixMonths => months_back(6),
        TimeRange::YearToDate => (1..=today.month())
            .map(|m| format!("{:04}-{:02}", today.year(), m))
            .collect(),
        TimeRange::OneYear => months_back(12),
        TimeRange::ThreeYears => months_back(36),
        TimeRange::FiveYears => months_back(60),
    }
}

/// One row per month in the range. The current month's earnings are prorated
/// by day of month; past months get the full current effective income, since
/// the engine keeps no history of settings changes.
pub fn build_monthly_data(
    store: &Store,
    settings: &Settings,
    range: TimeRange,
    today: NaiveDate,
) -> Result<Vec<MonthlyData>> {
    let hourly = hourly_rate(settings);
    let monthly_income = effective_monthly_income(settings);
    let current_key = month_key_from_date(today);

    let mut rows = Vec::new();
    for month_key in month_keys(range, today) {
        let expenses = list_for_month(store, &month_key)?;
        let spent: f64 = expenses
            .iter()
            .map(|e| if e.amount.is_finite() { e.amount } else { 0.0 })
            .sum();

        let earned = if month_key == current_key {
            let dim = crate::dates::parse_month_key(&month_key)
                .map(|(y, m)| days_in_month(y, m))
                .unwrap_or(0);
            if monthly_income > 0.0 && dim > 0 {
                monthly_income / dim as f64 * today.day() as f64
            } else {
                0.0
            }
        } else {
            monthly_income
        };

        let mut category_spending: BTreeMap<String, f64> = BTreeMap::new();
        for e in &expenses {
            *category_spending.entry(e.category_id.clone()).or_insert(0.0) += e.amount;
        }

        let balance = earned - spent;
        rows.push(MonthlyData {
            label: month_label(&month_key),
            month_key,
            earned,
            spent,
            earned_hours: to_hours(earned, hourly),
            spent_hours: to_hours(spent, hourly),
            balance,
            balance_hours: to_hours(balance, hourly),
            expense_count: expenses.len(),
            category_spending,
        });
    }
    Ok(rows)
}

/// Range totals. Hour figures are derived from the summed amounts at the
/// current rate, not summed per month.
pub fn summarize(monthly_data: &[MonthlyData], hourly: f64) -> TotalStats {
    let earned: f64 = monthly_data.iter().map(|m| m.earned).sum();
    let spent: f64 = monthly_data.iter().map(|m| m.spent).sum();
    let expense_count: usize = monthly_data.iter().map(|m| m.expense_count).sum();
    let balance = earned - spent;
    TotalStats {
        earned,
        spent,
        expense_count,
        earned_hours: to_hours(earned, hourly),
        spent_hours: to_hours(spent, hourly),
        balance,
        balance_hours: to_hours(balance, hourly),
    }
}

/// The category with the largest spend across the range. Empty category and
/// zero amounts when nothing was spent at all.
pub fn top_category(monthly_data: &[MonthlyData], hourly: f64) -> TopCategory {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for month in monthly_data {
        for (cat, amount) in &month.category_spending {
            *totals.entry(cat.as_str()).or_insert(0.0) += amount;
        }
    }

    let mut max_cat = "";
    let mut max_amount = 0.0;
    for (cat, amount) in totals {
        if amount > max_amount {
            max_amount = amount;
            max_cat = cat;
        }
    }

    TopCategory {
        category: max_cat.to_string(),
        amount: max_amount,
        hours: to_hours(max_amount, hourly),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdownItem {
    pub category_id: String,
    pub name: String,
    pub amount: f64,
    pub hours: f64,
    pub pct: f64,
}

/// Per-category totals across the range with share of total spend, largest
/// first. Unknown category ids keep their raw id as the display name.
pub fn category_breakdown(
    monthly_data: &[MonthlyData],
    settings: &Settings,
    hourly: f64,
) -> Vec<CategoryBreakdownItem> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for month in monthly_data {
        for (cat, amount) in &month.category_spending {
            *totals.entry(cat.clone()).or_insert(0.0) += amount;
        }
    }
    let total_spent: f64 = totals.values().sum();

    let mut items: Vec<CategoryBreakdownItem> = totals
        .into_iter()
        .map(|(category_id, amount)| CategoryBreakdownItem {
            name: settings.category_display_name(&category_id).to_string(),
            category_id,
            amount,
            hours: to_hours(amount, hourly),
            pct: if total_spent > 0.0 {
                amount / total_spent * 100.0
            } else {
                0.0
            },
        })
        .collect();
    items.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetLevel {
    Ok,
    AtRisk,
    Exceeded,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category_id: String,
    pub budget_amount: f64,
    pub spent: f64,
    pub percentage: f64,
    pub level: BudgetLevel,
}

/// Budget consumption for one month's category spending. A budget given in
/// hours is converted at the current rate; a non-positive budget reports 0%.
/// At-risk starts at 80%, exceeded at 100%. Sorted by percentage, worst
/// first.
pub fn budget_status(
    settings: &Settings,
    category_spending: &BTreeMap<String, f64>,
    hourly: f64,
) -> Vec<BudgetStatus> {
    let mut statuses: Vec<BudgetStatus> = settings
        .category_budgets
        .iter()
        .map(|budget| {
            let budget_amount = match (budget.monthly_budget_amount, budget.monthly_budget_hours) {
                (Some(amount), _) => amount,
                (None, Some(hours)) => hours * hourly,
                (None, None) => 0.0,
            };
            let spent = category_spending
                .get(&budget.category_id)
                .copied()
                .unwrap_or(0.0);
            let percentage = if budget_amount > 0.0 {
                spent / budget_amount * 100.0
            } else {
                0.0
            };
            let level = if percentage >= 100.0 {
                BudgetLevel::Exceeded
            } else if percentage >= 80.0 {
                BudgetLevel::AtRisk
            } else {
                BudgetLevel::Ok
            };
            BudgetStatus {
                category_id: budget.category_id.clone(),
                budget_amount,
                spent,
                percentage,
                level,
            }
        })
        .collect();
    statuses.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    statuses
}
