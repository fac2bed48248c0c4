// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display currency. Symbols only; there is no exchange-rate logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "CHF")]
    Chf,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Chf => "CHF",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    pub fn parse(s: &str) -> Option<Currency> {
        match s.to_uppercase().as_str() {
            "CHF" => Some(Currency::Chf),
            "EUR" => Some(Currency::Eur),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }
}

/// Built-in expense categories. Custom categories live in `Settings` and
/// share the same open string id space; unknown ids are displayed verbatim.
pub const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("food", "Food"),
    ("transport", "Transport"),
    ("shopping", "Shopping"),
    ("housing", "Housing"),
    ("leisure", "Leisure"),
    ("subscriptions", "Subscriptions"),
    ("misc", "Misc"),
];

pub const DEFAULT_CATEGORY: &str = "misc";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub hours_per_month: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAddPreset {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCategory {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Per-category monthly ceiling, in currency or hours. When both are set the
/// currency amount wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget_hours: Option<f64>,
}

/// The single settings record. Always produced by `settings::normalize`, so
/// every field is within its documented range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub net_monthly_income: f64,
    pub gross_monthly_income: f64,
    pub tax_rate_percent: f64,
    pub use_gross_income: bool,
    pub weekly_working_hours: f64,
    pub weeks_per_month: f64,
    pub commute_minutes_per_day: f64,
    pub working_days_per_week: f64,
    pub overtime_hours_per_week: f64,
    pub additional_income_sources: Vec<IncomeSource>,
    pub quick_add_presets: Vec<QuickAddPreset>,
    pub custom_categories: Vec<CustomCategory>,
    pub category_budgets: Vec<CategoryBudget>,
    pub prefer_time_display: bool,
    pub currency: Currency,
}

impl Settings {
    /// Display name for a category id: custom categories first, then the
    /// built-in table, otherwise the raw id.
    pub fn category_display_name<'a>(&'a self, category_id: &'a str) -> &'a str {
        if let Some(c) = self.custom_categories.iter().find(|c| c.id == category_id) {
            return &c.name;
        }
        BUILTIN_CATEGORIES
            .iter()
            .find(|(id, _)| *id == category_id)
            .map(|(_, name)| *name)
            .unwrap_or(category_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub amount: f64,
    pub title: String,
    pub category_id: String,
    /// Unix milliseconds.
    pub created_at: i64,
}

/// One analytics row per calendar month. Rebuilt on every query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    pub month_key: String,
    pub label: String,
    pub earned: f64,
    pub spent: f64,
    pub earned_hours: f64,
    pub spent_hours: f64,
    pub balance: f64,
    pub balance_hours: f64,
    pub expense_count: usize,
    pub category_spending: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub earned: f64,
    pub spent: f64,
    pub expense_count: usize,
    pub earned_hours: f64,
    pub spent_hours: f64,
    pub balance: f64,
    pub balance_hours: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    pub category: String,
    pub amount: f64,
    pub hours: f64,
}
