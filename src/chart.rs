// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::models::{Expense, MonthlyData};

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn inverse_lerp(a: f64, b: f64, v: f64) -> f64 {
    if a == b { 0.0 } else { (v - a) / (b - a) }
}

pub fn clamp01(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// One point of a cumulative earned-vs-spent series. `period` is the x
/// coordinate: day of month for daily series, 1-based index for monthly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    pub period: f64,
    pub label: String,
    pub earned: f64,
    pub spent: f64,
}

/// Where cumulative spending first overtakes cumulative earning, estimated by
/// linear interpolation between the two surrounding periods. `earned` is the
/// series value at the crossing (earned ≈ spent there).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Crossing {
    pub period: f64,
    pub earned: f64,
}

/// Current-month series: linear income accrual per day against cumulative
/// spending. One point per day, day 1 through `days_in_month`.
pub fn daily_points(
    expenses: &[Expense],
    monthly_income: f64,
    days_in_month: u32,
) -> Vec<CumulativePoint> {
    let earned_per_day = if days_in_month > 0 {
        monthly_income / days_in_month as f64
    } else {
        0.0
    };

    let mut spent_by_day = vec![0.0_f64; days_in_month as usize + 1];
    for e in expenses {
        let day = day_of_iso_date(&e.date);
        if (1..=days_in_month).contains(&day) {
            spent_by_day[day as usize] += e.amount;
        }
    }

    let mut spent_cum = 0.0;
    (1..=days_in_month)
        .map(|day| {
            spent_cum += spent_by_day[day as usize];
            CumulativePoint {
                period: day as f64,
                label: format!("{}", day),
                earned: earned_per_day * day as f64,
                spent: spent_cum,
            }
        })
        .collect()
}

/// Multi-month series: running totals over the already-aggregated monthly
/// rows, one point per month.
pub fn monthly_points(monthly_data: &[MonthlyData]) -> Vec<CumulativePoint> {
    let mut earned_cum = 0.0;
    let mut spent_cum = 0.0;
    monthly_data
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            earned_cum += m.earned;
            spent_cum += m.spent;
            CumulativePoint {
                period: (idx + 1) as f64,
                label: m.label.clone(),
                earned: earned_cum,
                spent: spent_cum,
            }
        })
        .collect()
}

/// First transition where spent - earned goes from <= 0 to > 0. None when
/// spending never overtakes earning or starts already above it.
pub fn crossing_point(points: &[CumulativePoint]) -> Option<Crossing> {
    for pair in points.windows(2) {
        let (prev, cur) = (&pair[0], &pair[1]);
        let prev_diff = prev.spent - prev.earned;
        let cur_diff = cur.spent - cur.earned;
        if prev_diff <= 0.0 && cur_diff > 0.0 {
            let t = clamp01(prev_diff / (prev_diff - cur_diff));
            return Some(Crossing {
                period: lerp(prev.period, cur.period, t),
                earned: lerp(prev.earned, cur.earned, t),
            });
        }
    }
    None
}

fn day_of_iso_date(iso_date: &str) -> u32 {
    iso_date
        .get(8..10)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(1)
}
