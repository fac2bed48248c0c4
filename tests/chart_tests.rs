// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use onlytime::chart::{
    CumulativePoint, clamp01, crossing_point, daily_points, inverse_lerp, lerp, monthly_points,
};
use onlytime::models::{Expense, MonthlyData};

fn expense(date: &str, amount: f64) -> Expense {
    Expense {
        id: date.to_string(),
        date: date.to_string(),
        amount,
        title: String::new(),
        category_id: "misc".to_string(),
        created_at: 0,
    }
}

fn month(label: &str, earned: f64, spent: f64) -> MonthlyData {
    MonthlyData {
        month_key: label.to_string(),
        label: label.to_string(),
        earned,
        spent,
        earned_hours: 0.0,
        spent_hours: 0.0,
        balance: earned - spent,
        balance_hours: 0.0,
        expense_count: 0,
        category_spending: BTreeMap::new(),
    }
}

fn point(period: f64, earned: f64, spent: f64) -> CumulativePoint {
    CumulativePoint {
        period,
        label: String::new(),
        earned,
        spent,
    }
}

#[test]
fn lerp_and_clamp_basics() {
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(inverse_lerp(10.0, 20.0, 15.0), 0.5);
    assert_eq!(inverse_lerp(5.0, 5.0, 5.0), 0.0);
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert_eq!(clamp01(0.3), 0.3);
}

#[test]
fn daily_series_accrues_income_linearly() {
    let points = daily_points(&[], 310.0, 31);
    assert_eq!(points.len(), 31);
    assert_eq!(points[0].period, 1.0);
    assert!((points[0].earned - 10.0).abs() < 1e-9);
    assert!((points[14].earned - 150.0).abs() < 1e-9);
    assert!((points[30].earned - 310.0).abs() < 1e-9);
    assert!(points.iter().all(|p| p.spent == 0.0));
}

#[test]
fn daily_series_cumulates_spending_by_day() {
    let expenses = vec![
        expense("2024-03-02", 30.0),
        expense("2024-03-02", 10.0),
        expense("2024-03-10", 5.0),
    ];
    let points = daily_points(&expenses, 0.0, 31);
    assert_eq!(points[0].spent, 0.0);
    assert_eq!(points[1].spent, 40.0);
    assert_eq!(points[8].spent, 40.0);
    assert_eq!(points[9].spent, 45.0);
    assert_eq!(points[30].spent, 45.0);
}

#[test]
fn out_of_month_days_are_ignored() {
    let expenses = vec![expense("2024-03-40", 99.0), expense("bogus", 0.0)];
    let points = daily_points(&expenses, 0.0, 31);
    // An unparseable day falls back to day 1; a day past the month is dropped.
    assert_eq!(points[0].spent, 0.0);
    assert_eq!(points[30].spent, 0.0);
}

#[test]
fn zero_days_yields_no_points() {
    assert!(daily_points(&[], 310.0, 0).is_empty());
}

#[test]
fn monthly_series_is_a_running_total() {
    let rows = vec![
        month("Jan 2024", 3000.0, 500.0),
        month("Feb 2024", 3000.0, 700.0),
        month("Mar 2024", 1500.0, 200.0),
    ];
    let points = monthly_points(&rows);
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].period, 1.0);
    assert_eq!(points[0].earned, 3000.0);
    assert_eq!(points[1].earned, 6000.0);
    assert_eq!(points[1].spent, 1200.0);
    assert_eq!(points[2].earned, 7500.0);
    assert_eq!(points[2].spent, 1400.0);
    assert_eq!(points[2].label, "Mar 2024");
}

#[test]
fn crossing_is_interpolated_between_periods() {
    let points = vec![point(1.0, 10.0, 0.0), point(2.0, 20.0, 30.0)];
    let crossing = crossing_point(&points).unwrap();
    assert!((crossing.period - 1.5).abs() < 1e-9);
    assert!((crossing.earned - 15.0).abs() < 1e-9);
}

#[test]
fn crossing_on_the_boundary_lands_on_the_point() {
    // Deficit reaches exactly zero at the first point, goes positive at the second.
    let points = vec![point(1.0, 10.0, 10.0), point(2.0, 20.0, 25.0)];
    let crossing = crossing_point(&points).unwrap();
    assert!((crossing.period - 1.0).abs() < 1e-9);
    assert!((crossing.earned - 10.0).abs() < 1e-9);
}

#[test]
fn no_crossing_when_spending_never_overtakes() {
    let points = vec![point(1.0, 10.0, 5.0), point(2.0, 20.0, 12.0), point(3.0, 30.0, 29.0)];
    assert!(crossing_point(&points).is_none());
}

#[test]
fn no_crossing_when_already_overspent_from_the_start() {
    let points = vec![point(1.0, 10.0, 50.0), point(2.0, 20.0, 60.0)];
    assert!(crossing_point(&points).is_none());
}

#[test]
fn crossing_uses_the_first_transition_only() {
    let points = vec![
        point(1.0, 10.0, 0.0),
        point(2.0, 20.0, 30.0),
        point(3.0, 30.0, 31.0),
        point(4.0, 40.0, 60.0),
    ];
    let crossing = crossing_point(&points).unwrap();
    assert!(crossing.period < 2.0);
}

#[test]
fn empty_series_has_no_crossing() {
    assert!(crossing_point(&[]).is_none());
    assert!(crossing_point(&[point(1.0, 5.0, 10.0)]).is_none());
}
