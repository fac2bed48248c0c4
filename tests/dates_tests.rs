// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use onlytime::dates::{
    days_in_month, month_key_back, month_key_from_date, month_key_from_iso, month_keys_between,
    month_label, parse_month_key,
};

#[test]
fn month_key_formats() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(month_key_from_date(d), "2024-03");
    assert_eq!(month_key_from_iso("2024-03-15"), "2024-03");
    assert_eq!(month_key_from_iso("2024-03"), "2024-03");
}

#[test]
fn parse_month_key_validates_month() {
    assert_eq!(parse_month_key("2024-03"), Some((2024, 3)));
    assert_eq!(parse_month_key("2024-12"), Some((2024, 12)));
    assert_eq!(parse_month_key("2024-13"), None);
    assert_eq!(parse_month_key("2024-00"), None);
    assert_eq!(parse_month_key("2024"), None);
    assert_eq!(parse_month_key("abcd-ef"), None);
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2024, 1), 31);
    assert_eq!(days_in_month(2024, 4), 30);
    assert_eq!(days_in_month(2024, 12), 31);
}

#[test]
fn month_label_formats_or_echoes() {
    assert_eq!(month_label("2024-03"), "Mar 2024");
    assert_eq!(month_label("2026-01"), "Jan 2026");
    assert_eq!(month_label("junk"), "junk");
}

#[test]
fn keys_between_are_inclusive() {
    assert_eq!(
        month_keys_between("2023-11", "2024-02"),
        vec!["2023-11", "2023-12", "2024-01", "2024-02"]
    );
    assert_eq!(month_keys_between("2024-03", "2024-03"), vec!["2024-03"]);
}

#[test]
fn inverted_or_malformed_ranges_are_empty() {
    assert!(month_keys_between("2024-03", "2024-01").is_empty());
    assert!(month_keys_between("junk", "2024-01").is_empty());
    assert!(month_keys_between("2024-01", "junk").is_empty());
}

#[test]
fn month_key_back_crosses_year_boundaries() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(month_key_back(d, 0), "2024-03");
    assert_eq!(month_key_back(d, 2), "2024-01");
    assert_eq!(month_key_back(d, 3), "2023-12");
    assert_eq!(month_key_back(d, 15), "2022-12");
    assert_eq!(month_key_back(d, 60), "2019-03");
}
