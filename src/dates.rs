// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};

/// "YYYY-MM" for a calendar date.
pub fn month_key_from_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Month partition for an ISO "YYYY-MM-DD" date string: the first 7 chars.
pub fn month_key_from_iso(iso_date: &str) -> String {
    iso_date.chars().take(7).collect()
}

/// Parse "YYYY-MM" into (year, month). None for anything malformed.
pub fn parse_month_key(month_key: &str) -> Option<(i32, u32)> {
    let (y, m) = month_key.split_once('-')?;
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(next_y, next_m, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => (next - first).num_days() as u32,
        _ => 30,
    }
}

/// Example: "Jan 2026". Malformed keys are echoed back unchanged.
pub fn month_label(month_key: &str) -> String {
    match parse_month_key(month_key).and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1)) {
        Some(d) => d.format("%b %Y").to_string(),
        None => month_key.to_string(),
    }
}

/// Every "YYYY-MM" key from start to end, inclusive. Empty when the range is
/// inverted or either key is malformed.
pub fn month_keys_between(start_key: &str, end_key: &str) -> Vec<String> {
    let (Some((mut year, mut month)), Some((end_year, end_month))) =
        (parse_month_key(start_key), parse_month_key(end_key))
    else {
        return Vec::new();
    };

    let mut keys = Vec::new();
    while year < end_year || (year == end_year && month <= end_month) {
        keys.push(format!("{:04}-{:02}", year, month));
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    keys
}

/// The month key `offset` calendar months before the given date's month.
pub fn month_key_back(from: NaiveDate, offset: u32) -> String {
    let total = from.year() * 12 + from.month() as i32 - 1 - offset as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    format!("{:04}-{:02}", year, month)
}
