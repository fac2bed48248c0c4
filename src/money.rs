// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Currency;

/// Parse a number that may use a decimal comma or dot. Unparsable or
/// non-finite input yields 0; this function never fails.
pub fn parse_locale_number(s: &str) -> f64 {
    parse_locale_number_or(s, 0.0)
}

pub fn parse_locale_number_or(s: &str, fallback: f64) -> f64 {
    match s.trim().replace(',', ".").parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// Two-decimal currency rendering, e.g. "CHF 12.50". Rounding happens on the
/// cent boundary (round(x*100)/100) before formatting.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let rounded = if amount.is_finite() {
        (amount * 100.0).round() / 100.0
    } else {
        0.0
    };
    format!("{} {:.2}", currency.symbol(), rounded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursMinutes {
    pub hours: i64,
    pub minutes: i64,
}

/// Split a fractional hour count into whole hours and minutes. The hour part
/// keeps the sign; minutes are always the non-negative remainder.
pub fn to_hours_minutes(hours_float: f64) -> HoursMinutes {
    if !hours_float.is_finite() {
        return HoursMinutes {
            hours: 0,
            minutes: 0,
        };
    }
    let total_minutes = (hours_float * 60.0).round() as i64;
    HoursMinutes {
        hours: total_minutes / 60,
        minutes: (total_minutes % 60).abs(),
    }
}

/// "2h 30m" / "-2h 30m".
pub fn format_hours_minutes(hours_float: f64) -> String {
    let hm = to_hours_minutes(hours_float);
    let sign = if hours_float < 0.0 { "-" } else { "" };
    format!("{}{}h {}m", sign, hm.hours.abs(), hm.minutes)
}

/// Amount of work time an amount of money represents. A rate of 0 means
/// "unset" and converts everything to 0; negative rates are treated the same.
pub fn to_hours(amount: f64, hourly_rate: f64) -> f64 {
    if hourly_rate > 0.0 && amount.is_finite() {
        amount / hourly_rate
    } else {
        0.0
    }
}

pub fn to_minutes(hours_float: f64) -> i64 {
    if hours_float.is_finite() {
        (hours_float * 60.0).round() as i64
    } else {
        0
    }
}
