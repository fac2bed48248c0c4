// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::money::{format_currency, format_hours_minutes, parse_locale_number, to_hours};
use crate::settings::{self, hourly_rate};
use crate::store::Store;

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("amount").unwrap();
    let amount = parse_locale_number(raw);
    if amount <= 0.0 {
        return Err(anyhow!("Invalid amount '{}'", raw));
    }

    let s = settings::load(store)?;
    let rate = hourly_rate(&s);
    if rate <= 0.0 {
        println!("Hourly rate is unset; configure income and working hours first.");
        return Ok(());
    }

    println!(
        "{} is {} of your work time (rate {}/h)",
        format_currency(amount, s.currency),
        format_hours_minutes(to_hours(amount, rate)),
        format_currency(rate, s.currency)
    );
    Ok(())
}
