// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;

use crate::dates::month_key_from_iso;
use crate::expenses::{self, NewExpense};
use crate::models::DEFAULT_CATEGORY;
use crate::money::parse_locale_number;
use crate::store::Store;
use crate::utils::parse_date;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => import_expenses(store, sub),
        _ => Ok(()),
    }
}

/// Columns: date, amount, title, category. Each row is handed to the expense
/// store one at a time; the partition follows the row's own date.
fn import_expenses(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let amount_raw = rec.get(1).context("amount missing")?.trim();
        let title = rec.get(2).unwrap_or("").trim().to_string();
        let category = rec.get(3).unwrap_or("").trim();

        let date = parse_date(date_raw)
            .with_context(|| format!("Invalid expense date '{}'", date_raw))?
            .to_string();
        let amount = parse_locale_number(amount_raw);
        if amount <= 0.0 {
            return Err(anyhow!("Invalid amount '{}' on {}", amount_raw, date));
        }
        let category_id = if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category.to_string()
        };

        let month_key = month_key_from_iso(&date);
        expenses::add(
            store,
            &month_key,
            NewExpense {
                date,
                amount,
                title,
                category_id,
            },
        )?;
        imported += 1;
    }
    println!("Imported {} expenses from {}", imported, path);
    Ok(())
}
