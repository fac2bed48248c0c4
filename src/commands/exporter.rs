// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use serde_json::json;

use crate::expenses::list_for_range;
use crate::store::Store;
use crate::utils::parse_month;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(store, sub),
        _ => Ok(()),
    }
}

fn export_expenses(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let from = parse_month(sub.get_one::<String>("from").unwrap())?;
    let to = parse_month(sub.get_one::<String>("to").unwrap())?;

    let rows = list_for_range(store, &from, &to)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "amount", "title", "category", "id"])?;
            for e in &rows {
                wtr.write_record([
                    e.date.as_str(),
                    &format!("{}", e.amount),
                    e.title.as_str(),
                    e.category_id.as_str(),
                    e.id.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = rows
                .iter()
                .map(|e| {
                    json!({
                        "date": e.date, "amount": e.amount, "title": e.title,
                        "categoryId": e.category_id, "id": e.id,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            return Err(anyhow!("Unknown format '{}' (use csv|json)", fmt));
        }
    }
    println!("Exported {} expenses to {}", rows.len(), out);
    Ok(())
}
