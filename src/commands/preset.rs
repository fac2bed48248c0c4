// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use uuid::Uuid;

use crate::models::{DEFAULT_CATEGORY, QuickAddPreset};
use crate::money::{format_currency, parse_locale_number};
use crate::settings;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let mut s = settings::load(store)?;
            let preset = QuickAddPreset {
                id: Uuid::new_v4().to_string(),
                title: sub.get_one::<String>("title").unwrap().clone(),
                amount: parse_locale_number(sub.get_one::<String>("amount").unwrap()).max(0.0),
                category_id: sub
                    .get_one::<String>("category")
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                emoji: sub.get_one::<String>("emoji").cloned(),
            };
            println!("Added preset '{}' ({})", preset.title, preset.id);
            s.quick_add_presets.push(preset);
            settings::save(store, &s)?;
        }
        Some(("list", sub)) => {
            let s = settings::load(store)?;
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.quick_add_presets)?
            {
                return Ok(());
            }
            let rows = s
                .quick_add_presets
                .iter()
                .map(|p| {
                    vec![
                        p.id.clone(),
                        p.title.clone(),
                        format_currency(p.amount, s.currency),
                        s.category_display_name(&p.category_id).to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Title", "Amount", "Category"], rows));
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let mut s = settings::load(store)?;
            let before = s.quick_add_presets.len();
            s.quick_add_presets.retain(|p| &p.id != id);
            if s.quick_add_presets.len() == before {
                println!("No preset with id '{}'", id);
            } else {
                settings::save(store, &s)?;
                println!("Removed preset '{}'", id);
            }
        }
        _ => {}
    }
    Ok(())
}
