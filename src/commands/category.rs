// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use uuid::Uuid;

use crate::models::{BUILTIN_CATEGORIES, CustomCategory};
use crate::settings;
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let mut s = settings::load(store)?;
            let category = CustomCategory {
                id: Uuid::new_v4().to_string(),
                name: name.clone(),
                emoji: sub.get_one::<String>("emoji").cloned(),
            };
            println!("Added category '{}' ({})", category.name, category.id);
            s.custom_categories.push(category);
            settings::save(store, &s)?;
        }
        Some(("list", sub)) => {
            let s = settings::load(store)?;
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s.custom_categories)?
            {
                return Ok(());
            }
            let mut rows: Vec<Vec<String>> = BUILTIN_CATEGORIES
                .iter()
                .map(|(id, name)| vec![id.to_string(), name.to_string(), "built-in".into()])
                .collect();
            for c in &s.custom_categories {
                rows.push(vec![
                    c.id.clone(),
                    format!("{}{}", c.emoji.as_deref().map(|e| format!("{} ", e)).unwrap_or_default(), c.name),
                    "custom".into(),
                ]);
            }
            println!("{}", pretty_table(&["Id", "Name", "Kind"], rows));
        }
        Some(("rm", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            let mut s = settings::load(store)?;
            let before = s.custom_categories.len();
            s.custom_categories.retain(|c| &c.id != id);
            if s.custom_categories.len() == before {
                println!("No custom category with id '{}'", id);
            } else {
                settings::save(store, &s)?;
                println!("Removed category '{}'", id);
            }
        }
        _ => {}
    }
    Ok(())
}
