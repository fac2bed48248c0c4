// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use onlytime::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = store::Store::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::db_path()?.display());
        }
        Some(("settings", sub)) => commands::settings::handle(&store, sub)?,
        Some(("category", sub)) => commands::category::handle(&store, sub)?,
        Some(("preset", sub)) => commands::preset::handle(&store, sub)?,
        Some(("expense", sub)) => commands::expense::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budget::handle(&store, sub)?,
        Some(("report", sub)) => commands::report::handle(&store, sub)?,
        Some(("status", sub)) => commands::status::handle(&store, sub)?,
        Some(("convert", sub)) => commands::convert::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("reset", sub)) => commands::reset::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
