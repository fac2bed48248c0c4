// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::{APP_PREFIX, Store};

pub fn handle(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    if !sub.get_flag("yes") {
        let keys = store.keys_with_prefix(APP_PREFIX)?;
        println!(
            "This would delete {} stored keys. Re-run with --yes to confirm.",
            keys.len()
        );
        return Ok(());
    }
    store.clear_all()?;
    println!("All onlytime data deleted.");
    Ok(())
}
