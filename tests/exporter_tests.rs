// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use onlytime::cli;
use onlytime::commands::exporter;
use onlytime::expenses::{self, NewExpense};
use onlytime::store::Store;
use serde_json::Value;

fn run_export(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["onlytime", "export", "expenses"];
    argv.extend_from_slice(args);
    let m = cli::build_cli().get_matches_from(argv);
    let Some(("export", sub)) = m.subcommand() else {
        panic!("export subcommand not matched");
    };
    exporter::handle(store, sub)
}

fn seeded_store() -> Store {
    let store = Store::open_in_memory().unwrap();
    expenses::add(
        &store,
        "2024-01",
        NewExpense {
            date: "2024-01-10".to_string(),
            amount: 12.5,
            title: "Lunch".to_string(),
            category_id: "food".to_string(),
        },
    )
    .unwrap();
    expenses::add(
        &store,
        "2024-02",
        NewExpense {
            date: "2024-02-03".to_string(),
            amount: 30.0,
            title: "Train pass".to_string(),
            category_id: "transport".to_string(),
        },
    )
    .unwrap();
    store
}

#[test]
fn csv_export_writes_header_and_rows() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let out_str = out.to_string_lossy().into_owned();

    run_export(
        &store,
        &["--format", "csv", "--out", &out_str, "--from", "2024-01", "--to", "2024-02"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "date,amount,title,category,id");
    assert!(lines[1].starts_with("2024-02-03,30,Train pass,transport,"));
    assert!(lines[2].starts_with("2024-01-10,12.5,Lunch,food,"));
}

#[test]
fn json_export_round_trips_fields() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.json");
    let out_str = out.to_string_lossy().into_owned();

    run_export(
        &store,
        &["--format", "json", "--out", &out_str, "--from", "2024-01", "--to", "2024-02"],
    )
    .unwrap();

    let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["date"], "2024-02-03");
    assert_eq!(items[0]["categoryId"], "transport");
    assert_eq!(items[1]["amount"], 12.5);
    assert!(items[1]["id"].as_str().is_some_and(|s| !s.is_empty()));
}

#[test]
fn range_filters_what_gets_exported() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("jan.csv");
    let out_str = out.to_string_lossy().into_owned();

    run_export(
        &store,
        &["--format", "csv", "--out", &out_str, "--from", "2024-01", "--to", "2024-01"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("Lunch"));
    assert!(!contents.contains("Train pass"));
}

#[test]
fn unknown_format_is_an_error_and_writes_nothing() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.xml");
    let out_str = out.to_string_lossy().into_owned();

    let res = run_export(
        &store,
        &["--format", "xml", "--out", &out_str, "--from", "2024-01", "--to", "2024-02"],
    );
    assert!(res.is_err());
    assert!(!out.exists());
}

#[test]
fn invalid_month_bounds_are_rejected() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let out_str = out.to_string_lossy().into_owned();

    let res = run_export(
        &store,
        &["--format", "csv", "--out", &out_str, "--from", "bogus", "--to", "2024-02"],
    );
    assert!(res.is_err());
}
