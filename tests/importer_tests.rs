// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use onlytime::commands::importer;
use onlytime::expenses;
use onlytime::store::Store;
use onlytime::{cli, utils};

fn run_import(store: &Store, path: &str) -> anyhow::Result<()> {
    let m = cli::build_cli().get_matches_from(["onlytime", "import", "expenses", "--path", path]);
    let Some(("import", sub)) = m.subcommand() else {
        panic!("import subcommand not matched");
    };
    importer::handle(store, sub)
}

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn rows_land_in_the_month_of_their_own_date() {
    let store = Store::open_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "expenses.csv",
        "date,amount,title,category\n\
         2024-01-10,12.50,Lunch,food\n\
         2024-02-03,30,Train pass,transport\n\
         2024-02-20,9.90,,\n",
    );

    run_import(&store, &path).unwrap();

    let jan = expenses::list_for_month(&store, "2024-01").unwrap();
    assert_eq!(jan.len(), 1);
    assert_eq!(jan[0].amount, 12.5);
    assert_eq!(jan[0].title, "Lunch");
    assert_eq!(jan[0].category_id, "food");

    let feb = expenses::list_for_month(&store, "2024-02").unwrap();
    assert_eq!(feb.len(), 2);
    assert_eq!(feb[0].date, "2024-02-20");
    assert_eq!(feb[0].category_id, "misc");
    assert_eq!(feb[1].category_id, "transport");
}

#[test]
fn comma_decimals_are_accepted() {
    let store = Store::open_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "expenses.csv",
        "date,amount,title,category\n2024-03-05,\"12,50\",Lunch,food\n",
    );

    run_import(&store, &path).unwrap();
    let list = expenses::list_for_month(&store, "2024-03").unwrap();
    assert_eq!(list[0].amount, 12.5);
}

#[test]
fn invalid_date_fails_the_import() {
    let store = Store::open_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "expenses.csv",
        "date,amount,title,category\nnot-a-date,10,Lunch,food\n",
    );

    assert!(run_import(&store, &path).is_err());
}

#[test]
fn non_positive_amount_fails_the_import() {
    let store = Store::open_in_memory().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "expenses.csv",
        "date,amount,title,category\n2024-03-05,0,Free lunch,food\n",
    );

    assert!(run_import(&store, &path).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let store = Store::open_in_memory().unwrap();
    assert!(run_import(&store, "/no/such/file.csv").is_err());
}

#[test]
fn month_parser_accepts_keys_only() {
    assert!(utils::parse_month("2024-03").is_ok());
    assert!(utils::parse_month("2024-13").is_err());
    assert!(utils::parse_month("2024-03-05").is_err());
    assert!(utils::parse_month("march").is_err());
}
