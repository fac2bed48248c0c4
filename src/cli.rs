// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("onlytime")
        .about("Local-first expense tracking that prices spending in hours of your own work time")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the local store and print its path"))
        .subcommand(
            Command::new("settings")
                .about("Income, work time, and display settings")
                .subcommand(json_flags(Command::new("show").about("Show current settings and derived rate")))
                .subcommand(
                    Command::new("set")
                        .about("Update one or more settings fields")
                        .arg(Arg::new("net-income").long("net-income").help("Net monthly income"))
                        .arg(Arg::new("gross-income").long("gross-income").help("Gross monthly income"))
                        .arg(Arg::new("tax-rate").long("tax-rate").help("Tax rate percent (0-100)"))
                        .arg(Arg::new("use-gross").long("use-gross").help("true/false: derive net from gross"))
                        .arg(Arg::new("weekly-hours").long("weekly-hours").help("Contracted weekly working hours"))
                        .arg(Arg::new("weeks-per-month").long("weeks-per-month").help("Weeks per month (default 4.33)"))
                        .arg(Arg::new("commute-minutes").long("commute-minutes").help("Commute minutes per working day"))
                        .arg(Arg::new("working-days").long("working-days").help("Working days per week (1-7)"))
                        .arg(Arg::new("overtime-hours").long("overtime-hours").help("Unpaid overtime hours per week"))
                        .arg(Arg::new("prefer-time").long("prefer-time").help("true/false: prefer time display"))
                        .arg(Arg::new("currency").long("currency").help("Display currency: CHF, EUR or USD")),
                )
                .subcommand(
                    Command::new("income")
                        .about("Additional income sources")
                        .subcommand(
                            Command::new("add")
                                .arg(Arg::new("name").long("name").required(true))
                                .arg(Arg::new("amount").long("amount").required(true).help("Monthly amount"))
                                .arg(Arg::new("hours").long("hours").default_value("0").help("Hours per month tied to this income")),
                        )
                        .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true)))
                        .subcommand(json_flags(Command::new("list"))),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Custom expense categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("emoji").long("emoji")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true))),
        )
        .subcommand(
            Command::new("preset")
                .about("Quick-add presets for recurring expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").help("Category id (defaults to misc)"))
                        .arg(Arg::new("emoji").long("emoji")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true))),
        )
        .subcommand(
            Command::new("expense")
                .about("Record and list expenses")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("title").long("title").default_value(""))
                        .arg(Arg::new("category").long("category").help("Category id (defaults to misc)")),
                )
                .subcommand(
                    Command::new("quick")
                        .about("Record an expense from a quick-add preset, dated today")
                        .arg(Arg::new("preset").required(true).help("Preset id or title")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to the current month"))
                        .arg(Arg::new("from").long("from").help("Start month YYYY-MM (with --to)"))
                        .arg(Arg::new("to").long("to").help("End month YYYY-MM inclusive"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N rows"),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to the current month"))
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Per-category monthly budgets, in currency or hours")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("category").long("category").required(true).help("Category id"))
                        .arg(Arg::new("amount").long("amount").help("Monthly budget amount"))
                        .arg(Arg::new("hours").long("hours").help("Monthly budget in hours")),
                )
                .subcommand(Command::new("rm").arg(Arg::new("category").long("category").required(true)))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(json_flags(
                    Command::new("report")
                        .about("Budget consumption for one month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to the current month")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Range analytics over past months")
                .subcommand(json_flags(
                    Command::new("range")
                        .arg(Arg::new("range").required(true).help("1M, 3M, 6M, YTD, 1Y, 3Y or 5Y")),
                ))
                .subcommand(json_flags(
                    Command::new("chart")
                        .about("Cumulative earned-vs-spent series with crossing estimate")
                        .arg(Arg::new("range").required(true).help("1M, 3M, 6M, YTD, 1Y, 3Y or 5Y")),
                )),
        )
        .subcommand(json_flags(
            Command::new("status").about("Current-month dashboard: earned so far, spent, balance"),
        ))
        .subcommand(
            Command::new("convert")
                .about("Convert an amount of money into work time at the current rate")
                .arg(Arg::new("amount").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Import data from files")
                .subcommand(
                    Command::new("expenses")
                        .about("Import expenses from CSV (date,amount,title,category)")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to files")
                .subcommand(
                    Command::new("expenses")
                        .arg(Arg::new("format").long("format").default_value("csv").help("csv|json"))
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(Arg::new("from").long("from").required(true).help("Start month YYYY-MM"))
                        .arg(Arg::new("to").long("to").required(true).help("End month YYYY-MM inclusive")),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete every stored onlytime key")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm deletion"),
                ),
        )
}
