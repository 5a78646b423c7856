// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn output_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON document per line")
            .action(ArgAction::SetTrue)
            .conflicts_with("json"),
    )
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).allow_hyphen_values(true)
}

pub(crate) fn roi_args(cmd: Command) -> Command {
    cmd.arg(opt("crop", "Crop preset to start from (e.g. \"Rice (Palay)\", Corn, Tomato)"))
        .arg(opt("farm-size", "Farm size in hectares"))
        .arg(opt("seeds", "Seed cost"))
        .arg(opt("fertilizer", "Fertilizer cost"))
        .arg(opt("labor", "Labor cost"))
        .arg(opt("others", "Other costs"))
        .arg(opt("yield", "Expected yield in tons"))
        .arg(opt("price", "Expected price per kg"))
}

pub fn build_cli() -> Command {
    Command::new("tanimpro")
        .about("Farm finance calculators: loans, ROI and break-even")
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .help("Debug logging on stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(output_args(
            Command::new("loan")
                .about("Monthly payment of a fixed-rate loan")
                .arg(opt("amount", "Loan amount").default_value("50000"))
                .arg(opt("rate", "Interest rate, percent per year").default_value("12"))
                .arg(opt("months", "Loan term in months").default_value("12")),
        ))
        .subcommand(output_args(roi_args(
            Command::new("roi").about("Return on investment for one growing season"),
        )))
        .subcommand(output_args(
            Command::new("breakeven")
                .about("Break-even quantity and revenue")
                .arg(opt("fixed", "Fixed costs (land rent, equipment, insurance)").default_value("25000"))
                .arg(opt("variable", "Variable cost per unit (per kg)").default_value("18"))
                .arg(opt("price", "Selling price per unit (per kg)").default_value("24")),
        ))
        .subcommand(
            Command::new("preset")
                .about("Crop cost and yield presets")
                .subcommand(output_args(Command::new("list")))
                .subcommand(
                    Command::new("import")
                        .about("Import presets from CSV: crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg")
                        .arg(Arg::new("path").long("path").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove an imported preset")
                        .arg(Arg::new("crop").long("crop").required(true)),
                ),
        )
        .subcommand(
            Command::new("profile")
                .about("Farmer profile")
                .subcommand(
                    Command::new("setup")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("location").long("location").required(true))
                        .arg(Arg::new("crop").long("crop").default_value(""))
                        .arg(Arg::new("farm-size").long("farm-size"))
                        .arg(Arg::new("language").long("language").default_value("english"))
                        .arg(
                            Arg::new("offline")
                                .long("offline")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(output_args(Command::new("show")))
                .subcommand(Command::new("clear")),
        )
        .subcommand(
            Command::new("settings")
                .about("Display and offline preferences")
                .subcommand(
                    Command::new("set-currency")
                        .arg(Arg::new("symbol").long("symbol").required(true)),
                )
                .subcommand(
                    Command::new("offline").arg(
                        Arg::new("mode")
                            .long("mode")
                            .required(true)
                            .value_parser(["on", "off"]),
                    ),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(
            Command::new("export")
                .about("Write calculator results to a file")
                .subcommand(roi_args(
                    Command::new("roi")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                )),
        )
}
