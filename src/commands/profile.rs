// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Language, UserProfile};
use crate::profile::{ProfileRepository, SqliteProfileStore};
use crate::utils::{arg_string, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    handle_with(&SqliteProfileStore::new(conn), m)
}

pub fn handle_with(repo: &dyn ProfileRepository, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("setup", sub)) => {
            let profile = profile_from_args(sub)?;
            repo.save(&profile)?;
            tracing::info!(name = %profile.name, "profile saved");
            println!("Kumusta, {}! Profile saved.", profile.name);
        }
        Some(("show", sub)) => match repo.load()? {
            Some(p) => {
                if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &p)? {
                    println!("{}", pretty_table(&["Field", "Value"], profile_rows(&p)));
                }
            }
            None => println!("No profile yet; run `tanimpro profile setup`."),
        },
        Some(("clear", _)) => {
            if repo.clear()? {
                println!("Profile removed");
            } else {
                println!("No profile to remove");
            }
        }
        _ => {}
    }
    Ok(())
}

pub fn profile_from_args(sub: &clap::ArgMatches) -> Result<UserProfile> {
    let farm_size = match sub.get_one::<String>("farm-size") {
        Some(raw) => Some(parse_decimal(raw).context("Invalid --farm-size")?),
        None => None,
    };
    let profile = UserProfile {
        name: arg_string(sub, "name")?,
        location: arg_string(sub, "location")?,
        primary_crop: arg_string(sub, "crop")?,
        farm_size_hectares: farm_size,
        language: arg_string(sub, "language")?.parse::<Language>()?,
        offline_mode: sub.get_flag("offline"),
        registered_at: Utc::now(),
    };
    profile.validate()?;
    Ok(profile)
}

fn profile_rows(p: &UserProfile) -> Vec<Vec<String>> {
    vec![
        vec!["Name".into(), p.name.clone()],
        vec!["Location".into(), p.location.clone()],
        vec!["Primary Crop".into(), p.primary_crop.clone()],
        vec![
            "Farm Size".into(),
            p.farm_size_hectares
                .map(|s| format!("{} ha", s))
                .unwrap_or_else(|| "-".into()),
        ],
        vec!["Language".into(), p.language.as_str().into()],
        vec![
            "Offline Mode".into(),
            if p.offline_mode { "on" } else { "off" }.into(),
        ],
        vec![
            "Registered".into(),
            p.registered_at.format("%Y-%m-%d").to_string(),
        ],
    ]
}
