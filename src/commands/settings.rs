// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::profile::{ProfileRepository, SqliteProfileStore};
use crate::utils::{arg_string, get_currency_symbol, pretty_table, set_currency_symbol};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let profiles = SqliteProfileStore::new(conn);
    match m.subcommand() {
        Some(("set-currency", sub)) => {
            let symbol = arg_string(sub, "symbol")?;
            if symbol.is_empty() {
                return Err(anyhow!("Currency symbol must not be empty"));
            }
            set_currency_symbol(conn, &symbol)?;
            println!("Currency symbol set to {}", symbol);
        }
        Some(("offline", sub)) => {
            let on = arg_string(sub, "mode")? == "on";
            set_offline_mode(&profiles, on)?;
            println!("Offline mode {}", if on { "enabled" } else { "disabled" });
        }
        Some(("show", _)) => {
            let offline = profiles
                .load()?
                .map(|p| if p.offline_mode { "on" } else { "off" })
                .unwrap_or("-");
            let rows = vec![
                vec!["Currency Symbol".into(), get_currency_symbol(conn)?],
                vec!["Offline Mode".into(), offline.into()],
                vec!["Database".into(), crate::db::db_path()?.display().to_string()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}

pub fn set_offline_mode(profiles: &dyn ProfileRepository, on: bool) -> Result<()> {
    let mut profile = profiles
        .load()?
        .ok_or_else(|| anyhow!("No profile yet; run `tanimpro profile setup` first"))?;
    profile.offline_mode = on;
    profiles.save(&profile)
}
