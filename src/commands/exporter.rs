// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::roi::roi_report;
use crate::profile::{ProfileRepository, SqliteProfileStore};
use crate::utils::arg_string;
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    handle_with(conn, &SqliteProfileStore::new(conn), m)
}

pub fn handle_with(
    conn: &Connection,
    profiles: &dyn ProfileRepository,
    m: &clap::ArgMatches,
) -> Result<()> {
    match m.subcommand() {
        Some(("roi", sub)) => export_roi(conn, profiles, sub),
        _ => Ok(()),
    }
}

fn export_roi(
    conn: &Connection,
    profiles: &dyn ProfileRepository,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let fmt = arg_string(sub, "format")?.to_lowercase();
    let out = arg_string(sub, "out")?;
    if fmt != "csv" && fmt != "json" {
        return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
    }

    let report = roi_report(conn, profiles, sub)?;
    let r = &report.result;
    let opt = |d: Option<rust_decimal::Decimal>| d.map(|v| v.to_string()).unwrap_or_default();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record(["label", "amount", "share_percent"])?;
            for c in &r.cost_breakdown {
                wtr.write_record([c.label.clone(), c.amount.to_string(), opt(c.share_percent)])?;
            }
            wtr.write_record(["Total".to_string(), r.total_costs.to_string(), String::new()])?;
            wtr.flush()?;
        }
        _ => {
            let doc = json!({
                "crop": report.input.crop,
                "farm_size_hectares": report.input.farm_size_hectares,
                "total_costs": r.total_costs,
                "total_revenue": r.total_revenue,
                "profit": r.profit,
                "roi_percent": r.roi_percent,
                "profit_per_hectare": r.profit_per_hectare,
                "cost_breakdown": r.cost_breakdown,
            });
            std::fs::write(&out, serde_json::to_string_pretty(&doc)?)?;
        }
    }
    tracing::info!(path = %out, format = %fmt, "exported ROI");
    println!("Exported ROI for {} to {}", report.input.crop, out);
    Ok(())
}
