// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::compute_roi;
use crate::commands::presets::find_preset;
use crate::forms::RoiForm;
use crate::models::{RoiInput, RoiResult};
use crate::presets::{DEFAULT_CROP, apply_preset};
use crate::profile::{ProfileRepository, SqliteProfileStore};
use crate::utils::{
    fmt_money, fmt_opt, fmt_percent, get_currency_symbol, maybe_print_json, pretty_table,
};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RoiReport {
    pub input: RoiInput,
    pub result: RoiResult,
}

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = roi_report(conn, &SqliteProfileStore::new(conn), sub)?;
    if report.result.roi_percent.is_none() {
        tracing::warn!("total costs are zero; ROI is undefined");
    }

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        let sym = get_currency_symbol(conn)?;
        let r = &report.result;
        let money = |d: &rust_decimal::Decimal| fmt_money(d, &sym);
        let summary = vec![
            vec!["Total Costs".into(), money(&r.total_costs)],
            vec!["Total Revenue".into(), money(&r.total_revenue)],
            vec!["Net Profit".into(), money(&r.profit)],
            vec!["ROI".into(), fmt_opt(r.roi_percent, fmt_percent)],
            vec![
                "Profit per Hectare".into(),
                fmt_opt(r.profit_per_hectare, money),
            ],
        ];
        println!(
            "{} on {} ha",
            report.input.crop, report.input.farm_size_hectares
        );
        println!("{}", pretty_table(&["Financial Summary", "Amount"], summary));

        let breakdown = r
            .cost_breakdown
            .iter()
            .map(|c| {
                vec![
                    c.label.clone(),
                    money(&c.amount),
                    fmt_opt(c.share_percent, fmt_percent),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Cost", "Amount", "Share"], breakdown));
        if !r.is_profitable() {
            println!("This plan does not turn a profit at the expected yield and price.");
        }
    }
    Ok(())
}

/// Resolve the ROI input from defaults, profile, preset and flags, then compute.
pub fn roi_report(
    conn: &Connection,
    profiles: &dyn ProfileRepository,
    sub: &clap::ArgMatches,
) -> Result<RoiReport> {
    let input = resolve_input(conn, profiles, sub)?;
    tracing::debug!(?input, "computing ROI");
    let result = compute_roi(&input)?.rounded();
    Ok(RoiReport { input, result })
}

// Layering: built-in defaults, then the crop preset (bulk overwrite),
// then farm size from flag or profile, then any explicit cost flags.
pub fn resolve_input(
    conn: &Connection,
    profiles: &dyn ProfileRepository,
    sub: &clap::ArgMatches,
) -> Result<RoiInput> {
    let profile = profiles.load()?;
    let flag = |id: &str| sub.get_one::<String>(id).map(|s| s.trim().to_string());

    let defaults = RoiForm::default().parse()?;
    let preset = match flag("crop") {
        Some(crop) => Some(
            find_preset(conn, &crop)?
                .ok_or_else(|| anyhow!("No preset for crop '{}' (see `tanimpro preset list`)", crop))?,
        ),
        None => {
            let crop = profile
                .as_ref()
                .map(|p| p.primary_crop.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CROP.to_string());
            let found = find_preset(conn, &crop)?;
            if found.is_none() {
                tracing::debug!(crop = %crop, "profile crop has no preset; using defaults");
            }
            found
        }
    };
    let base = match preset {
        Some(p) => apply_preset(&defaults, &p),
        None => defaults,
    };

    let mut form = RoiForm::from(&base);
    if let Some(size) = flag("farm-size") {
        form.farm_size = size;
    } else if let Some(size) = profile.as_ref().and_then(|p| p.farm_size_hectares) {
        form.farm_size = size.to_string();
    }
    for (id, field) in [
        ("seeds", &mut form.seed_cost),
        ("fertilizer", &mut form.fertilizer_cost),
        ("labor", &mut form.labor_cost),
        ("others", &mut form.other_costs),
        ("yield", &mut form.expected_yield),
        ("price", &mut form.expected_price),
    ] {
        if let Some(v) = flag(id) {
            *field = v;
        }
    }
    Ok(form.parse()?)
}
