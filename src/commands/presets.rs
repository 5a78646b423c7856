// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CropPreset;
use crate::presets::{builtin_preset, builtin_presets};
use crate::utils::{arg_string, maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(conn, sub)?,
        Some(("import", sub)) => {
            let path = arg_string(sub, "path")?;
            let n = import_presets(conn, &path)?;
            println!("Imported {} preset(s) from {}", n, path);
        }
        Some(("rm", sub)) => {
            let crop = arg_string(sub, "crop")?;
            let n = conn.execute("DELETE FROM crop_presets WHERE crop=?1", params![crop])?;
            if n == 0 {
                return Err(anyhow!("No imported preset named '{}'", crop));
            }
            println!("Removed preset '{}'", crop);
        }
        _ => {}
    }
    Ok(())
}

/// Imported presets win over built-ins with the same name.
pub fn find_preset(conn: &Connection, crop: &str) -> Result<Option<CropPreset>> {
    let mut stmt = conn.prepare(
        "SELECT crop, seed_cost, fertilizer_cost, labor_cost, other_costs, expected_yield_tons, expected_price_per_kg
         FROM crop_presets WHERE crop=?1",
    )?;
    let row = stmt
        .query_row(params![crop.trim()], row_strings)
        .optional()?;
    match row {
        Some(cols) => Ok(Some(preset_from_strings(&cols)?)),
        None => Ok(builtin_preset(crop).cloned()),
    }
}

pub fn stored_presets(conn: &Connection) -> Result<Vec<CropPreset>> {
    let mut stmt = conn.prepare(
        "SELECT crop, seed_cost, fertilizer_cost, labor_cost, other_costs, expected_yield_tons, expected_price_per_kg
         FROM crop_presets ORDER BY crop",
    )?;
    let rows = stmt.query_map([], row_strings)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(preset_from_strings(&row?)?);
    }
    Ok(out)
}

pub fn upsert_preset(conn: &Connection, p: &CropPreset) -> Result<()> {
    conn.execute(
        "INSERT INTO crop_presets(crop, seed_cost, fertilizer_cost, labor_cost, other_costs, expected_yield_tons, expected_price_per_kg)
         VALUES (?1,?2,?3,?4,?5,?6,?7)
         ON CONFLICT(crop) DO UPDATE SET
            seed_cost=excluded.seed_cost,
            fertilizer_cost=excluded.fertilizer_cost,
            labor_cost=excluded.labor_cost,
            other_costs=excluded.other_costs,
            expected_yield_tons=excluded.expected_yield_tons,
            expected_price_per_kg=excluded.expected_price_per_kg",
        params![
            p.crop,
            p.seed_cost.to_string(),
            p.fertilizer_cost.to_string(),
            p.labor_cost.to_string(),
            p.other_costs.to_string(),
            p.expected_yield_tons.to_string(),
            p.expected_price_per_kg.to_string()
        ],
    )?;
    Ok(())
}

/// CSV header: crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg
pub fn import_presets(conn: &Connection, path: &str) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut parsed = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let line = i + 2;
        let cols: Vec<String> = (0..7)
            .map(|c| {
                rec.get(c)
                    .map(|s| s.to_string())
                    .with_context(|| format!("Line {}: expected 7 columns", line))
            })
            .collect::<Result<_>>()?;
        let preset =
            preset_from_strings(&cols).with_context(|| format!("Line {}: invalid preset", line))?;
        parsed.push(preset);
    }

    // all-or-nothing
    let tx = conn.unchecked_transaction()?;
    for p in &parsed {
        upsert_preset(&tx, p)?;
    }
    tx.commit()?;
    tracing::info!(count = parsed.len(), path, "imported crop presets");
    Ok(parsed.len())
}

fn row_strings(r: &rusqlite::Row<'_>) -> rusqlite::Result<Vec<String>> {
    (0..7).map(|i| r.get::<_, String>(i)).collect()
}

fn preset_from_strings(cols: &[String]) -> Result<CropPreset> {
    let crop = cols[0].trim().to_string();
    if crop.is_empty() {
        return Err(anyhow!("crop name is empty"));
    }
    let amount = |idx: usize, what: &str| -> Result<_> {
        let d = parse_decimal(&cols[idx]).with_context(|| format!("{} for {}", what, crop))?;
        if d.is_sign_negative() && !d.is_zero() {
            return Err(anyhow!("{} for {} must not be negative", what, crop));
        }
        Ok(d)
    };
    let preset = CropPreset {
        seed_cost: amount(1, "seed cost")?,
        fertilizer_cost: amount(2, "fertilizer cost")?,
        labor_cost: amount(3, "labor cost")?,
        other_costs: amount(4, "other costs")?,
        expected_yield_tons: amount(5, "expected yield")?,
        expected_price_per_kg: amount(6, "expected price")?,
        crop: crop.clone(),
    };
    if preset.expected_yield_tons.is_zero() || preset.expected_price_per_kg.is_zero() {
        return Err(anyhow!(
            "expected yield and price for {} must be greater than zero",
            preset.crop
        ));
    }
    Ok(preset)
}

#[derive(Serialize)]
struct PresetRow<'a> {
    source: &'static str,
    #[serde(flatten)]
    preset: &'a CropPreset,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let stored = stored_presets(conn)?;
    let mut rows: Vec<PresetRow<'_>> = builtin_presets()
        .iter()
        .filter(|b| !stored.iter().any(|s| s.crop.eq_ignore_ascii_case(&b.crop)))
        .map(|preset| PresetRow {
            source: "built-in",
            preset,
        })
        .collect();
    rows.extend(stored.iter().map(|preset| PresetRow {
        source: "imported",
        preset,
    }));

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        let data = rows
            .iter()
            .map(|r| {
                vec![
                    r.preset.crop.clone(),
                    r.preset.seed_cost.to_string(),
                    r.preset.fertilizer_cost.to_string(),
                    r.preset.labor_cost.to_string(),
                    r.preset.other_costs.to_string(),
                    r.preset.expected_yield_tons.to_string(),
                    r.preset.expected_price_per_kg.to_string(),
                    r.source.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "Crop",
                    "Seeds",
                    "Fertilizer",
                    "Labor",
                    "Others",
                    "Yield (t)",
                    "Price (/kg)",
                    "Source"
                ],
                data
            )
        );
    }
    Ok(())
}
