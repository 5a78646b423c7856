// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CropPreset, RoiInput};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

pub const DEFAULT_CROP: &str = "Rice (Palay)";

static BUILTIN: Lazy<Vec<CropPreset>> = Lazy::new(|| {
    vec![
        preset(DEFAULT_CROP, 3000, 8000, 15000, 5000, 5, 24),
        preset("Corn", 4000, 10000, 12000, 6000, 8, 18),
        preset("Tomato", 2000, 6000, 20000, 8000, 15, 45),
    ]
});

fn preset(
    crop: &str,
    seeds: i64,
    fertilizer: i64,
    labor: i64,
    others: i64,
    yield_tons: i64,
    price_per_kg: i64,
) -> CropPreset {
    CropPreset {
        crop: crop.to_string(),
        seed_cost: Decimal::from(seeds),
        fertilizer_cost: Decimal::from(fertilizer),
        labor_cost: Decimal::from(labor),
        other_costs: Decimal::from(others),
        expected_yield_tons: Decimal::from(yield_tons),
        expected_price_per_kg: Decimal::from(price_per_kg),
    }
}

pub fn builtin_presets() -> &'static [CropPreset] {
    &BUILTIN
}

pub fn builtin_preset(crop: &str) -> Option<&'static CropPreset> {
    let wanted = crop.trim();
    BUILTIN.iter().find(|p| p.crop.eq_ignore_ascii_case(wanted))
}

/// Replace the crop, cost, yield and price fields of `current` with the
/// preset's values. Farm size is the only field carried over.
pub fn apply_preset(current: &RoiInput, preset: &CropPreset) -> RoiInput {
    RoiInput {
        crop: preset.crop.clone(),
        farm_size_hectares: current.farm_size_hectares,
        seed_cost: preset.seed_cost,
        fertilizer_cost: preset.fertilizer_cost,
        labor_cost: preset.labor_cost,
        other_costs: preset.other_costs,
        expected_yield_tons: preset.expected_yield_tons,
        expected_price_per_kg: preset.expected_price_per_kg,
    }
}
