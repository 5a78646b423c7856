// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CalcResult, ValidationError, require_non_negative, require_positive};
use crate::models::{CostItem, RoiInput, RoiResult};
use rust_decimal::Decimal;

/// Breakdown order used for display and export.
pub const COST_LABELS: [&str; 4] = ["Seeds", "Fertilizer", "Labor", "Others"];

const KG_PER_TON: Decimal = Decimal::ONE_THOUSAND;

pub fn compute_roi(input: &RoiInput) -> CalcResult<RoiResult> {
    let costs = [
        require_non_negative("seed cost", input.seed_cost)?,
        require_non_negative("fertilizer cost", input.fertilizer_cost)?,
        require_non_negative("labor cost", input.labor_cost)?,
        require_non_negative("other costs", input.other_costs)?,
    ];
    let farm_size = require_non_negative("farm size", input.farm_size_hectares)?;
    let yield_tons = require_positive("expected yield", input.expected_yield_tons)?;
    let price_per_kg = require_positive("expected price", input.expected_price_per_kg)?;

    let total_costs = costs
        .iter()
        .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(*c))
        .ok_or(ValidationError::OutOfRange {
            field: "total costs",
        })?;
    let total_revenue = yield_tons
        .checked_mul(KG_PER_TON)
        .and_then(|kg| kg.checked_mul(price_per_kg))
        .ok_or(ValidationError::OutOfRange {
            field: "expected revenue",
        })?;
    let profit = total_revenue
        .checked_sub(total_costs)
        .ok_or(ValidationError::OutOfRange { field: "profit" })?;

    let roi_percent = ratio(profit, total_costs, Decimal::ONE_HUNDRED, "ROI")?;
    let profit_per_hectare = ratio(profit, farm_size, Decimal::ONE, "profit per hectare")?;

    let cost_breakdown = COST_LABELS
        .iter()
        .zip(costs)
        .map(|(label, amount)| -> CalcResult<CostItem> {
            Ok(CostItem {
                label: (*label).to_string(),
                amount,
                share_percent: ratio(amount, total_costs, Decimal::ONE_HUNDRED, "cost share")?,
            })
        })
        .collect::<CalcResult<Vec<_>>>()?;

    Ok(RoiResult {
        total_costs,
        total_revenue,
        profit,
        roi_percent,
        profit_per_hectare,
        cost_breakdown,
    })
}

// numerator / denominator × scale, or None for a zero denominator
fn ratio(
    numerator: Decimal,
    denominator: Decimal,
    scale: Decimal,
    field: &'static str,
) -> CalcResult<Option<Decimal>> {
    if denominator.is_zero() {
        return Ok(None);
    }
    numerator
        .checked_div(denominator)
        .and_then(|q| q.checked_mul(scale))
        .map(Some)
        .ok_or(ValidationError::OutOfRange { field })
}
