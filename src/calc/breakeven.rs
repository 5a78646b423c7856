// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CalcResult, ValidationError, require_non_negative};
use crate::models::{BreakevenInput, BreakevenOutcome, BreakevenResult};
use rust_decimal::Decimal;

/// Units (and revenue) needed to recover fixed costs.
///
/// A contribution margin of zero or less yields
/// [`BreakevenOutcome::Undefined`] instead of an infinite or negative
/// quantity.
pub fn compute_breakeven(input: &BreakevenInput) -> CalcResult<BreakevenOutcome> {
    let fixed = require_non_negative("fixed costs", input.fixed_costs)?;
    let variable = require_non_negative("variable cost per unit", input.variable_cost_per_unit)?;
    let price = require_non_negative("price per unit", input.price_per_unit)?;

    let contribution_margin = price - variable;
    if contribution_margin <= Decimal::ZERO {
        return Ok(BreakevenOutcome::Undefined {
            contribution_margin,
        });
    }

    let breakeven_quantity = fixed
        .checked_div(contribution_margin)
        .ok_or(ValidationError::OutOfRange {
            field: "fixed costs",
        })?;
    let breakeven_revenue =
        breakeven_quantity
            .checked_mul(price)
            .ok_or(ValidationError::OutOfRange {
                field: "price per unit",
            })?;

    Ok(BreakevenOutcome::Reached(BreakevenResult {
        breakeven_quantity,
        breakeven_revenue,
        contribution_margin,
    }))
}
