// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CalcResult, ValidationError, require_non_negative, require_positive};
use crate::models::{BreakevenInput, LoanInput, RoiInput};
use crate::presets::DEFAULT_CROP;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

// optional peso sign / PHP prefix, then the number
static CURRENCY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:₱|PHP)\s*").expect("valid currency regex"));
static GROUPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(?:,\d{3})+(?:\.\d+)?$").expect("valid grouping regex"));

/// Parse a raw form value such as `"₱50,000.00"` or `" 12 "`.
pub fn parse_field(field: &'static str, raw: &str) -> CalcResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    let bare = CURRENCY_PREFIX.replace(trimmed, "");
    let bare = bare.trim();
    let cleaned = if GROUPED.is_match(bare) {
        bare.replace(',', "")
    } else {
        bare.to_string()
    };
    cleaned
        .parse::<Decimal>()
        .map_err(|_| ValidationError::NotNumeric {
            field,
            value: trimmed.to_string(),
        })
}

pub fn parse_months(field: &'static str, raw: &str) -> CalcResult<u32> {
    let value = parse_field(field, raw)?;
    if !value.fract().is_zero() {
        return Err(ValidationError::NotInteger {
            field,
            value: raw.trim().to_string(),
        });
    }
    let value = require_positive(field, value)?;
    value.to_u32().ok_or(ValidationError::OutOfRange { field })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanForm {
    pub amount: String,
    pub interest_rate: String,
    pub term_months: String,
}

impl Default for LoanForm {
    fn default() -> Self {
        LoanForm {
            amount: "50000".into(),
            interest_rate: "12".into(),
            term_months: "12".into(),
        }
    }
}

impl LoanForm {
    pub fn parse(&self) -> CalcResult<LoanInput> {
        let principal = require_positive("loan amount", parse_field("loan amount", &self.amount)?)?;
        let annual_rate_percent = require_non_negative(
            "interest rate",
            parse_field("interest rate", &self.interest_rate)?,
        )?;
        let term_months = parse_months("loan term", &self.term_months)?;
        Ok(LoanInput {
            principal,
            annual_rate_percent,
            term_months,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiForm {
    pub crop: String,
    pub farm_size: String,
    pub seed_cost: String,
    pub fertilizer_cost: String,
    pub labor_cost: String,
    pub other_costs: String,
    pub expected_yield: String,
    pub expected_price: String,
}

impl Default for RoiForm {
    fn default() -> Self {
        RoiForm {
            crop: DEFAULT_CROP.into(),
            farm_size: "1.5".into(),
            seed_cost: "3000".into(),
            fertilizer_cost: "8000".into(),
            labor_cost: "15000".into(),
            other_costs: "5000".into(),
            expected_yield: "5".into(),
            expected_price: "24".into(),
        }
    }
}

impl RoiForm {
    pub fn parse(&self) -> CalcResult<RoiInput> {
        let cost = |field: &'static str, raw: &str| -> CalcResult<Decimal> {
            require_non_negative(field, parse_field(field, raw)?)
        };
        Ok(RoiInput {
            crop: self.crop.trim().to_string(),
            farm_size_hectares: require_positive(
                "farm size",
                parse_field("farm size", &self.farm_size)?,
            )?,
            seed_cost: cost("seed cost", &self.seed_cost)?,
            fertilizer_cost: cost("fertilizer cost", &self.fertilizer_cost)?,
            labor_cost: cost("labor cost", &self.labor_cost)?,
            other_costs: cost("other costs", &self.other_costs)?,
            expected_yield_tons: require_positive(
                "expected yield",
                parse_field("expected yield", &self.expected_yield)?,
            )?,
            expected_price_per_kg: require_positive(
                "expected price",
                parse_field("expected price", &self.expected_price)?,
            )?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenForm {
    pub fixed_costs: String,
    pub variable_cost_per_unit: String,
    pub price_per_unit: String,
}

impl Default for BreakevenForm {
    fn default() -> Self {
        BreakevenForm {
            fixed_costs: "25000".into(),
            variable_cost_per_unit: "18".into(),
            price_per_unit: "24".into(),
        }
    }
}

impl BreakevenForm {
    pub fn parse(&self) -> CalcResult<BreakevenInput> {
        let amount = |field: &'static str, raw: &str| -> CalcResult<Decimal> {
            require_non_negative(field, parse_field(field, raw)?)
        };
        Ok(BreakevenInput {
            fixed_costs: amount("fixed costs", &self.fixed_costs)?,
            variable_cost_per_unit: amount(
                "variable cost per unit",
                &self.variable_cost_per_unit,
            )?,
            price_per_unit: amount("price per unit", &self.price_per_unit)?,
        })
    }
}

impl From<&RoiInput> for RoiForm {
    fn from(input: &RoiInput) -> Self {
        RoiForm {
            crop: input.crop.clone(),
            farm_size: input.farm_size_hectares.to_string(),
            seed_cost: input.seed_cost.to_string(),
            fertilizer_cost: input.fertilizer_cost.to_string(),
            labor_cost: input.labor_cost.to_string(),
            other_costs: input.other_costs.to_string(),
            expected_yield: input.expected_yield_tons.to_string(),
            expected_price: input.expected_price_per_kg.to_string(),
        }
    }
}
