// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub(crate) fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    pub principal: Decimal,
}

impl LoanResult {
    /// Two-decimal copy for display.
    pub fn rounded(&self) -> LoanResult {
        LoanResult {
            monthly_payment: round_money(self.monthly_payment),
            total_payment: round_money(self.total_payment),
            total_interest: round_money(self.total_interest),
            principal: round_money(self.principal),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiInput {
    pub crop: String,
    pub farm_size_hectares: Decimal,
    pub seed_cost: Decimal,
    pub fertilizer_cost: Decimal,
    pub labor_cost: Decimal,
    pub other_costs: Decimal,
    pub expected_yield_tons: Decimal,
    pub expected_price_per_kg: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub label: String,
    pub amount: Decimal,
    // share of total cost, absent when the total is zero
    pub share_percent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    pub total_costs: Decimal,
    pub total_revenue: Decimal,
    pub profit: Decimal,
    pub roi_percent: Option<Decimal>,
    pub profit_per_hectare: Option<Decimal>,
    pub cost_breakdown: Vec<CostItem>,
}

impl RoiResult {
    pub fn is_profitable(&self) -> bool {
        self.profit > Decimal::ZERO
    }

    /// Money to 2 dp, percentages to 1 dp.
    pub fn rounded(&self) -> RoiResult {
        let pct = |d: Decimal| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        RoiResult {
            total_costs: round_money(self.total_costs),
            total_revenue: round_money(self.total_revenue),
            profit: round_money(self.profit),
            roi_percent: self.roi_percent.map(pct),
            profit_per_hectare: self.profit_per_hectare.map(round_money),
            cost_breakdown: self
                .cost_breakdown
                .iter()
                .map(|c| CostItem {
                    label: c.label.clone(),
                    amount: round_money(c.amount),
                    share_percent: c.share_percent.map(pct),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenInput {
    pub fixed_costs: Decimal,
    pub variable_cost_per_unit: Decimal,
    pub price_per_unit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakevenResult {
    pub breakeven_quantity: Decimal,
    pub breakeven_revenue: Decimal,
    pub contribution_margin: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreakevenOutcome {
    Reached(BreakevenResult),
    // price does not exceed the variable cost, so no quantity recovers the fixed costs
    Undefined { contribution_margin: Decimal },
}

impl BreakevenOutcome {
    pub fn contribution_margin(&self) -> Decimal {
        match self {
            BreakevenOutcome::Reached(r) => r.contribution_margin,
            BreakevenOutcome::Undefined {
                contribution_margin,
            } => *contribution_margin,
        }
    }

    pub fn rounded(&self) -> BreakevenOutcome {
        match self {
            BreakevenOutcome::Reached(r) => BreakevenOutcome::Reached(BreakevenResult {
                breakeven_quantity: round_money(r.breakeven_quantity),
                breakeven_revenue: round_money(r.breakeven_revenue),
                contribution_margin: round_money(r.contribution_margin),
            }),
            BreakevenOutcome::Undefined {
                contribution_margin,
            } => BreakevenOutcome::Undefined {
                contribution_margin: round_money(*contribution_margin),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPreset {
    pub crop: String,
    pub seed_cost: Decimal,
    pub fertilizer_cost: Decimal,
    pub labor_cost: Decimal,
    pub other_costs: Decimal,
    pub expected_yield_tons: Decimal,
    pub expected_price_per_kg: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Tagalog,
    Bisaya,
    Ilonggo,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Tagalog,
        Language::Bisaya,
        Language::Ilonggo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Tagalog => "tagalog",
            Language::Bisaya => "bisaya",
            Language::Ilonggo => "ilonggo",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let wanted = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown language '{}'", s.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    pub primary_crop: String,
    pub farm_size_hectares: Option<Decimal>,
    pub language: Language,
    pub offline_mode: bool,
    pub registered_at: DateTime<Utc>,
}
