// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CalcResult, ValidationError, require_non_negative, require_positive};
use crate::models::{LoanInput, LoanResult};
use rust_decimal::{Decimal, MathematicalOps};

const MONTHS_PER_YEAR: u32 = 12;

/// Fixed monthly payment of an amortizing loan.
///
/// Uses the annuity formula `M = P·i·(1+i)^n / ((1+i)^n − 1)` with the
/// monthly rate `i = r / 100 / 12`, and `M = P / n` when the rate is zero.
/// Results keep full precision; call [`LoanResult::rounded`] for display.
pub fn compute_loan(input: &LoanInput) -> CalcResult<LoanResult> {
    let principal = require_positive("loan amount", input.principal)?;
    let annual_rate = require_non_negative("interest rate", input.annual_rate_percent)?;
    if input.term_months == 0 {
        return Err(ValidationError::NotPositive {
            field: "loan term",
            value: Decimal::ZERO,
        });
    }

    let months = Decimal::from(input.term_months);
    let monthly_rate = annual_rate / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR);

    let monthly_payment = if monthly_rate.is_zero() {
        principal / months
    } else {
        annuity_payment(principal, monthly_rate, input.term_months)?
    };

    let total_payment = monthly_payment
        .checked_mul(months)
        .ok_or(ValidationError::OutOfRange {
            field: "loan amount",
        })?;
    let total_interest = total_payment - principal;

    Ok(LoanResult {
        monthly_payment,
        total_payment,
        total_interest,
        principal,
    })
}

fn annuity_payment(principal: Decimal, monthly_rate: Decimal, months: u32) -> CalcResult<Decimal> {
    let out_of_range = || ValidationError::OutOfRange { field: "loan term" };

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powi(i64::from(months))
        .ok_or_else(out_of_range)?;
    let excess = growth - Decimal::ONE;
    // rate too small to move (1+i)^n at 28 digits
    if excess.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    // P · i · g/(g−1), grouped so the intermediate stays near P·i
    let factor = growth
        .checked_div(excess)
        .and_then(|ratio| ratio.checked_mul(monthly_rate))
        .ok_or_else(out_of_range)?;
    principal
        .checked_mul(factor)
        .ok_or(ValidationError::OutOfRange {
            field: "loan amount",
        })
}
