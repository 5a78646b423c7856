// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::compute_loan;
use crate::forms::LoanForm;
use crate::utils::{arg_string, fmt_money, get_currency_symbol, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = LoanForm {
        amount: arg_string(sub, "amount")?,
        interest_rate: arg_string(sub, "rate")?,
        term_months: arg_string(sub, "months")?,
    };
    let input = form.parse()?;
    tracing::debug!(?input, "computing loan");
    let result = compute_loan(&input)?.rounded();
    tracing::debug!(?result, "loan computed");

    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &result)? {
        let sym = get_currency_symbol(conn)?;
        let rows = vec![
            vec!["Monthly Payment".into(), fmt_money(&result.monthly_payment, &sym)],
            vec!["Principal Amount".into(), fmt_money(&result.principal, &sym)],
            vec!["Total Interest".into(), fmt_money(&result.total_interest, &sym)],
            vec!["Total Payment".into(), fmt_money(&result.total_payment, &sym)],
        ];
        println!("{}", pretty_table(&["Loan", "Amount"], rows));
        println!(
            "{} months at {}% per year. Make sure seasonal cash flow can cover the monthly payment.",
            input.term_months, input.annual_rate_percent
        );
    }
    Ok(())
}
