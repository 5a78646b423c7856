// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calc::compute_breakeven;
use crate::forms::BreakevenForm;
use crate::models::BreakevenOutcome;
use crate::utils::{arg_string, fmt_money, get_currency_symbol, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let form = BreakevenForm {
        fixed_costs: arg_string(sub, "fixed")?,
        variable_cost_per_unit: arg_string(sub, "variable")?,
        price_per_unit: arg_string(sub, "price")?,
    };
    let input = form.parse()?;
    tracing::debug!(?input, "computing break-even");
    let outcome = compute_breakeven(&input)?.rounded();

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &outcome)? {
        return Ok(());
    }
    let sym = get_currency_symbol(conn)?;
    match &outcome {
        BreakevenOutcome::Reached(r) => {
            let rows = vec![
                vec!["Break-even Quantity".into(), format!("{:.2} kg", r.breakeven_quantity)],
                vec!["Break-even Revenue".into(), fmt_money(&r.breakeven_revenue, &sym)],
                vec![
                    "Contribution Margin".into(),
                    format!("{}/kg", fmt_money(&r.contribution_margin, &sym)),
                ],
            ];
            println!("{}", pretty_table(&["Break-even", "Value"], rows));
            println!(
                "You need to sell at least {:.2} kg to cover all your costs.",
                r.breakeven_quantity
            );
        }
        BreakevenOutcome::Undefined {
            contribution_margin,
        } => {
            tracing::warn!(%contribution_margin, "break-even not reachable");
            println!(
                "Break-even is not reachable: the selling price ({}) does not exceed the variable cost ({}) per kg, so the contribution margin is {}/kg.",
                fmt_money(&input.price_per_unit, &sym),
                fmt_money(&input.variable_cost_per_unit, &sym),
                fmt_money(contribution_margin, &sym),
            );
        }
    }
    Ok(())
}
