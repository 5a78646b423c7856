// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tanimpro::calc::compute_breakeven;
use tanimpro::models::{BreakevenInput, BreakevenOutcome};

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn input(fixed: &str, variable: &str, price: &str) -> BreakevenInput {
    BreakevenInput {
        fixed_costs: dec(fixed),
        variable_cost_per_unit: dec(variable),
        price_per_unit: dec(price),
    }
}

#[test]
fn default_form_breakeven() {
    let outcome = compute_breakeven(&input("25000", "18", "24")).unwrap();
    let BreakevenOutcome::Reached(r) = outcome.rounded() else {
        panic!("expected a break-even point");
    };
    assert_eq!(r.contribution_margin, dec("6"));
    assert_eq!(r.breakeven_quantity, dec("4166.67"));
    assert_eq!(r.breakeven_revenue, dec("100000"));
}

#[test]
fn quantity_times_margin_recovers_fixed_costs() {
    for (f, v, p) in [
        ("25000", "18", "24"),
        ("1000", "0", "3"),
        ("12345.67", "7.25", "9.10"),
        ("0", "5", "6"),
    ] {
        let BreakevenOutcome::Reached(r) = compute_breakeven(&input(f, v, p)).unwrap() else {
            panic!("expected a break-even point for {} {} {}", f, v, p);
        };
        let recovered = r.breakeven_quantity * r.contribution_margin;
        assert!((recovered - dec(f)).abs() < dec("0.01"), "{} {} {}", f, v, p);
        assert!((r.breakeven_revenue - r.breakeven_quantity * dec(p)).abs() < dec("0.01"));
    }
}

#[test]
fn price_not_above_variable_cost_is_undefined() {
    let outcome = compute_breakeven(&input("25000", "24", "24")).unwrap();
    assert_eq!(
        outcome,
        BreakevenOutcome::Undefined {
            contribution_margin: Decimal::ZERO
        }
    );

    let outcome = compute_breakeven(&input("25000", "30", "24")).unwrap();
    assert_eq!(outcome.contribution_margin(), dec("-6"));
    assert!(matches!(outcome, BreakevenOutcome::Undefined { .. }));
}

#[test]
fn undefined_outcome_serializes_as_explicit_status() {
    let outcome = compute_breakeven(&input("100", "10", "4")).unwrap();
    let v = serde_json::to_value(&outcome).unwrap();
    assert_eq!(v["status"], "undefined");
    assert!(v.get("breakeven_quantity").is_none());

    let outcome = compute_breakeven(&input("100", "4", "10")).unwrap();
    let v = serde_json::to_value(&outcome).unwrap();
    assert_eq!(v["status"], "reached");
    assert!(v.get("breakeven_quantity").is_some());
}

#[test]
fn negative_inputs_are_rejected() {
    let err = compute_breakeven(&input("-1", "18", "24")).unwrap_err();
    assert_eq!(err.field(), "fixed costs");
    let err = compute_breakeven(&input("1", "-18", "24")).unwrap_err();
    assert_eq!(err.field(), "variable cost per unit");
}
