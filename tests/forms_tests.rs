// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tanimpro::ValidationError;
use tanimpro::forms::{BreakevenForm, LoanForm, RoiForm, parse_field, parse_months};

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn default_forms_parse() {
    let loan = LoanForm::default().parse().unwrap();
    assert_eq!(loan.principal, dec("50000"));
    assert_eq!(loan.annual_rate_percent, dec("12"));
    assert_eq!(loan.term_months, 12);

    let roi = RoiForm::default().parse().unwrap();
    assert_eq!(roi.crop, "Rice (Palay)");
    assert_eq!(roi.farm_size_hectares, dec("1.5"));
    assert_eq!(roi.labor_cost, dec("15000"));

    let be = BreakevenForm::default().parse().unwrap();
    assert_eq!(be.fixed_costs, dec("25000"));
    assert_eq!(be.price_per_unit, dec("24"));
}

#[test]
fn accepts_peso_sign_grouping_and_padding() {
    assert_eq!(parse_field("x", "₱50,000.00").unwrap(), dec("50000.00"));
    assert_eq!(parse_field("x", "PHP 1,250").unwrap(), dec("1250"));
    assert_eq!(parse_field("x", "  12 ").unwrap(), dec("12"));
    assert_eq!(parse_field("x", "0.5").unwrap(), dec("0.5"));
}

#[test]
fn reports_field_named_errors() {
    assert_eq!(
        parse_field("seed cost", "   ").unwrap_err(),
        ValidationError::Missing { field: "seed cost" }
    );
    assert_eq!(
        parse_field("seed cost", "abc").unwrap_err(),
        ValidationError::NotNumeric {
            field: "seed cost",
            value: "abc".into()
        }
    );
    // ambiguous grouping is not guessed at
    assert!(matches!(
        parse_field("x", "1,5").unwrap_err(),
        ValidationError::NotNumeric { .. }
    ));
    assert!(matches!(
        parse_field("x", "NaN").unwrap_err(),
        ValidationError::NotNumeric { .. }
    ));
}

#[test]
fn loan_term_must_be_positive_whole_months() {
    assert_eq!(parse_months("loan term", "12.0").unwrap(), 12);
    assert!(matches!(
        parse_months("loan term", "12.5").unwrap_err(),
        ValidationError::NotInteger { .. }
    ));
    assert!(matches!(
        parse_months("loan term", "0").unwrap_err(),
        ValidationError::NotPositive { .. }
    ));
    assert!(matches!(
        parse_months("loan term", "-6").unwrap_err(),
        ValidationError::NotPositive { .. }
    ));
    assert!(matches!(
        parse_months("loan term", "99999999999").unwrap_err(),
        ValidationError::OutOfRange { .. }
    ));
}

#[test]
fn loan_form_rejects_before_computing() {
    let form = LoanForm {
        amount: "0".into(),
        ..LoanForm::default()
    };
    assert_eq!(form.parse().unwrap_err().field(), "loan amount");

    let form = LoanForm {
        interest_rate: "twelve".into(),
        ..LoanForm::default()
    };
    assert_eq!(form.parse().unwrap_err().field(), "interest rate");
}

#[test]
fn roi_form_requires_positive_farm_size() {
    let form = RoiForm {
        farm_size: "0".into(),
        ..RoiForm::default()
    };
    assert_eq!(
        form.parse().unwrap_err(),
        ValidationError::NotPositive {
            field: "farm size",
            value: Decimal::ZERO
        }
    );

    let form = RoiForm {
        other_costs: "-5".into(),
        ..RoiForm::default()
    };
    assert_eq!(form.parse().unwrap_err().field(), "other costs");
}

#[test]
fn roi_form_from_input_preserves_values() {
    let input = RoiForm::default().parse().unwrap();
    let again = RoiForm::from(&input).parse().unwrap();
    assert_eq!(input, again);
}
