// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use std::io::Write;
use tanimpro::commands::presets::{self, find_preset, import_presets, stored_presets};
use tanimpro::{cli, db};
use tempfile::NamedTempFile;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn csv_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", body).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn builtin_lookup_ignores_case_and_padding() {
    let conn = setup();
    let p = find_preset(&conn, "  tomato ").unwrap().unwrap();
    assert_eq!(p.crop, "Tomato");
    assert_eq!(p.labor_cost, Decimal::from(20000));
    assert_eq!(p.expected_price_per_kg, Decimal::from(45));
    assert!(find_preset(&conn, "Durian").unwrap().is_none());
}

#[test]
fn imported_presets_shadow_builtins() {
    let conn = setup();
    let file = csv_file(
        "crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg\n\
         Corn, 4500, 11000, 12500, 6000, 7.5, 19.50\n\
         Eggplant,1500,5000,18000,4000,12,35\n",
    );
    let n = import_presets(&conn, file.path().to_str().unwrap()).unwrap();
    assert_eq!(n, 2);

    let corn = find_preset(&conn, "CORN").unwrap().unwrap();
    assert_eq!(corn.seed_cost, Decimal::from(4500));
    assert_eq!(corn.expected_yield_tons, Decimal::from_str_exact("7.5").unwrap());

    let eggplant = find_preset(&conn, "eggplant").unwrap().unwrap();
    assert_eq!(eggplant.crop, "Eggplant");

    // re-import updates in place
    let file = csv_file(
        "crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg\nCorn,1,2,3,4,5,6\n",
    );
    import_presets(&conn, file.path().to_str().unwrap()).unwrap();
    assert_eq!(stored_presets(&conn).unwrap().len(), 2);
    assert_eq!(
        find_preset(&conn, "Corn").unwrap().unwrap().seed_cost,
        Decimal::ONE
    );
}

#[test]
fn bad_row_aborts_whole_import() {
    let conn = setup();
    let file = csv_file(
        "crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg\n\
         Okra,1000,2000,3000,400,6,30\n\
         Mango,-5,2000,3000,400,6,30\n",
    );
    let err = import_presets(&conn, file.path().to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("Line 3"));
    assert!(stored_presets(&conn).unwrap().is_empty());

    let file = csv_file(
        "crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg\nOkra,1000,2000,3000,400,0,30\n",
    );
    assert!(import_presets(&conn, file.path().to_str().unwrap()).is_err());
}

#[test]
fn rm_only_removes_imported_presets() {
    let conn = setup();
    let file = csv_file(
        "crop,seeds,fertilizer,labor,others,yield_tons,price_per_kg\nPechay,500,800,2000,300,3,40\n",
    );
    import_presets(&conn, file.path().to_str().unwrap()).unwrap();

    let run = |crop: &str| {
        let matches =
            cli::build_cli().get_matches_from(["tanimpro", "preset", "rm", "--crop", crop]);
        let Some(("preset", m)) = matches.subcommand() else {
            panic!("preset command not parsed");
        };
        presets::handle(&conn, m)
    };
    run("Pechay").unwrap();
    assert!(stored_presets(&conn).unwrap().is_empty());
    assert!(run("Rice (Palay)").is_err());
}
