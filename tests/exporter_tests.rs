// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use tanimpro::commands::exporter;
use tanimpro::profile::MemoryProfileStore;
use tanimpro::{cli, db};
use tempfile::tempdir;

// decimals serialize as strings
fn num(v: &serde_json::Value) -> Decimal {
    v.as_str().unwrap().parse().unwrap()
}

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_export(conn: &Connection, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["tanimpro", "export", "roi"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle_with(conn, &MemoryProfileStore::new(), export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_roi_breakdown_as_csv() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("roi.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&conn, &["--format", "csv", "--out", &out_str]).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let rows: Vec<Vec<String>> = rdr
        .records()
        .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["Seeds", "3000", "9.7"],
            vec!["Fertilizer", "8000", "25.8"],
            vec!["Labor", "15000", "48.4"],
            vec!["Others", "5000", "16.1"],
            vec!["Total", "31000", ""],
        ]
    );
}

#[test]
fn export_roi_as_pretty_json() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("roi.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &conn,
        &["--format", "JSON", "--out", &out_str, "--crop", "Corn"],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["crop"], json!("Corn"));
    assert_eq!(num(&parsed["total_costs"]), Decimal::from(32000));
    assert_eq!(num(&parsed["total_revenue"]), Decimal::from(144000));
    assert_eq!(num(&parsed["profit"]), Decimal::from(112000));
    assert_eq!(num(&parsed["roi_percent"]), Decimal::from(350));
    assert_eq!(parsed["cost_breakdown"][0]["label"], json!("Seeds"));
    assert_eq!(parsed["cost_breakdown"].as_array().unwrap().len(), 4);
}

#[test]
fn export_rejects_unknown_format() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("roi.xml");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&conn, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}
