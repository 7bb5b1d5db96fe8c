use std::path::PathBuf;

use tally_core::process_transactions;
use tally_ingest::{read_ledger_csv, read_ledger_json};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join(name)
}

/// Both materializations of the same statement produce the same ledger.
#[test]
fn test_csv_and_json_agree_on_the_sample_ledger() {
    let from_csv = read_ledger_csv(fixture_path("sample_ledger.csv")).unwrap();
    let from_json = read_ledger_json(fixture_path("sample_ledger.json")).unwrap();

    assert_eq!(from_csv.len(), 7);
    assert_eq!(from_csv, from_json);
}

/// Ingest keeps every data row; filtering is the pipeline's job.
#[test]
fn test_ingest_keeps_non_trade_rows() {
    let rows = read_ledger_csv(fixture_path("sample_ledger.csv")).unwrap();
    assert!(rows.iter().any(|r| r.reference.as_deref() == Some("INT01")));
    assert!(rows.iter().any(|r| r.reference.as_deref() == Some("RC2001")));
}

/// End-to-end through the real files: ingest then reconcile.
#[test]
fn test_sample_ledger_reconciles_end_to_end() {
    let rows = read_ledger_json(fixture_path("sample_ledger.json")).unwrap();
    let txns = process_transactions(&rows);

    assert_eq!(txns.len(), 2);

    assert_eq!(txns[0].reference, "TSF0042");
    assert_eq!(txns[0].settlement_date, "3/12/2025");
    assert_eq!(txns[0].quantity, Some(-50.0));
    assert_eq!(txns[0].commission, Some(17.5));

    assert_eq!(txns[1].reference, "TPF0100");
    assert_eq!(txns[1].settlement_date, "3/14/2025");
    assert_eq!(txns[1].quantity, Some(1000.0));
    assert_eq!(txns[1].commission, Some(50.5));
}
