//! JSON ledger ingest: the extractor's wire shape.
//!
//! The document-extraction service returns one JSON array per statement,
//! each element an object keyed by the statement's column labels (`Date`,
//! `Reference`, `Description`, …, `Balance in Trust`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::RawRow;

/// Parse an in-memory ledger payload. Unknown keys are ignored and missing
/// keys become absent fields.
pub fn rows_from_json_str(json: &str) -> Result<Vec<RawRow>> {
    serde_json::from_str(json).context("parsing ledger JSON")
}

/// Read a ledger JSON file from disk.
pub fn read_ledger_json(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let text = fs::read_to_string(path.as_ref())
        .with_context(|| format!("read {}", path.as_ref().display()))?;
    rows_from_json_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_payload() {
        let rows = rows_from_json_str(
            r#"[
                {
                    "Date": "2025-03-10",
                    "Reference": "TSF0042",
                    "Description": "Sold 50 APPLE INC @ USD 150.25",
                    "Balance": "120,000.00",
                    "Balance in Trust": "7,530.00"
                },
                {
                    "Reference": "INT01",
                    "Description": "Monthly interest credit",
                    "Extractor Confidence": "0.97"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].balance_in_trust.as_deref(), Some("7,530.00"));
        // Missing keys stay absent; unknown keys are dropped.
        assert_eq!(rows[1].date, None);
        assert_eq!(rows[1].reference.as_deref(), Some("INT01"));
    }

    #[test]
    fn test_empty_array_is_an_empty_ledger() {
        assert_eq!(rows_from_json_str("[]").unwrap().len(), 0);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(rows_from_json_str("{\"Date\": \"2025-03-10\"}").is_err());
        assert!(rows_from_json_str("not json").is_err());
    }
}
