//! tally-ingest: ledger materialization for the reconciliation pipeline.
//!
//! The OCR/extraction service is an external collaborator; these readers
//! only turn its already-extracted output — JSON wire payloads or CSV table
//! dumps — into the `RawRow` sequences `tally-core` consumes. Content-level
//! filtering is the assembler's job, so ingest never drops a data row.

pub mod ledger_csv;
pub mod ledger_json;

pub use ledger_csv::read_ledger_csv;
pub use ledger_json::{read_ledger_json, rows_from_json_str};
