//! CSV ledger ingest.
//!
//! Statement exports arrive as a delimited dump of the same table the
//! extractor emits:
//!
//! ```text
//! Date,Reference,Description,Debit,Credit,Balance,Balance in Trust
//! 2025-03-10,TSF0042,Sold 50 APPLE INC @ USD 150.25,,,120000.00,7530.00
//! ```
//!
//! Preamble lines ahead of the header row are tolerated; the header is
//! located by scanning for the `Reference` and `Description` columns.

use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::StringRecord;
use tally_core::RawRow;

/// Column indices resolved from the header row.
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    date: Option<usize>,
    reference: Option<usize>,
    description: Option<usize>,
    debit: Option<usize>,
    credit: Option<usize>,
    balance: Option<usize>,
    balance_in_trust: Option<usize>,
}

/// Parse a CSV ledger file, returning every data row below the header.
///
/// Blank cells become absent fields, fully blank lines are skipped, and
/// short rows are tolerated. A file with no recognizable header row is an
/// error.
pub fn read_ledger_csv(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut columns: Option<Columns> = None;
    let mut rows = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let Some(cols) = columns else {
            columns = detect_columns(&record);
            continue;
        };

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(row_from_record(&record, cols));
    }

    if columns.is_none() {
        bail!(
            "no ledger header row found in {} (expected Reference/Description columns)",
            path.as_ref().display()
        );
    }
    Ok(rows)
}

fn detect_columns(record: &StringRecord) -> Option<Columns> {
    let mut cols = Columns::default();
    for (idx, cell) in record.iter().enumerate() {
        match cell.trim().to_lowercase().as_str() {
            "date" => cols.date = Some(idx),
            "reference" => cols.reference = Some(idx),
            "description" => cols.description = Some(idx),
            "debit" => cols.debit = Some(idx),
            "credit" => cols.credit = Some(idx),
            "balance" => cols.balance = Some(idx),
            "balance in trust" => cols.balance_in_trust = Some(idx),
            _ => {}
        }
    }
    (cols.reference.is_some() && cols.description.is_some()).then_some(cols)
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    let text = record.get(idx?)?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn row_from_record(record: &StringRecord, cols: Columns) -> RawRow {
    RawRow {
        date: cell(record, cols.date),
        reference: cell(record, cols.reference),
        description: cell(record, cols.description),
        debit: cell(record, cols.debit),
        credit: cell(record, cols.credit),
        balance: cell(record, cols.balance),
        balance_in_trust: cell(record, cols.balance_in_trust),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parses_rows_below_header() {
        let path = write_temp_csv(
            "tally_ledger_basic.csv",
            "Date,Reference,Description,Debit,Credit,Balance,Balance in Trust\n\
             2025-03-10,TSF0042,Sold 50 APPLE INC @ USD 150.25,,,120000.00,7530.00\n\
             2025-03-12,PY1001,Amount paid TFR to TRUST (TSF0042),,,112470.00,7530.00\n",
        );
        let rows = read_ledger_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reference.as_deref(), Some("TSF0042"));
        assert_eq!(rows[0].debit, None);
        assert_eq!(rows[0].balance_in_trust.as_deref(), Some("7530.00"));
        assert_eq!(rows[1].date.as_deref(), Some("2025-03-12"));
    }

    #[test]
    fn test_skips_preamble_and_blank_lines() {
        let path = write_temp_csv(
            "tally_ledger_preamble.csv",
            "Account Statement,,,,,,\n\
             Period: March 2025,,,,,,\n\
             Date,Reference,Description,Debit,Credit,Balance,Balance in Trust\n\
             ,,,,,,\n\
             2025-03-10,TSF0042,Sold 50 APPLE INC @ USD 150.25,,,120000.00,\n",
        );
        let rows = read_ledger_csv(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].balance_in_trust, None);
    }

    #[test]
    fn test_tolerates_short_rows() {
        let path = write_temp_csv(
            "tally_ledger_short.csv",
            "Date,Reference,Description,Debit,Credit,Balance,Balance in Trust\n\
             2025-03-10,TSF0042,Sold 50 APPLE INC @ USD 150.25\n",
        );
        let rows = read_ledger_csv(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description.as_deref(), Some("Sold 50 APPLE INC @ USD 150.25"));
        assert_eq!(rows[0].balance, None);
    }

    #[test]
    fn test_missing_header_is_an_error() {
        let path = write_temp_csv(
            "tally_ledger_headerless.csv",
            "2025-03-10,TSF0042,Sold 50 APPLE INC @ USD 150.25,,,120000.00,7530.00\n",
        );
        assert!(read_ledger_csv(&path).is_err());
    }
}
