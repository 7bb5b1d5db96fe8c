//! Settlement-date resolution by reference-code chasing.
//!
//! Trade rows do not carry their own settlement dates; the confirming rows
//! live elsewhere in the ledger under other reference families:
//!
//! - a sale (`TSF…`) settles through a `PY…` payment row that names the
//!   trade code in its description;
//! - a purchase (`TPF…`) settles in two hops: an `RC…` receipt row names an
//!   intermediate trust-transfer code, and a `WC…` withdrawal row carrying
//!   that code confirms the date.

use std::sync::OnceLock;

use regex::Regex;

use crate::normalize::standardize_date;
use crate::types::{RawRow, TradeKind};

/// Reference prefix of payment rows confirming a sale.
const PAYMENT_PREFIX: &str = "PY";
/// Reference prefix of receipt rows naming the intermediate code.
const RECEIPT_PREFIX: &str = "RC";
/// Reference prefix of withdrawal rows confirming a purchase.
const WITHDRAWAL_PREFIX: &str = "WC";

fn receipt_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)TRUSTTFR_TRTTFR\s*\(\s*([A-Z0-9]+)\s*\)")
            .expect("invalid receipt code regex")
    })
}

/// Resolve a trade row's settlement date by scanning the full ledger.
///
/// Scans run in original ledger order and the first matching row wins, even
/// when a later row would also match. Returns the confirming row's date in
/// canonical form, or `None` when the chase dead-ends.
pub fn find_settlement_date(rows: &[RawRow], ref_code: &str, kind: TradeKind) -> Option<String> {
    match kind {
        TradeKind::Sale => {
            let pattern = format!(
                r"(?i)Amount\s+paid\s+TFR\s+to\s+TRUST\s*\({}\)",
                regex::escape(ref_code)
            );
            confirming_row_date(rows, PAYMENT_PREFIX, &pattern)
        }
        TradeKind::Purchase => {
            // The receipt hop is keyed on the pattern alone, not on the
            // trade's own code: the first matching RC row decides the
            // intermediate code for the whole statement.
            let rc_code = find_receipt_code(rows)?;
            let pattern = format!(
                r"(?i)Withdrawal\s+from\s+TRUST.*\({}\)",
                regex::escape(&rc_code)
            );
            confirming_row_date(rows, WITHDRAWAL_PREFIX, &pattern)
        }
    }
}

/// First row with the given reference prefix, a description matching
/// `pattern`, and a present balance-in-trust. Rows failing any of the three
/// checks are passed over, not terminal.
fn confirming_row_date(rows: &[RawRow], prefix: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    rows.iter()
        .find(|row| {
            row.reference_has_prefix(prefix)
                && re.is_match(row.description_text())
                && row.balance_in_trust.is_some()
        })
        .and_then(|row| row.date.as_deref().and_then(standardize_date))
}

/// Intermediate code from the first `RC…` row whose description matches,
/// even when later receipt rows name different codes.
fn find_receipt_code(rows: &[RawRow]) -> Option<String> {
    rows.iter()
        .filter(|row| row.reference_has_prefix(RECEIPT_PREFIX))
        .find_map(|row| {
            receipt_code_re()
                .captures(row.description_text())
                .map(|caps| caps[1].to_string())
        })
}
