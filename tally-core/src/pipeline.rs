//! The transaction assembler: raw ledger rows in, reconciled trades out.

use crate::description::parse_description;
use crate::normalize::{standardize_date, standardize_number};
use crate::settlement::find_settlement_date;
use crate::types::{RawRow, SkipReason, TradeKind, Transaction};

/// Reconcile a single ledger row against the full ledger.
///
/// `rows` must be the complete ledger the row came from: settlement
/// resolution may consult rows before or after `row` in the sequence.
pub fn reconcile_row(rows: &[RawRow], row: &RawRow) -> Result<Transaction, SkipReason> {
    let reference = row.reference.as_deref().unwrap_or("");
    let kind = TradeKind::from_reference(reference).ok_or(SkipReason::UnclassifiedReference)?;

    let parsed =
        parse_description(row.description_text()).ok_or(SkipReason::UnparseableDescription)?;
    let (Some(quantity), Some(price)) = (parsed.quantity, parsed.price) else {
        return Err(SkipReason::UnparseableDescription);
    };
    if parsed.security.is_empty() {
        return Err(SkipReason::UnparseableDescription);
    }

    let gl_date = row
        .date
        .as_deref()
        .and_then(standardize_date)
        .unwrap_or_default();
    let settlement_date = find_settlement_date(rows, reference, kind).unwrap_or_default();

    // The amount uses the quantity as parsed; the sign flip happens only on
    // the emitted quantity below.
    let amount = quantity * price;

    let commission = row
        .balance_in_trust
        .as_deref()
        .and_then(standardize_number)
        .map(|balance_in_trust| match kind {
            TradeKind::Purchase => (balance_in_trust + amount).abs(),
            TradeKind::Sale => (balance_in_trust - amount).abs(),
        });

    Ok(Transaction {
        reference: reference.to_string(),
        gl_posting_date: gl_date.clone(),
        date: gl_date,
        settlement_date,
        security: parsed.security,
        currency: parsed.currency,
        quantity: Some(kind.signed_quantity(quantity)),
        price: Some(price),
        amount: Some(amount),
        commission,
    })
}

/// Run the full ledger through reconciliation, keeping ledger order.
///
/// Rows that are not parseable trade rows are dropped without error; use
/// [`reconcile_rows`] to see why each row was kept or skipped.
pub fn process_transactions(rows: &[RawRow]) -> Vec<Transaction> {
    rows.iter()
        .filter_map(|row| reconcile_row(rows, row).ok())
        .collect()
}

/// Per-row reconciliation outcomes for the whole ledger, in ledger order.
pub fn reconcile_rows(rows: &[RawRow]) -> Vec<Result<Transaction, SkipReason>> {
    rows.iter().map(|row| reconcile_row(rows, row)).collect()
}
