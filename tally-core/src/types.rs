//! Ledger row and reconciled transaction types.

use serde::{Deserialize, Serialize};

/// One raw ledger row from an extracted statement.
///
/// Field names mirror the column labels the document-extraction service
/// emits; any field may be absent. The full ordered row sequence is the
/// search space for settlement lookups, so a ledger is always held in
/// memory as a complete `Vec<RawRow>` rather than streamed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Date")]
    pub date: Option<String>,
    #[serde(rename = "Reference")]
    pub reference: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Debit")]
    pub debit: Option<String>,
    #[serde(rename = "Credit")]
    pub credit: Option<String>,
    #[serde(rename = "Balance")]
    pub balance: Option<String>,
    #[serde(rename = "Balance in Trust")]
    pub balance_in_trust: Option<String>,
}

impl RawRow {
    /// True when the row's reference code carries the given prefix.
    pub fn reference_has_prefix(&self, prefix: &str) -> bool {
        self.reference
            .as_deref()
            .is_some_and(|r| r.starts_with(prefix))
    }

    /// The description text, or `""` when the field is absent.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Trade classification derived from the reference-code prefix.
///
/// The prefix is the source of truth for direction. The verb inside the
/// description ("Bought"/"Sold") is parsed but never consulted, so a row
/// whose verb disagrees with its prefix is signed by the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeKind {
    /// `TPF…` reference: purchase funded from trust. Quantity stays positive.
    #[serde(rename = "purchase")]
    Purchase,
    /// `TSF…` reference: sale settled into trust. Quantity is flipped negative.
    #[serde(rename = "sale")]
    Sale,
}

impl TradeKind {
    /// Classify a reference code by prefix. `None` for anything that is not
    /// a trade row (payment, receipt, and withdrawal rows have their own
    /// reference families).
    pub fn from_reference(reference: &str) -> Option<Self> {
        if reference.starts_with("TPF") {
            Some(TradeKind::Purchase)
        } else if reference.starts_with("TSF") {
            Some(TradeKind::Sale)
        } else {
            None
        }
    }

    /// The reference prefix that marks this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            TradeKind::Purchase => "TPF",
            TradeKind::Sale => "TSF",
        }
    }

    /// Apply the sign convention to an unsigned parsed quantity.
    pub fn signed_quantity(&self, quantity: f64) -> f64 {
        match self {
            TradeKind::Purchase => quantity,
            TradeKind::Sale => -quantity,
        }
    }
}

/// Why a ledger row was left out of the reconciled output.
///
/// Skips are expected data, not errors: most statement rows are settlement
/// confirmations or cash movements rather than trade rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Reference absent, or not a `TPF`/`TSF` trade code.
    #[serde(rename = "unclassified-reference")]
    UnclassifiedReference,
    /// Description did not yield security, currency, quantity, and price.
    #[serde(rename = "unparseable-description")]
    UnparseableDescription,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::UnclassifiedReference => "unclassified-reference",
            SkipReason::UnparseableDescription => "unparseable-description",
        }
    }
}

/// One reconciled trade, ready for reporting or export.
///
/// Serialized field names match the report headers consumed downstream.
/// Unresolved dates stay as empty strings rather than nulls; a transaction
/// is immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Reference - Code")]
    pub reference: String,
    #[serde(rename = "GL Posting Date")]
    pub gl_posting_date: String,
    /// Display date; duplicates the GL posting date by current policy.
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Settlement Date")]
    pub settlement_date: String,
    #[serde(rename = "Security Name")]
    pub security: String,
    #[serde(rename = "Currency")]
    pub currency: String,
    /// Signed per [`TradeKind`]: negative for sales.
    #[serde(rename = "Quantity")]
    pub quantity: Option<f64>,
    #[serde(rename = "Price")]
    pub price: Option<f64>,
    /// Unsigned quantity × price.
    #[serde(rename = "Transaction Amount")]
    pub amount: Option<f64>,
    /// Derived from the trade row's balance-in-trust, never parsed directly.
    #[serde(rename = "Commission")]
    pub commission: Option<f64>,
}
