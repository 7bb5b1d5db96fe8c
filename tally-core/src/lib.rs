//! tally-core: statement-ledger reconciliation pipeline.
//!
//! Takes the raw rows extracted from one brokerage statement and produces
//! normalized trade transactions: typed description fields, canonical
//! dates, signed quantities, and settlement dates resolved by chasing
//! reference codes across the full ledger.

pub mod description;
pub mod normalize;
pub mod pipeline;
pub mod settlement;
pub mod types;

pub use description::{ParsedDescription, parse_description};
pub use normalize::{standardize_date, standardize_number};
pub use pipeline::{process_transactions, reconcile_row, reconcile_rows};
pub use settlement::find_settlement_date;
pub use types::{RawRow, SkipReason, TradeKind, Transaction};
