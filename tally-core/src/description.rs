//! Free-text trade description parsing.
//!
//! Trade rows describe themselves in one fixed linguistic shape:
//!
//! ```text
//! Bought 1,000 MICRO DEVICES @ SGD 3.20
//! Sold 50 APPLE INC @ USD 150.25
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::normalize::standardize_number;

/// Fields pulled out of a trade description line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDescription {
    /// The verb as written ("Bought"/"Sold"). Captured for completeness but
    /// never consulted when signing quantities — direction comes from the
    /// reference-code prefix, which can in principle disagree with the verb.
    pub action: String,
    pub security: String,
    pub currency: String,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

impl ParsedDescription {
    /// True when every field a transaction needs is resolved.
    pub fn is_complete(&self) -> bool {
        !self.security.is_empty() && self.quantity.is_some() && self.price.is_some()
    }
}

fn trade_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(Bought|Sold)\s+([\d,]+)\s+([\w\s&]+?)\s*@\s*([A-Z]{3})\s*([\d,]+\.?\d*)")
            .expect("invalid trade description regex")
    })
}

/// Parse a trade description into typed fields.
///
/// Returns `None` when the text does not match the trade shape at all.
/// Quantity and price go through [`standardize_number`] and may come back
/// `None` individually even on a structural match.
pub fn parse_description(text: &str) -> Option<ParsedDescription> {
    let caps = trade_re().captures(text)?;
    Some(ParsedDescription {
        action: caps[1].to_string(),
        security: caps[3].trim().to_string(),
        currency: caps[4].to_string(),
        quantity: standardize_number(&caps[2]),
        price: standardize_number(&caps[5]),
    })
}
