//! Amount parsing and derived amounts.
//!
//! Cells hold operator-entered text such as `₹1,250.00`. Anything outside
//! `[0-9.-]` is stripped before parsing. An unparsable amount is unset for
//! single-record display and zero for aggregation.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a formatted amount.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Parses a formatted amount, treating anything unparsable as zero.
#[must_use]
pub fn amount_or_zero(raw: &str) -> Decimal {
    parse_amount(raw).unwrap_or(Decimal::ZERO)
}

/// Bill total minus the advance already paid.
///
/// Unset unless both inputs parse and the difference is not negative.
#[must_use]
pub fn amount_due(total: &str, advance: &str) -> Option<Decimal> {
    let total_amount = parse_amount(total)?;
    let advance_amount = parse_amount(advance)?;
    total_amount
        .checked_sub(advance_amount)
        .filter(|due| *due >= Decimal::ZERO)
}

/// Renders an amount without trailing zeros.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// Renders an optional amount, using `""` when unset.
#[must_use]
pub fn format_optional_amount(amount: Option<Decimal>) -> String {
    amount.map(format_amount).unwrap_or_default()
}
