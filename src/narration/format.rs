//! Number and markup formatting for narration text.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to at most two decimals, half away from zero, without trailing zeros.
///
/// `1.005` becomes `1.01`, `2.0` becomes `2`, `0.10` becomes `0.1`.
pub fn round_to_two(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Formats a fee percentage for display.
pub fn format_fee(value: Decimal) -> String {
    round_to_two(value).to_string()
}

/// Formats a rate for display. Rates keep their precision; only trailing zeros go.
pub fn format_rate(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Escapes text for insertion into HTML content or attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
