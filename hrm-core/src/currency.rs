//! Vietnamese đồng display formatting.
//!
//! Formatting happens at render time only; stored amounts keep their full
//! precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency symbol appended to every formatted amount.
pub const VND_SYMBOL: &str = "₫";

/// Rounds to whole đồng using half-up rounding (away from zero).
pub fn round_to_dong(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Groups the digits of a non-negative integer string with `.`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats an amount the way the vi-VN locale renders VND.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use hrm_core::currency::format_vnd;
///
/// assert_eq!(format_vnd(dec!(16600000)), "16.600.000 ₫");
/// assert_eq!(format_vnd(dec!(-500000)), "-500.000 ₫");
/// assert_eq!(format_vnd(dec!(999.5)), "1.000 ₫");
/// ```
pub fn format_vnd(amount: Decimal) -> String {
    let rounded = round_to_dong(amount);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{} {VND_SYMBOL}", group_thousands(&digits))
}
