//! Brazilian-real display formatting.
//!
//! Headline amounts are shown in whole reais with `.` thousands grouping
//! (`R$ 21.000.000`); worksheet amounts keep cents with the `,` decimal
//! separator (`R$ 1.234,56`).

use impact_core::calculations::common::{round_half_up, round_whole};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Groups a plain digit string into thousands with `.` separators.
fn group_thousands(digits: &str) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = digits;
    while rest.len() > 3 {
        let (head, tail) = rest.split_at(rest.len() - 3);
        groups.push(tail);
        rest = head;
    }
    groups.push(rest);
    groups.reverse();
    groups.join(".")
}

/// Formats a whole-real currency amount, e.g. `R$ 21.000.000`.
///
/// The value is rounded to whole units first; negatives keep the sign in
/// front of the currency symbol.
pub fn format_brl(value: Decimal) -> String {
    let whole = round_whole(value);
    let digits = whole.abs().to_string();
    let grouped = group_thousands(&digits);
    if whole < Decimal::ZERO {
        format!("-R$ {grouped}")
    } else {
        format!("R$ {grouped}")
    }
}

/// Formats a currency amount with cents, e.g. `R$ 1.234,56`.
pub fn format_brl_cents(value: Decimal) -> String {
    let cents = round_half_up(value);
    let abs = cents.abs();
    let int_part = abs.trunc();
    let frac = ((abs - int_part) * Decimal::from(100))
        .to_u32()
        .unwrap_or(0);
    let grouped = group_thousands(&int_part.normalize().to_string());
    if cents < Decimal::ZERO {
        format!("-R$ {grouped},{frac:02}")
    } else {
        format!("R$ {grouped},{frac:02}")
    }
}

/// Formats a count with thousands grouping, e.g. `50.000`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}
