//! Display formatting for receipts.
//!
//! Amounts are shown in Indian Rupees with en-IN digit grouping and times
//! in India Standard Time, regardless of the host locale or timezone.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// India Standard Time offset (UTC+05:30) in seconds.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

const RUPEE_SIGN: char = '₹';

/// Formats an amount as rupees, e.g. `₹1,23,456.78` or `-₹500.00`.
///
/// Rounds half away from zero to two fraction digits. The last three
/// integer digits form one group and the rest are grouped in pairs.
pub fn format_inr(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push(RUPEE_SIGN);
    out.push_str(&group_indian(int_part));
    out.push('.');
    out.push_str(frac_part);
    out
}

/// Formats a timestamp in IST, e.g. `19 Oct 2026, 03:45 pm`.
pub fn format_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&ist())
        .format("%d %b %Y, %I:%M %P")
        .to_string()
}

/// Formats the IST calendar date of a timestamp, e.g. `19 Oct 2026`.
pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&ist()).format("%d %b %Y").to_string()
}

fn ist() -> FixedOffset {
    // The offset is a compile-time constant well inside the valid range.
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Inserts en-IN group separators into a run of ASCII digits.
fn group_indian(int_part: &str) -> String {
    if int_part.len() <= 3 {
        return int_part.to_string();
    }

    let (head, tail) = int_part.split_at(int_part.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
