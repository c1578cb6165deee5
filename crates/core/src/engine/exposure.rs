//! Exposure-time strings from the superseded engine variant.
//!
//! Before the sliding-window design, blur strength was derived from an
//! `exposure_time` option holding a compound duration such as
//! `"1h 30min 250ms"`. The parser survives because existing scene files
//! still carry the option; nothing in the current engine consumes it.

use std::time::Duration;

/// Recognized units, largest first. Components must appear in this order.
const UNIT_NANOS: &[(&str, u64)] = &[
    ("h", 3_600_000_000_000),
    ("m", 60_000_000_000),
    ("s", 1_000_000_000),
    ("ms", 1_000_000),
    ("us", 1_000),
    ("ns", 1),
];

/// Parses a compound duration with optional components in the fixed order
/// `h`, `m`/`min`, `s`, `ms`, `us`, `ns` (case-insensitive, whitespace
/// tolerated between tokens). Anything that fails to match yields a zero
/// duration, matching the legacy "invalid input means no exposure"
/// contract.
pub fn parse_exposure(text: &str) -> Duration {
    let Some(tokens) = tokenize(text) else {
        return Duration::ZERO;
    };

    let mut next_allowed = 0;
    let mut nanos: u64 = 0;
    for (value, unit) in tokens {
        let Some(index) = unit_index(&unit) else {
            return Duration::ZERO;
        };
        if index < next_allowed {
            return Duration::ZERO;
        }
        next_allowed = index + 1;
        nanos = nanos.saturating_add(value.saturating_mul(UNIT_NANOS[index].1));
    }
    Duration::from_nanos(nanos)
}

fn unit_index(unit: &str) -> Option<usize> {
    if unit == "min" {
        return Some(1);
    }
    UNIT_NANOS.iter().position(|&(name, _)| name == unit)
}

/// Splits the input into `(value, unit)` pairs. `None` when the input is
/// not an alternating sequence of digits and unit words.
fn tokenize(text: &str) -> Option<Vec<(u64, String)>> {
    let mut tokens = Vec::new();
    let mut rest = text.trim();
    while !rest.is_empty() {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits_end == 0 {
            return None;
        }
        let value: u64 = rest[..digits_end].parse().ok()?;
        rest = rest[digits_end..].trim_start();

        let unit_end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        if unit_end == 0 {
            return None;
        }
        tokens.push((value, rest[..unit_end].to_ascii_lowercase()));
        rest = rest[unit_end..].trim_start();
    }
    Some(tokens)
}
