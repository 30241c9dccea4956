//! Distance presentation for the medical facility finder.
//!
//! Distances are stored as display strings such as `"5.2 mi"`; kilometres
//! are derived for display only, rounded to one decimal place.

use concierge_model::Entry;

pub const KM_PER_MILE: f64 = 1.6;

/// Convert miles to kilometres, rounded to one decimal.
pub fn to_km(miles: f64) -> f64 {
    (miles * KM_PER_MILE * 10.0).round() / 10.0
}

/// Read the leading decimal number of a stored distance (`"5.2 mi"` -> 5.2).
///
/// Leading whitespace is skipped; anything after the number is ignored.
pub fn parse_miles(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '-' | '+' if idx == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

/// `"5.2 mi"` -> `"5.2 mi (8.3 km)"`.
pub fn format_distance(text: &str) -> Option<String> {
    let miles = parse_miles(text)?;
    Some(format!("{} ({:.1} km)", text.trim(), to_km(miles)))
}

/// Kilometres for the distance stored under `key` on `entry`.
pub fn distance_km(entry: &Entry, key: &str) -> Option<f64> {
    entry.attribute(key).and_then(parse_miles).map(to_km)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(to_km(5.2), 8.3);
        assert_eq!(to_km(4.8), 7.7);
        assert_eq!(to_km(0.0), 0.0);
    }

    #[test]
    fn parses_leading_number() {
        assert_eq!(parse_miles("5.2 mi"), Some(5.2));
        assert_eq!(parse_miles("  12 mi"), Some(12.0));
        assert_eq!(parse_miles("3.5.1"), Some(3.5));
        assert_eq!(parse_miles(".5mi"), Some(0.5));
        assert_eq!(parse_miles("mi"), None);
        assert_eq!(parse_miles("-"), None);
        assert_eq!(parse_miles(""), None);
    }
}
