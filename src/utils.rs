//! Payload conversion helpers.
//!
//! The controller transmits every value as ASCII text: exact decimal
//! integers (often zero-padded), floats in scientific notation, `"0"`/`"1"`
//! flags, and single-character flag words. This module provides the pure
//! conversion functions the attribute tables in [`device`](crate::device)
//! are built from.
//!
//! # Example
//!
//! ```
//! use multigauge::utils::{parse_float, parse_int, parse_on_off};
//!
//! assert_eq!(parse_int("00014").unwrap(), 14);
//! assert_eq!(parse_float("2.3E-7").unwrap(), 2.3e-7);
//! assert!(parse_on_off("1").unwrap());
//! ```

use crate::error::{MultiGaugeError, Result};

/// Passes a reply payload through unchanged.
///
/// Used for free-text properties such as firmware version strings.
pub fn parse_text(data: &str) -> Result<String> {
    Ok(data.to_owned())
}

/// Parses an exact textual integer, tolerating padding whitespace and
/// leading zeros.
///
/// # Errors
///
/// Returns `MultiGaugeError::InvalidPayload` if the payload is not a
/// decimal integer.
pub fn parse_int(data: &str) -> Result<i32> {
    data.trim()
        .parse()
        .map_err(|_| MultiGaugeError::invalid_payload(format!("not an integer: {data:?}")))
}

/// Parses a float from the controller's scientific-notation ASCII form.
///
/// The controller never emits NaN or infinities, so no special-value
/// handling is needed.
///
/// # Errors
///
/// Returns `MultiGaugeError::InvalidPayload` if the payload is not a
/// number.
pub fn parse_float(data: &str) -> Result<f64> {
    data.trim()
        .parse()
        .map_err(|_| MultiGaugeError::invalid_payload(format!("not a number: {data:?}")))
}

/// Parses a `"0"`/`"1"` flag payload; anything other than `"1"` is off.
pub fn parse_on_off(data: &str) -> Result<bool> {
    Ok(data == "1")
}

/// Returns the ordinal of the single payload character of a flag-word
/// reply.
///
/// # Errors
///
/// Returns `MultiGaugeError::InvalidPayload` unless the payload is exactly
/// one character with ordinal ≤ 255.
pub fn flag_ordinal(data: &str) -> Result<u8> {
    let mut chars = data.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => u8::try_from(c as u32).map_err(|_| {
            MultiGaugeError::invalid_payload(format!("flag ordinal out of range: {data:?}"))
        }),
        _ => Err(MultiGaugeError::invalid_payload(format!(
            "expected a single flag character, got {data:?}"
        ))),
    }
}

/// Formats an integer as a write payload.
pub fn format_int(value: &i32) -> String {
    value.to_string()
}

/// Formats a float as a write payload in scientific notation.
pub fn format_float(value: &f64) -> String {
    format!("{value:E}")
}

/// Formats a flag as a `"0"`/`"1"` write payload.
pub fn format_on_off(value: &bool) -> String {
    if *value { "1" } else { "0" }.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text("VPo 1 0 24/04/98").unwrap(), "VPo 1 0 24/04/98");
        assert_eq!(parse_text("").unwrap(), "");
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("14").unwrap(), 14);
        assert_eq!(parse_int("00014").unwrap(), 14);
        assert_eq!(parse_int(" 7000 ").unwrap(), 7000);
        assert_eq!(parse_int("-3").unwrap(), -3);
        assert!(parse_int("").is_err());
        assert!(parse_int("1.5").is_err());
        assert!(parse_int("abc").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("2.3E-7").unwrap(), 2.3e-7);
        assert_eq!(parse_float("5.1E-2").unwrap(), 5.1e-2);
        assert_eq!(parse_float("  1.0E1").unwrap(), 10.0);
        assert_eq!(parse_float("14").unwrap(), 14.0);
        assert!(parse_float("").is_err());
        assert!(parse_float("torr").is_err());
    }

    #[test]
    fn test_parse_on_off() {
        assert!(parse_on_off("1").unwrap());
        assert!(!parse_on_off("0").unwrap());
        assert!(!parse_on_off("").unwrap());
    }

    #[test]
    fn test_flag_ordinal() {
        assert_eq!(flag_ordinal("\u{0}").unwrap(), 0);
        assert_eq!(flag_ordinal("\u{80}").unwrap(), 128);
        assert!(flag_ordinal("").is_err());
        assert!(flag_ordinal("ab").is_err());
        assert!(flag_ordinal("\u{100}").is_err());
    }

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(&7000), "7000");
        assert_eq!(format_int(&-3), "-3");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(&2.3e-7), "2.3E-7");
        assert_eq!(format_float(&10.0), "1E1");
    }

    #[test]
    fn test_format_on_off() {
        assert_eq!(format_on_off(&true), "1");
        assert_eq!(format_on_off(&false), "0");
    }
}
