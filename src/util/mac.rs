//! MAC address normalization

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static MAC_PAIRS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([[:xdigit:]]{2})[:\-]?([[:xdigit:]]{2})[:\-]?([[:xdigit:]]{2})[:\-]?([[:xdigit:]]{2})[:\-]?([[:xdigit:]]{2})[:\-]?([[:xdigit:]]{2})$",
    )
    .unwrap()
});

static MAC_MIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([[:xdigit:]]{1,2})[:\-]([[:xdigit:]]{1,2})[:\-]([[:xdigit:]]{1,2})[:\-]([[:xdigit:]]{1,2})[:\-]([[:xdigit:]]{1,2})[:\-]([[:xdigit:]]{1,2})$",
    )
    .unwrap()
});

/// Errors raised while normalizing MAC addresses.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MacFormatError {
    /// The input matched none of the accepted MAC address forms.
    #[error("invalid format for MAC address '{0}'")]
    Invalid(String),
}

/// Normalize a MAC address to 12 lowercase hex digits.
///
/// Accepted input forms:
/// - `xx-xx-xx-xx-xx-xx` / `xx:xx:xx:xx:xx:xx`
/// - `xxxxxx-xxxxxx` or fully separator-less pairs
/// - separated bytes with a mix of one and two digits (padded to two)
/// - a raw 6-byte payload, as agents return in physical-address
///   columns (hex-encoded as-is)
pub fn normalize_mac(input: &str) -> Result<String, MacFormatError> {
    // A 6-byte input is the raw address itself, not text.
    if input.len() == 6 {
        return Ok(input.bytes().map(|b| format!("{b:02x}")).collect());
    }

    let trimmed = input.trim();
    if let Some(caps) = MAC_PAIRS.captures(trimmed) {
        let mut out = String::with_capacity(12);
        for i in 1..=6 {
            out.push_str(&caps[i]);
        }
        return Ok(out.to_lowercase());
    }
    if let Some(caps) = MAC_MIXED.captures(trimmed) {
        // Mixed one/two digit bytes; pad each to two digits.
        let mut out = String::with_capacity(12);
        for i in 1..=6 {
            let byte = &caps[i];
            if byte.len() == 1 {
                out.push('0');
            }
            out.push_str(byte);
        }
        return Ok(out.to_lowercase());
    }

    Err(MacFormatError::Invalid(input.chars().take(20).collect()))
}
