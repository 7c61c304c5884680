//! Binary-coded decimal conversion
//!
//! The high nibble holds the tens digit and the low nibble the units digit.

/// Encode a decimal value as BCD
///
/// Only meaningful for `0..=99`; larger values wrap into invalid nibbles.
/// Use [`try_dec2bcd`] to reject them instead.
#[must_use]
pub const fn dec2bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Decode a BCD byte to decimal
///
/// Nibbles above 9 are not rejected and decode to out-of-range values.
#[must_use]
pub const fn bcd2dec(bcd: u8) -> u8 {
    ((bcd >> 4) & 0x0F) * 10 + (bcd & 0x0F)
}

/// Encode a decimal value as BCD, returning `None` above 99
#[must_use]
pub const fn try_dec2bcd(value: u8) -> Option<u8> {
    if value <= 99 {
        Some(dec2bcd(value))
    } else {
        None
    }
}

/// Check that both nibbles are decimal digits
#[must_use]
pub const fn is_valid(bcd: u8) -> bool {
    (bcd >> 4) <= 9 && (bcd & 0x0F) <= 9
}
