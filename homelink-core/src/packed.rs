//! Packed value bytes for setpoints
//!
//! # Byte Layout
//!
//! ```text
//! ┌────────┬──────────────────────┐
//! │ Header │       Payload        │
//! │ 2 bits │        6 bits        │
//! └────────┴──────────────────────┘
//!   10 = fractional digit
//!   11 = integer part
//! ```
//!
//! A setpoint is always sent as two packed bytes, fraction first.

use std::fmt;

use crate::{
    codec,
    constants::masks,
    error::{Error, Result},
};

/// Role of a packed value byte
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Header {
    /// `10xxxxxx`
    Fraction,

    /// `11xxxxxx`
    Integer,
}

impl Header {
    /// Header bits in their on-wire position
    pub fn bits(self) -> u8 {
        match self {
            Self::Fraction => masks::SET_FRAC_HEADER,
            Self::Integer => masks::SET_INT_HEADER,
        }
    }
}

/// Pack a six-bit payload behind a header
///
/// Payload bits above the sixth are discarded.
///
/// ```
/// use homelink_core::packed::{pack, Header};
///
/// assert_eq!(pack(Header::Integer, 25), 0xD9);
/// assert_eq!(pack(Header::Fraction, 5), 0x85);
/// ```
pub fn pack(header: Header, payload: u8) -> u8 {
    header.bits() | (payload & masks::DATA_6BIT)
}

/// Split a packed byte into its header and payload
///
/// # Errors
///
/// Returns [`Error::InvalidHeader`] for bytes whose header is `00` or `01`;
/// those are read-request codes, not setpoint bytes.
pub fn unpack(byte: u8) -> Result<(Header, u8)> {
    let header = match byte & masks::HEADER {
        masks::SET_FRAC_HEADER => Header::Fraction,
        masks::SET_INT_HEADER => Header::Integer,
        _ => return Err(Error::InvalidHeader(byte)),
    };

    Ok((header, byte & masks::DATA_6BIT))
}

/// A setpoint ready for transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setpoint {
    /// Integer part, 0-63
    pub int_part: u8,

    /// Fractional digit, 0-9
    pub frac_digit: u8,
}

impl Setpoint {
    /// Encode a decimal value, clamping both components to six bits
    ///
    /// `value` must be finite.
    pub fn from_value(value: f64) -> Self {
        let (int_part, frac_digit) = codec::encode(value);

        Self {
            int_part: codec::clamp6bit(int_part),
            frac_digit: codec::clamp6bit(frac_digit),
        }
    }

    /// Cap the integer part, returning whether it had to be lowered
    pub fn cap_int_part(&mut self, max: u8) -> bool {
        if self.int_part > max {
            self.int_part = max;
            true
        } else {
            false
        }
    }

    /// Both packed bytes in transmission order (fraction, integer)
    pub fn wire(&self) -> [u8; 2] {
        [
            pack(Header::Fraction, self.frac_digit),
            pack(Header::Integer, self.int_part),
        ]
    }

    /// Decimal value this setpoint represents
    pub fn value(&self) -> f64 {
        codec::decode(i64::from(self.int_part), i64::from(self.frac_digit))
    }
}

impl fmt::Display for Setpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [frac, int] = self.wire();
        write!(
            f,
            "Setpoint[{}.{}](frac=0x{:02X}, int=0x{:02X})",
            self.int_part, self.frac_digit, frac, int
        )
    }
}
