//! Protocol constants
//!
//! These values must match the peripheral firmware byte-for-byte.

use std::time::Duration;

/// Default serial baud rate
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Default read timeout
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Default write timeout
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(1);

/// Pause after every written byte so the peripheral can process it
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Setpoint header and payload masks
pub mod masks {
    /// Header for the fractional digit of a setpoint (`10xxxxxx`)
    pub const SET_FRAC_HEADER: u8 = 0b1000_0000;

    /// Header for the integer part of a setpoint (`11xxxxxx`)
    pub const SET_INT_HEADER: u8 = 0b1100_0000;

    /// Both header bits
    pub const HEADER: u8 = 0b1100_0000;

    /// Six-bit payload
    pub const DATA_6BIT: u8 = 0x3F;

    /// Largest value a six-bit payload can carry
    pub const DATA_6BIT_MAX: u8 = DATA_6BIT;
}

/// Board #1: climate control
pub mod climate {
    pub const GET_DESIRED_TEMP_FRAC: u8 = 0b0000_0001;
    pub const GET_DESIRED_TEMP_INT: u8 = 0b0000_0010;
    pub const GET_AMBIENT_TEMP_FRAC: u8 = 0b0000_0011;
    pub const GET_AMBIENT_TEMP_INT: u8 = 0b0000_0100;
    pub const GET_FAN_SPEED: u8 = 0b0000_0101;

    /// Default port index of the climate board
    pub const DEFAULT_PORT: u8 = 10;
}

/// Board #2: curtain and outdoor sensors
pub mod curtain {
    use std::time::Duration;

    pub const GET_DESIRED_FRAC: u8 = 0b0000_0001;
    pub const GET_DESIRED_INT: u8 = 0b0000_0010;
    pub const GET_OUTDOOR_TEMP_FRAC: u8 = 0b0000_0011;
    pub const GET_OUTDOOR_TEMP_INT: u8 = 0b0000_0100;
    pub const GET_PRESSURE_FRAC: u8 = 0b0000_0101;
    pub const GET_PRESSURE_INT: u8 = 0b0000_0110;
    pub const GET_LIGHT_FRAC: u8 = 0b0000_0111;
    pub const GET_LIGHT_INT: u8 = 0b0000_1000;

    /// Default port index of the curtain board
    pub const DEFAULT_PORT: u8 = 12;

    /// Curtain position travels as 0-50 on the wire, 0-100 % on the host
    pub const WIRE_SCALE: f64 = 2.0;

    /// Ceiling for the integer part of a curtain setpoint
    pub const WIRE_MAX: u8 = 50;

    /// Pause before a refresh so the board can finish previous work
    pub const PRE_REFRESH_PAUSE: Duration = Duration::from_millis(20);

    /// Extra pause between the light integer and light fraction requests
    pub const LIGHT_FRAC_PAUSE: Duration = Duration::from_millis(10);
}
