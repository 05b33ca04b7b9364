//! Error types for homelink-core

/// Result type alias for protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Byte is not a command code of the addressed board
    #[error("Unknown command code: 0x{0:02X}")]
    UnknownCommand(u8),

    /// Byte does not carry a setpoint header
    #[error("Invalid setpoint header in byte 0x{0:02X}")]
    InvalidHeader(u8),
}
