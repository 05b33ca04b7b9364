//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open {port}: {reason}")]
    OpenFailed { port: String, reason: String },

    #[error("Write timeout")]
    WriteTimeout,

    #[error("Read failure: {0}")]
    ReadFailure(#[source] io::Error),

    #[error("Already open")]
    AlreadyOpen,

    #[error("Not open")]
    NotOpen,

    #[error("Invalid baud rate: {0}")]
    InvalidBaudRate(u32),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Check if error is transient (a later attempt might succeed)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::OpenFailed { .. } | Self::WriteTimeout | Self::ReadFailure(_) | Self::Io(_)
        )
    }

    /// Check if error is informational only
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::AlreadyOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::WriteTimeout.is_recoverable());
        assert!(Error::ReadFailure(io::Error::other("gone")).is_recoverable());
        assert!(!Error::NotOpen.is_recoverable());
        assert!(!Error::InvalidBaudRate(0).is_recoverable());
        assert!(Error::AlreadyOpen.is_informational());
    }

    #[test]
    fn test_error_display() {
        let err = Error::OpenFailed {
            port: "COM3".into(),
            reason: "access denied".into(),
        };
        assert_eq!(err.to_string(), "Failed to open COM3: access denied");
    }
}
