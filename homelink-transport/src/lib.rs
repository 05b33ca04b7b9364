//! Transport layer for single-byte command boards
//!
//! Provides blocking serial communication with peripheral boards.

pub mod config;
pub mod error;
pub mod serial;
pub mod session;

pub use config::{PortId, SerialConfig};
pub use error::{Error, Result};
pub use serial::SerialTransport;
pub use session::{Session, SessionState};

/// Byte-level link to one board
///
/// Implementations block for at most the configured timeouts.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Transport: Send {
    /// Acquire the link described by `config`
    fn connect(&mut self, config: &SerialConfig) -> Result<()>;

    /// Release the link
    fn disconnect(&mut self) -> Result<()>;

    /// Check if the link is held
    fn is_connected(&self) -> bool;

    /// Write exactly one byte
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Read one byte, `None` when the read timeout elapsed first
    fn read_byte(&mut self) -> Result<Option<u8>>;

    /// Name of the port this link was last connected to
    fn port_name(&self) -> &str;
}
