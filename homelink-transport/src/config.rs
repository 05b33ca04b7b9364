//! Serial connection settings

use std::fmt;
use std::time::Duration;

use homelink_core::constants;

use crate::error::{Error, Result};

/// Serial port identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortId {
    /// Numeric index mapped to the platform's port naming scheme
    Index(u8),

    /// Explicit device name or path
    Name(String),
}

impl PortId {
    /// Platform-specific port name
    pub fn port_name(&self) -> String {
        match self {
            Self::Index(index) => platform_port_name(*index),
            Self::Name(name) => name.clone(),
        }
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.port_name())
    }
}

/// Map a port index to a device name (`COM3` on Windows, `/dev/ttyUSB3` elsewhere)
pub fn platform_port_name(index: u8) -> String {
    if cfg!(windows) {
        format!("COM{}", index)
    } else {
        format!("/dev/ttyUSB{}", index)
    }
}

/// Settings for one serial session
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use homelink_transport::SerialConfig;
///
/// let config = SerialConfig::new(3)
///     .with_baud_rate(19200)
///     .with_read_timeout(Duration::from_millis(500));
///
/// assert_eq!(config.baud_rate, 19200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    pub port: PortId,
    pub baud_rate: u32,
    pub read_timeout: Duration,
    pub write_timeout: Duration,

    /// Pause after every written byte
    pub settle_delay: Duration,
}

impl SerialConfig {
    /// Create settings for a port index with protocol defaults
    pub fn new(port_index: u8) -> Self {
        Self::for_port(PortId::Index(port_index))
    }

    /// Create settings for an explicit port name with protocol defaults
    pub fn with_port_name(name: impl Into<String>) -> Self {
        Self::for_port(PortId::Name(name.into()))
    }

    fn for_port(port: PortId) -> Self {
        Self {
            port,
            baud_rate: constants::DEFAULT_BAUD_RATE,
            read_timeout: constants::DEFAULT_READ_TIMEOUT,
            write_timeout: constants::DEFAULT_WRITE_TIMEOUT,
            settle_delay: constants::DEFAULT_SETTLE_DELAY,
        }
    }

    /// Set baud rate
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Set read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set write timeout
    pub fn with_write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = timeout;
        self
    }

    /// Set post-write settle delay
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn port_name(&self) -> String {
        self.port.port_name()
    }

    /// Reject settings no serial port can be opened with
    pub fn validate(&self) -> Result<()> {
        if self.baud_rate == 0 {
            return Err(Error::InvalidBaudRate(self.baud_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SerialConfig::new(10);

        assert_eq!(config.port, PortId::Index(10));
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.read_timeout, Duration::from_secs(1));
        assert_eq!(config.write_timeout, Duration::from_secs(1));
        assert_eq!(config.settle_delay, Duration::from_millis(50));
    }

    #[test]
    fn test_config_builder() {
        let config = SerialConfig::with_port_name("/dev/ttyACM0")
            .with_baud_rate(115200)
            .with_write_timeout(Duration::from_millis(200))
            .with_settle_delay(Duration::ZERO);

        assert_eq!(config.port_name(), "/dev/ttyACM0");
        assert_eq!(config.baud_rate, 115200);
        assert_eq!(config.write_timeout, Duration::from_millis(200));
        assert_eq!(config.settle_delay, Duration::ZERO);
    }

    #[test]
    fn test_port_index_mapping() {
        let name = PortId::Index(3).port_name();

        if cfg!(windows) {
            assert_eq!(name, "COM3");
        } else {
            assert_eq!(name, "/dev/ttyUSB3");
        }
    }

    #[test]
    fn test_validate_baud_rate() {
        assert!(SerialConfig::new(1).validate().is_ok());
        assert!(matches!(
            SerialConfig::new(1).with_baud_rate(0).validate(),
            Err(Error::InvalidBaudRate(0))
        ));
    }
}
