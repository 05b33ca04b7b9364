//! Serial port transport

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::SerialPort;
use tracing::{debug, trace, warn};

use crate::{config::SerialConfig, error::*, Transport};

/// Serial transport backed by the `serialport` crate
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    port_name: String,
    read_timeout: Duration,
    write_timeout: Duration,
    active_timeout: Duration,
}

impl SerialTransport {
    /// Create new, unconnected serial transport
    pub fn new() -> Self {
        Self {
            port: None,
            port_name: String::new(),
            read_timeout: Duration::ZERO,
            write_timeout: Duration::ZERO,
            active_timeout: Duration::ZERO,
        }
    }

    /// Borrow the open port with its timeout switched to `timeout`
    ///
    /// `serialport` has a single timeout for both directions.
    fn port_with_timeout(&mut self, timeout: Duration) -> Result<&mut Box<dyn SerialPort>> {
        let port = self.port.as_mut().ok_or(Error::NotOpen)?;

        if self.active_timeout != timeout {
            port.set_timeout(timeout)?;
            self.active_timeout = timeout;
        }

        Ok(port)
    }
}

impl Default for SerialTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for SerialTransport {
    fn connect(&mut self, config: &SerialConfig) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyOpen);
        }

        config.validate()?;

        let name = config.port_name();

        debug!("Opening {} @ {} baud...", name, config.baud_rate);

        let port = serialport::new(name.as_str(), config.baud_rate)
            .timeout(config.read_timeout)
            .open()
            .map_err(|e| Error::OpenFailed {
                port: name.clone(),
                reason: e.to_string(),
            })?;

        debug!("Opened {}", name);

        self.port = Some(port);
        self.port_name = name;
        self.read_timeout = config.read_timeout;
        self.write_timeout = config.write_timeout;
        self.active_timeout = config.read_timeout;
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        if let Some(_port) = self.port.take() {
            debug!("Closing {}...", self.port_name);
        }

        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        let timeout = self.write_timeout;
        let port = self.port_with_timeout(timeout)?;

        trace!("Sending byte: 0x{:02X}", byte);

        match port.write_all(&[byte]).and_then(|()| port.flush()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Err(Error::WriteTimeout),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let timeout = self.read_timeout;
        let port = self.port_with_timeout(timeout)?;

        let mut buf = [0u8; 1];

        match port.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => {
                trace!("Received byte: 0x{:02X}", buf[0]);
                Ok(Some(buf[0]))
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
                trace!("Read timeout after {:?}", timeout);
                Ok(None)
            }
            Err(e) => {
                warn!("Read error: {}", e);
                Err(Error::ReadFailure(e))
            }
        }
    }

    /// Empty before the first connect
    fn port_name(&self) -> &str {
        &self.port_name
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("Serial transport dropped while still connected");
        }
    }
}
