//! Session management for one serial link
//!
//! A session owns exactly one transport and tracks:
//! - Lifecycle state (closed or open)
//! - The settings used to (re)open the link
//!
//! Byte-level I/O on a session never fails loudly. Write problems are logged
//! and dropped, and reads fall back to `0`, which the protocol cannot tell
//! apart from a genuine zero reading.

use std::thread;

use tracing::{debug, error, info, trace, warn};

use crate::{
    config::{PortId, SerialConfig},
    error::{Error, Result},
    serial::SerialTransport,
    Transport,
};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No link held
    Closed,

    /// Link held, byte exchange allowed
    Open,
}

/// Serial session
///
/// # Examples
///
/// ```no_run
/// use homelink_transport::{Session, SerialConfig};
///
/// let mut session = Session::serial(SerialConfig::new(3));
/// session.open()?;
///
/// session.send_byte(0x02);
/// let value = session.read_byte();
///
/// session.close();
/// # Ok::<(), homelink_transport::Error>(())
/// ```
pub struct Session<T: Transport = SerialTransport> {
    transport: T,
    config: SerialConfig,
    state: SessionState,
}

impl Session<SerialTransport> {
    /// Create a closed session over a serial port
    pub fn serial(config: SerialConfig) -> Self {
        Self::new(SerialTransport::new(), config)
    }
}

impl<T: Transport> Session<T> {
    /// Create a closed session over any transport
    pub fn new(transport: T, config: SerialConfig) -> Self {
        Self {
            transport,
            config,
            state: SessionState::Closed,
        }
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if open
    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn config(&self) -> &SerialConfig {
        &self.config
    }

    pub fn port_name(&self) -> String {
        self.config.port_name()
    }

    /// Open the link
    ///
    /// Opening an open session succeeds without touching the transport.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBaudRate`] if the configured baud rate is unusable
    /// - [`Error::OpenFailed`] if the port cannot be acquired
    pub fn open(&mut self) -> Result<()> {
        if self.is_open() {
            info!("{} already open", self.port_name());
            return Ok(());
        }

        self.config.validate()?;

        let port = self.port_name();

        if let Err(e) = self.transport.connect(&self.config) {
            error!("Failed to open {}: {}", port, e);

            return Err(match e {
                Error::OpenFailed { .. } => e,
                other => Error::OpenFailed {
                    port,
                    reason: other.to_string(),
                },
            });
        }

        self.state = SessionState::Open;

        info!("Connection established: {} @ {} baud", port, self.config.baud_rate);
        Ok(())
    }

    /// Close the link, returning whether a live connection was closed
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        if let Err(e) = self.transport.disconnect() {
            warn!("Error while closing {}: {}", self.port_name(), e);
        }

        self.state = SessionState::Closed;

        info!("Connection closed: {}", self.port_name());
        true
    }

    /// Write one byte, then wait the settle delay
    ///
    /// Delivery is not guaranteed: a write timeout is logged and the byte is
    /// dropped.
    pub fn send_byte(&mut self, byte: u8) {
        if !self.is_open() {
            debug!("Dropping byte 0x{:02X}: session closed", byte);
            return;
        }

        match self.transport.write_byte(byte) {
            Ok(()) => {
                trace!("Sent 0x{:02X}", byte);
                thread::sleep(self.config.settle_delay);
            }
            Err(Error::WriteTimeout) => {
                warn!("Write timeout, byte 0x{:02X} not sent", byte);
            }
            Err(e) => {
                error!("Write error: {}", e);
            }
        }
    }

    /// Read one byte
    ///
    /// Returns `0` on timeout, on read failure and on a closed session. A
    /// closed session returns immediately.
    pub fn read_byte(&mut self) -> u8 {
        match self.try_read_byte() {
            Ok(byte) => byte,
            Err(Error::NotOpen) => 0,
            Err(e) => {
                error!("Read error: {}", e);
                0
            }
        }
    }

    /// Read one byte, surfacing hard failures
    ///
    /// A timeout still yields `Ok(0)`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotOpen`] on a closed session
    /// - [`Error::ReadFailure`] when the port reports an I/O error
    pub fn try_read_byte(&mut self) -> Result<u8> {
        if !self.is_open() {
            return Err(Error::NotOpen);
        }

        match self.transport.read_byte()? {
            Some(byte) => {
                trace!("Read 0x{:02X}", byte);
                Ok(byte)
            }
            None => {
                debug!("No reply within {:?}", self.config.read_timeout);
                Ok(0)
            }
        }
    }

    /// Point a closed session at another port index
    pub fn set_port(&mut self, index: u8) -> Result<()> {
        self.ensure_closed()?;
        self.config.port = PortId::Index(index);
        Ok(())
    }

    /// Change the baud rate of a closed session
    ///
    /// The rate is validated on the next [`open`](Self::open).
    pub fn set_baud_rate(&mut self, baud_rate: u32) -> Result<()> {
        self.ensure_closed()?;
        self.config.baud_rate = baud_rate;
        Ok(())
    }

    fn ensure_closed(&self) -> Result<()> {
        if self.is_open() {
            return Err(Error::AlreadyOpen);
        }
        Ok(())
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.close();
    }
}
