//! # homelink
//!
//! Host-side driver for microcontroller boards speaking a single-byte
//! command protocol over a serial link.
//!
//! ## Features
//!
//! - Typed per-board command tables
//! - Blocking, synchronous API with configurable timeouts
//! - Best-effort semantics: byte-level failures are logged, never fatal
//! - Cached readings, no I/O on accessors
//!
//! ## Quick Start
//!
//! ```no_run
//! use homelink::{Board, CurtainControl, SerialConfig};
//!
//! fn main() -> homelink::Result<()> {
//!     let mut board = CurtainControl::new(SerialConfig::new(12));
//!     board.open()?;
//!
//!     board.set_curtain_status(75.0);
//!     board.refresh();
//!     println!("Outdoor: {:.1} °C", board.outdoor_temperature());
//!
//!     board.close();
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod climate;
pub mod curtain;
pub mod error;

mod exchange;

#[cfg(test)]
mod testing;

// Re-exports
pub use board::{Board, Quantity};
pub use climate::{AirConditioner, ClimateSnapshot};
pub use curtain::{CurtainControl, CurtainSnapshot};
pub use error::{Error, Result};

// Re-export types
pub use homelink_core::{ClimateCommand, CurtainCommand, FixedPoint, Setpoint};
pub use homelink_transport::{PortId, SerialConfig, Session, SessionState, Transport};
