//! # homelink-core
//!
//! Core protocol implementation for single-byte command peripheral boards.
//!
//! This crate provides the low-level protocol primitives:
//! - Per-board command code tables
//! - Fixed-point decimal encoding/decoding
//! - Packed setpoint bytes
//! - Protocol constants

pub mod codec;
pub mod command;
pub mod constants;
pub mod error;
pub mod packed;

pub use codec::FixedPoint;
pub use command::{ClimateCommand, CurtainCommand};
pub use error::{Error, Result};
pub use packed::{Header, Setpoint};
