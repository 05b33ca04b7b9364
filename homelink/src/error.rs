//! High-level error types

use crate::board::Quantity;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] homelink_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] homelink_transport::Error),

    #[error("Board not open")]
    NotOpen,

    #[error("{0} cannot be set on this board")]
    ReadOnly(Quantity),

    #[error("Cannot encode non-finite value {0}")]
    NonFinite(f64),
}
