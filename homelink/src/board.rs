//! Board abstraction shared by all peripheral adapters

use std::fmt;

use homelink_core::Setpoint;
use tracing::warn;

use crate::error::Result;

/// Every value a board can report or accept
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quantity {
    DesiredTemperature,
    AmbientTemperature,
    FanSpeed,
    CurtainStatus,
    OutdoorTemperature,
    OutdoorPressure,
    LightIntensity,
}

impl Quantity {
    pub fn name(self) -> &'static str {
        match self {
            Self::DesiredTemperature => "desired temperature",
            Self::AmbientTemperature => "ambient temperature",
            Self::FanSpeed => "fan speed",
            Self::CurtainStatus => "curtain status",
            Self::OutdoorTemperature => "outdoor temperature",
            Self::OutdoorPressure => "outdoor pressure",
            Self::LightIntensity => "light intensity",
        }
    }

    /// Display unit, empty for raw values
    pub fn unit(self) -> &'static str {
        match self {
            Self::DesiredTemperature | Self::AmbientTemperature | Self::OutdoorTemperature => {
                "°C"
            }
            Self::FanSpeed => "",
            Self::CurtainStatus => "%",
            Self::OutdoorPressure => "hPa",
            Self::LightIntensity => "lux",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A peripheral board reachable over one session
///
/// Readings are cached: [`refresh`](Board::refresh) is the only operation
/// that talks to the board, [`reading`](Board::reading) never does.
pub trait Board {
    /// Human readable board name
    fn name(&self) -> &'static str;

    /// Quantities tracked by this board, in refresh order
    fn quantities(&self) -> &'static [Quantity];

    /// Open the underlying session
    fn open(&mut self) -> Result<()>;

    /// Close the underlying session, returning whether it was open
    fn close(&mut self) -> bool;

    fn is_open(&self) -> bool;

    /// Request every tracked quantity and update the cached snapshot
    ///
    /// Does nothing on a closed board. A quantity that fails to read keeps
    /// its previous value.
    fn refresh(&mut self);

    /// Last known value of a quantity, `None` if the board does not track it
    fn reading(&self, quantity: Quantity) -> Option<f64>;

    /// Send a new setpoint, returning it as transmitted
    ///
    /// The board never acknowledges; success means both bytes were handed
    /// to the session.
    fn try_set_value(&mut self, quantity: Quantity, value: f64) -> Result<Setpoint>;

    /// Best-effort variant of [`try_set_value`](Board::try_set_value)
    fn set_value(&mut self, quantity: Quantity, value: f64) -> bool {
        match self.try_set_value(quantity, value) {
            Ok(_) => true,
            Err(e) => {
                warn!("{}: cannot set {} to {}: {}", self.name(), quantity, value, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_display() {
        assert_eq!(Quantity::FanSpeed.to_string(), "fan speed");
        assert_eq!(Quantity::OutdoorPressure.unit(), "hPa");
        assert_eq!(Quantity::CurtainStatus.unit(), "%");
    }
}
