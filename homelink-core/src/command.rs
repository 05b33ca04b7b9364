//! Per-board command code tables
//!
//! Each board has its own namespace of read-request codes. Codes overlap
//! between boards, so a byte only has meaning together with the board it is
//! sent to.

use std::fmt;

use crate::constants::{climate, curtain};
use crate::error::{Error, Result};

/// Read-request codes understood by the climate board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClimateCommand {
    GetDesiredTempFrac = climate::GET_DESIRED_TEMP_FRAC,
    GetDesiredTempInt = climate::GET_DESIRED_TEMP_INT,
    GetAmbientTempFrac = climate::GET_AMBIENT_TEMP_FRAC,
    GetAmbientTempInt = climate::GET_AMBIENT_TEMP_INT,
    GetFanSpeed = climate::GET_FAN_SPEED,
}

impl ClimateCommand {
    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::GetDesiredTempFrac => "GET_DESIRED_TEMP_FRAC",
            Self::GetDesiredTempInt => "GET_DESIRED_TEMP_INT",
            Self::GetAmbientTempFrac => "GET_AMBIENT_TEMP_FRAC",
            Self::GetAmbientTempInt => "GET_AMBIENT_TEMP_INT",
            Self::GetFanSpeed => "GET_FAN_SPEED",
        }
    }
}

impl From<ClimateCommand> for u8 {
    fn from(cmd: ClimateCommand) -> u8 {
        cmd as u8
    }
}

impl TryFrom<u8> for ClimateCommand {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            climate::GET_DESIRED_TEMP_FRAC => Ok(Self::GetDesiredTempFrac),
            climate::GET_DESIRED_TEMP_INT => Ok(Self::GetDesiredTempInt),
            climate::GET_AMBIENT_TEMP_FRAC => Ok(Self::GetAmbientTempFrac),
            climate::GET_AMBIENT_TEMP_INT => Ok(Self::GetAmbientTempInt),
            climate::GET_FAN_SPEED => Ok(Self::GetFanSpeed),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for ClimateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

/// Read-request codes understood by the curtain board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CurtainCommand {
    GetDesiredFrac = curtain::GET_DESIRED_FRAC,
    GetDesiredInt = curtain::GET_DESIRED_INT,
    GetOutdoorTempFrac = curtain::GET_OUTDOOR_TEMP_FRAC,
    GetOutdoorTempInt = curtain::GET_OUTDOOR_TEMP_INT,
    GetPressureFrac = curtain::GET_PRESSURE_FRAC,
    GetPressureInt = curtain::GET_PRESSURE_INT,
    GetLightFrac = curtain::GET_LIGHT_FRAC,
    GetLightInt = curtain::GET_LIGHT_INT,
}

impl CurtainCommand {
    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::GetDesiredFrac => "GET_DESIRED_FRAC",
            Self::GetDesiredInt => "GET_DESIRED_INT",
            Self::GetOutdoorTempFrac => "GET_OUTDOOR_TEMP_FRAC",
            Self::GetOutdoorTempInt => "GET_OUTDOOR_TEMP_INT",
            Self::GetPressureFrac => "GET_PRESSURE_FRAC",
            Self::GetPressureInt => "GET_PRESSURE_INT",
            Self::GetLightFrac => "GET_LIGHT_FRAC",
            Self::GetLightInt => "GET_LIGHT_INT",
        }
    }
}

impl From<CurtainCommand> for u8 {
    fn from(cmd: CurtainCommand) -> u8 {
        cmd as u8
    }
}

impl TryFrom<u8> for CurtainCommand {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            curtain::GET_DESIRED_FRAC => Ok(Self::GetDesiredFrac),
            curtain::GET_DESIRED_INT => Ok(Self::GetDesiredInt),
            curtain::GET_OUTDOOR_TEMP_FRAC => Ok(Self::GetOutdoorTempFrac),
            curtain::GET_OUTDOOR_TEMP_INT => Ok(Self::GetOutdoorTempInt),
            curtain::GET_PRESSURE_FRAC => Ok(Self::GetPressureFrac),
            curtain::GET_PRESSURE_INT => Ok(Self::GetPressureInt),
            curtain::GET_LIGHT_FRAC => Ok(Self::GetLightFrac),
            curtain::GET_LIGHT_INT => Ok(Self::GetLightInt),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for CurtainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climate_command_conversion() {
        assert_eq!(u8::from(ClimateCommand::GetDesiredTempInt), 0x02);
        assert_eq!(
            ClimateCommand::try_from(0x05).unwrap(),
            ClimateCommand::GetFanSpeed
        );
    }

    #[test]
    fn test_climate_wire_table() {
        assert_eq!(ClimateCommand::GetDesiredTempFrac as u8, 0b0000_0001);
        assert_eq!(ClimateCommand::GetDesiredTempInt as u8, 0b0000_0010);
        assert_eq!(ClimateCommand::GetAmbientTempFrac as u8, 0b0000_0011);
        assert_eq!(ClimateCommand::GetAmbientTempInt as u8, 0b0000_0100);
        assert_eq!(ClimateCommand::GetFanSpeed as u8, 0b0000_0101);
    }

    #[test]
    fn test_curtain_wire_table() {
        for code in 1..=8u8 {
            let cmd = CurtainCommand::try_from(code).unwrap();
            assert_eq!(u8::from(cmd), code);
        }
        assert_eq!(CurtainCommand::GetLightInt as u8, 0x08);
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            ClimateCommand::try_from(0x06),
            Err(Error::UnknownCommand(0x06))
        ));
        assert!(CurtainCommand::try_from(0x00).is_err());
        assert!(CurtainCommand::try_from(0x09).is_err());
    }

    #[test]
    fn test_command_display() {
        assert_eq!(
            ClimateCommand::GetFanSpeed.to_string(),
            "GET_FAN_SPEED(0x05)"
        );
        assert_eq!(
            CurtainCommand::GetPressureInt.to_string(),
            "GET_PRESSURE_INT(0x06)"
        );
    }
}
