//! Curtain and outdoor sensor board (board #2)
//!
//! The curtain position is a percentage on the host but travels as 0-50 on
//! the wire so it fits a six-bit payload. Outgoing setpoints are halved and
//! incoming positions doubled.

use std::thread;

use homelink_core::{constants::curtain, CurtainCommand, Setpoint};
use homelink_transport::{SerialConfig, SerialTransport, Session, Transport};
use tracing::{debug, info, warn};

use crate::{
    board::{Board, Quantity},
    error::{Error, Result},
    exchange,
};

const QUANTITIES: &[Quantity] = &[
    Quantity::CurtainStatus,
    Quantity::OutdoorTemperature,
    Quantity::OutdoorPressure,
    Quantity::LightIntensity,
];

/// Last known curtain board readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurtainSnapshot {
    /// Curtain opening, 0-100 %
    pub curtain_status: f64,
    pub outdoor_temperature: f64,
    pub outdoor_pressure: f64,
    pub light_intensity: f64,
}

/// Curtain control board
pub struct CurtainControl<T: Transport = SerialTransport> {
    session: Session<T>,
    snapshot: CurtainSnapshot,
}

impl CurtainControl<SerialTransport> {
    /// Create a curtain board adapter on a serial port
    pub fn new(config: SerialConfig) -> Self {
        Self::with_session(Session::serial(config))
    }

    /// Create a curtain board adapter on its default port index
    pub fn on_default_port() -> Self {
        Self::new(SerialConfig::new(curtain::DEFAULT_PORT))
    }
}

impl<T: Transport> CurtainControl<T> {
    pub fn with_session(session: Session<T>) -> Self {
        Self {
            session,
            snapshot: CurtainSnapshot::default(),
        }
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<T> {
        &mut self.session
    }

    pub fn snapshot(&self) -> CurtainSnapshot {
        self.snapshot
    }

    pub fn curtain_status(&self) -> f64 {
        self.snapshot.curtain_status
    }

    pub fn outdoor_temperature(&self) -> f64 {
        self.snapshot.outdoor_temperature
    }

    pub fn outdoor_pressure(&self) -> f64 {
        self.snapshot.outdoor_pressure
    }

    pub fn light_intensity(&self) -> f64 {
        self.snapshot.light_intensity
    }

    /// Send a new curtain opening in percent
    pub fn set_curtain_status(&mut self, percent: f64) -> bool {
        self.set_value(Quantity::CurtainStatus, percent)
    }
}

impl<T: Transport> Board for CurtainControl<T> {
    fn name(&self) -> &'static str {
        "curtain board"
    }

    fn quantities(&self) -> &'static [Quantity] {
        QUANTITIES
    }

    fn open(&mut self) -> Result<()> {
        Ok(self.session.open()?)
    }

    fn close(&mut self) -> bool {
        self.session.close()
    }

    fn is_open(&self) -> bool {
        self.session.is_open()
    }

    fn refresh(&mut self) {
        if !self.session.is_open() {
            debug!("Skipping curtain refresh: session closed");
            return;
        }

        thread::sleep(curtain::PRE_REFRESH_PAUSE);

        let session = &mut self.session;
        let snapshot = &mut self.snapshot;

        exchange::store(
            &mut snapshot.curtain_status,
            Quantity::CurtainStatus,
            exchange::query_fixed_point(
                session,
                CurtainCommand::GetDesiredInt,
                CurtainCommand::GetDesiredFrac,
                None,
            )
            .map(|reading| reading.value() * curtain::WIRE_SCALE),
        );

        exchange::store(
            &mut snapshot.outdoor_temperature,
            Quantity::OutdoorTemperature,
            exchange::query_fixed_point(
                session,
                CurtainCommand::GetOutdoorTempInt,
                CurtainCommand::GetOutdoorTempFrac,
                None,
            )
            .map(|reading| reading.value()),
        );

        exchange::store(
            &mut snapshot.outdoor_pressure,
            Quantity::OutdoorPressure,
            exchange::query_fixed_point(
                session,
                CurtainCommand::GetPressureInt,
                CurtainCommand::GetPressureFrac,
                None,
            )
            .map(|reading| reading.value()),
        );

        exchange::store(
            &mut snapshot.light_intensity,
            Quantity::LightIntensity,
            exchange::query_fixed_point(
                session,
                CurtainCommand::GetLightInt,
                CurtainCommand::GetLightFrac,
                Some(curtain::LIGHT_FRAC_PAUSE),
            )
            .map(|reading| reading.value()),
        );
    }

    fn reading(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::CurtainStatus => Some(self.snapshot.curtain_status),
            Quantity::OutdoorTemperature => Some(self.snapshot.outdoor_temperature),
            Quantity::OutdoorPressure => Some(self.snapshot.outdoor_pressure),
            Quantity::LightIntensity => Some(self.snapshot.light_intensity),
            _ => None,
        }
    }

    fn try_set_value(&mut self, quantity: Quantity, value: f64) -> Result<Setpoint> {
        if quantity != Quantity::CurtainStatus {
            return Err(Error::ReadOnly(quantity));
        }
        if !value.is_finite() {
            return Err(Error::NonFinite(value));
        }
        if !self.session.is_open() {
            return Err(Error::NotOpen);
        }

        let mut setpoint = Setpoint::from_value(value / curtain::WIRE_SCALE);

        if setpoint.cap_int_part(curtain::WIRE_MAX) {
            warn!(
                "Curtain setpoint {} % limited to wire value {}",
                value,
                curtain::WIRE_MAX
            );
        }

        exchange::transmit(&mut self.session, &setpoint);

        info!("Set {} -> {} % ({})", quantity, value, setpoint);
        Ok(setpoint)
    }
}
