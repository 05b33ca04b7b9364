//! Climate control board (board #1)

use homelink_core::{constants::climate, ClimateCommand, Setpoint};
use homelink_transport::{SerialConfig, SerialTransport, Session, Transport};
use tracing::{debug, info};

use crate::{
    board::{Board, Quantity},
    error::{Error, Result},
    exchange,
};

const QUANTITIES: &[Quantity] = &[
    Quantity::DesiredTemperature,
    Quantity::AmbientTemperature,
    Quantity::FanSpeed,
];

/// Last known climate board readings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateSnapshot {
    pub desired_temperature: f64,
    pub ambient_temperature: f64,

    /// Raw fan speed byte
    pub fan_speed: u8,
}

/// Climate control board
///
/// Reports desired and ambient temperature plus fan speed, and accepts a new
/// desired temperature.
///
/// # Examples
///
/// ```no_run
/// use homelink::{AirConditioner, Board};
///
/// let mut ac = AirConditioner::on_default_port();
/// ac.open()?;
///
/// ac.set_desired_temperature(22.5);
/// ac.refresh();
/// println!("Ambient: {:.1} °C", ac.ambient_temperature());
/// # Ok::<(), homelink::Error>(())
/// ```
pub struct AirConditioner<T: Transport = SerialTransport> {
    session: Session<T>,
    snapshot: ClimateSnapshot,
}

impl AirConditioner<SerialTransport> {
    /// Create a climate board adapter on a serial port
    pub fn new(config: SerialConfig) -> Self {
        Self::with_session(Session::serial(config))
    }

    /// Create a climate board adapter on its default port index
    pub fn on_default_port() -> Self {
        Self::new(SerialConfig::new(climate::DEFAULT_PORT))
    }
}

impl<T: Transport> AirConditioner<T> {
    pub fn with_session(session: Session<T>) -> Self {
        Self {
            session,
            snapshot: ClimateSnapshot::default(),
        }
    }

    pub fn session(&self) -> &Session<T> {
        &self.session
    }

    /// Mutable access to the session, e.g. to change port while closed
    pub fn session_mut(&mut self) -> &mut Session<T> {
        &mut self.session
    }

    pub fn snapshot(&self) -> ClimateSnapshot {
        self.snapshot
    }

    pub fn desired_temperature(&self) -> f64 {
        self.snapshot.desired_temperature
    }

    pub fn ambient_temperature(&self) -> f64 {
        self.snapshot.ambient_temperature
    }

    pub fn fan_speed(&self) -> u8 {
        self.snapshot.fan_speed
    }

    /// Send a new desired temperature
    pub fn set_desired_temperature(&mut self, value: f64) -> bool {
        self.set_value(Quantity::DesiredTemperature, value)
    }
}

impl<T: Transport> Board for AirConditioner<T> {
    fn name(&self) -> &'static str {
        "climate board"
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
            debug!("Skipping climate refresh: session closed");
            return;
        }

        let session = &mut self.session;
        let snapshot = &mut self.snapshot;

        exchange::store(
            &mut snapshot.desired_temperature,
            Quantity::DesiredTemperature,
            exchange::query_fixed_point(
                session,
                ClimateCommand::GetDesiredTempInt,
                ClimateCommand::GetDesiredTempFrac,
                None,
            )
            .map(|reading| reading.value()),
        );

        exchange::store(
            &mut snapshot.ambient_temperature,
            Quantity::AmbientTemperature,
            exchange::query_fixed_point(
                session,
                ClimateCommand::GetAmbientTempInt,
                ClimateCommand::GetAmbientTempFrac,
                None,
            )
            .map(|reading| reading.value()),
        );

        exchange::store(
            &mut snapshot.fan_speed,
            Quantity::FanSpeed,
            exchange::query(session, ClimateCommand::GetFanSpeed),
        );
    }

    fn reading(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::DesiredTemperature => Some(self.snapshot.desired_temperature),
            Quantity::AmbientTemperature => Some(self.snapshot.ambient_temperature),
            Quantity::FanSpeed => Some(f64::from(self.snapshot.fan_speed)),
            _ => None,
        }
    }

    fn try_set_value(&mut self, quantity: Quantity, value: f64) -> Result<Setpoint> {
        if quantity != Quantity::DesiredTemperature {
            return Err(Error::ReadOnly(quantity));
        }
        if !value.is_finite() {
            return Err(Error::NonFinite(value));
        }
        if !self.session.is_open() {
            return Err(Error::NotOpen);
        }

        let setpoint = Setpoint::from_value(value);
        exchange::transmit(&mut self.session, &setpoint);

        info!("Set {} -> {} ({})", quantity, value, setpoint);
        Ok(setpoint)
    }
}
