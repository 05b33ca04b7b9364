//! Request/response helpers shared by the board adapters

use std::fmt;
use std::thread;
use std::time::Duration;

use homelink_core::{FixedPoint, Setpoint};
use homelink_transport::{Session, Transport};
use tracing::{debug, error, trace};

use crate::board::Quantity;
use crate::error::Result;

/// Send a read-request code and read the single-byte reply
pub(crate) fn query<T, C>(session: &mut Session<T>, command: C) -> Result<u8>
where
    T: Transport,
    C: Into<u8> + fmt::Display + Copy,
{
    session.send_byte(command.into());
    let reply = session.try_read_byte()?;

    trace!("{} -> {}", command, reply);
    Ok(reply)
}

/// Request the integer part, then the fractional digit, of one reading
///
/// `pause` is waited between the two requests.
pub(crate) fn query_fixed_point<T, C>(
    session: &mut Session<T>,
    int_command: C,
    frac_command: C,
    pause: Option<Duration>,
) -> Result<FixedPoint>
where
    T: Transport,
    C: Into<u8> + fmt::Display + Copy,
{
    let int_part = query(session, int_command)?;

    if let Some(pause) = pause {
        thread::sleep(pause);
    }

    let frac_digit = query(session, frac_command)?;

    Ok(FixedPoint::new(int_part, frac_digit))
}

/// Transmit both setpoint bytes, fraction first
pub(crate) fn transmit<T: Transport>(session: &mut Session<T>, setpoint: &Setpoint) {
    for byte in setpoint.wire() {
        session.send_byte(byte);
    }
}

/// Store a refreshed value, or keep the old one if the read failed
pub(crate) fn store<V: fmt::Debug>(slot: &mut V, quantity: Quantity, result: Result<V>) {
    match result {
        Ok(value) => {
            debug!("{} = {:?}", quantity, value);
            *slot = value;
        }
        Err(e) => {
            error!("Failed to refresh {}: {}", quantity, e);
        }
    }
}
