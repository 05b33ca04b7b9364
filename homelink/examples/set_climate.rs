//! Send a desired temperature to the climate board
//!
//! Usage: `set_climate <port-index> <temperature>`

use anyhow::{bail, Context};
use homelink::{AirConditioner, Board, SerialConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [port, temperature] = args.as_slice() else {
        bail!("usage: set_climate <port-index> <temperature>");
    };

    let port: u8 = port.parse().context("invalid port index")?;
    let temperature: f64 = temperature.parse().context("invalid temperature")?;

    let mut ac = AirConditioner::new(SerialConfig::new(port));
    ac.open()?;

    if !ac.set_desired_temperature(temperature) {
        bail!("setpoint {} was not sent", temperature);
    }

    ac.refresh();
    println!("✓ Desired: {:.1} °C", ac.desired_temperature());
    println!("✓ Ambient: {:.1} °C", ac.ambient_temperature());
    println!("✓ Fan speed: {}", ac.fan_speed());

    ac.close();
    Ok(())
}
