//! Poll both boards and print their readings
//!
//! Port indices default to the boards' standard ports and can be overridden
//! with `CLIMATE_PORT` / `CURTAIN_PORT`.

use std::time::Duration;

use anyhow::Context;
use homelink::{AirConditioner, Board, CurtainControl, SerialConfig};
use homelink_core::constants::{climate, curtain};
use tracing_subscriber::EnvFilter;

fn port_from_env(var: &str, default: u8) -> anyhow::Result<u8> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} must be a port index, got {:?}", var, value)),
        Err(_) => Ok(default),
    }
}

fn print_readings(board: &dyn Board) {
    for &quantity in board.quantities() {
        if let Some(value) = board.reading(quantity) {
            println!("  {:<20} {:>6.1} {}", quantity, value, quantity.unit());
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let climate_port = port_from_env("CLIMATE_PORT", climate::DEFAULT_PORT)?;
    let curtain_port = port_from_env("CURTAIN_PORT", curtain::DEFAULT_PORT)?;

    let mut boards: Vec<Box<dyn Board>> = vec![
        Box::new(AirConditioner::new(SerialConfig::new(climate_port))),
        Box::new(CurtainControl::new(SerialConfig::new(curtain_port))),
    ];

    for board in boards.iter_mut() {
        if let Err(e) = board.open() {
            eprintln!("✗ {}: {}", board.name(), e);
        }
    }

    for _ in 0..3 {
        for board in boards.iter_mut().filter(|board| board.is_open()) {
            board.refresh();
            println!("{}:", board.name());
            print_readings(board.as_ref());
        }
        std::thread::sleep(Duration::from_secs(1));
    }

    for board in boards.iter_mut() {
        board.close();
    }

    Ok(())
}
