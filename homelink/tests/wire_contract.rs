//! Byte-level contract with the board firmware, exercised through the public API

use std::sync::{Arc, Mutex};
use std::time::Duration;

use homelink::{AirConditioner, Board, CurtainControl, Quantity, SerialConfig, Session};
use homelink_transport::MockTransport;
use pretty_assertions::assert_eq;

fn recording_session(replies: Vec<u8>) -> (Session<MockTransport>, Arc<Mutex<Vec<u8>>>) {
    let written = Arc::new(Mutex::new(Vec::new()));
    let mut replies = replies.into_iter();

    let mut transport = MockTransport::new();
    transport.expect_connect().times(1).returning(|_| Ok(()));
    transport.expect_disconnect().times(1).returning(|| Ok(()));

    let log = Arc::clone(&written);
    transport.expect_write_byte().returning(move |byte| {
        log.lock().unwrap().push(byte);
        Ok(())
    });
    transport
        .expect_read_byte()
        .returning(move || Ok(replies.next()));

    let config = SerialConfig::new(3).with_settle_delay(Duration::ZERO);
    (Session::new(transport, config), written)
}

#[test]
fn test_climate_exchange() {
    let (session, written) = recording_session(vec![24, 0, 23, 7, 3]);
    let mut ac = AirConditioner::with_session(session);

    ac.open().unwrap();
    ac.open().unwrap();
    assert!(ac.set_desired_temperature(25.5));
    ac.refresh();
    assert!(ac.close());

    assert_eq!(
        *written.lock().unwrap(),
        vec![0x85, 0xD9, 0x02, 0x01, 0x04, 0x03, 0x05]
    );
    assert_eq!(ac.reading(Quantity::DesiredTemperature), Some(24.0));
    assert_eq!(ac.reading(Quantity::AmbientTemperature), Some(23.7));
    assert_eq!(ac.reading(Quantity::FanSpeed), Some(3.0));
}

#[test]
fn test_curtain_exchange() {
    let (session, written) = recording_session(vec![10, 0, 24, 5, 13, 2, 50, 5]);
    let mut board = CurtainControl::with_session(session);

    board.open().unwrap();
    assert!(board.set_curtain_status(55.5));
    board.refresh();
    assert!(board.close());

    assert_eq!(
        *written.lock().unwrap(),
        vec![0x88, 0xDB, 0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07]
    );

    let readings: Vec<_> = board
        .quantities()
        .iter()
        .filter_map(|&quantity| board.reading(quantity))
        .collect();
    assert_eq!(readings, vec![20.0, 24.5, 13.2, 50.5]);
}

#[test]
fn test_closed_boards_stay_silent() {
    let mut transport = MockTransport::new();
    transport.expect_connect().never();
    transport.expect_write_byte().never();
    transport.expect_read_byte().never();

    let config = SerialConfig::new(3).with_settle_delay(Duration::ZERO);
    let mut board = CurtainControl::with_session(Session::new(transport, config));

    board.refresh();
    assert!(!board.set_curtain_status(40.0));
    assert!(!board.close());
    assert_eq!(board.curtain_status(), 0.0);
}
