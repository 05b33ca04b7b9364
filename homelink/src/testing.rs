//! Scripted transports for adapter tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use homelink_transport::{Error, MockTransport, Result, SerialConfig, Session};

/// Bytes written through a scripted transport
#[derive(Clone, Default)]
pub(crate) struct Wire(Arc<Mutex<Vec<u8>>>);

impl Wire {
    pub(crate) fn written(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

/// A transport that records writes and answers reads from `replies`
///
/// Reads past the end of the script time out.
pub(crate) fn scripted(
    replies: impl IntoIterator<Item = Result<Option<u8>>>,
) -> (MockTransport, Wire) {
    let wire = Wire::default();
    let replies: Arc<Mutex<VecDeque<_>>> = Arc::new(Mutex::new(replies.into_iter().collect()));

    let mut transport = MockTransport::new();
    transport.expect_connect().returning(|_| Ok(()));
    transport.expect_disconnect().returning(|| Ok(()));

    let log = wire.clone();
    transport.expect_write_byte().returning(move |byte| {
        log.0.lock().unwrap().push(byte);
        Ok(())
    });

    transport
        .expect_read_byte()
        .returning(move || replies.lock().unwrap().pop_front().unwrap_or(Ok(None)));

    (transport, wire)
}

/// A transport whose every write times out
pub(crate) fn write_timing_out() -> MockTransport {
    let mut transport = MockTransport::new();
    transport.expect_connect().returning(|_| Ok(()));
    transport.expect_disconnect().returning(|| Ok(()));
    transport
        .expect_write_byte()
        .times(2)
        .returning(|_| Err(Error::WriteTimeout));
    transport
}

pub(crate) fn test_session(transport: MockTransport) -> Session<MockTransport> {
    let config = SerialConfig::new(3).with_settle_delay(Duration::ZERO);
    Session::new(transport, config)
}
