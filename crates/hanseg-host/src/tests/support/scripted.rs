//! Scripted line transport standing in for a real analyzer process.

use std::collections::VecDeque;

use crate::adapter::{LineTransport, TransportError};

/// Replays canned output lines and records everything sent.
pub(crate) struct ScriptedTransport {
    sent: Vec<Vec<u8>>,
    lines: VecDeque<Vec<u8>>,
}

impl ScriptedTransport {
    /// Builds a transport that replays `lines` in order, then reports a
    /// closed pipe.
    pub(crate) fn replaying<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        Self {
            sent: Vec::new(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Bytes written by the exchange layer, in send order.
    pub(crate) fn sent(&self) -> &[Vec<u8>] {
        &self.sent
    }
}

impl LineTransport for ScriptedTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.sent.push(bytes.to_vec());
        Ok(())
    }

    fn read_line(&mut self) -> Result<Vec<u8>, TransportError> {
        self.lines.pop_front().ok_or(TransportError::ClosedPipe)
    }
}
