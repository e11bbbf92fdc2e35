//! Contract events and their subscribers.

use std::io::Write;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Events emitted by committed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContractEvent {
    /// A deposit was accepted. `sequence_number` is the message count
    /// before the deposit.
    MessageReceived { sequence_number: u32 },
}

/// A trait for receiving contract events.
pub trait Subscriber: Send + Sync {
    fn on_event(&self, event: &ContractEvent);

    fn on_complete(&self) {}
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NoOpSubscriber;

impl Subscriber for NoOpSubscriber {
    fn on_event(&self, _event: &ContractEvent) {}
}

/// A JSON-formatting subscriber that writes `[event]{json}` lines.
pub struct JsonSubscriber<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSubscriber<W> {
    /// Creates a new JSON subscriber that writes to the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> Subscriber for JsonSubscriber<W> {
    fn on_event(&self, event: &ContractEvent) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize event");
                return;
            }
        };
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(writer, "[event]{}", json) {
            tracing::warn!(error = %e, "failed to write event");
        }
    }

    fn on_complete(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writer.flush() {
            tracing::warn!(error = %e, "failed to flush events");
        }
    }
}

/// Keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    events: Mutex<Vec<ContractEvent>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ContractEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Subscriber for RecordingSubscriber {
    fn on_event(&self, event: &ContractEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(*event);
    }
}
