// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! various parts of the application and stores them in a circular buffer.
//! Producers hold a [`DiagnosticsHandle`]; the collector drains the channel
//! on the UI loop's schedule via [`DiagnosticsCollector::process_pending`].

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

/// Size of the bounded handle-to-collector channel.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone and can be shared freely. Sends are
/// non-blocking; events are dropped when the channel is full so producers
/// on the UI loop are never stalled by diagnostics.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, stamping it with the current wall-clock time.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Records a warning message.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    /// Records an error message.
    pub fn log_error(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }
}

/// Aggregates diagnostic events into a memory-bounded buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    /// Creates a collector with the given buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_tx,
            event_rx,
        }
    }

    /// Returns a new handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains pending events from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the buffered events in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Clears all buffered events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the buffered events as a JSON array.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::super::DismissCause;
    use super::*;

    #[test]
    fn handle_events_reach_the_buffer() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log(DiagnosticEventKind::SurfaceReady);
        handle.log(DiagnosticEventKind::BannerShown { id: 1 });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::SurfaceReady,
                DiagnosticEventKind::BannerShown { id: 1 },
            ]
        );
    }

    #[test]
    fn cloned_handles_feed_the_same_collector() {
        let mut collector = DiagnosticsCollector::default();
        let first = collector.handle();
        let second = first.clone();

        first.log_warning("one");
        second.log_error("two");
        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn overflow_drops_events_without_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10));
        let handle = collector.handle();

        for i in 0..(CHANNEL_CAPACITY + 50) {
            handle.log(DiagnosticEventKind::BannerShown { id: i as u64 });
        }
        // The send side never blocked; the channel kept the first
        // CHANNEL_CAPACITY events and the buffer keeps its own bound.
        collector.process_pending();
        assert_eq!(collector.len(), 10);
    }

    #[test]
    fn export_json_is_an_array_of_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log(DiagnosticEventKind::BannerDismissed {
            id: 3,
            cause: DismissCause::Clicked,
        });
        collector.process_pending();

        let json = collector.export_json().expect("serializable");
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("\"banner_dismissed\""));
    }
}
