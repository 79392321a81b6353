//! Driver event reporting
//!
//! Discrete, ordered, timestamped fault notifications. The driver never halts on
//! a bus failure; it reports through an `EventSink` and keeps running.
//!
//! `EventLog` is the bundled sink: a fixed-capacity ring buffer that evicts the
//! oldest record when full and counts what it dropped.

use crate::platform::BusError;
use core::fmt;
use heapless::{HistoryBuf, Vec};

/// Event log capacity in number of records
pub const EVENT_LOG_SIZE: usize = 32;

/// Fault events emitted by the IMU driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuEvent {
    /// Wake write failed during power-up
    PowerModeError(BusError),
    /// A range configuration write failed during power-up
    SetUpConfigError(BusError),
    /// A sensor read failed during a cycle
    TelemetryError(BusError),
}

impl ImuEvent {
    /// Underlying bus status carried by the event
    pub fn status(&self) -> BusError {
        match *self {
            ImuEvent::PowerModeError(status)
            | ImuEvent::SetUpConfigError(status)
            | ImuEvent::TelemetryError(status) => status,
        }
    }

    /// Event name as reported to the ground
    pub const fn name(&self) -> &'static str {
        match self {
            ImuEvent::PowerModeError(_) => "PowerModeError",
            ImuEvent::SetUpConfigError(_) => "SetUpConfigError",
            ImuEvent::TelemetryError(_) => "TelemetryError",
        }
    }
}

impl fmt::Display for ImuEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.status().as_str())
    }
}

/// An event stamped with emission order and time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRecord {
    /// Monotonic emission counter, starting at 0
    pub sequence: u32,
    /// Emission time in microseconds since boot
    pub timestamp_us: u64,
    pub event: ImuEvent,
}

/// Destination for driver events
pub trait EventSink {
    /// Accept one event record. Must not fail.
    fn emit(&mut self, record: EventRecord);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, record: EventRecord) {
        (**self).emit(record)
    }
}

/// Ring buffer sink for event records
///
/// Stores up to EVENT_LOG_SIZE records. When full, the oldest record is
/// evicted and overflow_count is incremented.
pub struct EventLog {
    buffer: HistoryBuf<EventRecord, EVENT_LOG_SIZE>,
    overflow_count: u32,
}

impl EventLog {
    /// Create a new empty event log
    pub const fn new() -> Self {
        Self {
            buffer: HistoryBuf::new(),
            overflow_count: 0,
        }
    }

    /// Return the current number of records
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Return true if the log is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Return the number of records lost to eviction
    pub fn overflow_count(&self) -> u32 {
        self.overflow_count
    }

    /// Iterate over records in oldest-first order
    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.buffer.oldest_ordered()
    }

    /// Count records whose event has the same kind as `kind`, ignoring status
    pub fn count_kind(&self, kind: &ImuEvent) -> usize {
        self.iter()
            .filter(|r| core::mem::discriminant(&r.event) == core::mem::discriminant(kind))
            .count()
    }

    /// Drain all records, returning them in oldest-first order
    pub fn drain(&mut self) -> Vec<EventRecord, EVENT_LOG_SIZE> {
        let mut result = Vec::new();
        for record in self.buffer.oldest_ordered() {
            let _ = result.push(*record);
        }
        self.buffer.clear();
        result
    }

    /// Clear all records. Does not reset overflow_count.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, record: EventRecord) {
        if self.buffer.len() == EVENT_LOG_SIZE {
            self.overflow_count = self.overflow_count.saturating_add(1);
        }
        self.buffer.write(record);
    }
}
