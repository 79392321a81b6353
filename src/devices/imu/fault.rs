//! Bus fault classification
//!
//! Every bus status the driver receives passes through [`classify`] together
//! with the phase it was produced in. The result decides whether the driver
//! proceeds, treats the status as the already-configured sentinel, or reports
//! an event.
//!
//! | Status      | Wake              | Configure        | Read            |
//! |-------------|-------------------|------------------|-----------------|
//! | OK          | Proceed           | Proceed          | Proceed         |
//! | ADDRESS_ERR | AlreadyConfigured | ConfigError      | TelemetryError  |
//! | WRITE_ERR   | PowerError        | ConfigError      | TelemetryError  |
//! | OTHER_ERR   | PowerError        | ConfigError      | TelemetryError  |
//!
//! `AlreadyConfigured` is produced for exactly one cell of the table. It is a
//! setup special case, not a retry policy: nothing at the cycle level retries.

use crate::core::events::ImuEvent;
use crate::platform::{BusError, BusStatus};

/// Where in the driver a bus transaction happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusPhase {
    /// Power-mode write that wakes the device
    Wake,
    /// Full-scale range writes following the wake write
    Configure,
    /// Per-cycle register select and sample read
    Read,
}

/// Outcome of classifying one bus status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultClass {
    /// Transaction succeeded
    Proceed,
    /// Device answered the wake write with an address NACK: it is already
    /// awake and holding its configuration. Not an error.
    AlreadyConfigured,
    /// Wake write failed; power-up aborts
    PowerError(BusError),
    /// A configuration write failed
    ConfigError(BusError),
    /// A cycle read failed
    TelemetryError(BusError),
}

impl FaultClass {
    /// Event to emit for this class, if any
    pub fn event(self) -> Option<ImuEvent> {
        match self {
            FaultClass::Proceed | FaultClass::AlreadyConfigured => None,
            FaultClass::PowerError(status) => Some(ImuEvent::PowerModeError(status)),
            FaultClass::ConfigError(status) => Some(ImuEvent::SetUpConfigError(status)),
            FaultClass::TelemetryError(status) => Some(ImuEvent::TelemetryError(status)),
        }
    }
}

/// Classify a bus status produced during `phase`
pub fn classify(phase: BusPhase, status: BusStatus) -> FaultClass {
    let error = match status {
        Ok(()) => return FaultClass::Proceed,
        Err(error) => error,
    };

    match (phase, error) {
        (BusPhase::Wake, BusError::Address) => FaultClass::AlreadyConfigured,
        (BusPhase::Wake, error) => FaultClass::PowerError(error),
        (BusPhase::Configure, error) => FaultClass::ConfigError(error),
        (BusPhase::Read, error) => FaultClass::TelemetryError(error),
    }
}
