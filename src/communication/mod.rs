//! Command and telemetry interfaces
//!
//! The driver's outward-facing surfaces besides events: the power-switch
//! command with its acknowledgement, and per-cycle measurement telemetry.

pub mod command;
pub mod telemetry;

pub use command::{CommandResponse, ImuCommand};
pub use telemetry::{NullTelemetry, TelemetryChannel, TelemetryLog, TelemetrySink};
