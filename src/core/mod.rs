//! Core driver infrastructure
//!
//! Event reporting, logging, and the platform-agnostic time and
//! synchronization traits the driver is built on.

pub mod events;
pub mod logging;
pub mod traits;
