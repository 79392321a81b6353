//! Platform abstraction layer
//!
//! This module isolates the bus transport from the driver logic. Hardware
//! peripherals enter through `HalBus`; host tests use the `mock` transport.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{BusError, BusStatus, Result};
pub use traits::{BusTransport, HalBus};
