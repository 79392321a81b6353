//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod i2c;

pub use i2c::{BusTransport, HalBus};
