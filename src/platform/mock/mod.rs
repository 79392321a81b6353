//! Mock platform implementation for testing
//!
//! Test doubles that satisfy the platform traits without hardware. Fault
//! injection happens through the double's own configuration, never through
//! shared mutable state.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use gnc_imu::platform::mock::MockI2c;
//! use gnc_imu::platform::{BusError, BusTransport};
//!
//! let mut i2c = MockI2c::new();
//! i2c.set_read_status(Err(BusError::Other));
//! let mut buf = [0u8; 6];
//! assert_eq!(i2c.read(0x68, &mut buf), Err(BusError::Other));
//! ```

#![cfg(any(test, feature = "mock"))]

mod i2c;

pub use i2c::{I2cTransaction, MockI2c};
