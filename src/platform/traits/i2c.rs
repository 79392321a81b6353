//! I2C bus transport trait
//!
//! This module defines the two-wire bus interface the IMU driver consumes, plus an
//! adapter that lifts any blocking `embedded_hal::i2c::I2c` implementation onto it.

use crate::platform::{BusError, BusStatus};
use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource};

/// Bus transport trait
///
/// Transactions are synchronous: each call returns a definite status before the
/// caller continues.
///
/// # Invariants
///
/// - Only one owner per bus instance
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
pub trait BusTransport {
    /// Read from a device
    ///
    /// Performs START - ADDR(R) - DATA - STOP and fills `buffer` up to its
    /// capacity on success. The buffer contents are unspecified on failure.
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> BusStatus;

    /// Write to a device
    ///
    /// Performs START - ADDR(W) - DATA - STOP, consuming the entire buffer.
    fn write(&mut self, addr: u8, data: &[u8]) -> BusStatus;
}

impl<B: BusTransport + ?Sized> BusTransport for &mut B {
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> BusStatus {
        (**self).read(addr, buffer)
    }

    fn write(&mut self, addr: u8, data: &[u8]) -> BusStatus {
        (**self).write(addr, data)
    }
}

/// `BusTransport` adapter for blocking embedded-hal I2C peripherals
///
/// HAL error kinds collapse into the three bus statuses at this boundary, so
/// nothing above the adapter ever sees a HAL-specific error type.
pub struct HalBus<I> {
    i2c: I,
}

impl<I: I2c> HalBus<I> {
    /// Wrap an embedded-hal I2C peripheral
    ///
    /// Bus frequency and timeouts belong to the peripheral's own setup.
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Release the wrapped peripheral
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusTransport for HalBus<I> {
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> BusStatus {
        self.i2c.read(addr, buffer).map_err(|e| map_hal_error(e.kind()))
    }

    fn write(&mut self, addr: u8, data: &[u8]) -> BusStatus {
        self.i2c.write(addr, data).map_err(|e| map_hal_error(e.kind()))
    }
}

/// Map embedded-hal I2C error kinds to bus errors
fn map_hal_error(kind: ErrorKind) -> BusError {
    match kind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => BusError::Address,
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data) => BusError::Write,
        _ => BusError::Other,
    }
}
