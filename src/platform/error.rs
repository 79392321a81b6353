//! Platform error types
//!
//! This module defines the bus status vocabulary shared by every transport
//! implementation. A transaction either succeeds (`Ok(())`) or fails with one
//! of the `BusError` variants.

use core::fmt;

/// Result type for bus transactions
pub type Result<T> = core::result::Result<T, BusError>;

/// Per-transaction bus status (`Ok(())` is the OK status)
pub type BusStatus = Result<()>;

/// Bus-level errors
///
/// All transport implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device did not acknowledge its address
    Address,
    /// Write phase failed after the address was acknowledged
    Write,
    /// Any other failure (read phase, arbitration, bus fault, timeout)
    Other,
}

impl BusError {
    /// Short mnemonic used in log lines and telemetry
    pub const fn as_str(self) -> &'static str {
        match self {
            BusError::Address => "ADDRESS_ERR",
            BusError::Write => "WRITE_ERR",
            BusError::Other => "OTHER_ERR",
        }
    }
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Address => write!(f, "I2C device not responding at address"),
            BusError::Write => write!(f, "I2C write failed"),
            BusError::Other => write!(f, "I2C transaction failed"),
        }
    }
}
