//! IMU commands
//!
//! Ground/sequencer commands accepted by the driver and their responses.

use crate::devices::imu::power::PowerState;

/// Commands accepted by the IMU driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuCommand {
    /// Switch device power to the given state
    PowerSwitch(PowerState),
}

/// Command acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandResponse {
    /// Command executed (including no-op requests)
    Ok,
    /// Command was accepted but could not be carried out
    ExecutionError,
}
