//! Power state controller
//!
//! Tracks the device-wide power state and runs the setup sequence on Off->On.
//! The transition decision is a pure function of (current, requested); the
//! bus work for power-up lives in [`run_setup`].

use super::config::ImuConfig;
use super::fault::{self, BusPhase, FaultClass};
use super::registers;
use crate::core::events::ImuEvent;
use crate::platform::{BusError, BusTransport};
use core::fmt;

/// Device power state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    #[default]
    Off,
    On,
}

/// What a power request requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Requested state equals current state
    None,
    /// Off -> On: run setup
    PowerUp,
    /// On -> Off: clear state, no bus traffic
    PowerDown,
}

/// Decide the transition for a power request
pub fn transition(current: PowerState, requested: PowerState) -> Transition {
    match (current, requested) {
        (PowerState::Off, PowerState::On) => Transition::PowerUp,
        (PowerState::On, PowerState::Off) => Transition::PowerDown,
        _ => Transition::None,
    }
}

/// Why a power-up was aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// Wake write failed
    PowerMode(BusError),
    /// One or more configuration writes failed
    Config {
        /// Number of failed configuration writes
        failures: u8,
        /// Status of the first failed write
        first: BusError,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::PowerMode(status) => {
                write!(f, "IMU power-mode write failed: {}", status)
            }
            SetupError::Config { failures, first } => {
                write!(
                    f,
                    "IMU configuration failed ({} writes, first: {})",
                    failures, first
                )
            }
        }
    }
}

/// Power state holder
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerController {
    state: PowerState,
    setups_completed: u32,
}

impl PowerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state == PowerState::On
    }

    /// Number of successful power-ups since construction
    pub fn setups_completed(&self) -> u32 {
        self.setups_completed
    }

    /// Transition required to reach `requested`
    pub fn plan(&self, requested: PowerState) -> Transition {
        transition(self.state, requested)
    }

    /// Setup succeeded: the device is configured and readable
    pub fn complete_power_up(&mut self) {
        self.state = PowerState::On;
        self.setups_completed = self.setups_completed.wrapping_add(1);
    }

    /// Drop back to Off
    pub fn power_down(&mut self) {
        self.state = PowerState::Off;
    }
}

/// Run the power-up sequence over the bus
///
/// 1. Wake write. An address NACK here is the already-configured sentinel and
///    the sequence continues with the configuration writes as its second
///    attempt. Any other failure reports `PowerModeError` and aborts.
/// 2. One range write per sensor. Each failure reports `SetUpConfigError`; all
///    writes are attempted, then the sequence aborts if any failed.
///
/// Events are handed to `report` in emission order.
pub fn run_setup<B, F>(bus: &mut B, config: &ImuConfig, mut report: F) -> Result<(), SetupError>
where
    B: BusTransport + ?Sized,
    F: FnMut(ImuEvent),
{
    let addr = config.i2c_address;

    let wake = [registers::PWR_MGMT_1, registers::PWR_MGMT_1_WAKE];
    let class = fault::classify(BusPhase::Wake, bus.write(addr, &wake));
    if class == FaultClass::AlreadyConfigured {
        crate::log_debug!("IMU at {} already awake, reapplying configuration", addr);
    }
    if let Some(event) = class.event() {
        report(event);
        return Err(SetupError::PowerMode(event.status()));
    }

    let writes = [
        [registers::ACCEL_CONFIG, config.accel_range.register_value()],
        [registers::GYRO_CONFIG, config.gyro_range.register_value()],
    ];

    let mut failures = 0u8;
    let mut first = None;
    for data in writes.iter() {
        if let Some(event) = fault::classify(BusPhase::Configure, bus.write(addr, data)).event() {
            report(event);
            failures += 1;
            first.get_or_insert(event.status());
        }
    }

    match first {
        None => Ok(()),
        Some(first) => Err(SetupError::Config { failures, first }),
    }
}
