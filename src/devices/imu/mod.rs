//! Cycle-driven IMU driver
//!
//! I2C driver for an MPU-6050-class accelerometer/gyroscope. The scheduler
//! calls [`ImuDriver::on_cycle`] once per tick; consumers read through
//! [`ImuAccessor`](crate::devices::traits::ImuAccessor).
//!
//! ## Structure
//!
//! - `power`: power state machine and setup sequence
//! - `fault`: bus status classification
//! - `cache`: per-sensor measurement cache with at-most-once freshness
//! - `driver`: cycle handler tying them together
//!
//! ## Usage
//!
//! ```ignore
//! use gnc_imu::devices::imu::{ImuConfig, ImuDriver, PowerState};
//! use gnc_imu::devices::traits::ImuAccessor;
//!
//! let mut imu = ImuDriver::new(bus, EventLog::new(), NullTelemetry, clock, ImuConfig::default());
//! imu.set_power(PowerState::On)?;
//! loop {
//!     imu.on_cycle();
//!     let accel = imu.get_acceleration();
//! }
//! ```

pub mod cache;
pub mod config;
pub mod driver;
pub mod fault;
pub mod power;
pub mod registers;

pub use cache::{MeasurementCache, Sensor};
pub use config::{AccelRange, GyroRange, ImuConfig};
pub use driver::{decode_vector, ImuDriver};
pub use fault::{classify, BusPhase, FaultClass};
pub use power::{PowerController, PowerState, SetupError, Transition};
pub use registers::IMU_MAX_DATA_SIZE_BYTES;
