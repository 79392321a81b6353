//! Device drivers
//!
//! ## Modules
//!
//! - `imu`: cycle-driven IMU driver
//! - `traits`: measurement types and the consumer accessor interface

pub mod imu;
pub mod traits;
