//! Device traits
//!
//! Hardware-independent types and interfaces for consumers of IMU data.

pub mod imu;

pub use imu::{
    shared_acceleration, shared_gyroscope, ImuAccessor, Measurement, MeasurementStatus,
};
