//! IMU measurement types and the accessor interface
//!
//! A `Measurement` pairs a 3-axis vector with a freshness status. Consumers
//! read measurements through `ImuAccessor`; each fresh value is delivered at
//! most once.
//!
//! ## Usage
//!
//! ```ignore
//! use gnc_imu::devices::traits::{ImuAccessor, MeasurementStatus};
//!
//! fn control_step<I: ImuAccessor>(imu: &mut I) {
//!     let accel = imu.get_acceleration();
//!     if accel.status == MeasurementStatus::Ok {
//!         // consume accel.vector
//!     }
//! }
//! ```

use crate::core::traits::SharedState;
use nalgebra::Vector3;

/// Freshness of a cached measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MeasurementStatus {
    /// Never refreshed, or already consumed once
    #[default]
    Stale,
    /// Refreshed this cycle and not yet consumed
    Ok,
    /// The most recent bus transaction for this sensor failed
    Failure,
}

/// A 3-axis sample with its freshness status
///
/// Units are SI: m/s² for acceleration, rad/s for angular rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub vector: Vector3<f32>,
    pub status: MeasurementStatus,
}

impl Measurement {
    /// Zero vector, stale
    pub fn stale() -> Self {
        Self {
            vector: Vector3::zeros(),
            status: MeasurementStatus::Stale,
        }
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self::stale()
    }
}

/// Consumer-facing accessor interface
///
/// Both calls return the cached measurement and, if it was `Ok`, demote the
/// cached copy to `Stale`.
pub trait ImuAccessor {
    /// Latest accelerometer measurement (m/s²)
    fn get_acceleration(&mut self) -> Measurement;

    /// Latest gyroscope measurement (rad/s)
    fn get_gyroscope(&mut self) -> Measurement;
}

/// Read acceleration from a driver shared across execution contexts
///
/// The read and the stale reset happen inside one critical section.
pub fn shared_acceleration<I, S>(state: &S) -> Measurement
where
    I: ImuAccessor,
    S: SharedState<I>,
{
    state.with_mut(|imu| imu.get_acceleration())
}

/// Read angular rate from a driver shared across execution contexts
pub fn shared_gyroscope<I, S>(state: &S) -> Measurement
where
    I: ImuAccessor,
    S: SharedState<I>,
{
    state.with_mut(|imu| imu.get_gyroscope())
}
