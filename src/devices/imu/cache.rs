//! Measurement cache
//!
//! Holds the latest accelerometer and gyroscope samples. Each entry moves
//! through Stale / Ok / Failure:
//!
//! | Event                | Stale   | Ok      | Failure |
//! |----------------------|---------|---------|---------|
//! | successful read      | Ok      | Ok      | Ok      |
//! | failed read          | Failure | Failure | Failure |
//! | accessor call        | Stale   | Stale   | Failure |
//!
//! A failed read changes only the status; the last good vector is kept.

use crate::devices::traits::{Measurement, MeasurementStatus};
use nalgebra::Vector3;

/// Which sensor a cache slot or bus read belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    Accelerometer,
    Gyroscope,
}

impl Sensor {
    /// Both sensors in cycle order
    pub const ALL: [Sensor; 2] = [Sensor::Accelerometer, Sensor::Gyroscope];

    pub const fn name(self) -> &'static str {
        match self {
            Sensor::Accelerometer => "accelerometer",
            Sensor::Gyroscope => "gyroscope",
        }
    }
}

/// Latest sample per sensor
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementCache {
    accel: Measurement,
    gyro: Measurement,
}

impl MeasurementCache {
    /// Both entries stale with zero vectors
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, sensor: Sensor) -> &mut Measurement {
        match sensor {
            Sensor::Accelerometer => &mut self.accel,
            Sensor::Gyroscope => &mut self.gyro,
        }
    }

    /// Current entry without consuming it
    pub fn peek(&self, sensor: Sensor) -> Measurement {
        match sensor {
            Sensor::Accelerometer => self.accel,
            Sensor::Gyroscope => self.gyro,
        }
    }

    /// Store a fresh sample
    pub fn record_sample(&mut self, sensor: Sensor, vector: Vector3<f32>) {
        *self.slot_mut(sensor) = Measurement {
            vector,
            status: MeasurementStatus::Ok,
        };
    }

    /// Mark the entry failed, keeping its vector
    pub fn record_failure(&mut self, sensor: Sensor) {
        self.slot_mut(sensor).status = MeasurementStatus::Failure;
    }

    /// Return the entry and demote Ok to Stale
    pub fn take(&mut self, sensor: Sensor) -> Measurement {
        let slot = self.slot_mut(sensor);
        let current = *slot;
        if current.status == MeasurementStatus::Ok {
            slot.status = MeasurementStatus::Stale;
        }
        current
    }
}
