//! Telemetry publication
//!
//! The driver publishes both cached measurements once per powered cycle.
//! Publishing is a plain read of the cache and never consumes freshness.

use crate::devices::imu::cache::Sensor;
use crate::devices::traits::Measurement;

/// Telemetry channel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TelemetryChannel {
    Accelerometer,
    Gyroscope,
}

impl From<Sensor> for TelemetryChannel {
    fn from(sensor: Sensor) -> Self {
        match sensor {
            Sensor::Accelerometer => TelemetryChannel::Accelerometer,
            Sensor::Gyroscope => TelemetryChannel::Gyroscope,
        }
    }
}

/// Destination for periodic measurement telemetry
pub trait TelemetrySink {
    fn publish(&mut self, channel: TelemetryChannel, measurement: &Measurement);
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for &mut S {
    fn publish(&mut self, channel: TelemetryChannel, measurement: &Measurement) {
        (**self).publish(channel, measurement)
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetry;

impl TelemetrySink for NullTelemetry {
    fn publish(&mut self, _channel: TelemetryChannel, _measurement: &Measurement) {}
}

/// Sink that keeps the latest value per channel
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryLog {
    accelerometer: Option<Measurement>,
    gyroscope: Option<Measurement>,
    publish_count: u32,
}

impl TelemetryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value published on `channel`
    pub fn latest(&self, channel: TelemetryChannel) -> Option<Measurement> {
        match channel {
            TelemetryChannel::Accelerometer => self.accelerometer,
            TelemetryChannel::Gyroscope => self.gyroscope,
        }
    }

    /// Total publications across all channels
    pub fn publish_count(&self) -> u32 {
        self.publish_count
    }
}

impl TelemetrySink for TelemetryLog {
    fn publish(&mut self, channel: TelemetryChannel, measurement: &Measurement) {
        let slot = match channel {
            TelemetryChannel::Accelerometer => &mut self.accelerometer,
            TelemetryChannel::Gyroscope => &mut self.gyroscope,
        };
        *slot = Some(*measurement);
        self.publish_count = self.publish_count.wrapping_add(1);
    }
}
