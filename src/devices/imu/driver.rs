//! Cycle-driven IMU driver
//!
//! Owns the bus, the measurement cache, and the power controller, and reports
//! through an event sink and a telemetry sink. All entry points are
//! synchronous and run to completion.

use super::cache::{MeasurementCache, Sensor};
use super::config::ImuConfig;
use super::fault::{self, BusPhase};
use super::power::{self, PowerController, PowerState, SetupError, Transition};
use super::registers::{self, IMU_MAX_DATA_SIZE_BYTES, IMU_REG_SIZE_BYTES};
use crate::communication::{CommandResponse, ImuCommand, TelemetryChannel, TelemetrySink};
use crate::core::events::{EventRecord, EventSink, ImuEvent};
use crate::core::traits::TimeSource;
use crate::devices::traits::{ImuAccessor, Measurement};
use crate::platform::{BusError, BusTransport};
use nalgebra::Vector3;

/// Decode three big-endian i16 axes and scale them
pub fn decode_vector(payload: &[u8; IMU_MAX_DATA_SIZE_BYTES], scale: f32) -> Vector3<f32> {
    let axis = |i: usize| i16::from_be_bytes([payload[2 * i], payload[2 * i + 1]]) as f32 * scale;
    Vector3::new(axis(0), axis(1), axis(2))
}

/// IMU driver
///
/// # Type Parameters
///
/// * `B` - Bus transport
/// * `E` - Event sink
/// * `S` - Telemetry sink
/// * `T` - Time source for event timestamps
pub struct ImuDriver<B, E, S, T> {
    bus: B,
    events: E,
    telemetry: S,
    time: T,

    config: ImuConfig,

    /// Accel scale factor (raw to m/s²)
    accel_scale: f32,

    /// Gyro scale factor (raw to rad/s)
    gyro_scale: f32,

    power: PowerController,
    cache: MeasurementCache,

    /// Next event sequence number
    event_sequence: u32,

    /// Powered cycles executed
    cycle_count: u32,
}

impl<B, E, S, T> ImuDriver<B, E, S, T>
where
    B: BusTransport,
    E: EventSink,
    S: TelemetrySink,
    T: TimeSource,
{
    /// Create a driver in the Off state with both measurements stale
    ///
    /// No bus traffic happens until power is switched on.
    pub fn new(bus: B, events: E, telemetry: S, time: T, config: ImuConfig) -> Self {
        Self {
            bus,
            events,
            telemetry,
            time,
            config,
            accel_scale: config.accel_range.scale_to_m_s2(),
            gyro_scale: config.gyro_range.scale_to_rad_s(),
            power: PowerController::new(),
            cache: MeasurementCache::new(),
            event_sequence: 0,
            cycle_count: 0,
        }
    }

    pub fn power_state(&self) -> PowerState {
        self.power.state()
    }

    pub fn config(&self) -> &ImuConfig {
        &self.config
    }

    /// Powered cycles executed since construction
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Successful power-ups since construction
    pub fn setups_completed(&self) -> u32 {
        self.power.setups_completed()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn telemetry(&self) -> &S {
        &self.telemetry
    }

    /// Cached measurement without consuming its freshness
    pub fn peek(&self, sensor: Sensor) -> Measurement {
        self.cache.peek(sensor)
    }

    /// Request a power state
    ///
    /// Repeating the current state does nothing. Off->On runs the setup
    /// sequence; if it aborts the driver stays Off and the error is returned
    /// after the matching events were emitted. On->Off never touches the bus.
    pub fn set_power(&mut self, requested: PowerState) -> Result<(), SetupError> {
        match self.power.plan(requested) {
            Transition::None => Ok(()),
            Transition::PowerUp => self.power_up(),
            Transition::PowerDown => {
                self.power.power_down();
                crate::log_info!("IMU powered down");
                Ok(())
            }
        }
    }

    fn power_up(&mut self) -> Result<(), SetupError> {
        let Self {
            bus,
            events,
            time,
            event_sequence,
            config,
            ..
        } = self;

        power::run_setup(bus, config, |event| {
            emit_event(events, time, event_sequence, event)
        })?;

        self.power.complete_power_up();
        crate::log_info!("IMU at {} powered up", self.config.i2c_address);
        Ok(())
    }

    /// Execute a command and produce its acknowledgement
    pub fn handle_command(&mut self, command: ImuCommand) -> CommandResponse {
        match command {
            ImuCommand::PowerSwitch(requested) => match self.set_power(requested) {
                Ok(()) => CommandResponse::Ok,
                Err(_) => CommandResponse::ExecutionError,
            },
        }
    }

    /// Run one read-publish cycle
    ///
    /// While Off nothing happens. While On each sensor is read independently;
    /// a failure marks that sensor's entry Failure and emits `TelemetryError`
    /// without touching the other sensor. Both entries are then published.
    pub fn on_cycle(&mut self) {
        if !self.power.is_on() {
            return;
        }
        self.cycle_count = self.cycle_count.wrapping_add(1);

        for sensor in Sensor::ALL {
            match self.read_sensor(sensor) {
                Ok(vector) => self.cache.record_sample(sensor, vector),
                Err(status) => {
                    crate::log_warn!("IMU {} read failed: {}", sensor.name(), status.as_str());
                    self.cache.record_failure(sensor);
                    if let Some(event) = fault::classify(BusPhase::Read, Err(status)).event() {
                        self.emit(event);
                    }
                }
            }
        }

        for sensor in Sensor::ALL {
            let measurement = self.cache.peek(sensor);
            self.telemetry
                .publish(TelemetryChannel::from(sensor), &measurement);
        }
    }

    /// Register select followed by a fixed-size sample read
    fn read_sensor(&mut self, sensor: Sensor) -> Result<Vector3<f32>, BusError> {
        let (start, scale) = match sensor {
            Sensor::Accelerometer => (registers::ACCEL_XOUT_H, self.accel_scale),
            Sensor::Gyroscope => (registers::GYRO_XOUT_H, self.gyro_scale),
        };
        let addr = self.config.i2c_address;

        let select: [u8; IMU_REG_SIZE_BYTES] = [start];
        self.bus.write(addr, &select)?;

        let mut payload = [0u8; IMU_MAX_DATA_SIZE_BYTES];
        self.bus.read(addr, &mut payload)?;

        Ok(decode_vector(&payload, scale))
    }

    fn emit(&mut self, event: ImuEvent) {
        emit_event(
            &mut self.events,
            &self.time,
            &mut self.event_sequence,
            event,
        );
    }
}

fn emit_event<E: EventSink, T: TimeSource>(
    events: &mut E,
    time: &T,
    sequence: &mut u32,
    event: ImuEvent,
) {
    // read failures are logged per sensor at the call site
    if !matches!(event, ImuEvent::TelemetryError(_)) {
        crate::log_error!("IMU {}: {}", event.name(), event.status().as_str());
    }

    events.emit(EventRecord {
        sequence: *sequence,
        timestamp_us: time.now_us(),
        event,
    });
    *sequence = sequence.wrapping_add(1);
}

impl<B, E, S, T> ImuAccessor for ImuDriver<B, E, S, T>
where
    B: BusTransport,
    E: EventSink,
    S: TelemetrySink,
    T: TimeSource,
{
    fn get_acceleration(&mut self) -> Measurement {
        self.cache.take(Sensor::Accelerometer)
    }

    fn get_gyroscope(&mut self) -> Measurement {
        self.cache.take(Sensor::Gyroscope)
    }
}
