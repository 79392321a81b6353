//! IMU driver behaviour against the mock bus
//!
//! Run with `cargo test --features mock`.

use gnc_imu::communication::{CommandResponse, ImuCommand, TelemetryChannel, TelemetryLog};
use gnc_imu::core::events::{EventLog, ImuEvent};
use gnc_imu::core::traits::{CriticalSectionState, MockState, MockTime};
use gnc_imu::devices::imu::{ImuConfig, ImuDriver, PowerState, SetupError};
use gnc_imu::devices::traits::{
    shared_acceleration, shared_gyroscope, ImuAccessor, Measurement, MeasurementStatus,
};
use gnc_imu::platform::mock::{I2cTransaction, MockI2c};
use gnc_imu::platform::BusError;

const ADDRESS_TEST: u8 = 0x6A;

type TestDriver<'t> = ImuDriver<MockI2c, EventLog, TelemetryLog, &'t MockTime>;

fn new_driver(time: &MockTime) -> TestDriver<'_> {
    ImuDriver::new(
        MockI2c::with_seed(0xC0FFEE),
        EventLog::new(),
        TelemetryLog::new(),
        time,
        ImuConfig::with_address(ADDRESS_TEST),
    )
}

fn power_switch(imu: &mut TestDriver<'_>, state: PowerState) -> CommandResponse {
    imu.handle_command(ImuCommand::PowerSwitch(state))
}

fn count(imu: &TestDriver<'_>, kind: ImuEvent) -> usize {
    imu.events().count_kind(&kind)
}

fn all_addressed_to(imu: &TestDriver<'_>, expected: u8) -> bool {
    imu.bus().transactions().iter().all(|t| match t {
        I2cTransaction::Write { addr, .. } | I2cTransaction::Read { addr, .. } => {
            *addr == expected
        }
    })
}

fn same_vector(a: &Measurement, b: &Measurement) -> bool {
    a.vector == b.vector
}

#[test]
fn accessors_are_stale_before_power_on() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);

    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Stale);
    assert_eq!(imu.get_gyroscope().status, MeasurementStatus::Stale);

    imu.on_cycle();
    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Stale);
    assert!(imu.bus().transactions().is_empty());
}

#[test]
fn acceleration_fresh_once_per_cycle_and_distinct() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);

    let mut previous = imu.get_acceleration();
    assert_eq!(previous.status, MeasurementStatus::Stale);
    assert_eq!(power_switch(&mut imu, PowerState::On), CommandResponse::Ok);

    let mut seen: Vec<Measurement> = Vec::new();
    for _ in 0..5 {
        imu.on_cycle();
        let fresh = imu.get_acceleration();
        assert_eq!(fresh.status, MeasurementStatus::Ok);
        assert_eq!(imu.get_acceleration().status, MeasurementStatus::Stale);
        assert!(!same_vector(&fresh, &previous));
        previous = fresh;
        seen.push(fresh);
    }

    for (i, a) in seen.iter().enumerate() {
        for b in seen.iter().skip(i + 1) {
            assert!(!same_vector(a, b));
        }
    }
    assert!(all_addressed_to(&imu, ADDRESS_TEST));
}

#[test]
fn gyroscope_fresh_once_per_cycle_and_distinct() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);

    let mut previous = imu.get_gyroscope();
    assert_eq!(previous.status, MeasurementStatus::Stale);
    assert_eq!(power_switch(&mut imu, PowerState::On), CommandResponse::Ok);

    let mut seen: Vec<Measurement> = Vec::new();
    for _ in 0..5 {
        imu.on_cycle();
        let fresh = imu.get_gyroscope();
        assert_eq!(fresh.status, MeasurementStatus::Ok);
        assert_eq!(imu.get_gyroscope().status, MeasurementStatus::Stale);
        assert!(!same_vector(&fresh, &previous));
        previous = fresh;
        seen.push(fresh);
    }

    for (i, a) in seen.iter().enumerate() {
        for b in seen.iter().skip(i + 1) {
            assert!(!same_vector(a, b));
        }
    }
    assert!(all_addressed_to(&imu, ADDRESS_TEST));
}

#[test]
fn stale_persists_without_new_cycle() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);
    imu.on_cycle();

    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Ok);
    for _ in 0..3 {
        assert_eq!(imu.get_acceleration().status, MeasurementStatus::Stale);
    }
    // gyro untouched by accel consumption
    assert_eq!(imu.get_gyroscope().status, MeasurementStatus::Ok);
}

#[test]
fn repeated_power_request_is_silent() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);

    power_switch(&mut imu, PowerState::On);
    let writes_after_first = imu.bus().write_count();
    let events_after_first = imu.events().len();

    assert_eq!(power_switch(&mut imu, PowerState::On), CommandResponse::Ok);
    assert_eq!(imu.bus().write_count(), writes_after_first);
    assert_eq!(imu.events().len(), events_after_first);
    assert_eq!(imu.setups_completed(), 1);
}

#[test]
fn telemetry_errors_on_both_reads() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);

    imu.bus_mut().set_read_status(Err(BusError::Other));
    imu.bus_mut().set_write_status(Err(BusError::Other));
    imu.on_cycle();

    assert_eq!(count(&imu, ImuEvent::TelemetryError(BusError::Other)), 2);
    for record in imu.events().iter() {
        assert_eq!(record.event, ImuEvent::TelemetryError(BusError::Other));
    }
    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Failure);
    assert_eq!(imu.get_gyroscope().status, MeasurementStatus::Failure);
    // failure is not consumed by reading it
    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Failure);
    assert_eq!(imu.power_state(), PowerState::On);
}

#[test]
fn failure_clears_on_next_successful_cycle() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);

    imu.bus_mut().set_read_status(Err(BusError::Other));
    imu.on_cycle();
    imu.bus_mut().set_read_status(Ok(()));
    imu.on_cycle();

    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Ok);
    assert_eq!(imu.get_gyroscope().status, MeasurementStatus::Ok);
    assert_eq!(imu.events().len(), 2);
}

#[test]
fn power_mode_error_on_wake_write() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    imu.bus_mut().set_write_status(Err(BusError::Write));

    assert_eq!(power_switch(&mut imu, PowerState::Off), CommandResponse::Ok);
    assert_eq!(count(&imu, ImuEvent::PowerModeError(BusError::Write)), 0);

    assert_eq!(
        power_switch(&mut imu, PowerState::On),
        CommandResponse::ExecutionError
    );
    assert_eq!(count(&imu, ImuEvent::PowerModeError(BusError::Write)), 1);
    assert_eq!(count(&imu, ImuEvent::SetUpConfigError(BusError::Write)), 0);
    assert_eq!(
        imu.events().iter().next().map(|r| r.event),
        Some(ImuEvent::PowerModeError(BusError::Write))
    );

    imu.bus_mut().clear_transactions();
    imu.on_cycle();
    assert_eq!(imu.bus().read_count(), 0);
    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Stale);
}

#[test]
fn address_sentinel_then_real_failure_reports_each_config_write() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    imu.bus_mut().script_writes(&[Err(BusError::Address)]);
    imu.bus_mut().set_write_status(Err(BusError::Other));

    let result = imu.set_power(PowerState::On);

    assert_eq!(
        result,
        Err(SetupError::Config {
            failures: 2,
            first: BusError::Other
        })
    );
    assert_eq!(count(&imu, ImuEvent::SetUpConfigError(BusError::Other)), 2);
    assert_eq!(count(&imu, ImuEvent::PowerModeError(BusError::Other)), 0);
}

#[test]
fn config_write_failures_after_successful_wake() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    imu.bus_mut().script_writes(&[Ok(())]);
    imu.bus_mut().set_write_status(Err(BusError::Write));

    power_switch(&mut imu, PowerState::On);

    assert_eq!(count(&imu, ImuEvent::SetUpConfigError(BusError::Write)), 2);
    for record in imu.events().iter() {
        assert_eq!(record.event, ImuEvent::SetUpConfigError(BusError::Write));
    }
}

#[test]
fn address_sentinel_alone_is_not_an_error() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    imu.bus_mut().script_writes(&[Err(BusError::Address)]);

    assert_eq!(power_switch(&mut imu, PowerState::On), CommandResponse::Ok);
    assert!(imu.events().is_empty());
    assert_eq!(imu.power_state(), PowerState::On);

    imu.on_cycle();
    assert_eq!(imu.get_acceleration().status, MeasurementStatus::Ok);
}

#[test]
fn failed_setup_leaves_power_off_until_retried() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    imu.bus_mut().set_write_status(Err(BusError::Other));

    assert!(imu.set_power(PowerState::On).is_err());
    assert_eq!(imu.power_state(), PowerState::Off);

    imu.bus_mut().clear_transactions();
    imu.on_cycle();
    assert!(imu.bus().transactions().is_empty());
    assert_eq!(imu.telemetry().publish_count(), 0);

    imu.bus_mut().set_write_status(Ok(()));
    assert_eq!(imu.set_power(PowerState::On), Ok(()));
    assert_eq!(imu.power_state(), PowerState::On);
    assert_eq!(imu.bus().write_count(), 3);
}

#[test]
fn power_cycle_reruns_setup() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);
    imu.on_cycle();

    imu.bus_mut().clear_transactions();
    assert_eq!(power_switch(&mut imu, PowerState::Off), CommandResponse::Ok);
    assert!(imu.bus().transactions().is_empty());

    imu.on_cycle();
    assert!(imu.bus().transactions().is_empty());

    power_switch(&mut imu, PowerState::On);
    assert_eq!(imu.bus().write_count(), 3);
    assert_eq!(imu.setups_completed(), 2);
}

#[test]
fn events_are_ordered_and_timestamped() {
    let time = MockTime::with_initial(1_000);
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);
    imu.bus_mut().set_read_status(Err(BusError::Other));

    imu.on_cycle();
    time.advance(10_000);
    imu.on_cycle();

    let records: Vec<_> = imu.events().iter().copied().collect();
    assert_eq!(records.len(), 4);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.sequence, i as u32);
    }
    assert_eq!(records[0].timestamp_us, 1_000);
    assert_eq!(records[1].timestamp_us, 1_000);
    assert_eq!(records[2].timestamp_us, 11_000);
    assert_eq!(records[3].timestamp_us, 11_000);
}

#[test]
fn telemetry_reflects_cycle_outcome() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);

    imu.bus_mut().script_reads(&[Ok(()), Err(BusError::Other)]);
    imu.on_cycle();

    let accel = imu
        .telemetry()
        .latest(TelemetryChannel::Accelerometer)
        .expect("accel published");
    let gyro = imu
        .telemetry()
        .latest(TelemetryChannel::Gyroscope)
        .expect("gyro published");
    assert_eq!(accel.status, MeasurementStatus::Ok);
    assert_eq!(gyro.status, MeasurementStatus::Failure);
    assert_eq!(imu.telemetry().publish_count(), 2);
}

#[test]
fn shared_accessors_reset_atomically() {
    let time = MockTime::new();
    let mut imu = new_driver(&time);
    power_switch(&mut imu, PowerState::On);
    imu.on_cycle();

    let shared = MockState::new(imu);
    assert_eq!(shared_acceleration(&shared).status, MeasurementStatus::Ok);
    assert_eq!(shared_acceleration(&shared).status, MeasurementStatus::Stale);
    assert_eq!(shared_gyroscope(&shared).status, MeasurementStatus::Ok);
    assert_eq!(shared_gyroscope(&shared).status, MeasurementStatus::Stale);
}

#[test]
fn critical_section_container_drives_cycles() {
    use gnc_imu::core::traits::SharedState;

    let time = MockTime::new();
    let shared = CriticalSectionState::new(new_driver(&time));
    shared.with_mut(|imu| {
        imu.set_power(PowerState::On).expect("setup succeeds");
        imu.on_cycle();
    });

    assert_eq!(shared_acceleration(&shared).status, MeasurementStatus::Ok);
    assert_eq!(shared_acceleration(&shared).status, MeasurementStatus::Stale);
}
