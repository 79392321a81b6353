#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! gnc_imu - Cycle-driven IMU driver
//!
//! Reads accelerometer and gyroscope samples from an I2C inertial measurement
//! unit once per scheduler tick, sequences device power-up, classifies bus
//! faults into events, and hands each fresh sample to its consumer at most once.

// Bus transport abstraction and test doubles
pub mod platform;

// IMU driver and measurement types
pub mod devices;

// Events, logging, time and synchronization traits
pub mod core;

// Command and telemetry surfaces
pub mod communication;
