//! MPU-6050 register subset
//!
//! Only the registers the driver touches: power management, full-scale range
//! configuration, and the two 6-byte sample blocks.

// ============================================================================
// I2C Address
// ============================================================================

/// I2C address when AD0 pin is low
pub const IMU_ADDR: u8 = 0x68;

/// I2C address when AD0 pin is high
pub const IMU_ADDR_ALT: u8 = 0x69;

// ============================================================================
// Registers
// ============================================================================

/// Gyroscope configuration (full-scale range)
pub const GYRO_CONFIG: u8 = 0x1B;

/// Accelerometer configuration (full-scale range)
pub const ACCEL_CONFIG: u8 = 0x1C;

/// First accelerometer data register (X high byte)
pub const ACCEL_XOUT_H: u8 = 0x3B;

/// First gyroscope data register (X high byte)
pub const GYRO_XOUT_H: u8 = 0x43;

/// Power management 1
pub const PWR_MGMT_1: u8 = 0x6B;

/// PWR_MGMT_1 value: clear SLEEP, internal oscillator
pub const PWR_MGMT_1_WAKE: u8 = 0x00;

// ============================================================================
// Transfer sizes
// ============================================================================

/// Register address width in bytes
pub const IMU_REG_SIZE_BYTES: usize = 1;

/// Largest payload read in one transaction: 3 axes x big-endian i16
pub const IMU_MAX_DATA_SIZE_BYTES: usize = 6;

// ============================================================================
// Full-scale selections
// ============================================================================

pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

pub const ACCEL_FS_SEL_2G: u8 = 0x00;
pub const ACCEL_FS_SEL_4G: u8 = 0x08;
pub const ACCEL_FS_SEL_8G: u8 = 0x10;
pub const ACCEL_FS_SEL_16G: u8 = 0x18;

// ============================================================================
// Sensitivities and conversions
// ============================================================================

/// Gyroscope sensitivity (LSB per °/s)
pub const GYRO_SENSITIVITY_250DPS: f32 = 131.0;
pub const GYRO_SENSITIVITY_500DPS: f32 = 65.5;
pub const GYRO_SENSITIVITY_1000DPS: f32 = 32.8;
pub const GYRO_SENSITIVITY_2000DPS: f32 = 16.4;

/// Accelerometer sensitivity (LSB per g)
pub const ACCEL_SENSITIVITY_2G: f32 = 16384.0;
pub const ACCEL_SENSITIVITY_4G: f32 = 8192.0;
pub const ACCEL_SENSITIVITY_8G: f32 = 4096.0;
pub const ACCEL_SENSITIVITY_16G: f32 = 2048.0;

pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Standard gravity (m/s²)
pub const GRAVITY: f32 = 9.80665;
