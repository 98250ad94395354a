//! Strongly typed parameter enumerations for the LSM9DS1 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the register bitfields.
//!
//! # Examples
//!
//! ```rust
//! use lsm9ds1::params::{AccelOdr, GyroOdr, MagPerformance};
//!
//! let gyro = GyroOdr::Hz59_5;
//! let accel = AccelOdr::Hz119;
//! let mode = MagPerformance::High;
//! let _ = (gyro, accel, mode);
//! ```

use modular_bitfield::prelude::Specifier;

/// Gyroscope output data rate (`CTRL_REG1_G.ODR_G`).
///
/// When the gyroscope is enabled the accelerometer runs at the same rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum GyroOdr {
    /// Gyroscope powered down.
    PowerDown = 0b000,
    /// 14.9 Hz.
    Hz14_9 = 0b001,
    /// 59.5 Hz.
    Hz59_5 = 0b010,
    /// 119 Hz.
    Hz119 = 0b011,
    /// 238 Hz.
    Hz238 = 0b100,
    /// 476 Hz.
    Hz476 = 0b101,
    /// 952 Hz.
    Hz952 = 0b110,
    /// Encoding the datasheet lists as not available.
    Reserved = 0b111,
}

impl GyroOdr {
    /// Returns the rate in millihertz, 0 when powered down or reserved.
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz14_9 => 14_900,
            Self::Hz59_5 => 59_500,
            Self::Hz119 => 119_000,
            Self::Hz238 => 238_000,
            Self::Hz476 => 476_000,
            Self::Hz952 => 952_000,
            Self::Reserved => 0,
        }
    }
}

/// Accelerometer-only output data rate (`CTRL_REG6_XL.ODR_XL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum AccelOdr {
    /// Accelerometer powered down.
    PowerDown = 0b000,
    /// 10 Hz.
    Hz10 = 0b001,
    /// 50 Hz.
    Hz50 = 0b010,
    /// 119 Hz.
    Hz119 = 0b011,
    /// 238 Hz.
    Hz238 = 0b100,
    /// 476 Hz.
    Hz476 = 0b101,
    /// 952 Hz.
    Hz952 = 0b110,
    /// Encoding the datasheet lists as not available.
    Reserved = 0b111,
}

impl AccelOdr {
    /// Returns the rate in hertz, 0 when powered down or reserved.
    pub const fn hz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz10 => 10,
            Self::Hz50 => 50,
            Self::Hz119 => 119,
            Self::Hz238 => 238,
            Self::Hz476 => 476,
            Self::Hz952 => 952,
            Self::Reserved => 0,
        }
    }
}

/// Accelerometer output decimation (`CTRL_REG5_XL.DEC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Decimation {
    /// Every sample is output.
    None = 0b00,
    /// Every second sample.
    Every2 = 0b01,
    /// Every fourth sample.
    Every4 = 0b10,
    /// Every eighth sample.
    Every8 = 0b11,
}

/// Magnetometer output data rate (`CTRL_REG1_M.DO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 3]
pub enum MagOdr {
    /// 0.625 Hz.
    Hz0_625 = 0b000,
    /// 1.25 Hz.
    Hz1_25 = 0b001,
    /// 2.5 Hz.
    Hz2_5 = 0b010,
    /// 5 Hz.
    Hz5 = 0b011,
    /// 10 Hz.
    Hz10 = 0b100,
    /// 20 Hz.
    Hz20 = 0b101,
    /// 40 Hz.
    Hz40 = 0b110,
    /// 80 Hz.
    Hz80 = 0b111,
}

impl MagOdr {
    /// Returns the rate in millihertz.
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::Hz0_625 => 625,
            Self::Hz1_25 => 1_250,
            Self::Hz2_5 => 2_500,
            Self::Hz5 => 5_000,
            Self::Hz10 => 10_000,
            Self::Hz20 => 20_000,
            Self::Hz40 => 40_000,
            Self::Hz80 => 80_000,
        }
    }
}

/// Magnetometer performance mode (`CTRL_REG1_M.OM`, `CTRL_REG4_M.OMZ`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum MagPerformance {
    /// Low-power mode.
    LowPower = 0b00,
    /// Medium-performance mode.
    Medium = 0b01,
    /// High-performance mode.
    High = 0b10,
    /// Ultra-high-performance mode.
    UltraHigh = 0b11,
}

/// Magnetometer operating mode (`CTRL_REG3_M.MD`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum MagMode {
    /// Continuous conversion.
    Continuous = 0b00,
    /// Single conversion, then back to power-down.
    Single = 0b01,
    /// Power-down (`0b10` encoding).
    PowerDownAlt = 0b10,
    /// Power-down (reset value).
    PowerDown = 0b11,
}

/// Sensor axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// All three axes in output order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}
