//! Output-data registers and their raw-to-physical scaling.
//!
//! Every reading the driver exposes is one row of a compile-time table:
//! which sub-chip holds it, where, how many bytes, and the fixed-point factor
//! turning raw counts into integer physical units. The factors assume the
//! lowest full-scale ranges (±2 g, 245 dps, ±4 gauss), which is what
//! [`Config`](crate::config::Config) always programs.

use crate::interface::Device;
use crate::params::Axis;
use crate::protocol::Width;
use crate::registers::{
    REG_OUT_TEMP_L, REG_OUT_X_L_G, REG_OUT_X_L_M, REG_OUT_X_L_XL, REG_OUT_Y_L_G, REG_OUT_Y_L_M,
    REG_OUT_Y_L_XL, REG_OUT_Z_L_G, REG_OUT_Z_L_M, REG_OUT_Z_L_XL,
};

/// Fixed-point conversion factor `numerator / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Multiplier applied to the raw value.
    pub numerator: i32,
    /// Divisor applied after multiplication.
    pub denominator: i32,
}

impl Scale {
    /// 0.061 mg/LSB at ±2 g.
    pub const ACCEL: Scale = Scale::new(61, 1000);
    /// 8.75 mdps/LSB at 245 dps.
    pub const GYRO: Scale = Scale::new(875, 100);
    /// 0.14 mgauss/LSB at ±4 gauss.
    pub const MAG: Scale = Scale::new(14, 100);
    /// 16 LSB/°C, reported in tenths of a degree.
    pub const TEMPERATURE: Scale = Scale::new(10, 16);

    /// Creates a scale factor.
    pub const fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Scales `raw`, truncating toward zero and saturating to the `i16` range.
    pub const fn apply(self, raw: i16) -> i16 {
        let scaled = raw as i32 * self.numerator / self.denominator;
        if scaled > i16::MAX as i32 {
            i16::MAX
        } else if scaled < i16::MIN as i32 {
            i16::MIN
        } else {
            scaled as i16
        }
    }
}

/// Logical name of a sensor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Linear acceleration, X axis (mg).
    AccelX,
    /// Linear acceleration, Y axis (mg).
    AccelY,
    /// Linear acceleration, Z axis (mg).
    AccelZ,
    /// Angular rate, X axis (mdps).
    GyroX,
    /// Angular rate, Y axis (mdps).
    GyroY,
    /// Angular rate, Z axis (mdps).
    GyroZ,
    /// Magnetic field, X axis (mgauss).
    MagX,
    /// Magnetic field, Y axis (mgauss).
    MagY,
    /// Magnetic field, Z axis (mgauss).
    MagZ,
    /// Die temperature relative to 25 °C (0.1 °C).
    Temperature,
}

/// Where a reading lives and how to scale it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingSpec {
    /// Sub-chip holding the output registers.
    pub device: Device,
    /// Address of the low byte.
    pub address: u8,
    /// Number of bytes read.
    pub width: Width,
    /// Raw-to-physical conversion.
    pub scale: Scale,
}

const fn spec(device: Device, address: u8, scale: Scale) -> ReadingSpec {
    ReadingSpec {
        device,
        address,
        width: Width::Two,
        scale,
    }
}

const TABLE: [ReadingSpec; 10] = [
    spec(Device::AccelGyro, REG_OUT_X_L_XL, Scale::ACCEL),
    spec(Device::AccelGyro, REG_OUT_Y_L_XL, Scale::ACCEL),
    spec(Device::AccelGyro, REG_OUT_Z_L_XL, Scale::ACCEL),
    spec(Device::AccelGyro, REG_OUT_X_L_G, Scale::GYRO),
    spec(Device::AccelGyro, REG_OUT_Y_L_G, Scale::GYRO),
    spec(Device::AccelGyro, REG_OUT_Z_L_G, Scale::GYRO),
    spec(Device::Magnetometer, REG_OUT_X_L_M, Scale::MAG),
    spec(Device::Magnetometer, REG_OUT_Y_L_M, Scale::MAG),
    spec(Device::Magnetometer, REG_OUT_Z_L_M, Scale::MAG),
    spec(Device::AccelGyro, REG_OUT_TEMP_L, Scale::TEMPERATURE),
];

impl Reading {
    /// Every reading, in table order.
    pub const ALL: [Reading; 10] = [
        Reading::AccelX,
        Reading::AccelY,
        Reading::AccelZ,
        Reading::GyroX,
        Reading::GyroY,
        Reading::GyroZ,
        Reading::MagX,
        Reading::MagY,
        Reading::MagZ,
        Reading::Temperature,
    ];

    /// Returns the table row of this reading.
    pub const fn spec(self) -> ReadingSpec {
        TABLE[self as usize]
    }

    /// Acceleration reading of `axis`.
    pub const fn accel(axis: Axis) -> Self {
        match axis {
            Axis::X => Reading::AccelX,
            Axis::Y => Reading::AccelY,
            Axis::Z => Reading::AccelZ,
        }
    }

    /// Angular-rate reading of `axis`.
    pub const fn gyro(axis: Axis) -> Self {
        match axis {
            Axis::X => Reading::GyroX,
            Axis::Y => Reading::GyroY,
            Axis::Z => Reading::GyroZ,
        }
    }

    /// Magnetic-field reading of `axis`.
    pub const fn mag(axis: Axis) -> Self {
        match axis {
            Axis::X => Reading::MagX,
            Axis::Y => Reading::MagY,
            Axis::Z => Reading::MagZ,
        }
    }
}
