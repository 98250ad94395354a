//! Register map definitions for the LSM9DS1.
//!
//! The accelerometer/gyroscope and magnetometer sub-chips have separate
//! address spaces; constants ending in `_M` belong to the magnetometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::interface::Device;
use crate::params::{AccelOdr, Axis, Decimation, GyroOdr, MagMode, MagOdr, MagPerformance};

// ----------------------------------------------------------------------
// Accelerometer + gyroscope sub-chip
// ----------------------------------------------------------------------

/// Activity threshold.
pub const REG_ACT_THS: u8 = 0x04;
/// Inactivity duration.
pub const REG_ACT_DUR: u8 = 0x05;
/// Accelerometer interrupt generator configuration.
pub const REG_INT_GEN_CFG_XL: u8 = 0x06;
/// Accelerometer X interrupt threshold.
pub const REG_INT_GEN_THS_X_XL: u8 = 0x07;
/// Accelerometer Y interrupt threshold.
pub const REG_INT_GEN_THS_Y_XL: u8 = 0x08;
/// Accelerometer Z interrupt threshold.
pub const REG_INT_GEN_THS_Z_XL: u8 = 0x09;
/// Accelerometer interrupt duration.
pub const REG_INT_GEN_DUR_XL: u8 = 0x0A;
/// Gyroscope reference value for interrupt generation.
pub const REG_REFERENCE_G: u8 = 0x0B;
/// INT1 pin control.
pub const REG_INT1_CTRL: u8 = 0x0C;
/// INT2 pin control.
pub const REG_INT2_CTRL: u8 = 0x0D;
/// Accelerometer/gyroscope identification.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Gyroscope ODR, full scale and bandwidth.
pub const REG_CTRL_REG1_G: u8 = 0x10;
/// Gyroscope output and interrupt selection.
pub const REG_CTRL_REG2_G: u8 = 0x11;
/// Gyroscope low-power mode and high-pass filter.
pub const REG_CTRL_REG3_G: u8 = 0x12;
/// Gyroscope sign and orientation.
pub const REG_ORIENT_CFG_G: u8 = 0x13;
/// Gyroscope interrupt source.
pub const REG_INT_GEN_SRC_G: u8 = 0x14;
/// Temperature output, low byte.
pub const REG_OUT_TEMP_L: u8 = 0x15;
/// Temperature output, high byte.
pub const REG_OUT_TEMP_H: u8 = 0x16;
/// Status register (mirror of `STATUS_REG`).
pub const REG_STATUS_REG_0: u8 = 0x17;
/// Gyroscope X output, low byte.
pub const REG_OUT_X_L_G: u8 = 0x18;
/// Gyroscope X output, high byte.
pub const REG_OUT_X_H_G: u8 = 0x19;
/// Gyroscope Y output, low byte.
pub const REG_OUT_Y_L_G: u8 = 0x1A;
/// Gyroscope Y output, high byte.
pub const REG_OUT_Y_H_G: u8 = 0x1B;
/// Gyroscope Z output, low byte.
pub const REG_OUT_Z_L_G: u8 = 0x1C;
/// Gyroscope Z output, high byte.
pub const REG_OUT_Z_H_G: u8 = 0x1D;
/// Gyroscope axis output enables.
pub const REG_CTRL_REG4: u8 = 0x1E;
/// Accelerometer axis output enables and decimation.
pub const REG_CTRL_REG5_XL: u8 = 0x1F;
/// Accelerometer ODR, full scale and bandwidth.
pub const REG_CTRL_REG6_XL: u8 = 0x20;
/// Accelerometer high-resolution mode and filters.
pub const REG_CTRL_REG7_XL: u8 = 0x21;
/// Address auto-increment, block data update, software reset.
pub const REG_CTRL_REG8: u8 = 0x22;
/// Gyroscope sleep, FIFO and I2C disable.
pub const REG_CTRL_REG9: u8 = 0x23;
/// Accelerometer and gyroscope self-test.
pub const REG_CTRL_REG10: u8 = 0x24;
/// Accelerometer interrupt source.
pub const REG_INT_GEN_SRC_XL: u8 = 0x26;
/// Status register.
pub const REG_STATUS_REG: u8 = 0x27;
/// Accelerometer X output, low byte.
pub const REG_OUT_X_L_XL: u8 = 0x28;
/// Accelerometer X output, high byte.
pub const REG_OUT_X_H_XL: u8 = 0x29;
/// Accelerometer Y output, low byte.
pub const REG_OUT_Y_L_XL: u8 = 0x2A;
/// Accelerometer Y output, high byte.
pub const REG_OUT_Y_H_XL: u8 = 0x2B;
/// Accelerometer Z output, low byte.
pub const REG_OUT_Z_L_XL: u8 = 0x2C;
/// Accelerometer Z output, high byte.
pub const REG_OUT_Z_H_XL: u8 = 0x2D;
/// FIFO control.
pub const REG_FIFO_CTRL: u8 = 0x2E;
/// FIFO status.
pub const REG_FIFO_SRC: u8 = 0x2F;
/// Gyroscope interrupt generator configuration.
pub const REG_INT_GEN_CFG_G: u8 = 0x30;
/// Gyroscope X interrupt threshold, high byte.
pub const REG_INT_GEN_THS_XH_G: u8 = 0x31;
/// Gyroscope X interrupt threshold, low byte.
pub const REG_INT_GEN_THS_XL_G: u8 = 0x32;
/// Gyroscope Y interrupt threshold, high byte.
pub const REG_INT_GEN_THS_YH_G: u8 = 0x33;
/// Gyroscope Y interrupt threshold, low byte.
pub const REG_INT_GEN_THS_YL_G: u8 = 0x34;
/// Gyroscope Z interrupt threshold, high byte.
pub const REG_INT_GEN_THS_ZH_G: u8 = 0x35;
/// Gyroscope Z interrupt threshold, low byte.
pub const REG_INT_GEN_THS_ZL_G: u8 = 0x36;
/// Gyroscope interrupt duration.
pub const REG_INT_GEN_DUR_G: u8 = 0x37;

// ----------------------------------------------------------------------
// Magnetometer sub-chip
// ----------------------------------------------------------------------

/// Magnetometer X hard-iron offset, low byte.
pub const REG_OFFSET_X_REG_L_M: u8 = 0x05;
/// Magnetometer X hard-iron offset, high byte.
pub const REG_OFFSET_X_REG_H_M: u8 = 0x06;
/// Magnetometer Y hard-iron offset, low byte.
pub const REG_OFFSET_Y_REG_L_M: u8 = 0x07;
/// Magnetometer Y hard-iron offset, high byte.
pub const REG_OFFSET_Y_REG_H_M: u8 = 0x08;
/// Magnetometer Z hard-iron offset, low byte.
pub const REG_OFFSET_Z_REG_L_M: u8 = 0x09;
/// Magnetometer Z hard-iron offset, high byte.
pub const REG_OFFSET_Z_REG_H_M: u8 = 0x0A;
/// Magnetometer identification.
pub const REG_WHO_AM_I_M: u8 = 0x0F;
/// Temperature compensation, XY performance, ODR, self-test.
pub const REG_CTRL_REG1_M: u8 = 0x20;
/// Full scale, reboot, soft reset.
pub const REG_CTRL_REG2_M: u8 = 0x21;
/// I2C disable, low power, SPI mode, operating mode.
pub const REG_CTRL_REG3_M: u8 = 0x22;
/// Z-axis performance mode and endianness.
pub const REG_CTRL_REG4_M: u8 = 0x23;
/// Fast read and block data update.
pub const REG_CTRL_REG5_M: u8 = 0x24;
/// Magnetometer status.
pub const REG_STATUS_REG_M: u8 = 0x27;
/// Magnetometer X output, low byte.
pub const REG_OUT_X_L_M: u8 = 0x28;
/// Magnetometer X output, high byte.
pub const REG_OUT_X_H_M: u8 = 0x29;
/// Magnetometer Y output, low byte.
pub const REG_OUT_Y_L_M: u8 = 0x2A;
/// Magnetometer Y output, high byte.
pub const REG_OUT_Y_H_M: u8 = 0x2B;
/// Magnetometer Z output, low byte.
pub const REG_OUT_Z_L_M: u8 = 0x2C;
/// Magnetometer Z output, high byte.
pub const REG_OUT_Z_H_M: u8 = 0x2D;
/// Magnetometer interrupt configuration.
pub const REG_INT_CFG_M: u8 = 0x30;
/// Magnetometer interrupt source.
pub const REG_INT_SRC_M: u8 = 0x31;
/// Magnetometer interrupt threshold, low byte.
pub const REG_INT_THS_L_M: u8 = 0x32;
/// Magnetometer interrupt threshold, high byte.
pub const REG_INT_THS_H_M: u8 = 0x33;

/// Expected `WHO_AM_I` value of the accelerometer/gyroscope sub-chip.
pub const EXPECTED_WHO_AM_I_AG: u8 = 0x68;
/// Expected `WHO_AM_I_M` value of the magnetometer sub-chip.
pub const EXPECTED_WHO_AM_I_M: u8 = 0x3D;

/// Read/write registers of the accelerometer/gyroscope sub-chip. Every other
/// address is read-only or reserved.
pub const READ_WRITE_AG: &[u8] = &[
    REG_ACT_THS,
    REG_ACT_DUR,
    REG_INT_GEN_CFG_XL,
    REG_INT_GEN_THS_X_XL,
    REG_INT_GEN_THS_Y_XL,
    REG_INT_GEN_THS_Z_XL,
    REG_INT_GEN_DUR_XL,
    REG_REFERENCE_G,
    REG_INT1_CTRL,
    REG_INT2_CTRL,
    REG_CTRL_REG1_G,
    REG_CTRL_REG2_G,
    REG_CTRL_REG3_G,
    REG_ORIENT_CFG_G,
    REG_CTRL_REG4,
    REG_CTRL_REG5_XL,
    REG_CTRL_REG6_XL,
    REG_CTRL_REG7_XL,
    REG_CTRL_REG8,
    REG_CTRL_REG9,
    REG_CTRL_REG10,
    REG_FIFO_CTRL,
    REG_INT_GEN_CFG_G,
    REG_INT_GEN_THS_XH_G,
    REG_INT_GEN_THS_XL_G,
    REG_INT_GEN_THS_YH_G,
    REG_INT_GEN_THS_YL_G,
    REG_INT_GEN_THS_ZH_G,
    REG_INT_GEN_THS_ZL_G,
    REG_INT_GEN_DUR_G,
];

/// Read/write registers of the magnetometer sub-chip.
pub const READ_WRITE_M: &[u8] = &[
    REG_OFFSET_X_REG_L_M,
    REG_OFFSET_X_REG_H_M,
    REG_OFFSET_Y_REG_L_M,
    REG_OFFSET_Y_REG_H_M,
    REG_OFFSET_Z_REG_L_M,
    REG_OFFSET_Z_REG_H_M,
    REG_CTRL_REG1_M,
    REG_CTRL_REG2_M,
    REG_CTRL_REG3_M,
    REG_CTRL_REG4_M,
    REG_CTRL_REG5_M,
    REG_INT_CFG_M,
    REG_INT_THS_L_M,
    REG_INT_THS_H_M,
];

/// Read/write register addresses of `device`.
pub const fn read_write_registers(device: Device) -> &'static [u8] {
    match device {
        Device::AccelGyro => READ_WRITE_AG,
        Device::Magnetometer => READ_WRITE_M,
    }
}

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register: Copy + From<u8> + Into<u8> {
    /// Sub-chip whose address space holds the register.
    const DEVICE: Device;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Reset value defined by the datasheet.
    const RESET_VALUE: u8;
}

macro_rules! byte_register {
    ($ty:ident, $device:expr, $address:expr, $access:expr, $reset:expr) => {
        impl From<u8> for $ty {
            fn from(value: u8) -> Self {
                Self::from_bytes([value])
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> Self {
                value.into_bytes()[0]
            }
        }

        impl Register for $ty {
            const DEVICE: Device = $device;
            const ADDRESS: u8 = $address;
            const ACCESS: RegisterAccess = $access;
            const RESET_VALUE: u8 = $reset;
        }
    };
}

/// Bitfield representation of `CTRL_REG1_G` (AG `0x10`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1G {
    // Gyroscope bandwidth selection (bits 1:0).
    pub bandwidth: B2,
    #[skip]
    __: B1,
    // Full-scale selection (bits 4:3); 0 selects 245 dps.
    pub full_scale: B2,
    // Output data rate and power mode (bits 7:5).
    pub odr: GyroOdr,
}

byte_register!(CtrlReg1G, Device::AccelGyro, REG_CTRL_REG1_G, RegisterAccess::ReadWrite, 0x00);

/// Bitfield representation of `CTRL_REG5_XL` (AG `0x1F`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg5Xl {
    #[skip]
    __: B3,
    // X-axis output enable (bit 3).
    pub x_enable: bool,
    // Y-axis output enable (bit 4).
    pub y_enable: bool,
    // Z-axis output enable (bit 5).
    pub z_enable: bool,
    // Output decimation (bits 7:6).
    pub decimation: Decimation,
}

byte_register!(CtrlReg5Xl, Device::AccelGyro, REG_CTRL_REG5_XL, RegisterAccess::ReadWrite, 0x38);

/// Bitfield representation of `CTRL_REG6_XL` (AG `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg6Xl {
    // Anti-aliasing bandwidth selection (bits 1:0).
    pub bandwidth: B2,
    // Use `bandwidth` instead of the ODR-derived bandwidth (bit 2).
    pub bandwidth_select: bool,
    // Full-scale selection (bits 4:3); 0 selects ±2 g.
    pub full_scale: B2,
    // Output data rate and power mode (bits 7:5).
    pub odr: AccelOdr,
}

byte_register!(CtrlReg6Xl, Device::AccelGyro, REG_CTRL_REG6_XL, RegisterAccess::ReadWrite, 0x00);

/// Bitfield representation of `CTRL_REG8` (AG `0x22`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg8 {
    // Software reset (bit 0).
    pub sw_reset: bool,
    // Big-endian data selection (bit 1).
    pub big_endian: bool,
    // Register address auto-increment on multi-byte access (bit 2).
    pub auto_increment: bool,
    // 3-wire SPI mode (bit 3).
    pub spi_three_wire: bool,
    // Open-drain interrupt pins (bit 4).
    pub open_drain: bool,
    // Active-low interrupt pins (bit 5).
    pub interrupt_active_low: bool,
    // Block data update (bit 6).
    pub block_data_update: bool,
    // Reboot memory content (bit 7).
    pub boot: bool,
}

byte_register!(CtrlReg8, Device::AccelGyro, REG_CTRL_REG8, RegisterAccess::ReadWrite, 0x04);

/// Bitfield representation of `CTRL_REG1_M` (M `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg1M {
    // Self-test enable (bit 0).
    pub self_test: bool,
    // Data rates above 80 Hz (bit 1).
    pub fast_odr: bool,
    // Output data rate (bits 4:2).
    pub odr: MagOdr,
    // X and Y axes performance mode (bits 6:5).
    pub xy_performance: MagPerformance,
    // Temperature compensation (bit 7).
    pub temp_compensation: bool,
}

byte_register!(CtrlReg1M, Device::Magnetometer, REG_CTRL_REG1_M, RegisterAccess::ReadWrite, 0x10);

/// Bitfield representation of `CTRL_REG3_M` (M `0x22`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg3M {
    // Operating mode (bits 1:0).
    pub mode: MagMode,
    // SPI read/write enable (bit 2).
    pub spi_read_write: bool,
    #[skip]
    __: B2,
    // Low-power mode (bit 5).
    pub low_power: bool,
    #[skip]
    __: B1,
    // Disable the I2C interface (bit 7).
    pub i2c_disable: bool,
}

byte_register!(CtrlReg3M, Device::Magnetometer, REG_CTRL_REG3_M, RegisterAccess::ReadWrite, 0x03);

/// Bitfield representation of `CTRL_REG4_M` (M `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4M {
    #[skip]
    __: B1,
    // Big-endian data selection (bit 1).
    pub big_endian: bool,
    // Z-axis performance mode (bits 3:2).
    pub z_performance: MagPerformance,
    #[skip]
    __: B4,
}

byte_register!(CtrlReg4M, Device::Magnetometer, REG_CTRL_REG4_M, RegisterAccess::ReadWrite, 0x00);

/// Returns the `(low, high)` hard-iron offset register pair of a magnetometer axis.
pub const fn mag_offset_registers(axis: Axis) -> (u8, u8) {
    match axis {
        Axis::X => (REG_OFFSET_X_REG_L_M, REG_OFFSET_X_REG_H_M),
        Axis::Y => (REG_OFFSET_Y_REG_L_M, REG_OFFSET_Y_REG_H_M),
        Axis::Z => (REG_OFFSET_Z_REG_L_M, REG_OFFSET_Z_REG_H_M),
    }
}
