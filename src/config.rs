//! Configuration primitives for the LSM9DS1 driver.
//!
//! A [`Config`] is turned into the fixed power-on register script by
//! [`Config::script`]. Full-scale ranges are not configurable: the scale
//! factors in [`crate::readings`] assume the lowest range of every sensor.

use crate::interface::Device;
use crate::params::{AccelOdr, Decimation, GyroOdr, MagMode, MagOdr, MagPerformance};
use crate::registers::{
    CtrlReg1G, CtrlReg1M, CtrlReg3M, CtrlReg4M, CtrlReg5Xl, CtrlReg6Xl, Register,
};

/// Number of register writes issued by [`Config::script`].
pub const SCRIPT_LEN: usize = 6;

/// One register write of the power-on script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    /// Target sub-chip.
    pub device: Device,
    /// Register address.
    pub address: u8,
    /// Value written.
    pub value: u8,
}

impl RegisterWrite {
    fn of<R: Register>(register: R) -> Self {
        Self {
            device: R::DEVICE,
            address: R::ADDRESS,
            value: register.into(),
        }
    }
}

/// User-facing configuration for the LSM9DS1 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Gyroscope output data rate.
    pub gyro_odr: GyroOdr,
    /// Accelerometer output data rate, used while the gyroscope is powered down.
    pub accel_odr: AccelOdr,
    /// Accelerometer per-axis output enables `[x, y, z]`.
    pub accel_axes: [bool; 3],
    /// Accelerometer output decimation.
    pub accel_decimation: Decimation,
    /// Magnetometer output data rate.
    pub mag_odr: MagOdr,
    /// Magnetometer X/Y performance mode.
    pub mag_xy_performance: MagPerformance,
    /// Magnetometer Z performance mode.
    pub mag_z_performance: MagPerformance,
    /// Magnetometer operating mode.
    pub mag_mode: MagMode,
    /// Magnetometer temperature compensation.
    pub mag_temp_compensation: bool,
    /// Turn off the magnetometer's I2C interface.
    pub mag_i2c_disable: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Register writes that apply this configuration, in issue order.
    pub fn script(&self) -> [RegisterWrite; SCRIPT_LEN] {
        let [x, y, z] = self.accel_axes;
        [
            RegisterWrite::of(CtrlReg1G::new().with_odr(self.gyro_odr)),
            RegisterWrite::of(CtrlReg6Xl::new().with_odr(self.accel_odr)),
            RegisterWrite::of(
                CtrlReg5Xl::new()
                    .with_x_enable(x)
                    .with_y_enable(y)
                    .with_z_enable(z)
                    .with_decimation(self.accel_decimation),
            ),
            RegisterWrite::of(
                CtrlReg3M::new()
                    .with_i2c_disable(self.mag_i2c_disable)
                    .with_mode(self.mag_mode),
            ),
            RegisterWrite::of(
                CtrlReg1M::new()
                    .with_temp_compensation(self.mag_temp_compensation)
                    .with_xy_performance(self.mag_xy_performance)
                    .with_odr(self.mag_odr),
            ),
            RegisterWrite::of(CtrlReg4M::new().with_z_performance(self.mag_z_performance)),
        ]
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the gyroscope output data rate.
    pub fn gyro_odr(mut self, odr: GyroOdr) -> Self {
        self.config.gyro_odr = odr;
        self
    }

    /// Overrides the accelerometer output data rate.
    pub fn accel_odr(mut self, odr: AccelOdr) -> Self {
        self.config.accel_odr = odr;
        self
    }

    /// Selects which accelerometer axes produce output.
    pub fn accel_axes(mut self, x: bool, y: bool, z: bool) -> Self {
        self.config.accel_axes = [x, y, z];
        self
    }

    /// Sets the accelerometer output decimation.
    pub fn accel_decimation(mut self, decimation: Decimation) -> Self {
        self.config.accel_decimation = decimation;
        self
    }

    /// Overrides the magnetometer output data rate.
    pub fn mag_odr(mut self, odr: MagOdr) -> Self {
        self.config.mag_odr = odr;
        self
    }

    /// Sets the performance mode of all three magnetometer axes.
    pub fn mag_performance(mut self, mode: MagPerformance) -> Self {
        self.config.mag_xy_performance = mode;
        self.config.mag_z_performance = mode;
        self
    }

    /// Sets the magnetometer operating mode.
    pub fn mag_mode(mut self, mode: MagMode) -> Self {
        self.config.mag_mode = mode;
        self
    }

    /// Enables magnetometer temperature compensation.
    pub fn mag_temp_compensation(mut self, enabled: bool) -> Self {
        self.config.mag_temp_compensation = enabled;
        self
    }

    /// Keeps or turns off the magnetometer's I2C interface.
    pub fn mag_i2c_disable(mut self, disabled: bool) -> Self {
        self.config.mag_i2c_disable = disabled;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    /// Power-on configuration. `CTRL_REG3_M` is written as `0x80` with the
    /// magnetometer's I2C interface turned off; use
    /// [`ConfigBuilder::mag_i2c_disable`] with `false` for `0x00`.
    fn default() -> Self {
        Self {
            gyro_odr: GyroOdr::Hz14_9,
            accel_odr: AccelOdr::Hz50,
            accel_axes: [true; 3],
            accel_decimation: Decimation::None,
            mag_odr: MagOdr::Hz20,
            mag_xy_performance: MagPerformance::UltraHigh,
            mag_z_performance: MagPerformance::UltraHigh,
            mag_mode: MagMode::Continuous,
            mag_temp_compensation: false,
            mag_i2c_disable: true,
        }
    }
}
