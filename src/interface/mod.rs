//! Bus transport abstraction for the LSM9DS1 driver.
//!
//! The sensor is two sub-chips sharing one clock/data bus, each framed by
//! its own active-low chip-select line. A [`Transport`] moves one byte per
//! call and owns both select lines; the register framing on top of it lives
//! in [`crate::protocol`].

pub mod spi;

use crate::registers::{EXPECTED_WHO_AM_I_AG, EXPECTED_WHO_AM_I_M};

/// One of the two sub-chips behind the shared bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Device {
    /// Accelerometer + gyroscope (+ temperature) sub-chip, `CS_A/G`.
    AccelGyro,
    /// Magnetometer sub-chip, `CS_M`.
    Magnetometer,
}

/// Chip-select line wired to a sub-device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipSelect {
    /// `CS_A/G` line.
    AccelGyro,
    /// `CS_M` line.
    Magnetometer,
}

/// Static per-device data used by the transport and protocol layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Select line framing this device's transactions.
    pub chip_select: ChipSelect,
    /// Datasheet value of `WHO_AM_I`.
    pub who_am_i: u8,
    /// Extra bits ORed into every read command besides the read flag.
    ///
    /// The magnetometer only advances its register pointer during a
    /// multi-byte SPI read when bit 6 (`MS`) is set in the command.
    pub read_flags: u8,
}

const PROFILES: [DeviceProfile; 2] = [
    DeviceProfile {
        chip_select: ChipSelect::AccelGyro,
        who_am_i: EXPECTED_WHO_AM_I_AG,
        read_flags: 0x00,
    },
    DeviceProfile {
        chip_select: ChipSelect::Magnetometer,
        who_am_i: EXPECTED_WHO_AM_I_M,
        read_flags: 0x40,
    },
];

impl Device {
    /// Both sub-devices, in bring-up order.
    pub const ALL: [Device; 2] = [Device::AccelGyro, Device::Magnetometer];

    /// Returns the static profile of this sub-device.
    pub const fn profile(self) -> DeviceProfile {
        PROFILES[self as usize]
    }
}

/// Byte-at-a-time synchronous bus with two chip-select lines.
///
/// Callers frame every register transaction as `select`, one or more
/// `transfer`s, then `deselect`, and never hold two devices selected at
/// once. The transport itself drives the pins as told.
pub trait Transport {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Asserts (drives low) the select line of `device`.
    fn select(&mut self, device: Device) -> core::result::Result<(), Self::Error>;

    /// Waits for the bus to go idle, then deasserts the select line of `device`.
    fn deselect(&mut self, device: Device) -> core::result::Result<(), Self::Error>;

    /// Shifts `byte` out and returns the byte shifted in at the same time.
    fn transfer(&mut self, byte: u8) -> core::result::Result<u8, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn select(&mut self, device: Device) -> core::result::Result<(), Self::Error> {
        T::select(self, device)
    }

    fn deselect(&mut self, device: Device) -> core::result::Result<(), Self::Error> {
        T::deselect(self, device)
    }

    fn transfer(&mut self, byte: u8) -> core::result::Result<u8, Self::Error> {
        T::transfer(self, byte)
    }
}
