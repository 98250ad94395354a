//! Register framing shared by both LSM9DS1 sub-chips.
//!
//! A write is `[address][data]`, a read is `[address | 0x80][dummy][dummy]`,
//! each framed by one assert/deassert of the device's chip-select. The
//! magnetometer additionally needs bit 6 set on reads to advance its
//! register pointer; that bit comes from [`DeviceProfile::read_flags`].
//!
//! [`DeviceProfile::read_flags`]: crate::interface::DeviceProfile::read_flags

use crate::interface::{Device, Transport};

/// Read/write discrimination bit of the command byte.
pub const READ_FLAG: u8 = 0x80;
/// Bits of the command byte that carry the register address.
pub const ADDRESS_MASK: u8 = 0x7F;
/// Byte clocked out while reading.
const DUMMY: u8 = 0x00;

/// Number of data bytes moved by a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Width {
    /// Single register.
    One,
    /// Two adjacent registers, low byte first.
    Two,
}

/// Value assembled from one read transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Raw(u16);

impl Raw {
    /// Assembles a raw value from the low and high register bytes.
    pub const fn from_le_bytes(low: u8, high: u8) -> Self {
        Self(u16::from_le_bytes([low, high]))
    }

    /// Unsigned value as read off the bus.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Low byte, the whole value of a [`Width::One`] read.
    pub const fn low(self) -> u8 {
        self.0 as u8
    }

    /// Two's-complement interpretation used by every output-data register.
    pub const fn signed(self) -> i16 {
        self.0 as i16
    }
}

/// Builds the command byte that opens a transaction.
pub const fn command_byte(device: Device, address: u8, is_read: bool) -> u8 {
    let address = address & ADDRESS_MASK;
    if is_read {
        address | READ_FLAG | device.profile().read_flags
    } else {
        address
    }
}

/// Writes one register of `device`.
pub fn write_register<T: Transport>(
    transport: &mut T,
    device: Device,
    address: u8,
    data: u8,
) -> core::result::Result<(), T::Error> {
    debug!("write {} {:#x} = {:#x}", device, address, data);
    framed(transport, device, |bus| {
        bus.transfer(command_byte(device, address, false))?;
        bus.transfer(data)?;
        Ok(())
    })
}

/// Reads one or two consecutive registers of `device`, low byte first.
pub fn read_register<T: Transport>(
    transport: &mut T,
    device: Device,
    address: u8,
    width: Width,
) -> core::result::Result<Raw, T::Error> {
    let raw = framed(transport, device, |bus| {
        bus.transfer(command_byte(device, address, true))?;
        let low = bus.transfer(DUMMY)?;
        let high = match width {
            Width::One => 0,
            Width::Two => bus.transfer(DUMMY)?,
        };
        Ok(Raw::from_le_bytes(low, high))
    })?;
    trace!("read {} {:#x} -> {:#x}", device, address, raw.bits());
    Ok(raw)
}

/// Runs `body` with `device` selected and always releases the select line.
///
/// An error from `body` wins over one from the release.
fn framed<T, R, F>(transport: &mut T, device: Device, body: F) -> core::result::Result<R, T::Error>
where
    T: Transport,
    F: FnOnce(&mut T) -> core::result::Result<R, T::Error>,
{
    transport.select(device)?;
    let result = body(&mut *transport);
    let released = transport.deselect(device);
    let value = result?;
    released?;
    Ok(value)
}
