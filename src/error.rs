//! Error handling primitives for the LSM9DS1 driver.

use crate::interface::Device;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying transport.
    Interface(E),
    /// `WHO_AM_I` of a sub-device did not match its datasheet constant.
    ///
    /// Only produced by [`Lsm9ds1::check_ids`](crate::Lsm9ds1::check_ids);
    /// plain identity reads hand back whatever byte the bus returned.
    DeviceIdMismatch {
        /// Sub-device that was queried.
        device: Device,
        /// Identification byte actually read.
        found: u8,
    },
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
