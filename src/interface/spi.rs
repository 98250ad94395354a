//! SPI transport built on top of `embedded-hal` `SpiBus` and two `OutputPin`s.
//!
//! The two sub-chips share SCK/MOSI/MISO, so the select lines cannot be
//! owned by an `SpiDevice`: the transport drives them itself.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_0};

use super::{ChipSelect, Device, Transport};

/// Bus mode used for both sub-chips (SPC idles low, data captured on the
/// first edge, MSB first).
pub const SPI_MODE: Mode = MODE_0;

/// Highest SPC frequency supported by the sensor.
pub const MAX_FREQUENCY_HZ: u32 = 10_000_000;

/// Failure reported by [`SpiTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<S, P> {
    /// The SPI bus reported an error.
    Spi(S),
    /// A chip-select pin could not be driven.
    ChipSelect(P),
}

/// SPI-based transport for the LSM9DS1.
pub struct SpiTransport<SPI, CSAG, CSM> {
    spi: SPI,
    cs_ag: CSAG,
    cs_m: CSM,
}

impl<SPI, CSAG, CSM> SpiTransport<SPI, CSAG, CSM>
where
    SPI: SpiBus,
    CSAG: OutputPin,
    CSM: OutputPin<Error = CSAG::Error>,
{
    /// Creates a transport and drives both select lines to their idle (high) level.
    pub fn new(
        spi: SPI,
        mut cs_ag: CSAG,
        mut cs_m: CSM,
    ) -> core::result::Result<Self, TransportError<SPI::Error, CSAG::Error>> {
        cs_ag.set_high().map_err(TransportError::ChipSelect)?;
        cs_m.set_high().map_err(TransportError::ChipSelect)?;
        Ok(Self { spi, cs_ag, cs_m })
    }
}

impl<SPI, CSAG, CSM> SpiTransport<SPI, CSAG, CSM> {
    /// Provides mutable access to the wrapped SPI bus.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the transport and returns the bus and both select pins.
    pub fn release(self) -> (SPI, CSAG, CSM) {
        (self.spi, self.cs_ag, self.cs_m)
    }
}

impl<SPI, CSAG, CSM> Transport for SpiTransport<SPI, CSAG, CSM>
where
    SPI: SpiBus,
    CSAG: OutputPin,
    CSM: OutputPin<Error = CSAG::Error>,
{
    type Error = TransportError<SPI::Error, CSAG::Error>;

    fn select(&mut self, device: Device) -> core::result::Result<(), Self::Error> {
        match device.profile().chip_select {
            ChipSelect::AccelGyro => self.cs_ag.set_low(),
            ChipSelect::Magnetometer => self.cs_m.set_low(),
        }
        .map_err(TransportError::ChipSelect)
    }

    fn deselect(&mut self, device: Device) -> core::result::Result<(), Self::Error> {
        // The line goes high even when the flush failed.
        let flushed = self.spi.flush();
        match device.profile().chip_select {
            ChipSelect::AccelGyro => self.cs_ag.set_high(),
            ChipSelect::Magnetometer => self.cs_m.set_high(),
        }
        .map_err(TransportError::ChipSelect)?;
        flushed.map_err(TransportError::Spi)
    }

    fn transfer(&mut self, byte: u8) -> core::result::Result<u8, Self::Error> {
        let mut word = [byte];
        self.spi
            .transfer_in_place(&mut word)
            .map_err(TransportError::Spi)?;
        trace!("spi {:#x} -> {:#x}", byte, word[0]);
        Ok(word[0])
    }
}
