//! High-level LSM9DS1 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::spi::{SpiTransport, TransportError};
use crate::interface::{Device, Transport};
use crate::params::Axis;
use crate::protocol::{self, Width};
use crate::readings::Reading;
use crate::registers::{mag_offset_registers, REG_WHO_AM_I, REG_WHO_AM_I_M};
use crate::self_test::{run_identity_check, IdentityReport};
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// High-level synchronous driver for the LSM9DS1.
///
/// Every method performs complete, blocking bus transactions; nothing is
/// cached between calls.
pub struct Lsm9ds1<T> {
    transport: T,
    config: Config,
}

impl<T> Lsm9ds1<T> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided transport.
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Consumes the driver and returns the owned transport.
    pub fn release(self) -> (T, Config) {
        (self.transport, self.config)
    }

    /// Provides mutable access to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<SPI, CSAG, CSM> Lsm9ds1<SpiTransport<SPI, CSAG, CSM>>
where
    SPI: SpiBus,
    CSAG: OutputPin,
    CSM: OutputPin<Error = CSAG::Error>,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for an SPI bus plus the two select pins.
    ///
    /// Both select lines are driven high before returning.
    pub fn new_spi(
        spi: SPI,
        cs_ag: CSAG,
        cs_m: CSM,
        config: Config,
    ) -> core::result::Result<Self, TransportError<SPI::Error, CSAG::Error>> {
        Ok(Self::new(SpiTransport::new(spi, cs_ag, cs_m)?, config))
    }

    /// Releases the driver, returning the bus, select pins and configuration.
    pub fn release_spi(self) -> (SPI, CSAG, CSM, Config) {
        let (transport, config) = self.release();
        let (spi, cs_ag, cs_m) = transport.release();
        (spi, cs_ag, cs_m, config)
    }
}

impl<T, CommE> Lsm9ds1<T>
where
    T: Transport<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Runs the power-on register script of the current configuration.
    ///
    /// The script is a fixed sequence of writes; nothing is read back.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.configure(self.config)
    }

    /// Applies a new configuration to the device.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        for write in config.script() {
            protocol::write_register(&mut self.transport, write.device, write.address, write.value)
                .map_err(Error::from)?;
        }

        debug!("configuration applied");
        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Identification ================================================
    // ==================================================================
    /// Reads the `WHO_AM_I` byte of a sub-chip.
    ///
    /// The value is returned as read; a disconnected bus typically yields
    /// `0x00` or `0xFF`. Use [`check_ids`](Self::check_ids) to turn a
    /// mismatch into an error.
    pub fn read_identity(&mut self, device: Device) -> Result<u8, CommE> {
        let address = match device {
            Device::AccelGyro => REG_WHO_AM_I,
            Device::Magnetometer => REG_WHO_AM_I_M,
        };
        let raw = protocol::read_register(&mut self.transport, device, address, Width::One)
            .map_err(Error::from)?;
        Ok(raw.low())
    }

    /// Verifies both identification registers against the datasheet constants.
    pub fn check_ids(&mut self) -> Result<IdentityReport, CommE> {
        let report = self.identity_report()?;

        for device in Device::ALL {
            if !report.matches(device) {
                return Err(Error::DeviceIdMismatch {
                    device,
                    found: report.id(device),
                });
            }
        }

        Ok(report)
    }

    /// Reads both identification registers without judging them.
    pub fn identity_report(&mut self) -> Result<IdentityReport, CommE> {
        run_identity_check(self)
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    /// Reads an output register pair as a signed raw count.
    pub fn read_raw(&mut self, reading: Reading) -> Result<i16, CommE> {
        let spec = reading.spec();
        let raw = protocol::read_register(&mut self.transport, spec.device, spec.address, spec.width)
            .map_err(Error::from)?;
        Ok(raw.signed())
    }

    /// Reads an output register pair and converts it to physical units.
    ///
    /// See [`Reading`] for the unit of each output.
    pub fn read(&mut self, reading: Reading) -> Result<i16, CommE> {
        let raw = self.read_raw(reading)?;
        Ok(reading.spec().scale.apply(raw))
    }

    /// Acceleration along X in mg.
    pub fn read_accel_x(&mut self) -> Result<i16, CommE> {
        self.read(Reading::AccelX)
    }

    /// Acceleration along Y in mg.
    pub fn read_accel_y(&mut self) -> Result<i16, CommE> {
        self.read(Reading::AccelY)
    }

    /// Acceleration along Z in mg.
    pub fn read_accel_z(&mut self) -> Result<i16, CommE> {
        self.read(Reading::AccelZ)
    }

    /// Angular rate around X in mdps.
    pub fn read_gyro_x(&mut self) -> Result<i16, CommE> {
        self.read(Reading::GyroX)
    }

    /// Angular rate around Y in mdps.
    pub fn read_gyro_y(&mut self) -> Result<i16, CommE> {
        self.read(Reading::GyroY)
    }

    /// Angular rate around Z in mdps.
    pub fn read_gyro_z(&mut self) -> Result<i16, CommE> {
        self.read(Reading::GyroZ)
    }

    /// Magnetic field along X in mgauss.
    pub fn read_mag_x(&mut self) -> Result<i16, CommE> {
        self.read(Reading::MagX)
    }

    /// Magnetic field along Y in mgauss.
    pub fn read_mag_y(&mut self) -> Result<i16, CommE> {
        self.read(Reading::MagY)
    }

    /// Magnetic field along Z in mgauss.
    pub fn read_mag_z(&mut self) -> Result<i16, CommE> {
        self.read(Reading::MagZ)
    }

    /// Die temperature in tenths of a degree Celsius, relative to 25 °C.
    pub fn read_temperature(&mut self) -> Result<i16, CommE> {
        self.read(Reading::Temperature)
    }

    /// Acceleration on all three axes, one transaction per axis.
    pub fn read_accel(&mut self) -> Result<[i16; 3], CommE> {
        self.read_axes(Reading::accel)
    }

    /// Angular rate on all three axes, one transaction per axis.
    pub fn read_gyro(&mut self) -> Result<[i16; 3], CommE> {
        self.read_axes(Reading::gyro)
    }

    /// Magnetic field on all three axes, one transaction per axis.
    pub fn read_mag(&mut self) -> Result<[i16; 3], CommE> {
        self.read_axes(Reading::mag)
    }

    fn read_axes(&mut self, reading: fn(Axis) -> Reading) -> Result<[i16; 3], CommE> {
        let mut values = [0i16; 3];
        for (value, axis) in values.iter_mut().zip(Axis::ALL) {
            *value = self.read(reading(axis))?;
        }
        Ok(values)
    }

    // ==================================================================
    // == Magnetometer Offsets ==========================================
    // ==================================================================
    /// Programs the hard-iron offset of a magnetometer axis, in raw counts.
    ///
    /// The device subtracts it from every sample before output.
    pub fn set_mag_offset(&mut self, axis: Axis, offset: i16) -> Result<(), CommE> {
        let (low_reg, high_reg) = mag_offset_registers(axis);
        let [low, high] = offset.to_le_bytes();
        self.write_register(Device::Magnetometer, low_reg, low)?;
        self.write_register(Device::Magnetometer, high_reg, high)
    }

    /// Reads back the hard-iron offset of a magnetometer axis, in raw counts.
    pub fn mag_offset(&mut self, axis: Axis) -> Result<i16, CommE> {
        let (low_reg, _) = mag_offset_registers(axis);
        let raw = protocol::read_register(&mut self.transport, Device::Magnetometer, low_reg, Width::Two)
            .map_err(Error::from)?;
        Ok(raw.signed())
    }

    // ==================================================================
    // == Raw Register Access ===========================================
    // ==================================================================
    /// Reads a single register.
    pub fn read_register(&mut self, device: Device, address: u8) -> Result<u8, CommE> {
        let raw = protocol::read_register(&mut self.transport, device, address, Width::One)
            .map_err(Error::from)?;
        Ok(raw.low())
    }

    /// Writes a single register.
    pub fn write_register(&mut self, device: Device, address: u8, value: u8) -> Result<(), CommE> {
        protocol::write_register(&mut self.transport, device, address, value).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::{
        REG_CTRL_REG5_XL, REG_OFFSET_Y_REG_H_M, REG_OFFSET_Y_REG_L_M, REG_OUT_TEMP_L,
        REG_OUT_X_L_G, REG_OUT_X_L_M, REG_OUT_X_L_XL,
    };
    use crate::sim::{Frame, SimulatedLsm9ds1};
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    fn driver() -> Lsm9ds1<SimulatedLsm9ds1> {
        Lsm9ds1::new(SimulatedLsm9ds1::new(), Config::default())
    }

    #[test]
    fn init_issues_power_on_script_in_order() {
        let mut lsm = driver();

        lsm.init().unwrap();

        let frames: Vec<(Device, Vec<u8>)> = lsm
            .transport_mut()
            .frames()
            .iter()
            .map(|frame| (frame.device, frame.mosi.clone()))
            .collect();
        assert_eq!(
            frames,
            vec![
                (Device::AccelGyro, vec![0x10, 0x20]),
                (Device::AccelGyro, vec![0x20, 0x40]),
                (Device::AccelGyro, vec![0x1F, 0x38]),
                (Device::Magnetometer, vec![0x22, 0x80]),
                (Device::Magnetometer, vec![0x20, 0x74]),
                (Device::Magnetometer, vec![0x23, 0x0C]),
            ]
        );
        assert!(!lsm.transport_mut().overlap_detected());
    }

    #[test]
    fn init_then_identity_and_acceleration() {
        let mut lsm = driver();
        lsm.init().unwrap();

        assert_eq!(lsm.read_identity(Device::AccelGyro).unwrap(), 0x68);
        assert_eq!(lsm.read_identity(Device::Magnetometer).unwrap(), 0x3D);

        lsm.transport_mut()
            .load(Device::AccelGyro, REG_OUT_X_L_XL, &[0x00, 0x01]);
        assert_eq!(lsm.read_accel_x().unwrap(), 15);
    }

    #[test]
    fn temperature_is_reported_in_tenths_of_a_degree() {
        let mut lsm = driver();
        let [low, high] = (-160i16).to_le_bytes();
        lsm.transport_mut()
            .load(Device::AccelGyro, REG_OUT_TEMP_L, &[low, high]);

        assert_eq!(lsm.read_raw(Reading::Temperature).unwrap(), -160);
        assert_eq!(lsm.read_temperature().unwrap(), -100);
    }

    #[test]
    fn each_accessor_reads_one_transaction_from_its_table_row() {
        let mut lsm = driver();
        for reading in Reading::ALL {
            let spec = reading.spec();
            lsm.transport_mut()
                .load(spec.device, spec.address, &(-2000i16).to_le_bytes());
        }

        let accessors: [(Reading, fn(&mut Lsm9ds1<SimulatedLsm9ds1>) -> i16); 10] = [
            (Reading::AccelX, |d| d.read_accel_x().unwrap()),
            (Reading::AccelY, |d| d.read_accel_y().unwrap()),
            (Reading::AccelZ, |d| d.read_accel_z().unwrap()),
            (Reading::GyroX, |d| d.read_gyro_x().unwrap()),
            (Reading::GyroY, |d| d.read_gyro_y().unwrap()),
            (Reading::GyroZ, |d| d.read_gyro_z().unwrap()),
            (Reading::MagX, |d| d.read_mag_x().unwrap()),
            (Reading::MagY, |d| d.read_mag_y().unwrap()),
            (Reading::MagZ, |d| d.read_mag_z().unwrap()),
            (Reading::Temperature, |d| d.read_temperature().unwrap()),
        ];

        for (reading, accessor) in accessors {
            lsm.transport_mut().clear_frames();
            let value = accessor(&mut lsm);

            let spec = reading.spec();
            assert_eq!(value, spec.scale.apply(-2000), "{reading:?}");
            let frames = lsm.transport_mut().frames();
            assert_eq!(frames.len(), 1, "{reading:?}");
            assert_eq!(frames[0].device, spec.device, "{reading:?}");
            assert_eq!(frames[0].mosi.len(), 3, "{reading:?}");
        }
    }

    #[test]
    fn triple_reads_cover_x_y_z() {
        let mut lsm = driver();
        lsm.transport_mut().load(
            Device::AccelGyro,
            REG_OUT_X_L_G,
            &[0x64, 0x00, 0x9C, 0xFF, 0xE8, 0x03],
        );
        lsm.transport_mut().load(
            Device::Magnetometer,
            REG_OUT_X_L_M,
            &[0xE8, 0x03, 0x00, 0x00, 0x18, 0xFC],
        );

        assert_eq!(lsm.read_gyro().unwrap(), [875, -875, 8750]);
        assert_eq!(lsm.read_mag().unwrap(), [140, 0, -140]);
        assert_eq!(lsm.read_accel().unwrap(), [0, 0, 0]);
    }

    #[test]
    fn check_ids_reports_mismatching_sub_chip() {
        let mut lsm = driver();
        assert!(lsm.check_ids().unwrap().passed());

        lsm.transport_mut()
            .load(Device::Magnetometer, REG_WHO_AM_I_M, &[0x00]);
        assert_eq!(
            lsm.check_ids(),
            Err(Error::DeviceIdMismatch {
                device: Device::Magnetometer,
                found: 0x00,
            })
        );
        assert_eq!(lsm.read_identity(Device::Magnetometer).unwrap(), 0x00);
    }

    #[test]
    fn mag_offset_round_trips_through_offset_registers() {
        let mut lsm = driver();

        lsm.set_mag_offset(Axis::Y, -1234).unwrap();

        let [low, high] = (-1234i16).to_le_bytes();
        let sim = lsm.transport_mut();
        assert_eq!(sim.register(Device::Magnetometer, REG_OFFSET_Y_REG_L_M), low);
        assert_eq!(sim.register(Device::Magnetometer, REG_OFFSET_Y_REG_H_M), high);
        assert_eq!(
            sim.frames(),
            &[
                Frame {
                    device: Device::Magnetometer,
                    mosi: vec![REG_OFFSET_Y_REG_L_M, low],
                },
                Frame {
                    device: Device::Magnetometer,
                    mosi: vec![REG_OFFSET_Y_REG_H_M, high],
                },
            ]
        );

        assert_eq!(lsm.mag_offset(Axis::Y).unwrap(), -1234);
        assert_eq!(lsm.mag_offset(Axis::X).unwrap(), 0);
    }

    #[test]
    fn raw_register_access_round_trips() {
        let mut lsm = driver();

        assert_eq!(lsm.read_register(Device::AccelGyro, REG_CTRL_REG5_XL).unwrap(), 0x38);
        lsm.write_register(Device::AccelGyro, REG_CTRL_REG5_XL, 0x18)
            .unwrap();
        assert_eq!(lsm.read_register(Device::AccelGyro, REG_CTRL_REG5_XL).unwrap(), 0x18);
    }

    #[test]
    fn configure_replaces_active_config() {
        let mut lsm = driver();
        let config = Config::new().gyro_odr(crate::params::GyroOdr::PowerDown).build();

        lsm.configure(config).unwrap();

        assert_eq!(lsm.config(), &config);
        assert_eq!(lsm.transport_mut().frames()[0].mosi, vec![0x10, 0x00]);
    }

    #[test]
    fn spi_identity_read_frames_chip_select_around_transfers() {
        let spi = SpiMock::<u8>::new(&[
            SpiTransaction::transfer_in_place(vec![0x8F], vec![0x00]),
            SpiTransaction::transfer_in_place(vec![0x00], vec![0x68]),
            SpiTransaction::flush(),
        ]);
        let cs_ag = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let cs_m = PinMock::new(&[PinTransaction::set(PinState::High)]);

        let mut lsm = Lsm9ds1::new_spi(spi, cs_ag, cs_m, Config::default()).unwrap();
        assert_eq!(lsm.read_identity(Device::AccelGyro).unwrap(), 0x68);

        let (mut spi, mut cs_ag, mut cs_m, _) = lsm.release_spi();
        spi.done();
        cs_ag.done();
        cs_m.done();
    }

    #[test]
    fn spi_magnetometer_read_assembles_little_endian() {
        let spi = SpiMock::<u8>::new(&[
            SpiTransaction::transfer_in_place(vec![0xE8], vec![0x00]),
            SpiTransaction::transfer_in_place(vec![0x00], vec![0xE8]),
            SpiTransaction::transfer_in_place(vec![0x00], vec![0x03]),
            SpiTransaction::flush(),
        ]);
        let cs_ag = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let cs_m = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut lsm = Lsm9ds1::new_spi(spi, cs_ag, cs_m, Config::default()).unwrap();
        assert_eq!(lsm.read_mag_x().unwrap(), 140);

        let (mut spi, mut cs_ag, mut cs_m, _) = lsm.release_spi();
        spi.done();
        cs_ag.done();
        cs_m.done();
    }
}
