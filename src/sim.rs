//! Simulated LSM9DS1 used by the unit tests.
//!
//! Behaves like the two sub-chips on a shared bus: each keeps a register
//! file, decodes the command byte that follows a select, then reads or
//! writes consecutive registers. Every select, deselect and byte transfer is
//! recorded so tests can check framing and chip-select sequencing.

use std::vec::Vec;

use crate::interface::{Device, Transport};
use crate::registers::{
    read_write_registers, EXPECTED_WHO_AM_I_AG, EXPECTED_WHO_AM_I_M, REG_CTRL_REG1_M,
    REG_CTRL_REG3_M, REG_CTRL_REG5_XL, REG_CTRL_REG8, REG_WHO_AM_I, REG_WHO_AM_I_M,
};

/// Error injected by [`SimulatedLsm9ds1::fail_on_transfer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SimError;

/// One chip-select framed transaction as seen on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub device: Device,
    pub mosi: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Command(Device),
    Data {
        device: Device,
        address: u8,
        read: bool,
        increment: bool,
    },
}

pub(crate) struct SimulatedLsm9ds1 {
    ag: [u8; 128],
    m: [u8; 128],
    asserted: [bool; 2],
    phase: Phase,
    frames: Vec<Frame>,
    overlap: bool,
    transfers: usize,
    fail_on: Option<usize>,
}

impl SimulatedLsm9ds1 {
    /// A powered-up sensor with datasheet reset values.
    pub fn new() -> Self {
        let mut ag = [0u8; 128];
        let mut m = [0u8; 128];
        ag[REG_WHO_AM_I as usize] = EXPECTED_WHO_AM_I_AG;
        ag[REG_CTRL_REG5_XL as usize] = 0x38;
        ag[REG_CTRL_REG8 as usize] = 0x04;
        m[REG_WHO_AM_I_M as usize] = EXPECTED_WHO_AM_I_M;
        m[REG_CTRL_REG1_M as usize] = 0x10;
        m[REG_CTRL_REG3_M as usize] = 0x03;

        Self {
            ag,
            m,
            asserted: [false; 2],
            phase: Phase::Idle,
            frames: Vec::new(),
            overlap: false,
            transfers: 0,
            fail_on: None,
        }
    }

    /// Loads consecutive registers of `device` starting at `address`.
    pub fn load(&mut self, device: Device, address: u8, bytes: &[u8]) {
        let start = address as usize;
        self.file_mut(device)[start..start + bytes.len()].copy_from_slice(bytes);
    }

    /// Current content of a register.
    pub fn register(&self, device: Device, address: u8) -> u8 {
        match device {
            Device::AccelGyro => self.ag[address as usize],
            Device::Magnetometer => self.m[address as usize],
        }
    }

    /// Makes the `n`-th transfer (zero based, counted from now) fail.
    pub fn fail_on_transfer(&mut self, n: usize) {
        self.fail_on = Some(self.transfers + n);
    }

    /// Completed and in-flight transactions, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// True once both select lines have been low at the same time.
    pub fn overlap_detected(&self) -> bool {
        self.overlap
    }

    /// True while any select line is low.
    pub fn any_selected(&self) -> bool {
        self.asserted.iter().any(|line| *line)
    }

    fn file_mut(&mut self, device: Device) -> &mut [u8; 128] {
        match device {
            Device::AccelGyro => &mut self.ag,
            Device::Magnetometer => &mut self.m,
        }
    }

    fn line(device: Device) -> usize {
        match device {
            Device::AccelGyro => 0,
            Device::Magnetometer => 1,
        }
    }

    fn is_read_only(device: Device, address: u8) -> bool {
        !read_write_registers(device).contains(&address)
    }
}

impl Transport for SimulatedLsm9ds1 {
    type Error = SimError;

    fn select(&mut self, device: Device) -> Result<(), SimError> {
        self.asserted[Self::line(device)] = true;
        if self.asserted.iter().all(|line| *line) {
            self.overlap = true;
        }
        self.phase = Phase::Command(device);
        self.frames.push(Frame {
            device,
            mosi: Vec::new(),
        });
        Ok(())
    }

    fn deselect(&mut self, device: Device) -> Result<(), SimError> {
        assert!(
            self.asserted[Self::line(device)],
            "deselect of a device that is not selected"
        );
        self.asserted[Self::line(device)] = false;
        self.phase = Phase::Idle;
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, SimError> {
        let index = self.transfers;
        self.transfers += 1;
        if self.fail_on == Some(index) {
            return Err(SimError);
        }

        self.frames
            .last_mut()
            .expect("transfer outside of a transaction")
            .mosi
            .push(byte);

        match self.phase {
            Phase::Idle => panic!("transfer with no device selected"),
            Phase::Command(device) => {
                let (address, increment) = match device {
                    Device::AccelGyro => (byte & 0x7F, self.ag[REG_CTRL_REG8 as usize] & 0x04 != 0),
                    Device::Magnetometer => (byte & 0x3F, byte & 0x40 != 0),
                };
                self.phase = Phase::Data {
                    device,
                    address,
                    read: byte & 0x80 != 0,
                    increment,
                };
                Ok(0x00)
            }
            Phase::Data {
                device,
                address,
                read,
                increment,
            } => {
                let reply = if read {
                    self.register(device, address)
                } else {
                    if !Self::is_read_only(device, address) {
                        self.file_mut(device)[address as usize] = byte;
                    }
                    0x00
                };
                let next = if increment {
                    (address + 1) & 0x7F
                } else {
                    address
                };
                self.phase = Phase::Data {
                    device,
                    address: next,
                    read,
                    increment,
                };
                Ok(reply)
            }
        }
    }
}
