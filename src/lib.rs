#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod protocol;
pub mod readings;
pub mod registers;

#[cfg(test)]
pub(crate) mod sim;

pub use crate::device::Lsm9ds1;
pub use crate::error::{Error, Result};
pub use crate::interface::{Device, Transport};
pub use crate::readings::Reading;
