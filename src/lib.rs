#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;

pub use crate::device::Lis2hh12;
pub use crate::error::{Error, Result};
pub use crate::interface::i2c::SlaveAddr;
