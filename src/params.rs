//! Strongly typed parameter enumerations for the LIS2HH12 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the high-level driver APIs. Prefer these
//! types over raw integers to keep configuration values valid and explicit.
//!
//! # Examples
//!
//! ```rust
//! use lis2hh12::params::{BlockDataUpdate, FullScale, OutputDataRate};
//!
//! let odr = OutputDataRate::Odr100Hz;
//! let fs = FullScale::Fs2G;
//! let bdu = BlockDataUpdate::Latched;
//! let _ = (odr, fs, bdu);
//! ```

use modular_bitfield::prelude::Specifier;

/// Available output data rate (ODR) selections (`CTRL1[6:4]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 3]
pub enum OutputDataRate {
    /// Power-down mode; no sampling.
    PowerDown = 0b000,
    /// 10 Hz output data rate.
    Odr10Hz = 0b001,
    /// 50 Hz output data rate.
    Odr50Hz = 0b010,
    /// 100 Hz output data rate.
    Odr100Hz = 0b011,
    /// 200 Hz output data rate.
    Odr200Hz = 0b100,
    /// 400 Hz output data rate.
    Odr400Hz = 0b101,
    /// 800 Hz output data rate.
    Odr800Hz = 0b110,
}

impl OutputDataRate {
    /// Returns the ODR in hertz as an integer value, zero for power-down.
    pub const fn hz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Odr10Hz => 10,
            Self::Odr50Hz => 50,
            Self::Odr100Hz => 100,
            Self::Odr200Hz => 200,
            Self::Odr400Hz => 400,
            Self::Odr800Hz => 800,
        }
    }
}

/// Available full-scale range selections (`CTRL4[5:4]`).
///
/// The ±4 g and ±8 g encodings are not sequential; `0b10` is reserved by the
/// datasheet and never written by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum FullScale {
    /// ±2 g measurement range.
    Fs2G = 0b00,
    /// ±4 g measurement range.
    Fs4G = 0b01,
    /// ±8 g measurement range.
    Fs8G = 0b11,
}

impl FullScale {
    /// Returns the sensitivity in milli-g per least significant bit.
    pub const fn sensitivity_mg(self) -> f32 {
        match self {
            Self::Fs2G => 0.061,
            Self::Fs4G => 0.122,
            Self::Fs8G => 0.244,
        }
    }

    /// Returns the measurement range magnitude in g.
    pub const fn range_g(self) -> u8 {
        match self {
            Self::Fs2G => 2,
            Self::Fs4G => 4,
            Self::Fs8G => 8,
        }
    }
}

/// Block data update behaviour (`CTRL1.BDU`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum BlockDataUpdate {
    /// Output registers update continuously; a multi-byte read may straddle
    /// two sample times.
    Continuous = 0,
    /// Output registers latch until both bytes of all three axes are read.
    Latched = 1,
}

/// High-resolution mode selection (`CTRL1.HR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum Resolution {
    /// Normal resolution output.
    Normal = 0,
    /// High-resolution output.
    High = 1,
}

/// Anti-alias filter bandwidth selections (`CTRL4[7:6]`).
///
/// Only effective when `CTRL4.BW_SCALE_ODR` is set; otherwise the bandwidth
/// is determined automatically from the ODR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 2]
pub enum AntiAliasBandwidth {
    /// 400 Hz filter bandwidth.
    Bw400Hz = 0b00,
    /// 200 Hz filter bandwidth.
    Bw200Hz = 0b01,
    /// 100 Hz filter bandwidth.
    Bw100Hz = 0b10,
    /// 50 Hz filter bandwidth.
    Bw50Hz = 0b11,
}
