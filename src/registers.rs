//! Register map definitions for the LIS2HH12 accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::{AntiAliasBandwidth, BlockDataUpdate, FullScale, OutputDataRate, Resolution};

/// Register address of `TEMP_L`.
pub const REG_TEMP_L: u8 = 0x0B;
/// Register address of `TEMP_H`.
pub const REG_TEMP_H: u8 = 0x0C;
/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: u8 = 0x0F;
/// Register address of `CTRL1`.
pub const REG_CTRL1: u8 = 0x20;
/// Register address of `CTRL2`.
pub const REG_CTRL2: u8 = 0x21;
/// Register address of `CTRL4`.
pub const REG_CTRL4: u8 = 0x23;
/// Register address of `STATUS`.
pub const REG_STATUS: u8 = 0x27;
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: u8 = 0x28;
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: u8 = 0x29;
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: u8 = 0x2A;
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: u8 = 0x2B;
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: u8 = 0x2C;
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: u8 = 0x2D;

/// Value reported by `WHO_AM_I` on a LIS2HH12.
pub const EXPECTED_WHO_AM_I: u8 = 0x41;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: u8;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of the `CTRL1` register (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl1 {
    // X-axis output enable (bit 0).
    pub x_enable: bool,
    // Y-axis output enable (bit 1).
    pub y_enable: bool,
    // Z-axis output enable (bit 2).
    pub z_enable: bool,
    // Block data update behaviour (bit 3).
    pub block_data_update: BlockDataUpdate,
    // Output data rate selection (bits 6:4).
    pub odr: OutputDataRate,
    // High-resolution mode selection (bit 7).
    pub resolution: Resolution,
}

impl From<u8> for Ctrl1 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl1> for u8 {
    fn from(value: Ctrl1) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `CTRL4` register (address `0x23`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctrl4 {
    // SPI serial interface mode selection (bit 0).
    pub spi_3wire: bool,
    // I2C interface disable flag (bit 1).
    pub i2c_disable: bool,
    // Register address auto-increment during multi-byte access (bit 2).
    pub address_auto_increment: bool,
    // Bandwidth selected via BW[2:1] instead of the ODR (bit 3).
    pub bandwidth_scale_odr: bool,
    // Full-scale range selection (bits 5:4).
    pub full_scale: FullScale,
    // Anti-alias filter bandwidth (bits 7:6).
    pub bandwidth: AntiAliasBandwidth,
}

impl From<u8> for Ctrl4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Ctrl4> for u8 {
    fn from(value: Ctrl4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `STATUS` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // New X-axis data available (bit 0).
    pub x_data_available: bool,
    // New Y-axis data available (bit 1).
    pub y_data_available: bool,
    // New Z-axis data available (bit 2).
    pub z_data_available: bool,
    // New data available on all three axes (bit 3).
    pub xyz_data_available: bool,
    // X-axis data overrun (bit 4).
    pub x_overrun: bool,
    // Y-axis data overrun (bit 5).
    pub y_overrun: bool,
    // Z-axis data overrun (bit 6).
    pub z_overrun: bool,
    // Data overrun on all three axes (bit 7).
    pub xyz_overrun: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

impl Register for Ctrl1 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL1;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for Ctrl4 {
    type Raw = u8;
    const ADDRESS: u8 = REG_CTRL4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x04);
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: u8 = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = Some(0x00);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that Status bitfields match the datasheet layout.
    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b1000_1001);
        assert!(status.x_data_available());
        assert!(!status.y_data_available());
        assert!(!status.z_data_available());
        assert!(status.xyz_data_available());
        assert!(!status.x_overrun());
        assert!(!status.y_overrun());
        assert!(!status.z_overrun());
        assert!(status.xyz_overrun());
    }

    /// Ensures Ctrl1 encodes and decodes as expected across all fields.
    #[test]
    fn ctrl1_roundtrip() {
        let ctrl1 = Ctrl1::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_block_data_update(BlockDataUpdate::Latched)
            .with_odr(OutputDataRate::Odr400Hz)
            .with_resolution(Resolution::Normal);

        assert_eq!(u8::from(ctrl1), 0b0_101_1_111);
        let decoded = Ctrl1::from(u8::from(ctrl1));
        assert_eq!(decoded.odr(), OutputDataRate::Odr400Hz);
        assert_eq!(decoded.block_data_update(), BlockDataUpdate::Latched);
        assert!(decoded.x_enable());
        assert!(decoded.y_enable());
        assert!(decoded.z_enable());
    }

    /// The ±4 g and ±8 g codes are non-contiguous in CTRL4[5:4].
    #[test]
    fn ctrl4_full_scale_encodings() {
        for (fs, bits) in [
            (FullScale::Fs2G, 0b00u8),
            (FullScale::Fs4G, 0b01u8),
            (FullScale::Fs8G, 0b11u8),
        ] {
            let ctrl4 = Ctrl4::new().with_full_scale(fs);
            assert_eq!(u8::from(ctrl4) >> 4 & 0b11, bits);
        }
    }

    /// The reserved CTRL4[5:4] pattern is rejected by the fallible accessor.
    #[test]
    fn ctrl4_reserved_full_scale_is_invalid() {
        let ctrl4 = Ctrl4::from(0b0010_0000);
        assert!(ctrl4.full_scale_or_err().is_err());
    }
}
