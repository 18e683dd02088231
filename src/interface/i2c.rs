//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::Lis2hh12Interface;

/// Slave address selected by the SA0 wiring strap.
///
/// The datasheet documents the address as an 8-bit read/write pair
/// (`0x3A`/`0x3B` with SA0 high, `0x3C`/`0x3D` with SA0 low); `embedded-hal`
/// transports take the 7-bit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlaveAddr {
    /// SA0 tied to VCC; 7-bit address `0x1D`.
    #[default]
    Sa0High,
    /// SA0 tied to GND; 7-bit address `0x1E`.
    Sa0Low,
}

impl SlaveAddr {
    /// Returns the 7-bit bus address for this strap selection.
    pub const fn address(self) -> u8 {
        match self {
            Self::Sa0High => 0x1D,
            Self::Sa0Low => 0x1E,
        }
    }
}

/// I2C-based interface implementation for the LIS2HH12 driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface from the provided I2C bus abstraction.
    pub const fn new(i2c: I2C, address: SlaveAddr) -> Self {
        Self {
            i2c,
            address: address.address(),
        }
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Lis2hh12Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_many(register, &mut value)?;
        Ok(value[0])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        // Multi-byte reads rely on CTRL4.IF_ADD_INC (set at reset) to advance
        // the register pointer within the transaction.
        self.i2c.write_read(self.address, &[register], buf)
    }
}
