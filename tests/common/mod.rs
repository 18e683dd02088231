use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use lis2hh12::config::Config;
use lis2hh12::interface::i2c::I2cInterface;
use lis2hh12::{Lis2hh12, SlaveAddr};

/// 7-bit bus address with SA0 strapped high.
pub const DEV_ADDR: u8 = 0x1D;

pub fn new_device(transactions: &[I2cTrans], config: Config) -> Lis2hh12<I2cInterface<I2cMock>> {
    Lis2hh12::new_i2c(I2cMock::new(transactions), SlaveAddr::Sa0High, config)
}

pub fn destroy(device: Lis2hh12<I2cInterface<I2cMock>>) {
    let (mut i2c, _config) = device.release_i2c();
    i2c.done();
}

pub fn read_reg(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![register], vec![value])
}

pub fn write_reg(register: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![register, value])
}
