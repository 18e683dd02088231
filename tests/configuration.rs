mod common;

use common::{destroy, new_device, read_reg, write_reg};
use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;
use lis2hh12::config::Config;
use lis2hh12::params::{BlockDataUpdate, FullScale, OutputDataRate};
use lis2hh12::registers::{REG_CTRL1, REG_CTRL4};
use lis2hh12::Error;

#[test]
fn set_data_rate_replaces_odr_field_and_keeps_other_bits() {
    let rates = [
        (OutputDataRate::Odr10Hz, 0b001u8),
        (OutputDataRate::Odr50Hz, 0b010),
        (OutputDataRate::Odr100Hz, 0b011),
        (OutputDataRate::Odr200Hz, 0b100),
        (OutputDataRate::Odr400Hz, 0b101),
        (OutputDataRate::Odr800Hz, 0b110),
    ];

    for (rate, code) in rates {
        // HR set, BDU set, all axes enabled, ODR power-down.
        let current = 0b1000_1111u8;
        let expected = current | code << 4;

        let mut device = new_device(
            &[read_reg(REG_CTRL1, current), write_reg(REG_CTRL1, expected)],
            Config::default(),
        );
        device.set_data_rate(rate).unwrap();
        assert_eq!(device.config().odr, rate);
        destroy(device);
    }
}

#[test]
fn set_data_rate_to_power_down_clears_odr_field() {
    let mut device = new_device(
        &[
            read_reg(REG_CTRL1, 0b1011_1111),
            write_reg(REG_CTRL1, 0b1000_1111),
        ],
        Config::default(),
    );
    device.set_data_rate(OutputDataRate::PowerDown).unwrap();
    destroy(device);
}

#[test]
fn set_data_rate_skips_write_when_unchanged() {
    let mut device = new_device(&[read_reg(REG_CTRL1, 0b0011_0111)], Config::default());
    device.set_data_rate(OutputDataRate::Odr100Hz).unwrap();
    destroy(device);
}

#[test]
fn power_down_preserves_axis_enables() {
    let mut device = new_device(
        &[
            read_reg(REG_CTRL1, 0b0101_1101),
            write_reg(REG_CTRL1, 0b0000_1101),
        ],
        Config::default(),
    );
    device.power_down().unwrap();
    assert_eq!(device.config().odr, OutputDataRate::PowerDown);
    destroy(device);
}

#[test]
fn block_data_update_toggles_exactly_bit_3() {
    let mut device = new_device(
        &[
            read_reg(REG_CTRL1, 0b0101_0111),
            write_reg(REG_CTRL1, 0b0101_1111),
        ],
        Config::default(),
    );
    device
        .set_block_data_update(BlockDataUpdate::Latched)
        .unwrap();
    destroy(device);

    let mut device = new_device(
        &[
            read_reg(REG_CTRL1, 0b0101_1111),
            write_reg(REG_CTRL1, 0b0101_0111),
        ],
        Config::default(),
    );
    device
        .set_block_data_update(BlockDataUpdate::Continuous)
        .unwrap();
    destroy(device);
}

#[test]
fn set_full_scale_programs_fs_field_and_refreshes_sensitivity() {
    let cases = [
        (FullScale::Fs2G, 0b00u8, 0.061f32),
        (FullScale::Fs4G, 0b01, 0.122),
        (FullScale::Fs8G, 0b11, 0.244),
    ];

    for (full_scale, code, sensitivity) in cases {
        // IF_ADD_INC set, FS at the ±2 g reset encoding.
        let current = 0b0000_0100u8;
        let programmed = current & !0b0011_0000 | code << 4;

        let mut transactions = vec![read_reg(REG_CTRL4, current)];
        if programmed != current {
            transactions.push(write_reg(REG_CTRL4, programmed));
        }
        transactions.push(read_reg(REG_CTRL4, programmed));

        let mut device = new_device(&transactions, Config::default());
        device.set_full_scale(full_scale).unwrap();
        assert_eq!(device.sensitivity(), sensitivity);
        assert_eq!(device.config().full_scale, full_scale);
        destroy(device);
    }
}

#[test]
fn reserved_full_scale_pattern_is_reported() {
    let mut device = new_device(
        &[
            read_reg(REG_CTRL4, 0b0000_0100),
            write_reg(REG_CTRL4, 0b0011_0100),
            read_reg(REG_CTRL4, 0b0010_0100),
        ],
        Config::default(),
    );
    assert_eq!(
        device.set_full_scale(FullScale::Fs8G),
        Err(Error::InvalidFullScale)
    );
    destroy(device);
}

#[test]
fn configure_programs_ctrl1_and_ctrl4() {
    let config = Config::new()
        .odr(OutputDataRate::Odr400Hz)
        .full_scale(FullScale::Fs4G)
        .block_data_update(BlockDataUpdate::Latched)
        .build();

    // CTRL1 from reset (axes enabled) to ODR 400 Hz with BDU latched.
    let transactions: Vec<I2cTrans> = vec![
        read_reg(REG_CTRL1, 0b0000_0111),
        write_reg(REG_CTRL1, 0b0101_1111),
        read_reg(REG_CTRL4, 0b0000_0100),
        write_reg(REG_CTRL4, 0b0001_0100),
        read_reg(REG_CTRL4, 0b0001_0100),
    ];

    let mut device = new_device(&transactions, Config::default());
    device.configure(config).unwrap();
    assert_eq!(device.sensitivity(), 0.122);
    assert_eq!(device.config(), &config);
    destroy(device);
}
