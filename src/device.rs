//! High-level LIS2HH12 device driver implementation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::i2c::{I2cInterface, SlaveAddr};
use crate::interface::Lis2hh12Interface;
use crate::params::{BlockDataUpdate, FullScale, OutputDataRate};
use crate::registers::{
    Ctrl1,
    Ctrl4,
    Status,
    EXPECTED_WHO_AM_I,
    REG_CTRL1,
    REG_CTRL4,
    REG_OUT_X_L,
    REG_STATUS,
    REG_TEMP_L,
    REG_WHO_AM_I,
};
use embedded_hal::i2c::I2c;

// Number of consecutive bytes spanning X, Y, Z axis samples.
const RAW_AXIS_BYTES: usize = 6;

/// High-level synchronous driver for the LIS2HH12 accelerometer.
pub struct Lis2hh12<IFACE> {
    interface: IFACE,
    config: Config,
    // Milli-g per LSB, re-derived from CTRL4 after every full-scale write.
    sensitivity: f32,
    last_sample: Option<AccelSample>,
}

/// One acceleration sample holding raw counts and converted values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelSample {
    /// X-axis raw counts.
    pub x_raw: i16,
    /// Y-axis raw counts.
    pub y_raw: i16,
    /// Z-axis raw counts.
    pub z_raw: i16,
    /// X-axis acceleration in milli-g.
    pub x_mg: f32,
    /// Y-axis acceleration in milli-g.
    pub y_mg: f32,
    /// Z-axis acceleration in milli-g.
    pub z_mg: f32,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AccelSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "AccelSample {{ raw: [{}, {}, {}], mg: [{}, {}, {}] }}",
            self.x_raw,
            self.y_raw,
            self.z_raw,
            self.x_mg,
            self.y_mg,
            self.z_mg
        );
    }
}

/// View of the `STATUS` register with explicit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
    /// STATUS[7] ZYXOR.
    pub xyz_overrun: bool,
    /// STATUS[6] ZOR.
    pub z_overrun: bool,
    /// STATUS[5] YOR.
    pub y_overrun: bool,
    /// STATUS[4] XOR.
    pub x_overrun: bool,
    /// STATUS[3] ZYXDA.
    pub xyz_data_available: bool,
    /// STATUS[2] ZDA.
    pub z_data_available: bool,
    /// STATUS[1] YDA.
    pub y_data_available: bool,
    /// STATUS[0] XDA.
    pub x_data_available: bool,
}

impl StatusFlags {
    /// Builds the flag view from the raw STATUS bitfield.
    pub fn from_register(status: Status) -> Self {
        Self {
            xyz_overrun: status.xyz_overrun(),
            z_overrun: status.z_overrun(),
            y_overrun: status.y_overrun(),
            x_overrun: status.x_overrun(),
            xyz_data_available: status.xyz_data_available(),
            z_data_available: status.z_data_available(),
            y_data_available: status.y_data_available(),
            x_data_available: status.x_data_available(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "StatusFlags {{\n    ZYXOR: {},\n    ZOR: {},\n    YOR: {},\n    XOR: {},\n    ZYXDA: {},\n    ZDA: {},\n    YDA: {},\n    XDA: {}\n}}",
            self.xyz_overrun,
            self.z_overrun,
            self.y_overrun,
            self.x_overrun,
            self.xyz_data_available,
            self.z_data_available,
            self.y_data_available,
            self.x_data_available
        );
    }
}

impl<IFACE> Lis2hh12<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self {
            interface,
            config,
            sensitivity: config.full_scale.sensitivity_mg(),
            last_sample: None,
        }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<I2C> Lis2hh12<I2cInterface<I2C>>
where
    I2C: I2c,
{
    // ==================================================================
    // == I2C Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: SlaveAddr, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<IFACE, CommE> Lis2hh12<IFACE>
where
    IFACE: Lis2hh12Interface<Error = CommE>,
{
    // ==================================================================
    // == Initialization & Global Configuration =========================
    // ==================================================================
    /// Initializes the sensor using the current configuration.
    ///
    /// Primes the cached sensitivity from the hardware full-scale state
    /// before programming any register, so a failure while applying the
    /// configuration still leaves conversions consistent with the device.
    pub fn init(&mut self) -> Result<(), CommE> {
        self.refresh_sensitivity()?;
        self.configure(self.config)
    }

    /// Applies a new configuration to the device.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        self.update_ctrl1(|ctrl1| {
            ctrl1.set_x_enable(config.x_enable);
            ctrl1.set_y_enable(config.y_enable);
            ctrl1.set_z_enable(config.z_enable);
            ctrl1.set_block_data_update(config.block_data_update);
            ctrl1.set_odr(config.odr);
            ctrl1.set_resolution(config.resolution);
        })?;
        self.update_ctrl4(|ctrl4| ctrl4.set_full_scale(config.full_scale))?;
        self.refresh_sensitivity()?;

        self.config = config;
        Ok(())
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================================================================
    // == Identification & Status =======================================
    // ==================================================================
    /// Reads the raw WHO_AM_I register.
    pub fn who_am_i(&mut self) -> Result<u8, CommE> {
        self
            .interface
            .read_register(REG_WHO_AM_I)
            .map_err(Error::from)
    }

    /// Verifies the WHO_AM_I register against the expected LIS2HH12 value.
    pub fn check_id(&mut self) -> Result<(), CommE> {
        if self.who_am_i()? != EXPECTED_WHO_AM_I {
            return Err(Error::DeviceIdMismatch);
        }

        Ok(())
    }

    /// Returns a snapshot of the `STATUS` register.
    pub fn read_status(&mut self) -> Result<StatusFlags, CommE> {
        let raw = self
            .interface
            .read_register(REG_STATUS)
            .map_err(Error::from)?;

        Ok(StatusFlags::from_register(Status::from(raw)))
    }

    // ==================================================================
    // == Power & Measurement Configuration =============================
    // ==================================================================
    /// Enters the lowest-power state by clearing the ODR field.
    ///
    /// Axis enables and all other CTRL1 bits are left untouched.
    pub fn power_down(&mut self) -> Result<(), CommE> {
        self.set_data_rate(OutputDataRate::PowerDown)
    }

    /// Selects the output data rate, activating the device for any rate
    /// other than [`OutputDataRate::PowerDown`].
    pub fn set_data_rate(&mut self, odr: OutputDataRate) -> Result<(), CommE> {
        self.update_ctrl1(|ctrl1| ctrl1.set_odr(odr))?;
        self.config.odr = odr;
        Ok(())
    }

    /// Sets the block data update behaviour.
    ///
    /// When latched, the output registers do not update until both bytes of
    /// all three axes are read, preventing torn reads across a sample
    /// boundary.
    pub fn set_block_data_update(&mut self, bdu: BlockDataUpdate) -> Result<(), CommE> {
        self.update_ctrl1(|ctrl1| ctrl1.set_block_data_update(bdu))?;
        self.config.block_data_update = bdu;
        Ok(())
    }

    /// Selects the full-scale range and re-derives the cached sensitivity.
    ///
    /// The read-back is part of this operation's contract; the cached
    /// factor is never left stale after the full-scale bits change.
    pub fn set_full_scale(&mut self, full_scale: FullScale) -> Result<(), CommE> {
        self.update_ctrl4(|ctrl4| ctrl4.set_full_scale(full_scale))?;
        self.refresh_sensitivity()?;
        self.config.full_scale = full_scale;
        Ok(())
    }

    /// Returns the cached conversion factor in milli-g per LSB.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    // ==================================================================
    // == Data Acquisition ==============================================
    // ==================================================================
    #[inline]
    fn unpack_axis(lsb: u8, msb: u8) -> i16 {
        i16::from_le_bytes([lsb, msb])
    }

    /// Reads a raw acceleration triplet.
    ///
    /// Issues one 6-byte burst starting at `OUT_X_L`; the device advances
    /// the register pointer across the burst. The handle-stored sample is
    /// not touched.
    pub fn read_raw_axes(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; RAW_AXIS_BYTES];
        self
            .interface
            .read_many(REG_OUT_X_L, &mut raw)
            .map_err(Error::from)?;

        let x = Self::unpack_axis(raw[0], raw[1]);
        let y = Self::unpack_axis(raw[2], raw[3]);
        let z = Self::unpack_axis(raw[4], raw[5]);

        Ok([x, y, z])
    }

    /// Reads all three axes and converts them with the cached sensitivity.
    ///
    /// The returned sample is also stored on the handle and remains
    /// available through [`Lis2hh12::last_sample`] until the next call.
    pub fn read_axes(&mut self) -> Result<AccelSample, CommE> {
        let [x, y, z] = self.read_raw_axes()?;

        let sample = AccelSample {
            x_raw: x,
            y_raw: y,
            z_raw: z,
            x_mg: x as f32 * self.sensitivity,
            y_mg: y as f32 * self.sensitivity,
            z_mg: z as f32 * self.sensitivity,
        };
        self.last_sample = Some(sample);

        Ok(sample)
    }

    /// Returns the sample stored by the most recent [`Lis2hh12::read_axes`].
    pub fn last_sample(&self) -> Option<AccelSample> {
        self.last_sample
    }

    /// Reads the raw temperature counts from `TEMP_L`/`TEMP_H`.
    pub fn read_temperature_raw(&mut self) -> Result<i16, CommE> {
        let mut raw = [0u8; 2];
        self
            .interface
            .read_many(REG_TEMP_L, &mut raw)
            .map_err(Error::from)?;

        Ok(i16::from_le_bytes(raw))
    }

    // ==================================================================
    // == Internal Configuration Helpers ================================
    // ==================================================================
    fn update_ctrl1<F>(&mut self, mut mutate: F) -> Result<Ctrl1, CommE>
    where
        F: FnMut(&mut Ctrl1),
    {
        let current = self
            .interface
            .read_register(REG_CTRL1)
            .map_err(Error::from)?;

        let mut ctrl1 = Ctrl1::from(current);
        mutate(&mut ctrl1);

        let updated = u8::from(ctrl1);
        if updated != current {
            self
                .interface
                .write_register(REG_CTRL1, updated)
                .map_err(Error::from)?;
        }

        Ok(ctrl1)
    }

    fn update_ctrl4<F>(&mut self, mut mutate: F) -> Result<Ctrl4, CommE>
    where
        F: FnMut(&mut Ctrl4),
    {
        let current = self
            .interface
            .read_register(REG_CTRL4)
            .map_err(Error::from)?;

        let mut ctrl4 = Ctrl4::from(current);
        mutate(&mut ctrl4);

        let updated = u8::from(ctrl4);
        if updated != current {
            self
                .interface
                .write_register(REG_CTRL4, updated)
                .map_err(Error::from)?;
        }

        Ok(ctrl4)
    }

    /// Re-derives the cached sensitivity from the hardware CTRL4 state.
    ///
    /// The reserved full-scale pattern is reported as
    /// [`Error::InvalidFullScale`] rather than keeping a stale factor.
    fn refresh_sensitivity(&mut self) -> Result<(), CommE> {
        let current = self
            .interface
            .read_register(REG_CTRL4)
            .map_err(Error::from)?;

        let full_scale = Ctrl4::from(current)
            .full_scale_or_err()
            .map_err(|_| Error::InvalidFullScale)?;

        self.sensitivity = full_scale.sensitivity_mg();
        Ok(())
    }
}
