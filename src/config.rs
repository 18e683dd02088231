//! Configuration primitives for the LIS2HH12 driver.

use crate::params::{BlockDataUpdate, FullScale, OutputDataRate, Resolution};

/// User-facing configuration for the LIS2HH12 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Output data rate selection.
    pub odr: OutputDataRate,
    /// Full-scale range selection.
    pub full_scale: FullScale,
    /// Block data update behaviour.
    pub block_data_update: BlockDataUpdate,
    /// Output resolution selection.
    pub resolution: Resolution,
    /// X-axis output enable.
    pub x_enable: bool,
    /// Y-axis output enable.
    pub y_enable: bool,
    /// Z-axis output enable.
    pub z_enable: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn odr(mut self, odr: OutputDataRate) -> Self {
        self.config.odr = odr;
        self
    }

    /// Overrides the full-scale range.
    pub fn full_scale(mut self, full_scale: FullScale) -> Self {
        self.config.full_scale = full_scale;
        self
    }

    /// Sets the block data update behaviour.
    pub fn block_data_update(mut self, block_data_update: BlockDataUpdate) -> Self {
        self.config.block_data_update = block_data_update;
        self
    }

    /// Sets the output resolution selection.
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.config.resolution = resolution;
        self
    }

    /// Selects which axes produce output data.
    pub fn axes(mut self, x: bool, y: bool, z: bool) -> Self {
        self.config.x_enable = x;
        self.config.y_enable = y;
        self.config.z_enable = z;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            odr: OutputDataRate::Odr100Hz,
            full_scale: FullScale::Fs2G,
            block_data_update: BlockDataUpdate::Latched,
            resolution: Resolution::Normal,
            x_enable: true,
            y_enable: true,
            z_enable: true,
        }
    }
}
