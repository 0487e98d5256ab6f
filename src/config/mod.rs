mod interval;
mod texture;
mod walk;

pub use self::interval::RegenInterval;
pub use self::texture::TextureSize;
pub use self::walk::WalkParams;

use crate::error::{Error, Result};

/// Encapsulates all parameters of a regenerating random walk.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    pub walk: WalkParams,
    pub texture: TextureSize,
    pub interval: RegenInterval,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.walk.validate()?;
        self.texture.validate()?;
        self.interval.validate()
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> ConfigBuilder {
        ConfigBuilder {
            config: Config::default(),
        }
    }

    /// Maximum rotation per step in degrees.
    pub fn bend_max(mut self, bend_max: f32) -> ConfigBuilder {
        self.config.walk.bend_max = bend_max;
        self
    }

    pub fn gravity_rate(mut self, gravity_rate: f32) -> ConfigBuilder {
        self.config.walk.gravity_rate = gravity_rate;
        self
    }

    pub fn distance(mut self, distance_min: f32, distance_max: f32) -> ConfigBuilder {
        self.config.walk.distance_min = distance_min;
        self.config.walk.distance_max = distance_max;
        self
    }

    pub fn texture_size(mut self, width: usize, height: usize) -> ConfigBuilder {
        self.config.texture = TextureSize { width, height };
        self
    }

    pub fn interval(mut self, min: f32, max: f32) -> ConfigBuilder {
        self.config.interval = RegenInterval { min, max };
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Inclusive range check that also rejects NaN.
pub(crate) fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

pub(crate) fn check_ordered(name: &'static str, min: f32, max: f32) -> Result<()> {
    if min <= max {
        Ok(())
    } else {
        Err(Error::InvertedRange { name, min, max })
    }
}
