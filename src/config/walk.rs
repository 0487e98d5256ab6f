use super::{check_ordered, check_range};
use crate::error::Result;

/// Parameters shaping each generated path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Maximum rotation of the direction per step, in degrees, 0 to 90.
    pub bend_max: f32,
    /// How far the direction is pulled toward straight down per step, 0 to 1.
    pub gravity_rate: f32,
    /// Shortest step, 0 to 100.
    pub distance_min: f32,
    /// Longest step, 0 to 100.
    pub distance_max: f32,
}

impl WalkParams {
    pub fn validate(&self) -> Result<()> {
        check_range("bend_max", self.bend_max, 0.0, 90.0)?;
        check_range("gravity_rate", self.gravity_rate, 0.0, 1.0)?;
        check_range("distance_min", self.distance_min, 0.0, 100.0)?;
        check_range("distance_max", self.distance_max, 0.0, 100.0)?;
        check_ordered("distance", self.distance_min, self.distance_max)
    }
}

impl Default for WalkParams {
    fn default() -> Self {
        WalkParams {
            bend_max: 70.0,
            gravity_rate: 0.3,
            distance_min: 3.0,
            distance_max: 20.0,
        }
    }
}
