use super::{check_ordered, check_range};
use crate::error::Result;
use std::f32::INFINITY;

/// Bounds for the random delay between two regenerations, in the same
/// time unit the host passes to `tick`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegenInterval {
    pub min: f32,
    pub max: f32,
}

impl RegenInterval {
    pub fn validate(&self) -> Result<()> {
        check_range("interval_min", self.min, 0.0, INFINITY)?;
        check_range("interval_max", self.max, 0.0, INFINITY)?;
        check_ordered("interval", self.min, self.max)
    }
}

impl Default for RegenInterval {
    fn default() -> Self {
        RegenInterval { min: 1.0, max: 3.0 }
    }
}
