//! Procedural lightning bolts: a downward biased random walk, a ribbon
//! mesh stitched along it and a grayscale painter for Lichtenberg value
//! fields.
extern crate aitios_geom as geom;
extern crate rand;
extern crate rayon;
#[macro_use]
extern crate log;
extern crate thiserror;

mod config;
mod driver;
mod error;
mod mesh;
mod path;
mod ribbon;
mod texture;

pub use crate::config::{Config, ConfigBuilder, RegenInterval, TextureSize, WalkParams};
pub use crate::driver::RandomWalk;
pub use crate::error::{Error, Result};
pub use crate::mesh::{Bounds, MeshBuffers, MeshTarget};
pub use crate::path::{generate_path, Path, Step, Walk, MAX_STEPS, START_HEIGHT};
pub use crate::ribbon::{build_mesh, Color, RibbonMesh, HALF_WIDTH};
pub use crate::texture::{paint, paint_parallel, Rgba, ValueBuffer, ValueField};
