use crate::config::Config;
use crate::error::Result;
use crate::mesh::{MeshBuffers, MeshTarget};
use crate::path::{generate_path, sample_range, Path};
use crate::ribbon::build_mesh;
use crate::texture::{paint, Rgba, ValueField};
use rand::{self, Rng, ThreadRng};

/// A bolt that regenerates itself at random intervals as time is fed in by the host.
pub struct RandomWalk<R = ThreadRng, M = MeshBuffers> {
    config: Config,
    rng: R,
    target: M,
    /// Time left until the next regeneration
    countdown: f32,
    path: Option<Path>,
    generation: usize,
    texture: Vec<Rgba>,
}

impl RandomWalk<ThreadRng, MeshBuffers> {
    pub fn new(config: Config) -> Result<Self> {
        RandomWalk::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> RandomWalk<R, MeshBuffers> {
    pub fn with_rng(config: Config, rng: R) -> Result<Self> {
        RandomWalk::with_target(config, rng, MeshBuffers::new())
    }
}

impl<R: Rng, M: MeshTarget> RandomWalk<R, M> {
    /// Creates a walk uploading into the given target. Nothing is generated
    /// before the first tick.
    pub fn with_target(config: Config, rng: R, target: M) -> Result<Self> {
        config.validate()?;

        Ok(RandomWalk {
            texture: vec![Rgba::default(); config.texture.pixel_count()],
            config,
            rng,
            target,
            countdown: 0.0,
            path: None,
            generation: 0,
        })
    }

    /// Advances the countdown by `elapsed` and regenerates once if it ran out.
    ///
    /// Returns whether a regeneration took place.
    pub fn tick(&mut self, elapsed: f32) -> bool {
        self.countdown -= elapsed;

        if self.countdown <= 0.0 {
            self.regenerate();
            let interval = self.config.interval;
            self.countdown = sample_range(&mut self.rng, interval.min, interval.max);
            trace!("Next regeneration in {:.2}", self.countdown);
            true
        } else {
            false
        }
    }

    /// Generates a new path and uploads a ribbon along it into the mesh target.
    pub fn regenerate(&mut self) {
        let path = generate_path(&self.config.walk, &mut self.rng);

        if !path.reached_ground() {
            warn!(
                "Random walk ran out of steps at height {}, try longer steps or more gravity",
                path.last().y
            );
        }

        let mesh = build_mesh(&path);
        self.target.upload(&mesh);
        self.generation += 1;

        debug!(
            "Generated bolt #{} with {} points and {} triangles",
            self.generation,
            path.len(),
            mesh.triangle_count()
        );

        self.path = Some(path);
    }

    /// Repaints the owned texture from an external value field.
    pub fn update_texture<F: ValueField + ?Sized>(&mut self, field: &F) -> Result<()> {
        paint(self.config.texture, field, &mut self.texture)
    }

    /// Most recently generated path, `None` before the first regeneration.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    pub fn target(&self) -> &M {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut M {
        &mut self.target
    }

    pub fn texture(&self) -> &[Rgba] {
        &self.texture
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn countdown(&self) -> f32 {
        self.countdown
    }

    /// Amount of regenerations performed so far
    pub fn generation(&self) -> usize {
        self.generation
    }
}
