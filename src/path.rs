use crate::config::WalkParams;
use geom::prelude::*;
use geom::Vec3;
use rand::Rng;

/// Upper bound of steps taken by a single walk.
pub const MAX_STEPS: usize = 1000;
/// Altitude every walk starts from.
pub const START_HEIGHT: f32 = 1000.0;
/// Shortest vector `normalize_or_zero` still normalizes.
const NORMALIZE_EPSILON: f32 = 1e-5;

/// Ordered points of a random walk, always holding at least the start point and one step.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Vec3>,
}

/// A single advance of the walk.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub position: Vec3,
    /// Normalized direction the step was taken in, zero if there was none
    pub direction: Vec3,
}

/// Lazily performs the steps of a walk, starting at `START_HEIGHT` heading straight down.
///
/// Ends after the first step that lands below zero or after `MAX_STEPS` steps.
pub struct Walk<'a, R: 'a> {
    params: WalkParams,
    rng: &'a mut R,
    position: Vec3,
    direction: Vec3,
    steps: usize,
    grounded: bool,
}

impl Path {
    /// Wraps externally produced points, e.g. a path replayed by the host.
    pub fn from_points(points: Vec<Vec3>) -> Path {
        assert!(
            points.len() >= 2,
            "A path needs at least two points, got {}",
            points.len()
        );
        Path { points }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Vec3 {
        self.points[0]
    }

    pub fn last(&self) -> Vec3 {
        self.points[self.points.len() - 1]
    }

    /// Whether the walk ended by dropping below zero rather than running out of steps.
    pub fn reached_ground(&self) -> bool {
        self.last().y < 0.0
    }

    pub fn into_points(self) -> Vec<Vec3> {
        self.points
    }
}

impl<'a, R: Rng> Walk<'a, R> {
    pub fn new(params: WalkParams, rng: &'a mut R) -> Self {
        Walk {
            params,
            rng,
            position: start(),
            direction: down(),
            steps: 0,
            grounded: false,
        }
    }

    /// Bends by `angle` degrees, pulls toward straight down and moves `distance` ahead.
    ///
    /// The pulled direction is carried into the next step as is, only the step
    /// itself uses its normalized form.
    fn advance(&mut self, angle: f32, distance: f32) -> Step {
        let (sin, cos) = angle.to_radians().sin_cos();
        let d = self.direction;

        // rotation around the forward axis, z stays untouched
        let rotated = Vec3::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos, d.z);
        self.direction = rotated + (down() - rotated) * self.params.gravity_rate;

        let direction = normalize_or_zero(self.direction);
        self.position += direction * distance;
        self.steps += 1;
        self.grounded = self.position.y < 0.0;

        Step {
            position: self.position,
            direction,
        }
    }
}

impl<'a, R: Rng> Iterator for Walk<'a, R> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.grounded || self.steps == MAX_STEPS {
            return None;
        }

        let WalkParams {
            bend_max,
            distance_min,
            distance_max,
            ..
        } = self.params;
        let angle = sample_range(&mut *self.rng, -bend_max, bend_max);
        let distance = sample_range(&mut *self.rng, distance_min, distance_max);

        Some(self.advance(angle, distance))
    }
}

/// Generates a fresh random walk path.
///
/// The result holds between 2 and `MAX_STEPS + 1` points. Unless it ran out of steps,
/// the last point is the first one below zero.
pub fn generate_path<R: Rng>(params: &WalkParams, rng: &mut R) -> Path {
    let mut points = Vec::with_capacity(64);
    points.push(start());
    points.extend(Walk::new(*params, rng).map(|s| s.position));

    Path { points }
}

/// Uniform sample in `[min, max)`, collapsing to `min` for empty ranges.
pub(crate) fn sample_range<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.gen_range(min, max)
    } else {
        min
    }
}

/// Unit vector in the direction of `v`, or zero for vectors too short to have one.
pub(crate) fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.magnitude();
    if len > NORMALIZE_EPSILON {
        v / len
    } else {
        Vec3::new(0.0, 0.0, 0.0)
    }
}

fn start() -> Vec3 {
    Vec3::new(0.0, START_HEIGHT, 0.0)
}

fn down() -> Vec3 {
    Vec3::new(0.0, -1.0, 0.0)
}
