use bolt::{generate_path, Config, Path, RandomWalk, TextureSize, ValueBuffer, WalkParams};
use rand::{SeedableRng, XorShiftRng};

pub fn seeded_rng(seed: u32) -> XorShiftRng {
    XorShiftRng::from_seed([seed, 0x2545_f491, 0x9e37_79b9, 0x7f4a_7c15])
}

/// A bolt with the default parameters of the original scene.
pub fn make_walk(seed: u32) -> RandomWalk<XorShiftRng> {
    RandomWalk::with_rng(Config::default(), seeded_rng(seed)).unwrap()
}

pub fn make_path(seed: u32) -> Path {
    generate_path(&WalkParams::default(), &mut seeded_rng(seed))
}

/// Tiny steps that almost always run into the step limit, producing the
/// longest possible paths.
pub fn make_long_path(seed: u32) -> Path {
    let params = WalkParams {
        bend_max: 20.0,
        gravity_rate: 0.3,
        distance_min: 0.1,
        distance_max: 0.2,
    };
    generate_path(&params, &mut seeded_rng(seed))
}

/// A radial gradient resembling a Lichtenberg figure growing from the top center.
pub fn make_field(size: TextureSize) -> ValueBuffer {
    let TextureSize { width, height } = size;
    let value_max = (width + height) as u16;
    let cx = width as i64 / 2;

    let values = (0..height as i64)
        .flat_map(|y| (0..width as i64).map(move |x| (x, y)))
        .map(|(x, y)| value_max - ((x - cx).abs() + y) as u16)
        .collect();

    ValueBuffer { values, value_max }
}
