use crate::config::TextureSize;
use crate::error::{Error, Result};
use rayon::prelude::*;

/// Scalar field produced by an external Lichtenberg figure simulation.
pub trait ValueField {
    /// Row-major values, one per texel.
    fn values(&self) -> &[u16];
    /// Largest value the field may contain.
    fn value_max(&self) -> u16;
}

/// 8 bit per channel RGBA texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub fn gray(level: u8) -> Rgba {
        Rgba(level, level, level, 255)
    }
}

/// Owned values with their maximum, for hosts that snapshot a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBuffer {
    pub values: Vec<u16>,
    pub value_max: u16,
}

impl ValueField for ValueBuffer {
    fn values(&self) -> &[u16] {
        &self.values
    }

    fn value_max(&self) -> u16 {
        self.value_max
    }
}

/// Writes the field as opaque grayscale into `pixels`, row by row.
pub fn paint<F>(size: TextureSize, field: &F, pixels: &mut [Rgba]) -> Result<()>
where
    F: ValueField + ?Sized,
{
    let values = checked_values(size, field, pixels)?;
    let max = field.value_max();

    for (pixel, &value) in pixels.iter_mut().zip(values) {
        *pixel = Rgba::gray(level(value, max));
    }

    Ok(())
}

/// Same as `paint`, distributing rows over the rayon thread pool.
pub fn paint_parallel<F>(size: TextureSize, field: &F, pixels: &mut [Rgba]) -> Result<()>
where
    F: ValueField + Sync + ?Sized,
{
    let values = checked_values(size, field, pixels)?;
    let max = field.value_max();

    pixels
        .par_chunks_mut(size.width)
        .zip(values.par_chunks(size.width))
        .for_each(|(pixel_row, value_row)| {
            for (pixel, &value) in pixel_row.iter_mut().zip(value_row) {
                *pixel = Rgba::gray(level(value, max));
            }
        });

    Ok(())
}

fn checked_values<'a, F: ValueField + ?Sized>(
    size: TextureSize,
    field: &'a F,
    pixels: &[Rgba],
) -> Result<&'a [u16]> {
    size.validate()?;
    let expected = size.pixel_count();
    let values = field.values();

    if values.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: values.len(),
        });
    }

    if pixels.len() != expected {
        return Err(Error::BufferSize {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(values)
}

/// floor(256 * value / (max + 1)), saturating for values above max.
fn level(value: u16, max: u16) -> u8 {
    (256.0 * value as f64 / (max as f64 + 1.0)).floor().min(255.0) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    fn size(width: usize, height: usize) -> TextureSize {
        TextureSize { width, height }
    }

    #[test]
    fn test_two_texels() {
        let field = ValueBuffer {
            values: vec![0, 10],
            value_max: 10,
        };
        let mut pixels = vec![Rgba::default(); 2];

        paint(size(2, 1), &field, &mut pixels).unwrap();

        assert_eq!(pixels, vec![Rgba(0, 0, 0, 255), Rgba(232, 232, 232, 255)]);
    }

    #[test]
    fn test_full_range_and_saturation() {
        let field = ValueBuffer {
            values: vec![0, 32767, 65535, 65535],
            value_max: 65535,
        };
        let mut pixels = vec![Rgba::default(); 4];
        paint(size(2, 2), &field, &mut pixels).unwrap();
        assert_eq!(pixels[0], Rgba::gray(0));
        assert_eq!(pixels[1], Rgba::gray(127));
        assert_eq!(pixels[2], Rgba::gray(255));

        // values above the declared maximum clamp to white
        let field = ValueBuffer {
            values: vec![3, 100],
            value_max: 3,
        };
        let mut pixels = vec![Rgba::default(); 2];
        paint(size(1, 2), &field, &mut pixels).unwrap();
        assert_eq!(pixels, vec![Rgba::gray(192), Rgba::gray(255)]);
    }

    #[test]
    fn test_exact_quotients_are_not_rounded_down() {
        // 256 * 49 / 98 is exactly 128
        let field = ValueBuffer {
            values: vec![49, 97],
            value_max: 97,
        };
        let mut sequential = vec![Rgba::default(); 2];
        let mut parallel = vec![Rgba::default(); 2];

        paint(size(2, 1), &field, &mut sequential).unwrap();
        paint_parallel(size(2, 1), &field, &mut parallel).unwrap();

        assert_eq!(sequential, vec![Rgba::gray(128), Rgba::gray(253)]);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_levels_match_integer_division() {
        for &max in &[3u16, 10, 97, 255, 999, 1234, 1999] {
            for value in 0..=max {
                let expected = (256 * value as u32 / (max as u32 + 1)) as u8;
                assert_eq!(level(value, max), expected, "value {} of {}", value, max);
            }
        }
    }

    #[test]
    fn test_size_mismatch() {
        let field = ValueBuffer {
            values: vec![1, 2, 3],
            value_max: 3,
        };
        let mut pixels = vec![Rgba::default(); 4];

        assert_eq!(
            paint(size(2, 2), &field, &mut pixels),
            Err(Error::BufferSize {
                expected: 4,
                actual: 3
            })
        );

        let mut pixels = vec![Rgba::default(); 5];
        let field = ValueBuffer {
            values: vec![0; 4],
            value_max: 3,
        };
        assert_eq!(
            paint_parallel(size(2, 2), &field, &mut pixels),
            Err(Error::BufferSize {
                expected: 4,
                actual: 5
            })
        );
        assert!(pixels.iter().all(|&p| p == Rgba::default()));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let (width, height) = (128, 64);
        let field = ValueBuffer {
            values: (0..width * height).map(|i| (i * 7 % 1000) as u16).collect(),
            value_max: 999,
        };
        let mut sequential = vec![Rgba::default(); width * height];
        let mut parallel = vec![Rgba::default(); width * height];

        paint(size(width, height), &field, &mut sequential).unwrap();
        paint_parallel(size(width, height), &field, &mut parallel).unwrap();

        assert_eq!(sequential, parallel);
        assert!(sequential.iter().all(|p| p.3 == 255));
    }
}
