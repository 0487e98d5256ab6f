use crate::path::{normalize_or_zero, Path};
use geom::Vec3;

/// Distance of each ribbon edge from the path.
pub const HALF_WIDTH: f32 = 3.0;

/// Linear RGBA vertex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

/// Flat triangle strip following a path, two vertices per path point.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonMesh {
    pub vertices: Vec<Vec3>,
    pub colors: Vec<Color>,
    /// Triangle list, three indices per triangle
    pub indices: Vec<u32>,
}

impl RibbonMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles<'a>(&'a self) -> impl Iterator<Item = [u32; 3]> + 'a {
        self.indices.chunks(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Builds a ribbon of constant width along the given path.
///
/// Interior points are offset along the in-plane perpendicular of the
/// neighbouring points, both ends fall back to the world left axis.
pub fn build_mesh(path: &Path) -> RibbonMesh {
    let points = path.points();
    let n = points.len();
    assert!(n >= 2, "Ribbon needs at least two path points, got {}", n);

    let left = Vec3::new(-1.0, 0.0, 0.0);
    let mut vertices = Vec::with_capacity(2 * n);

    push_pair(&mut vertices, points[0], left);
    for window in points.windows(3) {
        let d = normalize_or_zero(window[2] - window[0]);
        let right = Vec3::new(-d.y, d.x, d.z);
        push_pair(&mut vertices, window[1], right);
    }
    push_pair(&mut vertices, points[n - 1], left);

    let colors = vec![Color::WHITE; vertices.len()];

    let segments = (n - 1) as u32;
    let indices = (0..segments)
        .flat_map(|s| {
            let v = 2 * s;
            // second triangle reverses the shared edge to keep facing consistent
            vec![v, v + 2, v + 1, v + 1, v + 2, v + 3]
        })
        .collect();

    RibbonMesh {
        vertices,
        colors,
        indices,
    }
}

fn push_pair(vertices: &mut Vec<Vec3>, center: Vec3, offset_dir: Vec3) {
    vertices.push(center + offset_dir * HALF_WIDTH);
    vertices.push(center - offset_dir * HALF_WIDTH);
}
