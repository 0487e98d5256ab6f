use crate::ribbon::{Color, RibbonMesh};
use geom::prelude::*;
use geom::Vec3;

/// Renderable mesh owned by the host that generated ribbons are uploaded into.
pub trait MeshTarget {
    /// Replaces all previous contents with the given mesh.
    fn upload(&mut self, mesh: &RibbonMesh);
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

/// Plain owned mesh buffers with derived bounds and normals, for hosts that
/// copy the data to the GPU on their own.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    vertices: Vec<Vec3>,
    colors: Vec<Color>,
    indices: Vec<u32>,
    normals: Vec<Vec3>,
    bounds: Option<Bounds>,
    uploads: usize,
}

impl Bounds {
    pub fn from_points<'a, I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a Vec3>,
    {
        points.into_iter().fold(None, |bounds, &p| {
            Some(match bounds {
                None => Bounds { min: p, max: p },
                Some(Bounds { min, max }) => Bounds {
                    min: Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                    max: Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
                },
            })
        })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn is_point_inside(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Amount of uploads received so far.
    pub fn upload_count(&self) -> usize {
        self.uploads
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
        self.indices.clear();
        self.normals.clear();
        self.bounds = None;
    }

    fn recalculate_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.vertices);
    }

    /// Area weighted vertex normals from the adjacent triangles.
    fn recalculate_normals(&mut self) {
        let vertices = &self.vertices;
        let mut normals = vec![Vec3::new(0.0, 0.0, 0.0); vertices.len()];

        for tri in self.indices.chunks(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            // cross product magnitude is twice the triangle area
            let face = (vertices[b] - vertices[a]).cross(vertices[c] - vertices[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }

        for n in normals.iter_mut() {
            let len = n.magnitude();
            if len > 0.0 {
                *n = *n / len;
            }
        }

        self.normals = normals;
    }
}

impl MeshTarget for MeshBuffers {
    fn upload(&mut self, mesh: &RibbonMesh) {
        self.clear();
        self.vertices.extend_from_slice(&mesh.vertices);
        self.colors.extend_from_slice(&mesh.colors);
        self.indices.extend_from_slice(&mesh.indices);
        self.recalculate_bounds();
        self.recalculate_normals();
        self.uploads += 1;

        trace!(
            "Uploaded ribbon with {} vertices and {} triangles",
            self.vertices.len(),
            self.indices.len() / 3
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::WalkParams;
    use crate::path::{generate_path, Path};
    use crate::ribbon::{build_mesh, HALF_WIDTH};
    use rand::{SeedableRng, XorShiftRng};

    fn vertical_path() -> Path {
        Path::from_points(vec![
            Vec3::new(0.0, 1000.0, 0.0),
            Vec3::new(0.0, 900.0, 0.0),
            Vec3::new(0.0, 800.0, 0.0),
            Vec3::new(0.0, -10.0, 0.0),
        ])
    }

    #[test]
    fn test_single_segment_faces_forward() {
        let path = Path::from_points(vec![Vec3::new(0.0, 1000.0, 0.0), Vec3::new(0.0, 900.0, 0.0)]);
        let mut buffers = MeshBuffers::new();
        buffers.upload(&build_mesh(&path));

        assert_eq!(buffers.normals().len(), 4);
        for n in buffers.normals() {
            assert_eq!(*n, Vec3::new(0.0, 0.0, 1.0));
        }
    }

    #[test]
    fn test_bounds_cover_ribbon() {
        let mut buffers = MeshBuffers::new();
        assert_eq!(buffers.bounds(), None);

        buffers.upload(&build_mesh(&vertical_path()));
        let bounds = buffers.bounds().unwrap();

        assert_eq!(bounds.min, Vec3::new(-HALF_WIDTH, -10.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(HALF_WIDTH, 1000.0, 0.0));
        assert!(buffers.vertices().iter().all(|&v| bounds.is_point_inside(v)));
        assert_eq!(bounds.center(), Vec3::new(0.0, 495.0, 0.0));
    }

    #[test]
    fn test_upload_replaces_previous_contents() {
        let mut rng = XorShiftRng::from_seed([3, 1, 4, 1]);
        let mut buffers = MeshBuffers::new();

        let first = build_mesh(&generate_path(&WalkParams::default(), &mut rng));
        let second = build_mesh(&vertical_path());
        buffers.upload(&first);
        buffers.upload(&second);

        assert_eq!(buffers.upload_count(), 2);
        assert_eq!(buffers.vertices(), &second.vertices[..]);
        assert_eq!(buffers.colors(), &second.colors[..]);
        assert_eq!(buffers.indices(), &second.indices[..]);
        assert_eq!(buffers.normals().len(), second.vertices.len());
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mut rng = XorShiftRng::from_seed([2, 7, 1, 8]);
        let mut buffers = MeshBuffers::new();
        buffers.upload(&build_mesh(&generate_path(&WalkParams::default(), &mut rng)));

        for n in buffers.normals() {
            let len = n.magnitude();
            assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
        }
    }
}
