//! One-shot mesh load: parse, normalize, estimate normals, map UVs, assemble.

use std::path::Path;

use orrery_config::MeshConfig;
use orrery_stl::Triangle;

use crate::bounds::{Normalization, normalize_triangles};
use crate::buffers::MeshBuffers;
use crate::error::MeshError;
use crate::normals::estimate_vertex_normals;
use crate::uv::SphericalUvMapper;

/// Counters gathered while building a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshStats {
    pub triangles: usize,
    pub unique_positions: usize,
    /// Triangles that received seam repair.
    pub seam_triangles: usize,
    /// Corners whose incident face normals canceled out.
    pub zero_normals: usize,
    /// Corners at the origin that got the fallback UV.
    pub zero_vector_uvs: usize,
}

/// A fully assembled mesh plus how it was derived.
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    pub buffers: MeshBuffers,
    /// Transform that was applied to the raw coordinates.
    pub normalization: Normalization,
    pub stats: MeshStats,
}

/// Runs the ingestion pipeline with fixed settings.
///
/// Holds no mutable state, so independent loads may run on different
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct MeshLoader {
    target_size: f32,
    uv_mapper: Option<SphericalUvMapper>,
}

impl MeshLoader {
    pub fn new(config: &MeshConfig) -> Self {
        Self {
            target_size: config.target_size,
            uv_mapper: config
                .generate_uvs
                .then(|| SphericalUvMapper::from_config(config)),
        }
    }

    /// Read an STL file and build its buffers.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedMesh, MeshError> {
        let path = path.as_ref();
        let triangles = orrery_stl::parse_stl(path)?;
        let mesh = self.build(&triangles)?;
        tracing::info!(
            path = %path.display(),
            triangles = mesh.stats.triangles,
            vertices = mesh.buffers.vertex_count(),
            unique_positions = mesh.stats.unique_positions,
            textured = mesh.buffers.has_uvs(),
            "loaded mesh"
        );
        Ok(mesh)
    }

    /// Build buffers from an already decoded triangle soup.
    pub fn build(&self, triangles: &[Triangle]) -> Result<LoadedMesh, MeshError> {
        let (positions, normalization) = normalize_triangles(triangles, self.target_size)?;
        let estimate = estimate_vertex_normals(&positions);

        let mut stats = MeshStats {
            triangles: triangles.len(),
            unique_positions: estimate.unique_positions,
            zero_normals: estimate.zero_normals,
            ..MeshStats::default()
        };

        let uvs = match self.uv_mapper {
            Some(mapper) => {
                let map = mapper.map_vertices(&positions);
                stats.seam_triangles = map.seam_triangles;
                stats.zero_vector_uvs = map.zero_vectors;
                map.uvs
            }
            None => Vec::new(),
        };

        let buffers = MeshBuffers::try_new(positions, estimate.normals, uvs)?;
        Ok(LoadedMesh {
            buffers,
            normalization,
            stats,
        })
    }
}

impl Default for MeshLoader {
    fn default() -> Self {
        Self::new(&MeshConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_shapes::{octahedron, tri, uv_sphere};
    use glam::Vec3;
    use orrery_stl::{StlError, write_binary_stl};

    #[test]
    fn test_lengths_match_triangle_count() {
        let triangles = uv_sphere(10, 20, 3.0, Vec3::new(1.0, 2.0, 3.0));
        let mesh = MeshLoader::default().build(&triangles).unwrap();
        let n = triangles.len() * 3;
        assert_eq!(mesh.buffers.positions().len(), n);
        assert_eq!(mesh.buffers.normals().len(), n);
        assert_eq!(mesh.buffers.uvs().len(), n);
        assert_eq!(mesh.stats.triangles, triangles.len());
        assert!(mesh.stats.seam_triangles > 0);
    }

    #[test]
    fn test_uvs_disabled_leaves_empty_buffer() {
        let config = MeshConfig {
            generate_uvs: false,
            ..MeshConfig::default()
        };
        let mesh = MeshLoader::new(&config).build(&octahedron()).unwrap();
        assert!(!mesh.buffers.has_uvs());
        assert_eq!(mesh.buffers.normals().len(), 24);
        assert_eq!(mesh.stats.seam_triangles, 0);
    }

    #[test]
    fn test_sphere_normals_point_outward() {
        let triangles = uv_sphere(16, 32, 7.0, Vec3::new(-4.0, 0.5, 9.0));
        let mesh = MeshLoader::default().build(&triangles).unwrap();
        for (p, n) in mesh.buffers.positions().iter().zip(mesh.buffers.normals()) {
            assert!(
                n.dot(p.normalize()) > 0.95,
                "normal {n:?} at {p:?} is not outward"
            );
            assert!((n.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalized_sphere_fits_target() {
        let triangles = uv_sphere(16, 32, 0.25, Vec3::splat(100.0));
        let mesh = MeshLoader::default().build(&triangles).unwrap();
        let max_radius = mesh
            .buffers
            .positions()
            .iter()
            .map(|p| p.length())
            .fold(0.0f32, f32::max);
        assert!((max_radius - 75.0).abs() < 0.01, "radius {max_radius}");
    }

    #[test]
    fn test_all_identical_vertices_rejected() {
        let p = Vec3::splat(4.0);
        let result = MeshLoader::default().build(&[tri(p, p, p)]);
        assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_load_binary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("octa.stl");
        std::fs::write(&path, write_binary_stl(&octahedron())).unwrap();

        let mesh = MeshLoader::default().load(&path).unwrap();
        assert_eq!(mesh.buffers.triangle_count(), 8);
        assert_eq!(mesh.stats.unique_positions, 6);
        assert!((mesh.normalization.scale - 75.0).abs() < 1e-4);
    }

    #[test]
    fn test_load_missing_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MeshLoader::default().load(dir.path().join("nope.stl"));
        assert!(matches!(result, Err(MeshError::Parse(StlError::Io { .. }))));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.stl");
        std::fs::write(&path, "solid bad\nfacet normal 0 0\n").unwrap();
        let result = MeshLoader::default().load(&path);
        assert!(matches!(result, Err(MeshError::Parse(_))));
    }
}
