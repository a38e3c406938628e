//! Mesh ingestion and spherical surface parameterization.
//!
//! Turns a raw STL triangle soup into smoothly shaded, texture-mapped
//! vertex buffers:
//!
//! 1. [`normalize_triangles`] centers the soup and scales its largest
//!    bounding-box dimension to a target size.
//! 2. [`estimate_vertex_normals`] averages the face normals meeting at each
//!    exact vertex position.
//! 3. [`SphericalUvMapper`] projects positions to equirectangular UVs and
//!    repairs triangles that straddle the longitude seam.
//! 4. [`MeshBuffers`] packages the three parallel arrays for a renderer.
//!
//! [`MeshLoader`] runs the whole pipeline for one file.

mod bounds;
mod buffers;
mod error;
mod loader;
mod normals;
mod uv;

pub use bounds::{BoundingBox, Normalization, normalize_triangles};
pub use buffers::{MeshBuffers, MeshVertex};
pub use error::MeshError;
pub use loader::{LoadedMesh, MeshLoader, MeshStats};
pub use normals::{NormalEstimate, PositionIndex, PositionKey, estimate_vertex_normals};
pub use orrery_stl::face_normal;
pub use uv::{
    Projection, SphericalUvMapper, UvMap, ZERO_VECTOR_UV, correct_seam_triangle, wrap_unit,
};

#[cfg(test)]
pub(crate) mod test_shapes;
