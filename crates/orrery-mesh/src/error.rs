//! Mesh load error types.

use glam::Vec3;
use orrery_stl::StlError;

/// Errors that abort a mesh load.
///
/// Only structural problems are errors. Per-vertex numeric edge cases
/// (zero-length normal sums, zero vectors fed to the UV projection) are
/// recovered in place and reported through [`crate::MeshStats`].
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The geometry file is missing or malformed.
    #[error("failed to parse mesh: {0}")]
    Parse(#[from] StlError),

    /// The triangle list is empty.
    #[error("mesh has no triangles")]
    EmptyMesh,

    /// A vertex coordinate is NaN or infinite.
    #[error("triangle {triangle} has a non-finite vertex")]
    NonFiniteVertex {
        /// Index of the offending triangle.
        triangle: usize,
    },

    /// All vertices coincide (or the extent is not representable), so no
    /// scale factor can be derived.
    #[error("degenerate geometry: bounding box extent is {extent}")]
    DegenerateGeometry {
        /// Bounding box size per axis.
        extent: Vec3,
    },

    /// The configured normalization target is not a positive finite number.
    #[error("invalid target size {0}")]
    InvalidTargetSize(f32),

    /// Parallel buffers disagree in length.
    #[error(
        "buffer length mismatch: {positions} positions, {normals} normals, {uvs} uvs"
    )]
    LengthMismatch {
        /// Position count.
        positions: usize,
        /// Normal count.
        normals: usize,
        /// UV count.
        uvs: usize,
    },
}
