//! Parallel position/normal/UV arrays handed to the renderer.
//!
//! ## Interleaved Vertex Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 12 | position (`[f32; 3]`) |
//! | 12 | 12 | normal (`[f32; 3]`) |
//! | 24 | 8 | uv (`[f32; 2]`, zero when the mesh has no UVs) |

use std::mem;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::error::MeshError;

/// One interleaved vertex, ready for a GPU vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// Byte stride of one vertex.
    pub const STRIDE: usize = mem::size_of::<MeshVertex>();

    /// Reinterpret a vertex slice as raw bytes for upload.
    pub fn as_bytes(vertices: &[MeshVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

const _: () = assert!(
    mem::size_of::<MeshVertex>() == 32,
    "MeshVertex size changed, update the layout table"
);

/// Positions, normals and UVs in triangle-corner order.
///
/// Invariants, checked on construction:
/// - `positions.len()` is a multiple of 3 (triangle `i` at `[3i, 3i + 2]`)
/// - `normals.len() == positions.len()`
/// - `uvs` is empty or `uvs.len() == positions.len()`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
}

impl MeshBuffers {
    /// Assemble buffers, rejecting any length disagreement.
    pub fn try_new(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        uvs: Vec<Vec2>,
    ) -> Result<Self, MeshError> {
        let n = positions.len();
        if n % 3 != 0 || normals.len() != n || !(uvs.is_empty() || uvs.len() == n) {
            return Err(MeshError::LengthMismatch {
                positions: n,
                normals: normals.len(),
                uvs: uvs.len(),
            });
        }
        Ok(Self {
            positions,
            normals,
            uvs,
        })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Per-corner UVs; empty when the mesh is untextured.
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Number of corners (3 per triangle).
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Whether texture coordinates are present. Renderers skip texture
    /// state when this is false.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Drop the UVs, e.g. after the texture failed to load.
    pub fn strip_uvs(&mut self) {
        self.uvs = Vec::new();
    }

    /// Interleave into [`MeshVertex`]es.
    pub fn to_vertices(&self) -> Vec<MeshVertex> {
        let uv_at = |i: usize| self.uvs.get(i).copied().unwrap_or(Vec2::ZERO);
        self.positions
            .iter()
            .zip(&self.normals)
            .enumerate()
            .map(|(i, (p, n))| MeshVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv_at(i).to_array(),
            })
            .collect()
    }
}
