//! Equirectangular (longitude/latitude) texture coordinates with seam repair.
//!
//! `u` follows longitude `atan2(z, x)` and `v` follows latitude `asin(y)` of
//! the position's direction from the origin. The projection is
//! discontinuous at longitude ±π: a triangle straddling that meridian gets
//! `u` values near 0 and near 1 and would smear the whole texture across
//! itself. Triangles touching the seam are repaired locally by lifting the
//! low side past 1.0, relying on a repeating sampler.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use orrery_config::MeshConfig;

/// UV assigned to a zero-length position, which has no direction to project.
pub const ZERO_VECTOR_UV: Vec2 = Vec2::new(0.5, 0.5);

/// Largest `u` spread a triangle may have before it is treated as wrapped.
const WRAP_SPREAD: f32 = 0.5;

/// Spherical projection of a single position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Texture coordinate, both components in `[0, 1]`.
    pub uv: Vec2,
    /// Longitude `atan2(z, x)` in `[-π, π]`.
    pub longitude: f32,
    /// Longitude lies within the seam threshold of ±π.
    pub on_seam: bool,
}

/// Per-corner UVs for a whole mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct UvMap {
    /// One UV per corner, parallel to the input positions. `u` may exceed
    /// 1.0 on repaired seam triangles.
    pub uvs: Vec<Vec2>,
    /// Triangles with at least one corner on the seam.
    pub seam_triangles: usize,
    /// Corners at the origin that received [`ZERO_VECTOR_UV`].
    pub zero_vectors: usize,
}

/// Equirectangular UV generator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalUvMapper {
    /// Radians from ±π within which a corner counts as on the seam.
    pub seam_threshold: f32,
    /// Mirror `u` so a texture reads eastward when seen from outside.
    pub flip_u: bool,
}

impl SphericalUvMapper {
    pub fn new(seam_threshold: f32, flip_u: bool) -> Self {
        Self {
            seam_threshold,
            flip_u,
        }
    }

    pub fn from_config(config: &MeshConfig) -> Self {
        Self::new(config.seam_threshold, config.flip_u)
    }

    /// Project one position. Returns `None` for the zero vector.
    pub fn project(&self, p: Vec3) -> Option<Projection> {
        let dir = p.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }

        let longitude = dir.z.atan2(dir.x);
        let mut u = 0.5 + longitude / TAU;
        if self.flip_u {
            u = 1.0 - u;
        }
        let u = wrap_unit(u);

        // normalize() may leave |y| a hair above 1 at the poles
        let latitude = dir.y.clamp(-1.0, 1.0).asin();
        let v = (0.5 + latitude / PI).clamp(0.0, 1.0);

        Some(Projection {
            uv: Vec2::new(u, v),
            longitude,
            on_seam: PI - longitude.abs() <= self.seam_threshold,
        })
    }

    /// Project every corner and repair triangles that touch the seam.
    ///
    /// `positions` holds 3 corners per triangle.
    pub fn map_vertices(&self, positions: &[Vec3]) -> UvMap {
        debug_assert_eq!(positions.len() % 3, 0, "positions must form whole triangles");

        let mut uvs = Vec::with_capacity(positions.len());
        let mut seam_triangles = 0;
        let mut zero_vectors = 0;

        for corners in positions.chunks_exact(3) {
            let mut tri_uvs = [ZERO_VECTOR_UV; 3];
            let mut touches_seam = false;
            for (uv, &p) in tri_uvs.iter_mut().zip(corners) {
                match self.project(p) {
                    Some(projection) => {
                        *uv = projection.uv;
                        touches_seam |= projection.on_seam;
                    }
                    None => zero_vectors += 1,
                }
            }
            if touches_seam {
                seam_triangles += 1;
                correct_seam_triangle(&mut tri_uvs);
            }
            uvs.extend_from_slice(&tri_uvs);
        }

        tracing::debug!(seam_triangles, zero_vectors, "mapped spherical UVs");
        UvMap {
            uvs,
            seam_triangles,
            zero_vectors,
        }
    }
}

/// Wrap `u` into `[0, 1]` by an integer offset. Values already inside the
/// closed range are kept, so 1.0 stays 1.0.
pub fn wrap_unit(u: f32) -> f32 {
    if (0.0..=1.0).contains(&u) {
        u
    } else {
        u - u.floor()
    }
}

/// Un-wrap the `u` values of one seam triangle.
///
/// The pairs (0,1), (1,2), (2,0) are checked in that fixed order; whenever a
/// pair differs by more than 0.5 the smaller `u` is raised by 1.0. The
/// adjustment applies to this triangle only, so a shared corner may carry
/// different `u` values in neighbouring triangles. Returns whether anything
/// changed.
pub fn correct_seam_triangle(uvs: &mut [Vec2; 3]) -> bool {
    let mut changed = false;
    for (a, b) in [(0, 1), (1, 2), (2, 0)] {
        if (uvs[a].x - uvs[b].x).abs() > WRAP_SPREAD {
            let low = if uvs[a].x < uvs[b].x { a } else { b };
            uvs[low].x += 1.0;
            changed = true;
        }
    }
    changed
}
