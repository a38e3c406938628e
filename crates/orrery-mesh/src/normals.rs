//! Smooth vertex normals for a triangle soup.
//!
//! Two corners are the same vertex iff their coordinates are exactly equal.
//! No welding tolerance is applied, so corners that differ by a single ulp
//! keep separate normals.

use std::cmp::Ordering;

use glam::Vec3;
use orrery_stl::face_normal;
use rustc_hash::FxHashMap;

/// Hashable identity of an exact vertex position.
///
/// Built from the coordinate bit patterns with `-0.0` folded onto `0.0`, so
/// two keys are equal exactly when the coordinates compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey([u32; 3]);

impl PositionKey {
    pub fn new(p: Vec3) -> Self {
        // x + 0.0 turns -0.0 into +0.0 and leaves every other value alone
        Self(p.to_array().map(|c| (c + 0.0).to_bits()))
    }
}

/// Maps every distinct position to the triangles that touch it.
#[derive(Debug, Default)]
pub struct PositionIndex {
    incident: FxHashMap<PositionKey, Vec<usize>>,
}

impl PositionIndex {
    /// Index a flat corner list (3 per triangle). A trailing partial
    /// triangle is ignored.
    pub fn build(positions: &[Vec3]) -> Self {
        let mut incident: FxHashMap<PositionKey, Vec<usize>> = FxHashMap::default();
        for (triangle, corners) in positions.chunks_exact(3).enumerate() {
            let keys = [
                PositionKey::new(corners[0]),
                PositionKey::new(corners[1]),
                PositionKey::new(corners[2]),
            ];
            for (i, key) in keys.iter().enumerate() {
                // a triangle with repeated corners touches that position once
                if keys[..i].contains(key) {
                    continue;
                }
                incident.entry(*key).or_default().push(triangle);
            }
        }
        Self { incident }
    }

    /// Triangles having a corner exactly at `p`.
    pub fn incident_triangles(&self, p: Vec3) -> &[usize] {
        self.incident
            .get(&PositionKey::new(p))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct positions.
    pub fn unique_positions(&self) -> usize {
        self.incident.len()
    }
}

/// Result of [`estimate_vertex_normals`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEstimate {
    /// One normal per corner, parallel to the input positions.
    pub normals: Vec<Vec3>,
    /// Corners whose incident face normals summed to zero; their normal is
    /// the zero vector.
    pub zero_normals: usize,
    /// Distinct positions in the mesh.
    pub unique_positions: usize,
}

/// Estimate one normal per corner by summing the face normals of every
/// triangle touching that exact position, then normalizing.
///
/// Face normals are recomputed from the (normalized) geometry rather than
/// taken from the file. Incident normals are summed in a canonical order, so
/// the result is bit-for-bit independent of triangle order. A zero sum
/// yields a zero normal instead of NaN.
pub fn estimate_vertex_normals(positions: &[Vec3]) -> NormalEstimate {
    debug_assert_eq!(positions.len() % 3, 0, "positions must form whole triangles");

    let face_normals: Vec<Vec3> = positions
        .chunks_exact(3)
        .map(|t| face_normal(t[0], t[1], t[2]))
        .collect();
    let index = PositionIndex::build(positions);

    let mut per_position: FxHashMap<PositionKey, Vec3> = FxHashMap::default();
    per_position.reserve(index.unique_positions());
    let mut scratch = Vec::new();
    let mut zero_normals = 0;

    let normals = positions
        .iter()
        .map(|&p| {
            let normal = *per_position.entry(PositionKey::new(p)).or_insert_with(|| {
                scratch.clear();
                scratch.extend(
                    index
                        .incident_triangles(p)
                        .iter()
                        .map(|&t| face_normals[t]),
                );
                scratch.sort_unstable_by(cmp_vec3);
                scratch.iter().copied().sum::<Vec3>().normalize_or_zero()
            });
            if normal == Vec3::ZERO {
                zero_normals += 1;
            }
            normal
        })
        .collect();

    if zero_normals > 0 {
        tracing::debug!(zero_normals, "vertex normals with canceling face normals");
    }

    NormalEstimate {
        normals,
        zero_normals,
        unique_positions: index.unique_positions(),
    }
}

fn cmp_vec3(a: &Vec3, b: &Vec3) -> Ordering {
    a.x.total_cmp(&b.x)
        .then(a.y.total_cmp(&b.y))
        .then(a.z.total_cmp(&b.z))
}
