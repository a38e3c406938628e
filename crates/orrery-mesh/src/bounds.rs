//! Bounding-box normalization: center the soup on the origin and scale its
//! largest dimension to a fixed target size.

use glam::Vec3;
use orrery_stl::Triangle;

use crate::error::MeshError;

/// Axis-aligned bounds of a point set.
///
/// Starts as an inverted box (`+∞` min, `-∞` max) so the first included
/// point defines it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// An empty box that contains nothing.
    pub const EMPTY: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Grow the box to contain `p`.
    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Bounds over every corner of every triangle, or `None` for an empty list.
    pub fn from_triangles(triangles: &[Triangle]) -> Option<Self> {
        if triangles.is_empty() {
            return None;
        }
        let mut bounds = Self::EMPTY;
        for p in triangles.iter().flat_map(|t| t.vertices) {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Size along each axis.
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint per axis.
    pub fn center(&self) -> Vec3 {
        self.min * 0.5 + self.max * 0.5
    }

    /// Largest of the three axis extents.
    pub fn max_extent(&self) -> f32 {
        self.extent().max_element()
    }
}

/// Uniform scale and translation mapping raw coordinates into canonical space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalization {
    /// Raw-space point that maps to the origin.
    pub center: Vec3,
    /// Multiplier applied after centering.
    pub scale: f32,
}

impl Normalization {
    /// Derive the transform that maps `bounds` to a box whose largest side is
    /// `target_size`, centered on the origin.
    ///
    /// Fails before dividing when the extent is zero or not finite.
    pub fn from_bounds(bounds: &BoundingBox, target_size: f32) -> Result<Self, MeshError> {
        if !(target_size.is_finite() && target_size > 0.0) {
            return Err(MeshError::InvalidTargetSize(target_size));
        }
        let extent = bounds.extent();
        let max_extent = extent.max_element();
        if !(max_extent.is_finite() && max_extent > 0.0) {
            return Err(MeshError::DegenerateGeometry { extent });
        }
        let scale = target_size / max_extent;
        if !scale.is_finite() {
            return Err(MeshError::DegenerateGeometry { extent });
        }
        Ok(Self {
            center: bounds.center(),
            scale,
        })
    }

    /// Transform one raw point.
    pub fn apply(&self, p: Vec3) -> Vec3 {
        (p - self.center) * self.scale
    }
}

/// Normalize a triangle soup into a flat position list (3 per triangle,
/// triangle `i` at `[3i, 3i + 2]`).
pub fn normalize_triangles(
    triangles: &[Triangle],
    target_size: f32,
) -> Result<(Vec<Vec3>, Normalization), MeshError> {
    if let Some(triangle) = triangles
        .iter()
        .position(|t| !t.vertices.iter().all(|v| v.is_finite()))
    {
        return Err(MeshError::NonFiniteVertex { triangle });
    }
    let bounds = BoundingBox::from_triangles(triangles).ok_or(MeshError::EmptyMesh)?;
    let normalization = Normalization::from_bounds(&bounds, target_size)?;

    let positions = triangles
        .iter()
        .flat_map(|t| t.vertices)
        .map(|p| normalization.apply(p))
        .collect();

    tracing::debug!(
        min = ?bounds.min,
        max = ?bounds.max,
        scale = normalization.scale,
        "normalized {} triangles",
        triangles.len()
    );
    Ok((positions, normalization))
}
