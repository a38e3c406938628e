use glam::Vec3;

/// One facet of a triangle soup: a face normal and three corner positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    /// Face normal as stored in the source file.
    pub normal: Vec3,
    /// Corner positions in winding order.
    pub vertices: [Vec3; 3],
}

impl Triangle {
    pub fn new(normal: Vec3, vertices: [Vec3; 3]) -> Self {
        Self { normal, vertices }
    }
}

/// Normal of the triangle `a, b, c` from its winding: `(b - a) × (c - a)`,
/// normalized. Zero for degenerate (collinear or coincident) corners.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_normal_follows_winding() {
        assert_eq!(face_normal(Vec3::ZERO, Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(face_normal(Vec3::ZERO, Vec3::Y, Vec3::X), Vec3::NEG_Z);
    }

    #[test]
    fn test_face_normal_degenerate_is_zero() {
        assert_eq!(face_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0), Vec3::ZERO);
        assert_eq!(face_normal(Vec3::ZERO, Vec3::X, Vec3::X), Vec3::ZERO);
    }
}
