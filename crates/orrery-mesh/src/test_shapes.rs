//! Reference triangle soups shared by the unit tests.

use glam::Vec3;
use orrery_stl::{Triangle, face_normal};

/// Builds a triangle whose stored normal matches its winding.
pub fn tri(a: Vec3, b: Vec3, c: Vec3) -> Triangle {
    Triangle::new(face_normal(a, b, c), [a, b, c])
}

/// Regular octahedron with unit-length vertices on the axes, wound outward.
pub fn octahedron() -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(8);
    for sx in [1.0f32, -1.0] {
        for sy in [1.0f32, -1.0] {
            for sz in [1.0f32, -1.0] {
                let a = Vec3::X * sx;
                let b = Vec3::Y * sy;
                let c = Vec3::Z * sz;
                if sx * sy * sz > 0.0 {
                    triangles.push(tri(a, b, c));
                } else {
                    triangles.push(tri(a, c, b));
                }
            }
        }
    }
    triangles
}

/// Latitude/longitude sphere of radius `radius` centered at `center`.
///
/// Longitudes run from -π to π so one column of vertices sits on the UV seam.
/// The poles are exact so their corners share a position.
pub fn uv_sphere(stacks: u32, slices: u32, radius: f32, center: Vec3) -> Vec<Triangle> {
    let point = |i: u32, j: u32| -> Vec3 {
        let unit = if i == 0 {
            Vec3::Y
        } else if i == stacks {
            Vec3::NEG_Y
        } else {
            let lat = std::f32::consts::FRAC_PI_2 - std::f32::consts::PI * i as f32 / stacks as f32;
            let lon = -std::f32::consts::PI + std::f32::consts::TAU * j as f32 / slices as f32;
            Vec3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin())
        };
        center + unit * radius
    };

    let mut triangles = Vec::new();
    for i in 0..stacks {
        for j in 0..slices {
            let (p00, p01) = (point(i, j), point(i, j + 1));
            let (p10, p11) = (point(i + 1, j), point(i + 1, j + 1));
            if i != 0 {
                triangles.push(tri(p00, p01, p10));
            }
            if i + 1 != stacks {
                triangles.push(tri(p01, p11, p10));
            }
        }
    }
    triangles
}
