//! Binary STL codec.
//!
//! ## Binary Layout
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 80 | Free-form header (ignored) |
//! | 80 | 4 | Triangle count (`u32`, little-endian) |
//! | 84 | N×50 | Triangle records |
//!
//! Each record is a normal followed by three vertices, every vector being
//! three little-endian `f32`s (12 bytes), then a 2-byte attribute count.

use glam::Vec3;

use crate::error::StlError;
use crate::triangle::Triangle;

const HEADER_LEN: usize = 80;
const PREAMBLE_LEN: usize = HEADER_LEN + 4;
const RECORD_LEN: usize = 50;
const VEC3_LEN: usize = 12;

/// True when `data` is exactly as long as its header's triangle count implies.
pub(crate) fn is_consistent_binary(data: &[u8]) -> bool {
    match declared_count(data) {
        Some(count) => expected_len(count) == Some(data.len()),
        None => false,
    }
}

/// True when `data` is at least as long as its header's triangle count implies.
pub(crate) fn holds_declared_records(data: &[u8]) -> bool {
    declared_count(data)
        .and_then(expected_len)
        .is_some_and(|expected| expected <= data.len())
}

/// Decodes a binary STL buffer.
pub fn parse_binary(data: &[u8]) -> Result<Vec<Triangle>, StlError> {
    let count = declared_count(data).ok_or(StlError::TooShort { actual: data.len() })?;
    let expected = expected_len(count).unwrap_or(usize::MAX);
    if data.len() < expected {
        return Err(StlError::Truncated {
            count,
            expected,
            actual: data.len(),
        });
    }
    if count == 0 {
        return Err(StlError::NoTriangles);
    }
    if data.len() > expected {
        tracing::debug!(
            trailing = data.len() - expected,
            "ignoring trailing bytes after binary STL records"
        );
    }

    let triangles = data[PREAMBLE_LEN..expected]
        .chunks_exact(RECORD_LEN)
        .map(|record| {
            Triangle::new(
                read_vec3(&record[0..]),
                [
                    read_vec3(&record[VEC3_LEN..]),
                    read_vec3(&record[2 * VEC3_LEN..]),
                    read_vec3(&record[3 * VEC3_LEN..]),
                ],
            )
        })
        .collect();
    Ok(triangles)
}

/// Encodes triangles as binary STL with a blank header and zero attributes.
pub fn write_binary_stl(triangles: &[Triangle]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PREAMBLE_LEN + triangles.len() * RECORD_LEN);
    buf.resize(HEADER_LEN, 0);
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        write_vec3(&mut buf, tri.normal);
        for v in tri.vertices {
            write_vec3(&mut buf, v);
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

fn declared_count(data: &[u8]) -> Option<u32> {
    let bytes = data.get(HEADER_LEN..PREAMBLE_LEN)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn expected_len(count: u32) -> Option<usize> {
    (count as usize)
        .checked_mul(RECORD_LEN)?
        .checked_add(PREAMBLE_LEN)
}

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn read_vec3(bytes: &[u8]) -> Vec3 {
    Vec3::new(read_f32(bytes), read_f32(&bytes[4..]), read_f32(&bytes[8..]))
}

fn write_vec3(buf: &mut Vec<u8>, v: Vec3) {
    for c in v.to_array() {
        buf.extend_from_slice(&c.to_le_bytes());
    }
}
