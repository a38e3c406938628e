//! Triangle-soup decoding for STL geometry files.
//!
//! Both the binary and ASCII flavors are supported. The output is an
//! unindexed list of [`Triangle`]s; shared corners are stored once per
//! triangle, exactly as in the file.

mod ascii;
mod binary;
mod error;
mod triangle;

pub use ascii::parse_ascii;
pub use binary::{parse_binary, write_binary_stl};
pub use error::StlError;
pub use triangle::{Triangle, face_normal};

use std::path::Path;

/// Reads and decodes an STL file in a single synchronous whole-file read.
pub fn parse_stl(path: impl AsRef<Path>) -> Result<Vec<Triangle>, StlError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| StlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let triangles = parse_stl_bytes(&data)?;
    tracing::debug!(
        path = %path.display(),
        bytes = data.len(),
        triangles = triangles.len(),
        "decoded STL"
    );
    Ok(triangles)
}

/// Decodes STL content already in memory, detecting binary vs ASCII.
///
/// A buffer whose length matches the binary header's triangle count is
/// binary even if it starts with `solid` (many exporters write that into
/// the 80-byte header). Otherwise a leading `solid` keyword selects ASCII;
/// if that fails and the buffer still holds every declared binary record,
/// it is decoded as binary with trailing bytes.
pub fn parse_stl_bytes(data: &[u8]) -> Result<Vec<Triangle>, StlError> {
    if binary::is_consistent_binary(data) {
        return parse_binary(data);
    }
    if looks_like_ascii(data) {
        return parse_ascii(data).or_else(|err| {
            if binary::holds_declared_records(data) {
                tracing::debug!("not ASCII ({err}), decoding as binary");
                parse_binary(data)
            } else {
                Err(err)
            }
        });
    }
    parse_binary(data)
}

fn looks_like_ascii(data: &[u8]) -> bool {
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    data[start..]
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case(b"solid"))
}
