use std::path::PathBuf;

/// Errors that can occur while reading or decoding an STL file.
#[derive(Debug, thiserror::Error)]
pub enum StlError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Binary data is shorter than the 84-byte header.
    #[error("binary STL too short for header: {actual} bytes")]
    TooShort {
        /// Actual byte count.
        actual: usize,
    },
    /// Binary data ends before the declared number of triangles.
    #[error("binary STL truncated: {count} triangles need {expected} bytes, got {actual}")]
    Truncated {
        /// Triangle count from the header.
        count: u32,
        /// Byte count the header implies.
        expected: usize,
        /// Actual byte count.
        actual: usize,
    },
    /// ASCII content is not valid UTF-8.
    #[error("ASCII STL is not valid UTF-8")]
    InvalidUtf8(#[source] std::str::Utf8Error),
    /// An ASCII keyword was missing or out of order.
    #[error("line {line}: expected `{expected}`, found `{found}`")]
    UnexpectedToken {
        /// 1-based line number.
        line: usize,
        /// Keyword the grammar requires here.
        expected: &'static str,
        /// What was actually there.
        found: String,
    },
    /// The ASCII content ended inside a facet.
    #[error("unexpected end of ASCII STL, expected `{expected}`")]
    UnexpectedEof {
        /// Keyword the grammar required next.
        expected: &'static str,
    },
    /// A coordinate could not be parsed as a number.
    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// The file decoded cleanly but holds no triangles.
    #[error("STL contains no triangles")]
    NoTriangles,
}
