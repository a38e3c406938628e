//! ASCII STL decoding.
//!
//! ```text
//! solid [name]
//!   facet normal nx ny nz
//!     outer loop
//!       vertex x y z
//!       vertex x y z
//!       vertex x y z
//!     endloop
//!   endfacet
//! endsolid [name]
//! ```
//!
//! Keywords are case-insensitive and may be separated by any whitespace.

use glam::Vec3;

use crate::error::StlError;
use crate::triangle::Triangle;

/// Decodes an ASCII STL buffer.
pub fn parse_ascii(data: &[u8]) -> Result<Vec<Triangle>, StlError> {
    let text = std::str::from_utf8(data).map_err(StlError::InvalidUtf8)?;
    let mut tokens = Tokens::new(text)?;
    let mut triangles = Vec::new();

    loop {
        let Some((line, word)) = tokens.next() else {
            tracing::debug!("ASCII STL ended without `endsolid`");
            break;
        };
        if word.eq_ignore_ascii_case("endsolid") {
            break;
        }
        if !word.eq_ignore_ascii_case("facet") {
            return Err(StlError::UnexpectedToken {
                line,
                expected: "facet",
                found: word.to_string(),
            });
        }
        triangles.push(parse_facet(&mut tokens)?);
    }

    if triangles.is_empty() {
        return Err(StlError::NoTriangles);
    }
    Ok(triangles)
}

fn parse_facet(tokens: &mut Tokens<'_>) -> Result<Triangle, StlError> {
    tokens.keyword("normal")?;
    let normal = tokens.vec3()?;
    tokens.keyword("outer")?;
    tokens.keyword("loop")?;
    let mut vertices = [Vec3::ZERO; 3];
    for v in &mut vertices {
        tokens.keyword("vertex")?;
        *v = tokens.vec3()?;
    }
    tokens.keyword("endloop")?;
    tokens.keyword("endfacet")?;
    Ok(Triangle::new(normal, vertices))
}

/// Whitespace tokens tagged with their 1-based line number.
struct Tokens<'a> {
    inner: std::vec::IntoIter<(usize, &'a str)>,
}

impl<'a> Tokens<'a> {
    /// Tokenizes `text` and consumes the `solid [name]` header.
    ///
    /// The name runs to the end of the header line or up to the first
    /// `facet`/`endsolid` on it, whichever comes first.
    fn new(text: &'a str) -> Result<Self, StlError> {
        let mut words = text
            .lines()
            .enumerate()
            .flat_map(|(i, l)| l.split_whitespace().map(move |w| (i + 1, w)))
            .peekable();

        let (header_line, head) = words
            .next()
            .ok_or(StlError::UnexpectedEof { expected: "solid" })?;
        if !head.eq_ignore_ascii_case("solid") {
            return Err(StlError::UnexpectedToken {
                line: header_line,
                expected: "solid",
                found: head.to_string(),
            });
        }
        while let Some(&(line, word)) = words.peek()
            && line == header_line
            && !word.eq_ignore_ascii_case("facet")
            && !word.eq_ignore_ascii_case("endsolid")
        {
            words.next();
        }

        Ok(Self {
            inner: words.collect::<Vec<_>>().into_iter(),
        })
    }

    fn next(&mut self) -> Option<(usize, &'a str)> {
        self.inner.next()
    }

    fn keyword(&mut self, expected: &'static str) -> Result<(), StlError> {
        match self.next() {
            Some((_, word)) if word.eq_ignore_ascii_case(expected) => Ok(()),
            Some((line, word)) => Err(StlError::UnexpectedToken {
                line,
                expected,
                found: word.to_string(),
            }),
            None => Err(StlError::UnexpectedEof { expected }),
        }
    }

    fn number(&mut self) -> Result<f32, StlError> {
        let (line, word) = self
            .next()
            .ok_or(StlError::UnexpectedEof { expected: "number" })?;
        word.parse().map_err(|_| StlError::InvalidNumber {
            line,
            token: word.to_string(),
        })
    }

    fn vec3(&mut self) -> Result<Vec3, StlError> {
        Ok(Vec3::new(self.number()?, self.number()?, self.number()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAD: &str = "solid quad exported by hand
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 1 1 0
    endloop
  endfacet
  FACET NORMAL 0.0e0 0 1.0
    OUTER LOOP
      VERTEX 0 0 0
      VERTEX 1 1 0
      VERTEX 0 1 0
    ENDLOOP
  ENDFACET
endsolid quad
";

    #[test]
    fn test_parse_two_facets() {
        let triangles = parse_ascii(QUAD.as_bytes()).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].normal, Vec3::Z);
        assert_eq!(
            triangles[1].vertices,
            [Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), Vec3::Y]
        );
    }

    #[test]
    fn test_single_line_solid() {
        let text = "solid x facet normal 0 0 1 outer loop vertex 0 0 0 vertex 1 0 0 \
                    vertex 0 1 0 endloop endfacet endsolid x";
        let triangles = parse_ascii(text.as_bytes()).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].vertices[1], Vec3::X);
    }

    #[test]
    fn test_unnamed_solid_header() {
        let text = "solid\nfacet normal 0 0 1\nouter loop\nvertex 0 0 0\nvertex 1 0 0\nvertex 0 1 0\nendloop\nendfacet\nendsolid\n";
        assert_eq!(parse_ascii(text.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_endsolid_is_accepted() {
        let text = QUAD.replace("endsolid quad\n", "");
        assert_eq!(parse_ascii(text.as_bytes()).unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let text = QUAD.replace("vertex 1 0 0", "vertex 1 zero 0");
        match parse_ascii(text.as_bytes()) {
            Err(StlError::InvalidNumber { line, token }) => {
                assert_eq!(line, 5);
                assert_eq!(token, "zero");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_vertex_is_unexpected_token() {
        let text = QUAD.replacen("      vertex 1 1 0\n", "", 1);
        match parse_ascii(text.as_bytes()) {
            Err(StlError::UnexpectedToken {
                expected, found, ..
            }) => {
                assert_eq!(expected, "vertex");
                assert_eq!(found, "endloop");
            }
            other => panic!("expected unexpected token, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_facet_is_eof() {
        let text = "solid x\nfacet normal 0 0 1\nouter loop\nvertex 0 0";
        assert!(matches!(
            parse_ascii(text.as_bytes()),
            Err(StlError::UnexpectedEof { expected: "number" })
        ));
    }

    #[test]
    fn test_empty_solid_has_no_triangles() {
        let text = "solid empty\nendsolid empty\n";
        assert!(matches!(
            parse_ascii(text.as_bytes()),
            Err(StlError::NoTriangles)
        ));
    }

    #[test]
    fn test_header_must_be_solid() {
        assert!(matches!(
            parse_ascii(b"facet normal 0 0 1"),
            Err(StlError::UnexpectedToken {
                expected: "solid",
                ..
            })
        ));
    }
}
