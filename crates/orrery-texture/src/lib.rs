//! Texture sources for textured meshes.
//!
//! A texture comes either from an image file (decoded with the `image`
//! crate, any format it was built with) or from a raw 8-bit pixel buffer
//! supplied by the caller. Both end up as a [`TextureImage`] that a
//! renderer can upload as-is.

use std::path::PathBuf;

/// Channel layout of raw pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// One 8-bit channel per texel.
    R8,
    /// Four 8-bit channels per texel.
    Rgba8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::R8 => 1,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// Where a texture's pixels come from.
#[derive(Clone, Debug, PartialEq)]
pub enum TextureSource {
    /// An image file on disk.
    File(PathBuf),
    /// Pixels already in memory, rows top to bottom.
    Raw {
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    },
}

/// Decoded texture ready for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

/// Errors that can occur while producing a texture.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Failed to open or decode an image file.
    #[error("failed to load texture {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Width or height is zero.
    #[error("texture dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the dimensions and format.
    #[error(
        "texture data size ({actual}) does not match expected ({expected}) for {width}x{height} {format:?}"
    )]
    DataSizeMismatch {
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
        format: PixelFormat,
    },
}

impl TextureImage {
    /// Validate raw pixels against their declared size.
    pub fn from_raw(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroDimensions { width, height });
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(TextureError::DataSizeMismatch {
                actual: pixels.len(),
                expected,
                width,
                height,
                format,
            });
        }
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }

    /// Single-channel checkerboard of `size`×`size` one-texel squares.
    pub fn checkerboard(size: u32) -> Self {
        let pixels = (0..size)
            .flat_map(|y| (0..size).map(move |x| if (x + y) % 2 == 0 { 0xFF } else { 0x00 }))
            .collect();
        Self {
            width: size,
            height: size,
            format: PixelFormat::R8,
            pixels,
        }
    }

    /// Value of one texel's first channel.
    pub fn texel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * self.format.bytes_per_pixel();
        self.pixels.get(index).copied()
    }
}

/// Decode a texture source into pixels.
pub fn load_texture(source: &TextureSource) -> Result<TextureImage, TextureError> {
    match source {
        TextureSource::File(path) => {
            let img = image::open(path)
                .map_err(|source| TextureError::Image {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            let (width, height) = img.dimensions();
            tracing::debug!(path = %path.display(), width, height, "decoded texture");
            TextureImage::from_raw(width, height, PixelFormat::Rgba8, img.into_raw())
        }
        TextureSource::Raw {
            width,
            height,
            format,
            pixels,
        } => TextureImage::from_raw(*width, *height, *format, pixels.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_pattern() {
        let tex = TextureImage::checkerboard(8);
        assert_eq!(tex.pixels.len(), 64);
        assert_eq!(tex.texel(0, 0), Some(0xFF));
        assert_eq!(tex.texel(1, 0), Some(0x00));
        assert_eq!(tex.texel(1, 1), Some(0xFF));
        assert_eq!(tex.texel(8, 0), None);
    }

    #[test]
    fn test_raw_source_validated() {
        let ok = TextureSource::Raw {
            width: 2,
            height: 2,
            format: PixelFormat::Rgba8,
            pixels: vec![7; 16],
        };
        assert_eq!(load_texture(&ok).unwrap().width, 2);

        let short = TextureSource::Raw {
            width: 2,
            height: 2,
            format: PixelFormat::Rgba8,
            pixels: vec![7; 15],
        };
        assert!(matches!(
            load_texture(&short),
            Err(TextureError::DataSizeMismatch {
                expected: 16,
                actual: 15,
                ..
            })
        ));
    }

    #[test]
    fn test_zero_dimensions() {
        let result = TextureImage::from_raw(0, 4, PixelFormat::R8, Vec::new());
        assert!(matches!(result, Err(TextureError::ZeroDimensions { .. })));
    }

    #[test]
    fn test_file_source_decodes_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let tex = load_texture(&TextureSource::File(path)).unwrap();
        assert_eq!((tex.width, tex.height), (3, 2));
        assert_eq!(tex.format, PixelFormat::Rgba8);
        assert_eq!(tex.texel(2, 1), Some(10));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_texture(&TextureSource::File(dir.path().join("absent.bmp")));
        assert!(matches!(result, Err(TextureError::Image { .. })));
    }
}
