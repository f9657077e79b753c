use image::imageops::{self, FilterType};
use image::{Rgb, Rgba, RgbaImage};
use std::path::Path;

use crate::error::IconError;

/// Resampling filter used for every icon resize.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// A decoded source image, always stored as 8-bit RGBA.
///
/// The source is never modified once loaded; every resize produces an
/// independent buffer.
#[derive(Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Decodes the image at `path` and converts it to RGBA.  Formats without
    /// an alpha channel gain a fully opaque one.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SourceImage, IconError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| IconError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "decoded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Ok(SourceImage::from_rgba(decoded.to_rgba8()))
    }

    /// Wraps an existing RGBA buffer.
    pub fn from_rgba(pixels: RgbaImage) -> SourceImage {
        SourceImage { pixels }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns a square copy of the image resampled to `size` by `size`
    /// pixels.  Aspect ratio is not preserved.
    pub fn resized(&self, size: u32) -> RgbaImage {
        imageops::resize(&self.pixels, size, size, RESIZE_FILTER)
    }

    /// Returns a copy shrunk to fit within `bound` by `bound` pixels while
    /// keeping the aspect ratio.  Images already inside the bound are copied
    /// unchanged.
    pub fn thumbnail(&self, bound: u32) -> RgbaImage {
        let (width, height) = thumbnail_dimensions(self.width(), self.height(), bound);
        if (width, height) == (self.width(), self.height()) {
            return self.pixels.clone();
        }
        imageops::thumbnail(&self.pixels, width, height)
    }
}

/// Creates a fully opaque `size` by `size` image filled with `color`.
pub fn solid_fill(size: u32, color: Rgb<u8>) -> RgbaImage {
    let Rgb([r, g, b]) = color;
    RgbaImage::from_pixel(size, size, Rgba([r, g, b, u8::MAX]))
}

/// Computes the dimensions of a thumbnail that fits within `bound` on both
/// axes.  Never enlarges, and never returns a zero dimension.
fn thumbnail_dimensions(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if width <= bound && height <= bound {
        return (width, height);
    }
    let scale = f64::min(
        bound as f64 / width as f64,
        bound as f64 / height as f64,
    );
    let scaled = |value: u32| ((value as f64 * scale).round() as u32).clamp(1, bound);
    (scaled(width), scaled(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: u32, height: u32) -> SourceImage {
        SourceImage::from_rgba(RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        }))
    }

    #[test]
    fn resized_is_square_and_leaves_source_alone() {
        let source = checkerboard(64, 32);
        let icon = source.resized(40);
        assert_eq!(icon.dimensions(), (40, 40));
        assert_eq!((source.width(), source.height()), (64, 32));
    }

    #[test]
    fn thumbnail_keeps_aspect_ratio() {
        assert_eq!(thumbnail_dimensions(512, 512, 50), (50, 50));
        assert_eq!(thumbnail_dimensions(1000, 500, 50), (50, 25));
        assert_eq!(thumbnail_dimensions(300, 900, 50), (17, 50));
        assert_eq!(thumbnail_dimensions(10_000, 1, 50), (50, 1));
    }

    #[test]
    fn thumbnail_never_enlarges() {
        assert_eq!(thumbnail_dimensions(20, 30, 50), (20, 30));
        let source = checkerboard(8, 8);
        assert_eq!(source.thumbnail(50), source.pixels);
    }

    #[test]
    fn solid_fill_is_opaque() {
        let fill = solid_fill(16, Rgb([12, 34, 56]));
        assert_eq!(fill.dimensions(), (16, 16));
        assert!(fill.pixels().all(|pixel| *pixel == Rgba([12, 34, 56, 255])));
    }
}
