//! Flat background color sampling for adaptive icons.

use image::Rgb;

use crate::source::SourceImage;

/// Largest thumbnail edge used when averaging.
pub const THUMBNAIL_BOUND: u32 = 50;

/// Picks a flat background color for a source image: the per-channel mean
/// of a thumbnail no larger than `THUMBNAIL_BOUND` on either side, truncated
/// to integers.
///
/// Alpha is ignored, so fully transparent pixels still contribute whatever
/// color values they carry.
pub fn background_color(source: &SourceImage) -> Rgb<u8> {
    let thumb = source.thumbnail(THUMBNAIL_BOUND);
    let count = u64::from(thumb.width()) * u64::from(thumb.height());
    if count == 0 {
        return Rgb([0, 0, 0]);
    }
    let mut sums = [0u64; 3];
    for pixel in thumb.pixels() {
        for (sum, &value) in sums.iter_mut().zip(&pixel.0[..3]) {
            *sum += u64::from(value);
        }
    }
    Rgb(sums.map(|sum| (sum / count) as u8))
}
