use image::RgbaImage;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::IconError;

/// Encodes an RGBA image as an 8-bit PNG, preserving the alpha channel.
pub fn write_png<W: Write>(image: &RgbaImage, output: W) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(output, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()
}

/// Writes `image` to `path` as a PNG, creating parent directories as needed
/// and replacing any existing file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| IconError::io(parent, err))?;
    }
    let file = File::create(path).map_err(|err| IconError::io(path, err))?;
    let mut output = BufWriter::new(file);
    write_png(image, &mut output).map_err(|source| IconError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    output.flush().map_err(|err| IconError::io(path, err))?;
    log::debug!(
        "wrote {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(())
}
