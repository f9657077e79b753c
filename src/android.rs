//! Generation of Android adaptive launcher icons.

use image::Rgb;
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::background_color;
use crate::error::IconError;
use crate::pngio::save_png;
use crate::source::{solid_fill, SourceImage};

/// Name of the directory created under the output root.
pub const ANDROID_DIR: &str = "android_adaptive";

/// Edge length, in pixels, of both adaptive icon layers.
pub const ANDROID_LAYER_SIZE: u32 = 432;

/// File name of the foreground layer.
pub const FOREGROUND_FILE: &str = "ic_launcher_foreground.png";

/// File name of the background layer.
pub const BACKGROUND_FILE: &str = "ic_launcher_background.png";

/// Resource directory holding the adaptive icon descriptor.
pub const DESCRIPTOR_DIR: &str = "mipmap-anydpi-v26";

/// File name of the adaptive icon descriptor.
pub const DESCRIPTOR_FILE: &str = "ic_launcher.xml";

/// File name of the usage note.
pub const README_FILE: &str = "README.txt";

const ADAPTIVE_ICON_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
  <background android:drawable="@mipmap/ic_launcher_background"/>
  <foreground android:drawable="@mipmap/ic_launcher_foreground"/>
</adaptive-icon>
"#;

const README_TEXT: &str = "\
Place ic_launcher_foreground.png and ic_launcher_background.png into res/mipmap-*/ or drawable folders.
Place ic_launcher.xml into res/mipmap-anydpi-v26/ic_launcher.xml
In AndroidManifest or project settings, reference @mipmap/ic_launcher as your adaptive icon.
";

/// Paths and color produced by `generate_android_adaptive`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdaptiveIconSet {
    /// The foreground layer PNG.
    pub foreground: PathBuf,
    /// The background layer PNG.
    pub background: PathBuf,
    /// The `ic_launcher.xml` descriptor.
    pub descriptor: PathBuf,
    /// The usage note.
    pub readme: PathBuf,
    /// Fill color of the background layer.
    pub background_color: Rgb<u8>,
}

/// Writes the adaptive icon layers, descriptor and usage note to
/// `<out_root>/android_adaptive`.
pub fn generate_android_adaptive(
    source: &SourceImage,
    out_root: &Path,
) -> Result<AdaptiveIconSet, IconError> {
    let dir = out_root.join(ANDROID_DIR);
    fs::create_dir_all(&dir).map_err(|err| IconError::io(&dir, err))?;

    let foreground = dir.join(FOREGROUND_FILE);
    save_png(&source.resized(ANDROID_LAYER_SIZE), &foreground)?;

    let color = background_color(source);
    log::debug!("sampled background color {:?}", color.0);
    let background = dir.join(BACKGROUND_FILE);
    save_png(&solid_fill(ANDROID_LAYER_SIZE, color), &background)?;

    let descriptor_dir = dir.join(DESCRIPTOR_DIR);
    fs::create_dir_all(&descriptor_dir).map_err(|err| IconError::io(&descriptor_dir, err))?;
    let descriptor = descriptor_dir.join(DESCRIPTOR_FILE);
    write_text(&descriptor, ADAPTIVE_ICON_XML)?;

    let readme = dir.join(README_FILE);
    write_text(&readme, README_TEXT)?;

    log::info!("wrote adaptive icon set to {}", dir.display());
    Ok(AdaptiveIconSet {
        foreground,
        background,
        descriptor,
        readme,
        background_color: color,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), IconError> {
    fs::write(path, contents).map_err(|err| IconError::io(path, err))?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
