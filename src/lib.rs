//! Library for turning one source image into mobile app icon assets.
//!
//! A run produces two directories under an output root:
//!
//! - `AppIcon.appiconset/`: a PNG for every iOS icon slot plus the App Store
//!   icon, described by a `Contents.json` manifest that Xcode can import.
//! - `android_adaptive/`: the foreground and background layers of an Android
//!   adaptive icon, an `ic_launcher.xml` descriptor and a short usage note.
//!
//! The source may be any PNG or JPEG; it is converted to RGBA before
//! resizing.  Running twice over the same output root overwrites the same
//! files.

#![warn(missing_docs)]

use image::Rgb;
use std::path::{Path, PathBuf};

pub mod android;
pub mod catalog;
pub mod color;
mod error;
pub mod ios;
mod pngio;
mod source;

pub use android::{generate_android_adaptive, AdaptiveIconSet};
pub use catalog::SizeSpec;
pub use color::background_color;
pub use error::IconError;
pub use ios::{generate_ios_icons, Manifest, ManifestEntry};
pub use pngio::{save_png, write_png};
pub use source::{solid_fill, SourceImage};

/// Output root used when none is given.
pub const DEFAULT_OUT_DIR: &str = "./output_icons";

/// Settings for a generation run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Options {
    /// The source image to convert.
    pub source: PathBuf,
    /// Root directory for everything the run writes.
    pub out_dir: PathBuf,
    /// Accepted for compatibility; does not change the output.
    pub force_bg: bool,
}

impl Options {
    /// Creates options for `source` with the default output root.
    pub fn new<P: Into<PathBuf>>(source: P) -> Options {
        Options {
            source: source.into(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            force_bg: false,
        }
    }
}

/// What a successful run produced.
#[derive(Clone, Debug)]
pub struct Report {
    /// The iOS manifest as written to disk.
    pub manifest: Manifest,
    /// Path of the written `Contents.json`.
    pub manifest_path: PathBuf,
    /// The Android adaptive icon outputs.
    pub android: AdaptiveIconSet,
}

impl Report {
    /// Returns the number of iOS PNGs written, including the App Store icon.
    pub fn ios_icon_count(&self) -> usize {
        self.manifest.images.len()
    }

    /// Returns the fill color of the Android background layer.
    pub fn background_color(&self) -> Rgb<u8> {
        self.android.background_color
    }
}

/// Checks that `path` names an existing regular file.
pub fn validate_source(path: &Path) -> Result<(), IconError> {
    let metadata = match path.metadata() {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(IconError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(IconError::io(path, err)),
    };
    if !metadata.is_file() {
        return Err(IconError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// A step of a run, reported to the progress callback of
/// `run_with_progress`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage<'a> {
    /// The iOS icon set is about to be written to this directory.
    IosStarted(&'a Path),
    /// The iOS icon set is complete; this many PNGs were written.
    IosFinished(usize),
    /// The Android adaptive icons are about to be written to this directory.
    AndroidStarted(&'a Path),
    /// The Android adaptive icons are complete.
    AndroidFinished,
}

/// Validates and loads the source image, then writes the iOS icon set
/// followed by the Android adaptive icons.
///
/// Nothing is created under the output root until the source has been
/// validated and decoded.  The first failure aborts the run, possibly
/// leaving a partially written output directory behind.
pub fn run(options: &Options) -> Result<Report, IconError> {
    run_with_progress(options, |_| {})
}

/// Like `run`, calling `progress` before and after each platform.
pub fn run_with_progress<F>(options: &Options, mut progress: F) -> Result<Report, IconError>
where
    F: FnMut(Stage<'_>),
{
    validate_source(&options.source)?;
    let source = SourceImage::open(&options.source)?;
    log::info!(
        "loaded {} ({}x{})",
        options.source.display(),
        source.width(),
        source.height()
    );
    if options.force_bg {
        log::debug!("--force-bg given; the background layer is always opaque");
    }

    let out_dir = options.out_dir.as_path();
    std::fs::create_dir_all(out_dir).map_err(|err| IconError::io(out_dir, err))?;

    let bundle = out_dir.join(ios::APPICONSET_DIR);
    progress(Stage::IosStarted(&bundle));
    let manifest = generate_ios_icons(&source, out_dir)?;
    progress(Stage::IosFinished(manifest.images.len()));

    let android_dir = out_dir.join(android::ANDROID_DIR);
    progress(Stage::AndroidStarted(&android_dir));
    let android = generate_android_adaptive(&source, out_dir)?;
    progress(Stage::AndroidFinished);

    Ok(Report {
        manifest,
        manifest_path: ios::manifest_path(out_dir),
        android,
    })
}
