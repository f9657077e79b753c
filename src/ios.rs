//! Generation of Xcode `AppIcon.appiconset` bundles.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{self, SizeSpec, MARKETING, MARKETING_FILENAME, MARKETING_SIZE};
use crate::error::IconError;
use crate::pngio::save_png;
use crate::source::SourceImage;

/// Name of the bundle directory created under the output root.
pub const APPICONSET_DIR: &str = "AppIcon.appiconset";

/// Name of the manifest file inside the bundle.
pub const MANIFEST_FILE: &str = "Contents.json";

/// Idiom used for every device slot.
pub const IDIOM_UNIVERSAL: &str = "universal";

/// Idiom used for the App Store icon.
pub const IDIOM_MARKETING: &str = "ios-marketing";

/// The `Contents.json` document of an icon set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Manifest {
    /// One entry per written PNG, in generation order.
    pub images: Vec<ManifestEntry>,
    /// Fixed bundle metadata.
    pub info: ManifestInfo,
}

/// One image of an icon set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ManifestEntry {
    /// Logical size, e.g. `"83.5x83.5"`.
    pub size: String,
    /// Usage context, e.g. `"universal"`.
    pub idiom: String,
    /// PNG file name relative to the bundle.
    pub filename: String,
    /// Scale factor, e.g. `"2x"`.
    pub scale: String,
}

/// The `info` block Xcode expects in every asset catalog manifest.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ManifestInfo {
    /// Manifest format version.
    pub version: u32,
    /// Tool that authored the manifest.
    pub author: String,
}

impl Default for ManifestInfo {
    fn default() -> ManifestInfo {
        ManifestInfo {
            version: 1,
            author: "xcode".to_string(),
        }
    }
}

impl ManifestEntry {
    fn new(spec: SizeSpec, idiom: &str, filename: String) -> ManifestEntry {
        ManifestEntry {
            size: spec.manifest_size(),
            idiom: idiom.to_string(),
            filename,
            scale: spec.manifest_scale(),
        }
    }
}

impl Manifest {
    /// Creates a manifest with no images.
    pub fn new() -> Manifest {
        Manifest {
            images: Vec::new(),
            info: ManifestInfo::default(),
        }
    }

    /// Serializes the manifest as two-space indented JSON with a trailing
    /// newline.
    pub fn to_json(&self) -> Result<Vec<u8>, IconError> {
        let mut json = serde_json::to_vec_pretty(self)?;
        json.push(b'\n');
        Ok(json)
    }

    /// Writes the manifest to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), IconError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|err| IconError::io(path, err))
    }
}

impl Default for Manifest {
    fn default() -> Manifest {
        Manifest::new()
    }
}

/// Writes a complete icon set to `<out_root>/AppIcon.appiconset`: one PNG
/// per catalog slot, the App Store icon, and `Contents.json`.  Returns the
/// manifest that was written.
pub fn generate_ios_icons(source: &SourceImage, out_root: &Path) -> Result<Manifest, IconError> {
    let bundle = out_root.join(APPICONSET_DIR);
    fs::create_dir_all(&bundle).map_err(|err| IconError::io(&bundle, err))?;

    let mut manifest = Manifest::new();
    for spec in catalog::ios_slots() {
        let filename = spec.filename();
        save_png(&source.resized(spec.pixel_size()), &bundle.join(&filename))?;
        manifest
            .images
            .push(ManifestEntry::new(spec, IDIOM_UNIVERSAL, filename));
    }

    let filename = MARKETING_FILENAME.to_string();
    save_png(&source.resized(MARKETING_SIZE), &bundle.join(&filename))?;
    manifest
        .images
        .push(ManifestEntry::new(MARKETING, IDIOM_MARKETING, filename));

    let manifest_path = manifest_path(out_root);
    manifest.save(&manifest_path)?;

    log::info!(
        "wrote {} icons and {}",
        manifest.images.len(),
        manifest_path.display()
    );
    Ok(manifest)
}

/// Returns the path of `Contents.json` for an output root.
pub fn manifest_path(out_root: &Path) -> PathBuf {
    out_root.join(APPICONSET_DIR).join(MANIFEST_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(size: &str, idiom: &str, filename: &str, scale: &str) -> ManifestEntry {
        ManifestEntry {
            size: size.to_string(),
            idiom: idiom.to_string(),
            filename: filename.to_string(),
            scale: scale.to_string(),
        }
    }

    #[test]
    fn empty_manifest_json() {
        let json = Manifest::new().to_json().expect("serialize failed");
        assert_eq!(
            String::from_utf8(json).unwrap(),
            concat!(
                "{\n",
                "  \"images\": [],\n",
                "  \"info\": {\n",
                "    \"version\": 1,\n",
                "    \"author\": \"xcode\"\n",
                "  }\n",
                "}\n"
            )
        );
    }

    #[test]
    fn manifest_write_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = manifest_path(dir.path());
        // A directory where Contents.json should go makes the write fail.
        fs::create_dir_all(&path).unwrap();
        let source = SourceImage::from_rgba(image::RgbaImage::new(8, 8));
        match generate_ios_icons(&source, dir.path()) {
            Err(IconError::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn entry_keys_keep_order() {
        let manifest = Manifest {
            images: vec![entry("83.5x83.5", "universal", "AppIcon-835pt@2x.png", "2x")],
            info: ManifestInfo::default(),
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(
            json,
            "{\"images\":[{\"size\":\"83.5x83.5\",\"idiom\":\"universal\",\
             \"filename\":\"AppIcon-835pt@2x.png\",\"scale\":\"2x\"}],\
             \"info\":{\"version\":1,\"author\":\"xcode\"}}"
        );
    }

    #[test]
    fn entries_from_specs() {
        let spec = SizeSpec::from_tenths(600, 3);
        assert_eq!(
            ManifestEntry::new(spec, IDIOM_UNIVERSAL, spec.filename()),
            entry("60x60", "universal", "AppIcon-600pt@3x.png", "3x")
        );
        assert_eq!(
            ManifestEntry::new(MARKETING, IDIOM_MARKETING, MARKETING_FILENAME.to_string()),
            entry("1024x1024", "ios-marketing", "AppIcon-1024pt@1x.png", "1x")
        );
    }
}
