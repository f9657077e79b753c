//! The fixed table of iOS icon slots and the naming rules derived from it.

use std::fmt;

/// One iOS icon slot: a logical point size rendered at a display scale.
///
/// Point sizes are stored in tenths of a point so that the half-point slot
/// (83.5pt) needs no floating point anywhere.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SizeSpec {
    tenths: u32,
    scale: u32,
}

/// The device icon slots of an `AppIcon.appiconset`, grouped by logical
/// point size (in tenths of a point) with the scales each size supports.
const IOS_SIZES: &[(u32, &[u32])] = &[
    (200, &[1, 2, 3]), // notifications
    (290, &[1, 2, 3]), // settings
    (400, &[1, 2, 3]), // spotlight
    (600, &[2, 3]),    // iPhone app
    (760, &[1, 2]),    // iPad app
    (835, &[2]),       // iPad Pro app
];

/// The App Store icon, which lives outside the device slots.
pub const MARKETING: SizeSpec = SizeSpec::from_tenths(10240, 1);

/// Pixel size of the App Store icon.
pub const MARKETING_SIZE: u32 = 1024;

/// File name of the App Store icon.
pub const MARKETING_FILENAME: &str = "AppIcon-1024pt@1x.png";

impl SizeSpec {
    /// Creates a size spec for `tenths` tenths of a point at `scale`x.
    pub const fn from_tenths(tenths: u32, scale: u32) -> SizeSpec {
        SizeSpec { tenths, scale }
    }

    /// Returns the logical size in tenths of a point.
    ///
    /// # Examples
    /// ```
    /// use appicons::SizeSpec;
    /// assert_eq!(SizeSpec::from_tenths(835, 2).tenths(), 835);
    /// ```
    pub fn tenths(self) -> u32 {
        self.tenths
    }

    /// Returns the display scale factor (1, 2 or 3).
    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Returns the edge length in pixels: the point size times the scale,
    /// rounded half up.
    ///
    /// # Examples
    /// ```
    /// use appicons::SizeSpec;
    /// assert_eq!(SizeSpec::from_tenths(200, 3).pixel_size(), 60);
    /// assert_eq!(SizeSpec::from_tenths(835, 2).pixel_size(), 167);
    /// assert_eq!(SizeSpec::from_tenths(835, 1).pixel_size(), 84);
    /// ```
    pub fn pixel_size(self) -> u32 {
        (self.tenths * self.scale + 5) / 10
    }

    /// Returns the PNG file name for this slot, e.g. `AppIcon-835pt@2x.png`.
    pub fn filename(self) -> String {
        format!("AppIcon-{}pt@{}x.png", self.tenths, self.scale)
    }

    /// Returns the manifest `size` value, e.g. `"20x20"` or `"83.5x83.5"`.
    pub fn manifest_size(self) -> String {
        let points = Points(self.tenths);
        format!("{}x{}", points, points)
    }

    /// Returns the manifest `scale` value, e.g. `"2x"`.
    pub fn manifest_scale(self) -> String {
        format!("{}x", self.scale)
    }
}

/// Returns every device slot in catalog order.
///
/// # Examples
/// ```
/// let slots = appicons::catalog::ios_slots();
/// assert_eq!(slots.len(), 14);
/// assert_eq!(slots[0].filename(), "AppIcon-200pt@1x.png");
/// ```
pub fn ios_slots() -> Vec<SizeSpec> {
    IOS_SIZES
        .iter()
        .flat_map(|&(tenths, scales)| {
            scales
                .iter()
                .map(move |&scale| SizeSpec::from_tenths(tenths, scale))
        })
        .collect()
}

/// A point size in tenths, printed without a decimal when it is whole.
struct Points(u32);

impl fmt::Display for Points {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let Points(tenths) = *self;
        if tenths % 10 == 0 {
            write!(out, "{}", tenths / 10)
        } else {
            write!(out, "{}.{}", tenths / 10, tenths % 10)
        }
    }
}
