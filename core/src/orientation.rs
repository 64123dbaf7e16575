//! Resolution-based orientation classification.
//!
//! Spotlight ships lock-screen art in exactly two sizes, one per screen
//! orientation. Classification is an exact match against those two sizes;
//! anything else (thumbnails, app tiles, odd promotional assets) is not a
//! wallpaper and is not classified.

/// Pixel size routed to the horizontal directory.
///
/// Portrait captures land in the directory named `horizontal`; the mapping
/// is kept as-is for compatibility with archives produced by earlier
/// versions of this tool.
pub const HORIZONTAL_RESOLUTION: (u32, u32) = (1080, 1920);

/// Pixel size routed to the vertical directory.
pub const VERTICAL_RESOLUTION: (u32, u32) = (1920, 1080);

/// Destination bucket for a classified wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Maps exact pixel dimensions to a destination bucket.
///
/// Returns `None` for any size that is not one of the two Spotlight
/// wallpaper resolutions.
pub fn classify_dimensions(width: u32, height: u32) -> Option<Orientation> {
    if (width, height) == HORIZONTAL_RESOLUTION {
        Some(Orientation::Horizontal)
    } else if (width, height) == VERTICAL_RESOLUTION {
        Some(Orientation::Vertical)
    } else {
        None
    }
}
