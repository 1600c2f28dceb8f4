// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! The pixel representation shared by all transformations.
//!
//! Pixels are plain `[u8; 4]` arrays in `r, g, b, a` order. Since that type has an alignment of one
//! and no padding, any RGBA8 byte buffer can be viewed as a slice of pixels without copying.

/// A single RGBA8 pixel.
pub type Rgba = [u8; 4];

/// The number of bytes of a single pixel.
pub const BYTES_PER_PIXEL: usize = core::mem::size_of::<Rgba>();

/// Weighted brightness of a pixel, `round(0.299r + 0.587g + 0.114b)`.
///
/// The weights are applied in fixed point with thousandths, so the result rounds half up and is
/// identical on all targets. Alpha does not contribute.
///
/// ```
/// use glitch_raster::luminance;
///
/// assert_eq!(luminance([0xff, 0xff, 0xff, 0x00]), 0xff);
/// assert_eq!(luminance([0xff, 0x00, 0x00, 0xff]), 76);
/// assert_eq!(luminance([0x32, 0x32, 0x32, 0xff]), 0x32);
/// ```
#[inline]
pub fn luminance([r, g, b, _]: Rgba) -> u8 {
    let weighted = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    // At most 255_000 + 500, which divides to 255.
    ((weighted + 500) / 1000) as u8
}

/// View a byte buffer as pixels.
///
/// Returns `None` if the length is not a multiple of four bytes.
pub fn as_pixels(bytes: &[u8]) -> Option<&[Rgba]> {
    bytemuck::try_cast_slice(bytes).ok()
}

/// View a mutable byte buffer as pixels.
///
/// Returns `None` if the length is not a multiple of four bytes.
pub fn as_pixels_mut(bytes: &mut [u8]) -> Option<&mut [Rgba]> {
    bytemuck::try_cast_slice_mut(bytes).ok()
}

/// View pixels as their bytes.
pub fn as_bytes(pixels: &[Rgba]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}
