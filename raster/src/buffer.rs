// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::pixel::{self, Rgba, BYTES_PER_PIXEL};
use crate::{RasterError, Region};

/// A fixed-size RGBA8 raster with a base snapshot and a working copy.
///
/// Both copies store pixels row-major and without holes, so the byte length is always exactly
/// `width * height * 4`. The dimensions are chosen once at construction and never change.
///
/// The base snapshot is only written by [`RasterBuffer::load_base_image`]. The working copy is
/// produced by copying the base, either on load or on [`RasterBuffer::reset_image`], and is
/// otherwise only modified in place. Until an image has been loaded there is nothing to read and
/// accessing the working copy fails with [`RasterError::NotLoaded`].
///
/// All fallible methods check their preconditions before modifying any pixel. An error leaves
/// the raster exactly as it was before the call.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    base: Vec<Rgba>,
    working: Vec<Rgba>,
    loaded: bool,
}

impl RasterBuffer {
    /// Allocate a zero-filled raster.
    ///
    /// # Panics
    /// When allocation of memory fails.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let len = Self::pixel_len(width, height)?;
        Ok(RasterBuffer {
            width,
            height,
            base: vec![[0; 4]; len],
            working: vec![[0; 4]; len],
            loaded: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The number of pixels in either copy.
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Always `false`, a raster has at least one pixel.
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// The number of bytes in either copy.
    pub fn byte_len(&self) -> usize {
        self.working.len() * BYTES_PER_PIXEL
    }

    /// Check if a base image has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replace the base snapshot, and the working copy, with a new image.
    ///
    /// The image must have the same dimensions as the raster and consist of exactly
    /// `width * height * 4` bytes of RGBA8 data.
    pub fn load_base_image(
        &mut self,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<(), RasterError> {
        if (width, height) != self.dimensions() {
            return Err(RasterError::DimensionMismatch {
                expected: self.dimensions(),
                found: (width, height),
            });
        }

        let pixels = match pixel::as_pixels(data) {
            Some(pixels) if pixels.len() == self.base.len() => pixels,
            _ => {
                return Err(RasterError::BufferLengthMismatch {
                    expected: self.byte_len(),
                    found: data.len(),
                })
            }
        };

        self.base.copy_from_slice(pixels);
        self.working.copy_from_slice(pixels);
        self.loaded = true;
        Ok(())
    }

    /// Restore the working copy from the base snapshot.
    pub fn reset_image(&mut self) -> Result<(), RasterError> {
        self.ensure_loaded()?;
        self.working.copy_from_slice(&self.base);
        Ok(())
    }

    /// The bytes of the working copy.
    pub fn pixel_data(&self) -> Result<&[u8], RasterError> {
        self.pixels().map(pixel::as_bytes)
    }

    /// The bytes of the base snapshot.
    pub fn base_data(&self) -> Result<&[u8], RasterError> {
        self.ensure_loaded()?;
        Ok(pixel::as_bytes(&self.base))
    }

    /// The pixels of the working copy, row-major.
    pub fn pixels(&self) -> Result<&[Rgba], RasterError> {
        self.ensure_loaded()?;
        Ok(&self.working)
    }

    /// The mutable pixels of the working copy, row-major.
    pub fn pixels_mut(&mut self) -> Result<&mut [Rgba], RasterError> {
        self.ensure_loaded()?;
        Ok(&mut self.working)
    }

    /// One row of the working copy.
    ///
    /// Returns `None` if the row is out of bounds or no image has been loaded.
    pub fn row(&self, y: u32) -> Option<&[Rgba]> {
        let range = self.row_range(y)?;
        self.pixels().ok()?.get(range)
    }

    /// One mutable row of the working copy.
    ///
    /// Returns `None` if the row is out of bounds or no image has been loaded.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [Rgba]> {
        let range = self.row_range(y)?;
        self.pixels_mut().ok()?.get_mut(range)
    }

    /// Copy the pixels of a region out of the working copy, row by row.
    pub fn read_region(&self, region: Region) -> Result<Vec<Rgba>, RasterError> {
        self.check_region(region)?;
        let pixels = self.pixels()?;
        let width = self.width as usize;

        let mut block = Vec::with_capacity(region.area() as usize);
        for y in region.rows() {
            let start = y as usize * width + region.x as usize;
            block.extend_from_slice(&pixels[start..][..region.w as usize]);
        }

        Ok(block)
    }

    /// Overwrite the pixels of a region in the working copy, row by row.
    ///
    /// The block must hold exactly as many pixels as the region covers, laid out as returned by
    /// [`RasterBuffer::read_region`].
    pub fn write_region(&mut self, region: Region, block: &[Rgba]) -> Result<(), RasterError> {
        self.check_region(region)?;
        if block.len() as u64 != region.area() {
            return Err(RasterError::BufferLengthMismatch {
                expected: region.area() as usize * BYTES_PER_PIXEL,
                found: block.len() * BYTES_PER_PIXEL,
            });
        }

        let width = self.width as usize;
        let pixels = self.pixels_mut()?;
        if region.is_empty() {
            return Ok(());
        }

        for (y, line) in region.rows().zip(block.chunks_exact(region.w as usize)) {
            let start = y as usize * width + region.x as usize;
            pixels[start..][..line.len()].copy_from_slice(line);
        }

        Ok(())
    }

    /// Validate that a region lies within this raster.
    pub fn check_region(&self, region: Region) -> Result<(), RasterError> {
        if region.fits_within(self.width, self.height) {
            Ok(())
        } else {
            Err(RasterError::RegionOutOfBounds {
                region,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Fail with [`RasterError::NotLoaded`] unless a base image has been loaded.
    pub fn ensure_loaded(&self) -> Result<(), RasterError> {
        if self.loaded {
            Ok(())
        } else {
            Err(RasterError::NotLoaded)
        }
    }

    fn row_range(&self, y: u32) -> Option<core::ops::Range<usize>> {
        if y >= self.height {
            return None;
        }

        let width = self.width as usize;
        let start = y as usize * width;
        Some(start..start + width)
    }

    fn pixel_len(width: u32, height: u32) -> Result<usize, RasterError> {
        let invalid = RasterError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }

        // The byte length must be addressable, not only the pixel count.
        let len = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(invalid)?;
        len.checked_mul(BYTES_PER_PIXEL).ok_or(invalid)?;
        Ok(len)
    }
}

impl fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("loaded", &self.loaded)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_filled_on_construction() {
        let raster = RasterBuffer::new(3, 2).unwrap();
        assert_eq!(raster.len(), 6);
        assert_eq!(raster.byte_len(), 24);
        assert!(!raster.is_loaded());
        assert!(raster.base.iter().chain(&raster.working).all(|p| *p == [0; 4]));
    }

    #[test]
    fn region_copy() {
        let mut raster = RasterBuffer::new(3, 3).unwrap();
        let image: Vec<u8> = (0..9u8).flat_map(|i| [i, i, i, 0xff]).collect();
        raster.load_base_image(3, 3, &image).unwrap();

        let region = Region::new(1, 1, 2, 2);
        let block = raster.read_region(region).unwrap();
        let values: Vec<u8> = block.iter().map(|p| p[0]).collect();
        assert_eq!(values, [4, 5, 7, 8]);

        raster.write_region(Region::new(0, 0, 2, 2), &block).unwrap();
        assert_eq!(raster.row(0).unwrap()[..2], [[4, 4, 4, 0xff], [5, 5, 5, 0xff]]);
        assert_eq!(raster.row(1).unwrap()[..2], [[7, 7, 7, 0xff], [8, 8, 8, 0xff]]);
        assert!(raster.row(3).is_none());
    }

    #[test]
    fn rejected_region_write() {
        let mut raster = RasterBuffer::new(2, 2).unwrap();
        raster.load_base_image(2, 2, &[7; 16]).unwrap();

        let err = raster.write_region(Region::new(1, 1, 2, 1), &[[0; 4]; 2]);
        assert!(matches!(err, Err(RasterError::RegionOutOfBounds { .. })));

        let err = raster.write_region(Region::new(0, 0, 2, 1), &[[0; 4]; 3]);
        assert_eq!(
            err,
            Err(RasterError::BufferLengthMismatch {
                expected: 8,
                found: 12
            })
        );

        assert_eq!(raster.pixel_data().unwrap(), &[7; 16]);
    }
}
