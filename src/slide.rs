// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! Sliding the content of rectangular regions.
//!
//! A slide shifts every pixel of a region along one axis. Pixels pushed over one edge of the region
//! re-enter at the opposite edge of the same region, so the pixels outside the region are never
//! touched and no pixel is created or lost.
use glitch_raster::{RasterBuffer, RasterError, Region};
use rand::Rng;

use crate::sampling::{random_region, RegionScale};

/// The direction along which a region is slid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Pixels move within their row, positive offsets to the right.
    Horizontal,
    /// Pixels move within their column, positive offsets downwards.
    Vertical,
}

/// Shift the pixels of `region` by `offset`, wrapping around within the region.
pub fn slide_region(
    raster: &mut RasterBuffer,
    region: Region,
    axis: Axis,
    offset: i64,
) -> Result<(), RasterError> {
    raster.check_region(region)?;
    raster.ensure_loaded()?;
    if region.is_empty() {
        return Ok(());
    }

    match axis {
        Axis::Horizontal => {
            let shift = offset.rem_euclid(i64::from(region.w)) as usize;
            if shift == 0 {
                return Ok(());
            }

            for y in region.rows() {
                // Region was checked, the row exists and contains the columns.
                if let Some(row) = raster.row_mut(y) {
                    row[region.x as usize..][..region.w as usize].rotate_right(shift);
                }
            }
        }
        Axis::Vertical => {
            let shift = offset.rem_euclid(i64::from(region.h)) as usize;
            if shift == 0 {
                return Ok(());
            }

            // The block is row-major, rotating by whole rows shifts every column at once.
            let mut block = raster.read_region(region)?;
            block.rotate_right(shift * region.w as usize);
            raster.write_region(region, &block)?;
        }
    }

    Ok(())
}

/// Slide `count` random regions by up to `max_slide` pixels each.
///
/// Every iteration draws a region, an axis and a signed offset of magnitude at most `max_slide`,
/// and applies the slide to the current working copy. Nothing is drawn if either `count` or
/// `max_slide` is zero.
pub fn slide_areas<R: Rng + ?Sized>(
    raster: &mut RasterBuffer,
    rng: &mut R,
    scale: RegionScale,
    count: u32,
    max_slide: u32,
) -> Result<(), RasterError> {
    raster.ensure_loaded()?;
    if count == 0 || max_slide == 0 {
        return Ok(());
    }

    let (width, height) = raster.dimensions();
    for _ in 0..count {
        let region = random_region(rng, scale, width, height);
        let axis = if rng.gen::<bool>() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let magnitude = i64::from(rng.gen_range(0..=max_slide));
        let offset = if rng.gen::<bool>() { -magnitude } else { magnitude };

        log::trace!("slide {:?} along {:?} by {}", region, axis, offset);
        slide_region(raster, region, axis, offset)?;
    }

    log::debug!("rect slide: count={} max_slide={}", count, max_slide);
    Ok(())
}
