// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! Exchanging the content of equally sized blocks.
use glitch_raster::{RasterBuffer, RasterError, Region};
use rand::Rng;

use crate::sampling::{random_disjoint_pair, RegionScale};

/// Exchange the pixels of two regions of the same size.
///
/// Both blocks are read completely before either is written. For disjoint regions this is an
/// exact swap. Overlapping regions are still well-defined: the content of `b` is written to `a`
/// first, then the content of `a` to `b`, so pixels in the intersection end up with the content of
/// `a`.
pub fn swap_regions(raster: &mut RasterBuffer, a: Region, b: Region) -> Result<(), RasterError> {
    if (a.w, a.h) != (b.w, b.h) {
        return Err(RasterError::RegionSizeMismatch {
            first: (a.w, a.h),
            second: (b.w, b.h),
        });
    }

    raster.check_region(a)?;
    raster.check_region(b)?;

    let block_a = raster.read_region(a)?;
    let block_b = raster.read_region(b)?;
    raster.write_region(a, &block_b)?;
    raster.write_region(b, &block_a)?;
    Ok(())
}

/// Swap `count` random pairs of blocks.
///
/// The two blocks of each pair share their randomly drawn size and never overlap, which makes
/// every iteration a permutation of the image pixels.
pub fn shuffle_areas<R: Rng + ?Sized>(
    raster: &mut RasterBuffer,
    rng: &mut R,
    scale: RegionScale,
    count: u32,
) -> Result<(), RasterError> {
    raster.ensure_loaded()?;

    let (width, height) = raster.dimensions();
    for _ in 0..count {
        let (a, b) = random_disjoint_pair(rng, scale, width, height);
        log::trace!("swap {:?} with {:?}", a, b);
        swap_regions(raster, a, b)?;
    }

    log::debug!("area shuffle: count={}", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn indexed(width: u32, height: u32) -> RasterBuffer {
        let mut raster = RasterBuffer::new(width, height).unwrap();
        let image: Vec<u8> = (0..(width * height) as u8)
            .flat_map(|i| [i, 0, 0, 0xff])
            .collect();
        raster.load_base_image(width, height, &image).unwrap();
        raster
    }

    fn reds(raster: &RasterBuffer) -> Vec<u8> {
        raster.pixels().unwrap().iter().map(|px| px[0]).collect()
    }

    #[test]
    fn disjoint_swap() {
        let mut raster = indexed(4, 2);
        swap_regions(&mut raster, Region::new(0, 0, 2, 2), Region::new(2, 0, 2, 2)).unwrap();
        assert_eq!(reds(&raster), [2, 3, 0, 1, 6, 7, 4, 5]);
    }

    #[test]
    fn overlapping_swap_is_staged() {
        // A 3x1 strip, blocks [0, 1] and [1, 2].
        let mut raster = indexed(3, 1);
        swap_regions(&mut raster, Region::new(0, 0, 2, 1), Region::new(1, 0, 2, 1)).unwrap();
        // `a` receives [1, 2], then `b` receives the original [0, 1].
        assert_eq!(reds(&raster), [1, 0, 1]);
    }

    #[test]
    fn identical_regions() {
        let mut raster = indexed(3, 3);
        let region = Region::new(1, 1, 2, 2);
        swap_regions(&mut raster, region, region).unwrap();
        assert_eq!(reds(&raster), (0..9).collect::<Vec<u8>>());
    }

    #[test]
    fn rejected_swaps_leave_raster() {
        let mut raster = indexed(3, 3);
        let err = swap_regions(&mut raster, Region::new(0, 0, 2, 1), Region::new(0, 1, 1, 2));
        assert_eq!(
            err,
            Err(RasterError::RegionSizeMismatch {
                first: (2, 1),
                second: (1, 2)
            })
        );

        let err = swap_regions(&mut raster, Region::new(0, 0, 2, 2), Region::new(2, 2, 2, 2));
        assert!(matches!(err, Err(RasterError::RegionOutOfBounds { .. })));
        assert_eq!(reds(&raster), (0..9).collect::<Vec<u8>>());
    }
}
