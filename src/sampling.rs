// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! Drawing random regions from an explicit random source.
//!
//! All draws go through `u32` ranges so that the consumed random stream, and thus every result for
//! a given seed, is the same on 32-bit and 64-bit targets.
use glitch_raster::Region;
use rand::Rng;

/// Bounds for the extent of randomly drawn regions, relative to the image.
///
/// Each extent is drawn uniformly between `min` and `max` times the image dimension along the
/// same axis, rounded down and clamped so that the region has at least one pixel and fits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionScale {
    min: f32,
    max: f32,
}

impl RegionScale {
    /// Regions spanning between 5% and 70% of the image along each axis.
    pub const DEFAULT: Self = RegionScale { min: 0.05, max: 0.7 };

    /// Create a scale from fractions of the image dimensions.
    ///
    /// Returns `None` unless `0 < min <= max <= 1`.
    pub fn new(min: f32, max: f32) -> Option<Self> {
        if min > 0.0 && min <= max && max <= 1.0 {
            Some(RegionScale { min, max })
        } else {
            None
        }
    }

    pub fn min(self) -> f32 {
        self.min
    }

    pub fn max(self) -> f32 {
        self.max
    }

    /// Draw an extent in `1..=dim` for a non-zero dimension.
    pub(crate) fn extent<R: Rng + ?Sized>(self, rng: &mut R, dim: u32) -> u32 {
        let fraction = self.min + rng.gen::<f32>() * (self.max - self.min);
        let extent = libm::floorf(fraction * dim as f32) as u32;
        extent.clamp(1, dim.max(1))
    }
}

impl Default for RegionScale {
    fn default() -> Self {
        RegionScale::DEFAULT
    }
}

/// Draw a non-empty region that lies entirely within a `width` by `height` image.
///
/// Both dimensions must be non-zero.
pub fn random_region<R: Rng + ?Sized>(
    rng: &mut R,
    scale: RegionScale,
    width: u32,
    height: u32,
) -> Region {
    debug_assert!(width > 0 && height > 0, "Drawing from an empty image");
    let w = scale.extent(rng, width);
    let h = scale.extent(rng, height);
    let x = rng.gen_range(0..=width - w);
    let y = rng.gen_range(0..=height - h);
    Region::new(x, y, w, h)
}

/// Draw two equally sized regions that do not share any pixel.
///
/// The pair is separated along a randomly chosen axis on which the image has at least two pixels,
/// the extent on that axis being capped at half the image. Along that axis every disjoint placement
/// is equally likely, across it both positions are drawn independently. A single pixel image has no disjoint pair and both regions are that pixel.
pub fn random_disjoint_pair<R: Rng + ?Sized>(
    rng: &mut R,
    scale: RegionScale,
    width: u32,
    height: u32,
) -> (Region, Region) {
    debug_assert!(width > 0 && height > 0, "Drawing from an empty image");
    let split_columns = match (width >= 2, height >= 2) {
        (true, true) => rng.gen::<bool>(),
        (true, false) => true,
        (false, true) => false,
        (false, false) => {
            let pixel = Region::new(0, 0, 1, 1);
            return (pixel, pixel);
        }
    };

    let (split_dim, other_dim) = if split_columns {
        (width, height)
    } else {
        (height, width)
    };

    let span = scale.extent(rng, split_dim).min(split_dim / 2);
    let extent = scale.extent(rng, other_dim);

    // Disjoint placements `first + span <= second` correspond one to one to pairs of distinct
    // values in `0..=slack + 1`, so drawing such a pair is uniform over all placements.
    let slack = split_dim - 2 * span;
    let lower = rng.gen_range(0..=slack + 1);
    let mut upper = rng.gen_range(0..=slack);
    if upper >= lower {
        upper += 1;
    }
    let first = lower.min(upper);
    let second = lower.max(upper) - 1 + span;
    let (p, q) = if rng.gen::<bool>() {
        (first, second)
    } else {
        (second, first)
    };

    let s = rng.gen_range(0..=other_dim - extent);
    let t = rng.gen_range(0..=other_dim - extent);

    if split_columns {
        (Region::new(p, s, span, extent), Region::new(q, t, span, extent))
    } else {
        (Region::new(s, p, extent, span), Region::new(t, q, extent, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn scale_validation() {
        assert!(RegionScale::new(0.05, 0.7).is_some());
        assert!(RegionScale::new(1.0, 1.0).is_some());
        assert!(RegionScale::new(0.0, 0.5).is_none());
        assert!(RegionScale::new(0.6, 0.5).is_none());
        assert!(RegionScale::new(0.5, 1.5).is_none());
        assert!(RegionScale::new(f32::NAN, 0.5).is_none());
    }

    #[test]
    fn regions_fit() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for (width, height) in [(1, 1), (1, 9), (9, 1), (17, 5), (64, 64)] {
            for _ in 0..200 {
                let region = random_region(&mut rng, RegionScale::DEFAULT, width, height);
                assert!(!region.is_empty(), "{:?}", region);
                assert!(region.fits_within(width, height), "{:?}", region);
            }
        }
    }

    #[test]
    fn full_scale_covers_image() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let scale = RegionScale::new(1.0, 1.0).unwrap();
        let region = random_region(&mut rng, scale, 13, 4);
        assert_eq!(region, Region::full(13, 4));
    }

    #[test]
    fn pairs_are_disjoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for (width, height) in [(2, 1), (1, 2), (2, 2), (3, 7), (31, 2), (64, 48)] {
            for _ in 0..200 {
                let (a, b) = random_disjoint_pair(&mut rng, RegionScale::DEFAULT, width, height);
                assert_eq!((a.w, a.h), (b.w, b.h));
                assert!(!a.is_empty());
                assert!(a.fits_within(width, height), "{:?}", a);
                assert!(b.fits_within(width, height), "{:?}", b);
                assert!(!a.overlaps(b), "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn pair_placements_are_uniform() {
        // A 4x1 strip with single pixel blocks has six unordered disjoint placements.
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let scale = RegionScale::new(0.25, 0.25).unwrap();
        let mut counts = [[0u32; 4]; 4];
        for _ in 0..6000 {
            let (a, b) = random_disjoint_pair(&mut rng, scale, 4, 1);
            assert_eq!((a.w, a.h), (1, 1));
            let (lo, hi) = (a.x.min(b.x), a.x.max(b.x));
            counts[lo as usize][hi as usize] += 1;
        }

        for lo in 0..4 {
            for hi in lo + 1..4 {
                let count = counts[lo][hi];
                assert!((800..=1200).contains(&count), "{}..{}: {}", lo, hi, count);
            }
        }
    }

    #[test]
    fn single_pixel_pair() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (a, b) = random_disjoint_pair(&mut rng, RegionScale::DEFAULT, 1, 1);
        assert_eq!(a, Region::new(0, 0, 1, 1));
        assert_eq!(a, b);
    }
}
