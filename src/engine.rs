// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
use core::fmt;

use glitch_raster::{RasterBuffer, RasterError};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sampling::RegionScale;
use crate::sort::{self, SortStats};
use crate::{shuffle, slide};

/// An image with glitch transformations.
///
/// The engine owns a fixed-size [`RasterBuffer`] and the random source used by the randomized
/// transformations. Each transformation is applied to the current working copy, in exactly the
/// order the caller invokes them. There is no implicit pipeline: repeating or omitting a
/// transformation is just as valid as any other sequence. To start over from the loaded image,
/// call [`ProcessingEngine::reset_image`].
///
/// ## Determinism
///
/// The random source is explicit. Two engines constructed with the same seed, loaded with the same
/// image, and driven by the same sequence of calls produce byte-identical output.
///
/// ```
/// use pixel_glitch::ProcessingEngine;
///
/// let image: Vec<u8> = (0..=255).collect();
/// let mut results = Vec::new();
///
/// for _ in 0..2 {
///     let mut engine = ProcessingEngine::with_seed(8, 8, 0x5eed).unwrap();
///     engine.load_base_image(8, 8, &image).unwrap();
///     engine.process_rect_slide(4, 3).unwrap();
///     engine.process_pixel_sort(128, false).unwrap();
///     engine.process_area_shuffle(2).unwrap();
///     results.push(engine.get_pixel_data().unwrap().to_vec());
/// }
///
/// assert_eq!(results[0], results[1]);
/// ```
pub struct ProcessingEngine<R = ChaCha8Rng> {
    raster: RasterBuffer,
    rng: R,
    scale: RegionScale,
}

impl ProcessingEngine<ChaCha8Rng> {
    /// The seed of engines constructed with [`ProcessingEngine::new`].
    pub const DEFAULT_SEED: u64 = 0;

    /// Create an engine for images of the given size, seeded with [`Self::DEFAULT_SEED`].
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        Self::with_seed(width, height, Self::DEFAULT_SEED)
    }

    /// Create an engine whose random source is seeded with `seed`.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, RasterError> {
        Self::with_rng(width, height, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Restart the random source from `seed`.
    ///
    /// Does not touch the image. Together with [`ProcessingEngine::reset_image`] this replays a
    /// sequence of transformations exactly.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

impl<R: RngCore> ProcessingEngine<R> {
    /// Create an engine drawing from a caller provided random source.
    pub fn with_rng(width: u32, height: u32, rng: R) -> Result<Self, RasterError> {
        Ok(ProcessingEngine {
            raster: RasterBuffer::new(width, height)?,
            rng,
            scale: RegionScale::DEFAULT,
        })
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn is_loaded(&self) -> bool {
        self.raster.is_loaded()
    }

    /// The underlying raster, for read access to the base snapshot.
    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// The bounds for the size of regions drawn by slides and shuffles.
    pub fn region_scale(&self) -> RegionScale {
        self.scale
    }

    pub fn set_region_scale(&mut self, scale: RegionScale) {
        self.scale = scale;
    }

    /// Load the image that all transformations start from.
    ///
    /// The data must be `width * height * 4` bytes of row-major RGBA8 with the dimensions the
    /// engine was constructed with. Replaces any previously loaded image and its working copy.
    pub fn load_base_image(
        &mut self,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<(), RasterError> {
        self.raster.load_base_image(width, height, data)?;
        log::debug!("loaded base image {}x{}", width, height);
        Ok(())
    }

    /// Discard all transformations, restoring the loaded image.
    pub fn reset_image(&mut self) -> Result<(), RasterError> {
        self.raster.reset_image()
    }

    /// Sort runs of dark pixels in each row, or in each column if `vertical` is set.
    ///
    /// See [`crate::sort`] for the definition of runs.
    pub fn process_pixel_sort(
        &mut self,
        threshold: u8,
        vertical: bool,
    ) -> Result<(), RasterError> {
        self.pixel_sort_stats(threshold, vertical).map(drop)
    }

    /// Like [`ProcessingEngine::process_pixel_sort`] but report what has been sorted.
    pub fn pixel_sort_stats(
        &mut self,
        threshold: u8,
        vertical: bool,
    ) -> Result<SortStats, RasterError> {
        sort::sort_pixels(&mut self.raster, threshold, vertical)
    }

    /// Slide the content of `num_slides` random regions by up to `max_slide` pixels.
    pub fn process_rect_slide(
        &mut self,
        num_slides: u32,
        max_slide: u32,
    ) -> Result<(), RasterError> {
        slide::slide_areas(
            &mut self.raster,
            &mut self.rng,
            self.scale,
            num_slides,
            max_slide,
        )
    }

    /// Exchange the content of `num_shuffles` random pairs of blocks.
    pub fn process_area_shuffle(&mut self, num_shuffles: u32) -> Result<(), RasterError> {
        shuffle::shuffle_areas(&mut self.raster, &mut self.rng, self.scale, num_shuffles)
    }

    /// The working copy as row-major RGBA8 bytes.
    pub fn get_pixel_data(&self) -> Result<&[u8], RasterError> {
        self.raster.pixel_data()
    }
}

impl<R> fmt::Debug for ProcessingEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ProcessingEngine")
            .field("raster", &self.raster)
            .field("scale", &self.scale)
            .finish()
    }
}
