// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! Parameters for a complete glitch pass.
//!
//! The engine applies transformations in whatever order they are called. The settings here encode
//! one particular policy on top of it: start from the loaded image, slide, then sort, then shuffle.
//! Sections that are disabled are skipped.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glitch_raster::RasterError;
use rand::RngCore;

use crate::ProcessingEngine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GlitchSettings {
    pub sort: SortSettings,
    pub slide: SlideSettings,
    pub shuffle: ShuffleSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortSettings {
    pub enabled: bool,
    /// Sort columns instead of rows.
    pub vertical: bool,
    /// Pixels with a luminance below this value are sorted.
    pub threshold: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlideSettings {
    pub enabled: bool,
    /// The number of regions slid.
    pub count: u32,
    /// The largest distance in pixels of a single slide.
    pub max_distance: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShuffleSettings {
    pub enabled: bool,
    /// The number of block pairs swapped.
    pub count: u32,
}

impl Default for SortSettings {
    fn default() -> Self {
        SortSettings {
            enabled: true,
            vertical: false,
            threshold: 150,
        }
    }
}

impl Default for SlideSettings {
    fn default() -> Self {
        SlideSettings {
            enabled: true,
            count: 10,
            max_distance: 50,
        }
    }
}

impl Default for ShuffleSettings {
    fn default() -> Self {
        ShuffleSettings {
            enabled: true,
            count: 5,
        }
    }
}

impl GlitchSettings {
    /// Settings with every section disabled, reproducing the loaded image.
    pub fn disabled() -> Self {
        let mut settings = GlitchSettings::default();
        settings.sort.enabled = false;
        settings.slide.enabled = false;
        settings.shuffle.enabled = false;
        settings
    }

    /// Reset the engine and run all enabled sections, slide, sort and shuffle in that order.
    pub fn apply<R: RngCore>(&self, engine: &mut ProcessingEngine<R>) -> Result<(), RasterError> {
        engine.reset_image()?;

        if self.slide.enabled {
            engine.process_rect_slide(self.slide.count, self.slide.max_distance)?;
        }

        if self.sort.enabled {
            engine.process_pixel_sort(self.sort.threshold, self.sort.vertical)?;
        }

        if self.shuffle.enabled {
            engine.process_area_shuffle(self.shuffle.count)?;
        }

        Ok(())
    }
}
