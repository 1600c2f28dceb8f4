// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! # Pixel glitch
//!
//! Deterministic glitch-art transformations of an RGBA8 image.
//!
//! A [`ProcessingEngine`] holds one image of fixed size twice: the loaded base image, which is
//! never modified, and a working copy that the transformations rewrite in place.
//!
//! - [`ProcessingEngine::process_pixel_sort`] sorts runs of dark pixels in each row or column.
//! - [`ProcessingEngine::process_rect_slide`] shifts the content of random rectangles.
//! - [`ProcessingEngine::process_area_shuffle`] swaps random pairs of equally sized blocks.
//!
//! Transformations compose in call order. All randomness comes from the engine's own seedable
//! source, so equal seeds and equal calls give equal images.
//!
//! ## Usage
//!
//! ```
//! use pixel_glitch::{GlitchSettings, ProcessingEngine};
//!
//! # fn decode_image() -> Vec<u8> { vec![0x80; 64 * 64 * 4] }
//! let mut engine = ProcessingEngine::with_seed(64, 64, 42)?;
//! engine.load_base_image(64, 64, &decode_image())?;
//!
//! // Compose by hand ..
//! engine.process_pixel_sort(150, true)?;
//! engine.process_area_shuffle(3)?;
//!
//! // .. or run the default slide, sort and shuffle pass from a fresh copy.
//! GlitchSettings::default().apply(&mut engine)?;
//!
//! let rgba: &[u8] = engine.get_pixel_data()?;
//! assert_eq!(rgba.len(), 64 * 64 * 4);
//! # Ok::<_, pixel_glitch::Error>(())
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod engine;
pub mod sampling;
mod settings;
pub mod shuffle;
pub mod slide;
pub mod sort;


pub use glitch_raster::{luminance, RasterBuffer, Region, Rgba};
/// The error type of all fallible operations.
pub use glitch_raster::RasterError as Error;

pub use self::engine::ProcessingEngine;
pub use self::sampling::RegionScale;
pub use self::settings::{GlitchSettings, ShuffleSettings, SlideSettings, SortSettings};
pub use self::slide::Axis;
pub use self::sort::SortStats;
