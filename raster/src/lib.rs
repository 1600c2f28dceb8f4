// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! # Raster
//!
//! A fixed-size RGBA8 raster holding two copies of one image: an immutable *base* snapshot and a
//! mutable *working* copy that transformations operate on.
//!
//! ## Usage
//!
//! ```
//! use glitch_raster::{RasterBuffer, Region};
//!
//! let mut raster = RasterBuffer::new(2, 2).unwrap();
//! let image = [
//!     0xff, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff,
//!     0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff,
//! ];
//! raster.load_base_image(2, 2, &image).unwrap();
//!
//! // Paint the top row white, on the working copy only.
//! let top = Region::new(0, 0, 2, 1);
//! raster.write_region(top, &[[0xff; 4]; 2]).unwrap();
//! assert_ne!(raster.pixel_data().unwrap(), &image[..]);
//!
//! // The base snapshot is left untouched and restores the working copy.
//! raster.reset_image().unwrap();
//! assert_eq!(raster.pixel_data().unwrap(), &image[..]);
//! ```
// Be std for doctests, avoids a weird warning about missing allocator.
#![cfg_attr(not(doctest), no_std)]
#![deny(unsafe_code)]
extern crate alloc;

mod buffer;
mod error;
pub mod pixel;
mod region;

pub use self::buffer::RasterBuffer;
pub use self::error::RasterError;
pub use self::pixel::{luminance, Rgba};
pub use self::region::Region;
