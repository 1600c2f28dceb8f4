// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
use core::fmt;

use crate::Region;

/// Error representation for a rejected raster operation.
///
/// Every variant is a precondition that the caller violated. An operation that returns an error
/// has not modified the raster, neither its base snapshot nor its working copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterError {
    /// A raster was requested with a zero dimension, or one whose byte length does not fit into
    /// the address space.
    InvalidDimensions { width: u32, height: u32 },
    /// An image of different dimensions was offered to a raster.
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
    /// The image data does not have the length of its declared dimensions.
    BufferLengthMismatch { expected: usize, found: usize },
    /// The working copy was accessed before any image had been loaded.
    NotLoaded,
    /// Two regions that were meant to exchange content differ in size.
    RegionSizeMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },
    /// A region reaches outside the raster.
    RegionOutOfBounds {
        region: Region,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RasterError::InvalidDimensions { width, height } => {
                write!(f, "invalid raster dimensions {}x{}", width, height)
            }
            RasterError::DimensionMismatch { expected, found } => write!(
                f,
                "raster is {}x{} but the image is {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            RasterError::BufferLengthMismatch { expected, found } => write!(
                f,
                "image requires {} bytes but the buffer has {}",
                expected, found
            ),
            RasterError::NotLoaded => write!(f, "no base image has been loaded"),
            RasterError::RegionSizeMismatch { first, second } => write!(
                f,
                "regions of size {}x{} and {}x{} can not be exchanged",
                first.0, first.1, second.0, second.1
            ),
            RasterError::RegionOutOfBounds {
                region,
                width,
                height,
            } => write!(
                f,
                "region {}x{} at ({}, {}) does not fit into a {}x{} raster",
                region.w, region.h, region.x, region.y, width, height
            ),
        }
    }
}

impl core::error::Error for RasterError {}
