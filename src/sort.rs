// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
//! Threshold based pixel sorting.
//!
//! Every line of the image, a row or a column, is split into *runs*: maximal spans of consecutive
//! pixels whose luminance is strictly below the threshold. Brighter pixels separate the runs and
//! stay in place. Each run is then sorted by ascending luminance, moving whole pixels.
//!
//! A threshold of `0` selects no pixel at all and leaves the image as is, while `255` selects all
//! pixels except pure white ones.
use alloc::vec::Vec;

use glitch_raster::{luminance, RasterBuffer, RasterError, Rgba};

/// Counters describing the work of one sorting pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    /// The number of rows or columns visited.
    pub lines: usize,
    /// The number of runs found below the threshold.
    pub runs: usize,
    /// The number of pixels contained in those runs.
    pub pixels: usize,
}

/// Sort all rows, or all columns if `vertical` is set, of the working copy.
pub fn sort_pixels(
    raster: &mut RasterBuffer,
    threshold: u8,
    vertical: bool,
) -> Result<SortStats, RasterError> {
    let (width, height) = raster.dimensions();
    let (width, height) = (width as usize, height as usize);
    let pixels = raster.pixels_mut()?;

    let mut stats = SortStats::default();
    if vertical {
        let mut column = Vec::with_capacity(height);
        for x in 0..width {
            column.clear();
            column.extend(pixels[x..].iter().step_by(width).copied());
            sort_line(&mut column, threshold, &mut stats);
            for (dst, src) in pixels[x..].iter_mut().step_by(width).zip(&column) {
                *dst = *src;
            }
        }
    } else {
        for row in pixels.chunks_exact_mut(width) {
            sort_line(row, threshold, &mut stats);
        }
    }

    log::debug!(
        "pixel sort: threshold={} vertical={} lines={} runs={} pixels={}",
        threshold,
        vertical,
        stats.lines,
        stats.runs,
        stats.pixels
    );
    Ok(stats)
}

/// Sort the runs of one line in place.
pub fn sort_line(line: &mut [Rgba], threshold: u8, stats: &mut SortStats) {
    stats.lines += 1;

    let mut start = 0;
    while start < line.len() {
        if luminance(line[start]) >= threshold {
            start += 1;
            continue;
        }

        let len = line[start..]
            .iter()
            .position(|&px| luminance(px) >= threshold)
            .unwrap_or(line.len() - start);

        // Stable, equally bright pixels keep their relative order.
        line[start..start + len].sort_by_key(|&px| luminance(px));

        stats.runs += 1;
        stats.pixels += len;
        start += len;
    }
}
