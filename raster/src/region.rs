// Distributed under The MIT License (MIT)
//
// Copyright (c) 2026 The `image-rs` developers
use core::ops::Range;

/// An axis-aligned rectangle of pixels, given by its origin and size.
///
/// A region by itself is not tied to any raster. It is validated against a concrete raster size
/// with [`Region::fits_within`] whenever it is used to access pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    /// Column of the left edge.
    pub x: u32,
    /// Row of the top edge.
    pub y: u32,
    /// The number of pixels in width direction.
    pub w: u32,
    /// The number of pixels in height direction.
    pub h: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Region { x, y, w, h }
    }

    /// A region covering a whole `width` by `height` raster.
    pub const fn full(width: u32, height: u32) -> Self {
        Region::new(0, 0, width, height)
    }

    /// One past the right-most column, or `None` on overflow.
    pub fn right(self) -> Option<u32> {
        self.x.checked_add(self.w)
    }

    /// One past the bottom-most row, or `None` on overflow.
    pub fn bottom(self) -> Option<u32> {
        self.y.checked_add(self.h)
    }

    /// The number of pixels in the region.
    pub fn area(self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check that the region lies entirely within a raster of the given size.
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        matches!(self.right(), Some(right) if right <= width)
            && matches!(self.bottom(), Some(bottom) if bottom <= height)
    }

    pub fn contains(self, x: u32, y: u32) -> bool {
        self.columns().contains(&x) && self.rows().contains(&y)
    }

    /// Check if the two regions share at least one pixel.
    pub fn overlaps(self, other: Region) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (a, b) = (self.columns(), other.columns());
        let (c, d) = (self.rows(), other.rows());
        a.start < b.end && b.start < a.end && c.start < d.end && d.start < c.end
    }

    /// The column indices covered by this region, saturating at the numeric bound.
    pub fn columns(self) -> Range<u32> {
        self.x..self.x.saturating_add(self.w)
    }

    /// The row indices covered by this region, saturating at the numeric bound.
    pub fn rows(self) -> Range<u32> {
        self.y..self.y.saturating_add(self.h)
    }
}
