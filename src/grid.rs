// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pitched two-dimensional storage
//!
//! A `Grid` is the addressable field every stage of the carver works
//! on: the 8-bit image, the floating-point energy field, and the byte
//! direction map.  Each row owns `pitch` elements, of which only the
//! first `width * channels` are live.  Shrinking the width touches
//! nothing but the width counter; the tail of every row is left as
//! stale data and is never freed, so removing a seam never
//! reallocates.

use crate::error::{CarveError, CarveResult};
use std::ops::{Index, IndexMut};

/// Read access to a pitched grid.  Both the image and the scratch
/// grids go through this, so the passes can be written once for any
/// element type.
pub trait GridView {
    type Element: Copy;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn pitch(&self) -> u32;
    fn channels(&self) -> u32;

    /// The whole of row `y`, `pitch` elements long, including whatever
    /// stale data lies past the logical width.
    fn row_full(&self, y: u32) -> &[Self::Element];

    /// The live part of row `y`: `width * channels` elements.
    fn row(&self, y: u32) -> &[Self::Element] {
        let live = (self.width() * self.channels()) as usize;
        &self.row_full(y)[..live]
    }
}

/// Write access to a pitched grid.
pub trait GridViewMut: GridView {
    fn row_full_mut(&mut self, y: u32) -> &mut [Self::Element];

    fn row_mut(&mut self, y: u32) -> &mut [Self::Element] {
        let live = (self.width() * self.channels()) as usize;
        &mut self.row_full_mut(y)[..live]
    }
}

/// Row-major storage with a fixed pitch and a shrinkable width.
///
/// Cloning duplicates the full `pitch * height` allocation, stale
/// tails included.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Copy> {
    width: u32,
    height: u32,
    pitch: u32,
    channels: u32,
    data: Vec<T>,
}

fn allocate<T: Copy>(pitch: u32, height: u32, fill: T) -> CarveResult<Vec<T>> {
    let elements = (pitch as usize)
        .checked_mul(height as usize)
        .ok_or(CarveError::AllocationFailure {
            elements: usize::max_value(),
        })?;
    let mut data = Vec::new();
    data.try_reserve_exact(elements)
        .map_err(|_| CarveError::AllocationFailure { elements })?;
    data.resize(elements, fill);
    Ok(data)
}

impl<T: Copy> Grid<T> {
    /// Allocate a `pitch * height` grid with every element set to
    /// `fill`.  The caller guarantees `pitch >= width * channels`.
    pub fn new(width: u32, height: u32, pitch: u32, channels: u32, fill: T) -> CarveResult<Self> {
        assert!(channels > 0, "a grid needs at least one channel");
        assert!(
            pitch as u64 >= width as u64 * channels as u64,
            "pitch {} cannot hold {} pixels of {} channels",
            pitch,
            width,
            channels
        );
        Ok(Grid {
            width,
            height,
            pitch,
            channels,
            data: allocate(pitch, height, fill)?,
        })
    }

    /// Copy tightly packed row-major pixel data into a new grid whose
    /// pitch is exactly `width * channels`.
    pub fn from_packed(width: u32, height: u32, channels: u32, packed: &[T]) -> CarveResult<Self> {
        let pitch = width
            .checked_mul(channels)
            .ok_or(CarveError::InvalidDimensions { width, height })?;
        if channels == 0 || packed.len() as u64 != pitch as u64 * height as u64 {
            return Err(CarveError::InvalidDimensions { width, height });
        }
        let mut data = Vec::new();
        data.try_reserve_exact(packed.len())
            .map_err(|_| CarveError::AllocationFailure {
                elements: packed.len(),
            })?;
        data.extend_from_slice(packed);
        Ok(Grid {
            width,
            height,
            pitch,
            channels,
            data,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.pitch as usize) + (x as usize) * (self.channels as usize)
    }

    /// The channels of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> &[T] {
        let index = self.get_index(x, y);
        &self.data[index..index + self.channels as usize]
    }

    /// Reduce the logical width.  Nothing is moved or freed.
    pub fn shrink_width(&mut self, new_width: u32) {
        assert!(
            new_width <= self.width,
            "grid width may only shrink ({} -> {})",
            self.width,
            new_width
        );
        self.width = new_width;
    }

    /// Overwrite every element of the allocation, live or stale.
    pub fn fill(&mut self, value: T) {
        for v in self.data.iter_mut() {
            *v = value;
        }
    }

    /// Drop pixel `x` from row `y`: everything to its right moves one
    /// pixel left and the row's live content ends one pixel sooner.
    /// The last live pixel's old copy stays behind as stale data.
    pub fn remove_pixel(&mut self, x: u32, y: u32) {
        let channels = self.channels as usize;
        let width = self.width as usize;
        let row = self.row_full_mut(y);
        row.copy_within((x as usize + 1) * channels..width * channels, x as usize * channels);
    }

    /// The live region, packed row by row with no stale tails.
    pub fn to_packed(&self) -> Vec<T> {
        let live = (self.width * self.channels) as usize;
        let mut out = Vec::with_capacity(live * self.height as usize);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        out
    }
}

impl<T: Copy> GridView for Grid<T> {
    type Element = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pitch(&self) -> u32 {
        self.pitch
    }

    fn channels(&self) -> u32 {
        self.channels
    }

    fn row_full(&self, y: u32) -> &[T] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.pitch as usize]
    }
}

impl<T: Copy> GridViewMut for Grid<T> {
    fn row_full_mut(&mut self, y: u32) -> &mut [T] {
        let start = self.get_index(0, y);
        let pitch = self.pitch as usize;
        &mut self.data[start..start + pitch]
    }
}

impl<T: Copy> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    /// The first channel of the pixel at `(x, y)`; for single-channel
    /// scratch grids, the cell itself.
    fn index(&self, (x, y): (u32, u32)) -> &T {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<T: Copy> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
