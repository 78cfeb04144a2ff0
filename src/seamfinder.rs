// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam selection
//!
//! A seam is never stored.  It is whatever path falls out of starting
//! at some column of the top row and, row by row, stepping the way the
//! direction map says.  The finder tries every starting column, totals
//! the energy along each walk, and keeps the cheapest.
//!
//! Because the direction map was built from local choices, following
//! it from different starts is a greedy descent; the winner is not in
//! general the globally cheapest top-to-bottom path.

use crate::cq;
use crate::direction::{LEFT, RIGHT};
use crate::grid::{Grid, GridView};
use itertools::Itertools;
use std::cmp::Ordering;

/// This trait defines how a carver asks for a vertical seam.  It's a
/// primitive interface, just enough to make room for more than one
/// way of choosing seams.
pub trait SeamFinder {
    /// Total energy along the seam that starts at column `start`.
    fn seam_cost(&self, start: u32) -> f32;

    /// The column of the seam in each row, top to bottom.
    fn seam_path(&self, start: u32) -> Vec<u32>;

    /// The starting column of the cheapest seam.  Ties go to the
    /// leftmost column.
    fn find_minimum_seam(&self) -> u32;
}

/// Where a walk standing at column `x` goes in the next row.  A walk
/// already on an edge that is told to step off it stays put.
#[inline]
pub fn next_column(x: u32, direction: u8, width: u32) -> u32 {
    cq!(
        x == 0 && direction == LEFT,
        0,
        cq!(
            x == width - 1 && direction == RIGHT,
            width - 1,
            x + u32::from(direction) - 1
        )
    )
}

/// Follows a precomputed direction map from each starting column.
pub struct GreedySeamFinder<'a> {
    energy: &'a Grid<f32>,
    directions: &'a Grid<u8>,
}

impl<'a> GreedySeamFinder<'a> {
    /// The two grids must share the same width and height.
    pub fn new(energy: &'a Grid<f32>, directions: &'a Grid<u8>) -> Self {
        debug_assert_eq!(energy.width(), directions.width());
        debug_assert_eq!(energy.height(), directions.height());
        GreedySeamFinder { energy, directions }
    }

    /// Walk from `start`, handing each visited `(x, y)` to `visit`, and
    /// return the total energy collected on the way.
    pub fn follow_path<F>(&self, start: u32, mut visit: F) -> f32
    where
        F: FnMut(u32, u32),
    {
        let width = self.directions.width();
        (0..self.energy.height()).fold((start, 0.0), |(x, total), y| {
            visit(x, y);
            let total = total + self.energy[(x, y)];
            (next_column(x, self.directions[(x, y)], width), total)
        })
        .1
    }
}

impl<'a> SeamFinder for GreedySeamFinder<'a> {
    fn seam_cost(&self, start: u32) -> f32 {
        self.follow_path(start, |_, _| {})
    }

    fn seam_path(&self, start: u32) -> Vec<u32> {
        let mut path = Vec::with_capacity(self.energy.height() as usize);
        self.follow_path(start, |x, _| path.push(x));
        path
    }

    fn find_minimum_seam(&self) -> u32 {
        let totals: Vec<f32> = (0..self.energy.width())
            .map(|start| self.seam_cost(start))
            .collect();
        totals
            .iter()
            .position_min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map_or(0, |x| x as u32)
    }
}
