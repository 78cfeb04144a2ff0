// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The direction map
//!
//! For every interior cell, record which of the three cells in the row
//! *above* has the least energy: one column left, the same column, or
//! one column right.  This is a purely local choice made from raw
//! energies, not from any accumulated path cost, and it is made once
//! per cycle independent of where a seam starts.

use crate::cq;
use crate::error::{check_dimensions, CarveResult};
use crate::grid::{Grid, GridView, GridViewMut};
use itertools::Itertools;

/// Predecessor is one column to the left.
pub const LEFT: u8 = 0;
/// Predecessor is in the same column.
pub const MIDDLE: u8 = 1;
/// Predecessor is one column to the right.
pub const RIGHT: u8 = 2;

/// What every direction cell holds before the pass writes it.  Cells
/// on the border keep it, so a walk through them goes straight down.
pub const DIRECTION_FILL: u8 = MIDDLE;

/// Pick the lowest of `a`, `b` and `c` (left, middle, right).  Ties go
/// to the leftmost candidate.
#[inline]
pub fn choose_predecessor<T: PartialOrd>(a: T, b: T, c: T) -> u8 {
    if b < a {
        cq!(c < b, RIGHT, MIDDLE)
    } else {
        cq!(c < a, RIGHT, LEFT)
    }
}

/// Fill `directions` from `energy`.  Both must have the same width and
/// height.  The map is reset to `DIRECTION_FILL` first.
pub fn compute_directions(energy: &Grid<f32>, directions: &mut Grid<u8>) -> CarveResult<()> {
    let (width, height) = (energy.width(), energy.height());
    check_dimensions(width, height)?;
    debug_assert_eq!(width, directions.width());
    debug_assert_eq!(height, directions.height());

    directions.fill(DIRECTION_FILL);
    for y in 1..height - 1 {
        let above = energy.row(y - 1);
        let dst = &mut directions.row_mut(y)[1..width as usize - 1];
        for (cell, (a, b, c)) in dst.iter_mut().zip(above.iter().tuple_windows()) {
            *cell = choose_predecessor(a, b, c);
        }
    }
    Ok(())
}
