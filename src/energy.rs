// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the squared gradient magnitude, computed
//! separably: a vertical central difference over the rows above and
//! below, then a horizontal central difference over the pixels to the
//! left and right, summed across every channel:
//!
//! ```text
//!        |Δy|² = Σc (p(x, y+1, c) - p(x, y-1, c))²
//!        |Δx|² = Σc (p(x+1, y, c) - p(x-1, y, c))²
//!       e(x,y) = |Δy|² + |Δx|²
//! ```
//!
//! Only interior cells are written.  The outermost rows and columns
//! keep `ENERGY_FILL`; the carver then pins the side columns to
//! infinity with `force_side_borders`.

use crate::error::{check_dimensions, CarveResult};
use crate::grid::{Grid, GridView, GridViewMut};
use itertools::{izip, Itertools};
use num_traits::ToPrimitive;
use tracing::trace;

/// What every energy cell holds before a pass writes it.
pub const ENERGY_FILL: f32 = 1.0;

// Takes the channels of two pixels, maps the difference between each
// channel, squares it, and sums them up.
#[inline]
fn energy_of_pair<S: ToPrimitive>(p1: &[S], p2: &[S]) -> f32 {
    p1.iter().zip(p2).fold(0.0, |acc, (c1, c2)| {
        let c1 = c1.to_f32().unwrap_or_default();
        let c2 = c2.to_f32().unwrap_or_default();
        acc + (c2 - c1) * (c2 - c1)
    })
}

/// Pass A: zero every interior cell, then write the vertical term.
/// The middle row is never sampled; only the rows above and below.
fn vertical_pass<G>(image: &G, energy: &mut Grid<f32>)
where
    G: GridView,
    G::Element: ToPrimitive,
{
    let (width, height) = (image.width() as usize, image.height());
    let channels = image.channels() as usize;

    for y in 1..height - 1 {
        let (above, below) = (image.row(y - 1), image.row(y + 1));
        let dst = &mut energy.row_mut(y)[1..width - 1];
        for cell in dst.iter_mut() {
            *cell = 0.0;
        }
        for (cell, up, down) in izip!(
            dst.iter_mut(),
            above.chunks_exact(channels).skip(1),
            below.chunks_exact(channels).skip(1)
        ) {
            *cell += energy_of_pair(up, down);
        }
    }
}

/// Pass B: add the horizontal term onto whatever pass A left.
fn horizontal_pass<G>(image: &G, energy: &mut Grid<f32>)
where
    G: GridView,
    G::Element: ToPrimitive,
{
    let width = image.width() as usize;
    let channels = image.channels() as usize;

    for y in 1..image.height() - 1 {
        let src = image.row(y);
        let dst = &mut energy.row_mut(y)[1..width - 1];
        for (cell, (left, _, right)) in dst
            .iter_mut()
            .zip(src.chunks_exact(channels).tuple_windows())
        {
            *cell += energy_of_pair(left, right);
        }
    }
}

/// Compute the energy of every interior pixel of `image` into `energy`,
/// which must have the image's current width and height.  The field is
/// reset to `ENERGY_FILL` first, so nothing survives from an earlier
/// cycle.
pub fn compute_energy<G>(image: &G, energy: &mut Grid<f32>) -> CarveResult<()>
where
    G: GridView,
    G::Element: ToPrimitive,
{
    check_dimensions(image.width(), image.height())?;
    debug_assert_eq!(image.width(), energy.width());
    debug_assert_eq!(image.height(), energy.height());

    energy.fill(ENERGY_FILL);
    vertical_pass(image, energy);
    horizontal_pass(image, energy);
    trace!(
        width = image.width(),
        height = image.height(),
        "energy field computed"
    );
    Ok(())
}

/// Pin the first and last live column of every row to infinity so that
/// no seam can afford to leave through a side edge.
pub fn force_side_borders(energy: &mut Grid<f32>) {
    let last = energy.width() - 1;
    for y in 0..energy.height() {
        energy[(0, y)] = std::f32::INFINITY;
        energy[(last, y)] = std::f32::INFINITY;
    }
}
