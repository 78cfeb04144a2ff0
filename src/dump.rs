// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a graymap, for looking at what the
//! carver sees.

use crate::grid::{Grid, GridView};
use image::{GrayImage, Luma};
use num_traits::clamp;

/// Scale the finite energies of `energy` into 0..=255.  Infinite
/// cells, the pinned side borders, come out white.
pub fn energy_to_image(energy: &Grid<f32>) -> GrayImage {
    let factor = (0..energy.height())
        .flat_map(|y| energy.row(y).iter().cloned())
        .filter(|e| e.is_finite())
        .fold(0.0f32, f32::max);

    GrayImage::from_fn(energy.width(), energy.height(), |x, y| {
        let e = energy[(x, y)];
        let shade = if !e.is_finite() {
            255.0
        } else if factor > 0.0 {
            clamp(e * 256.0 / factor, 0.0, 255.0)
        } else {
            0.0
        };
        Luma([shade as u8])
    })
}
