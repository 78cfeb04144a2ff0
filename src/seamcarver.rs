// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the shrinking session
//!
//! A `SeamCarver` owns the image for the length of an editing session,
//! along with two scratch grids (energy and directions) that are
//! rebuilt from scratch every cycle.  Callers queue removals with
//! `request_removal` and drive the session one cycle per `tick`, which
//! is cheap enough to run once per animation frame.
//!
//! Each cycle:
//!
//! 1. recomputes the energy field over the current image,
//! 2. pins the side columns of the field to infinity,
//! 3. recomputes the direction map,
//! 4. picks the cheapest seam start,
//! 5. removes that seam from every row of the image,
//! 6. shrinks all three grids by one column.
//!
//! All the checks happen before step 5, so a failed cycle leaves the
//! image untouched.

use crate::config::CarveConfig;
use crate::direction::{compute_directions, DIRECTION_FILL};
use crate::energy::{compute_energy, force_side_borders, ENERGY_FILL};
use crate::error::{check_dimensions, CarveError, CarveResult, MIN_DIMENSION};
use crate::grid::{Grid, GridView};
use crate::seamfinder::{GreedySeamFinder, SeamFinder};
use num_traits::ToPrimitive;
use tracing::{debug, info, warn};

/// A carving session over an image of `S` subpixels.
#[derive(Debug, Clone)]
pub struct SeamCarver<S: Copy = u8> {
    image: Grid<S>,
    energy: Grid<f32>,
    directions: Grid<u8>,
    pending: u32,
    config: CarveConfig,
}

impl<S> SeamCarver<S>
where
    S: Copy + ToPrimitive,
{
    /// Start a session.  Fails with `InvalidDimensions` if the image is
    /// narrower or shorter than three pixels.
    pub fn new(image: Grid<S>, config: CarveConfig) -> CarveResult<Self> {
        let (width, height) = (image.width(), image.height());
        check_dimensions(width, height)?;
        let energy = Grid::new(width, height, width, 1, ENERGY_FILL)?;
        let directions = Grid::new(width, height, width, 1, DIRECTION_FILL)?;
        debug!(
            width,
            height,
            channels = image.channels(),
            "carving session started"
        );
        Ok(SeamCarver {
            image,
            energy,
            directions,
            pending: 0,
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Seams still queued for removal.
    pub fn pending(&self) -> u32 {
        self.pending
    }

    pub fn config(&self) -> &CarveConfig {
        &self.config
    }

    /// The image as it stands after the cycles run so far.
    pub fn image(&self) -> &Grid<S> {
        &self.image
    }

    /// The energy field from the most recent cycle, with its side
    /// columns pinned to infinity.
    pub fn energy(&self) -> &Grid<f32> {
        &self.energy
    }

    /// The direction map from the most recent cycle.
    pub fn directions(&self) -> &Grid<u8> {
        &self.directions
    }

    pub fn into_image(self) -> Grid<S> {
        self.image
    }

    /// Queue `count` more seams.  The request is refused, and the queue
    /// left as it was, if honouring it together with what is already
    /// queued would take the width below three.
    pub fn request_removal(&mut self, count: u32) -> CarveResult<()> {
        let width = self.width();
        let requested = self.pending.saturating_add(count);
        if u64::from(width) < u64::from(MIN_DIMENSION) + u64::from(requested) {
            warn!(width, requested, "removal request refused");
            return Err(CarveError::WidthExhausted { width, requested });
        }
        self.pending = requested;
        info!(queued = count, pending = self.pending, "seams queued");
        Ok(())
    }

    /// Queue the configured default number of seams.
    pub fn request_default_removal(&mut self) -> CarveResult<()> {
        self.request_removal(self.config.seams_per_request)
    }

    /// Forget any queued seams.
    pub fn cancel(&mut self) {
        self.pending = 0;
    }

    /// Compute this cycle's energy field and direction map, leaving
    /// the image alone.
    pub fn analyze(&mut self) -> CarveResult<()> {
        check_dimensions(self.width(), self.height())?;
        compute_energy(&self.image, &mut self.energy)?;
        force_side_borders(&mut self.energy);
        compute_directions(&self.energy, &mut self.directions)
    }

    /// Run one cycle if anything is queued.  Returns the starting
    /// column of the removed seam, or `None` if the queue was empty.
    /// On error the queue is kept; the caller decides whether to
    /// `cancel` it.
    pub fn tick(&mut self) -> CarveResult<Option<u32>> {
        if self.pending == 0 {
            return Ok(None);
        }
        let start = self.carve_once()?;
        self.pending -= 1;
        if self.pending == 0 {
            info!(width = self.width(), "all queued seams removed");
        }
        Ok(Some(start))
    }

    /// Remove one seam, whether or not anything is queued.
    pub fn carve_once(&mut self) -> CarveResult<u32> {
        let width = self.width();
        if width <= MIN_DIMENSION {
            return Err(CarveError::WidthExhausted {
                width,
                requested: 1,
            });
        }
        self.analyze()?;

        let finder = GreedySeamFinder::new(&self.energy, &self.directions);
        let start = finder.find_minimum_seam();
        let seam = finder.seam_path(start);
        debug!(start, cost = finder.seam_cost(start), "seam chosen");

        remove_vertical_seam(&mut self.image, &seam);
        self.image.shrink_width(width - 1);
        self.energy.shrink_width(width - 1);
        self.directions.shrink_width(width - 1);
        debug!(width = width - 1, "seam removed");
        Ok(start)
    }

    /// Tick until the queue is empty and return the final width.
    pub fn run_to_completion(&mut self) -> CarveResult<u32> {
        while self.tick()?.is_some() {}
        Ok(self.width())
    }
}

/// Take the pixel at `seam[y]` out of every row `y`, closing the gap
/// from the right.  The width is left for the caller to shrink.
pub fn remove_vertical_seam<S: Copy>(image: &mut Grid<S>, seam: &[u32]) {
    debug_assert_eq!(seam.len(), image.height() as usize);
    for (y, &x) in seam.iter().enumerate() {
        image.remove_pixel(x, y as u32);
    }
}
