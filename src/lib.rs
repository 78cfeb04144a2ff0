// #![deny(missing_docs)]

//! Greedy seam carving.
//!
//! Shrinks an image one column at a time by removing a connected
//! top-to-bottom seam of low-energy pixels.  The image lives in a
//! pitched `Grid` whose rows never move or reallocate; each removal
//! just shifts the pixels right of the seam and lowers the logical
//! width.

extern crate image;

pub mod ternary;

pub mod error;
pub use error::{CarveError, CarveResult, MIN_DIMENSION};

pub mod grid;
pub use grid::{Grid, GridView, GridViewMut};

pub mod energy;
pub use energy::{compute_energy, force_side_borders};

pub mod direction;
pub use direction::{choose_predecessor, compute_directions};

pub mod seamfinder;
pub use seamfinder::{GreedySeamFinder, SeamFinder};

pub mod seamcarver;
pub use seamcarver::SeamCarver;

pub mod config;
pub use config::CarveConfig;

pub mod convert;
pub mod dump;
pub mod logging;
