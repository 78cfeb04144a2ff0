// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised while building grids or carving seams.
//!
//! Every one of these is detected before a persistent grid is touched,
//! so a failed cycle leaves the image exactly as it was.  `CarveError`
//! is a `std::error::Error`, which makes it a `failure::Fail` for
//! callers that collect errors into a `failure::Error`.

/// The smallest width or height the energy and direction passes are
/// defined for.  Below this there are no interior cells.
pub const MIN_DIMENSION: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarveError {
    /// The image (or a grid derived from it) is too small for the
    /// interior-cell formulas, or its data does not match its shape.
    #[error("invalid image dimensions {width}x{height}: both must be at least {min}", min = MIN_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },

    /// Removing `requested` more seams would take the width below
    /// `MIN_DIMENSION`.
    #[error(
        "cannot remove {requested} seam(s) from an image {width} pixels wide: width may not drop below {min}",
        min = MIN_DIMENSION
    )]
    WidthExhausted { width: u32, requested: u32 },

    /// Backing storage for a grid of `elements` elements could not be
    /// allocated.
    #[error("failed to allocate a grid of {elements} elements")]
    AllocationFailure { elements: usize },
}

pub type CarveResult<T> = Result<T, CarveError>;

/// Fails with `InvalidDimensions` unless both sides are at least
/// `MIN_DIMENSION`.
pub fn check_dimensions(width: u32, height: u32) -> CarveResult<()> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(CarveError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use failure::Fail;

    #[test]
    fn small_images_are_rejected() {
        assert_eq!(
            check_dimensions(2, 10),
            Err(CarveError::InvalidDimensions {
                width: 2,
                height: 10
            })
        );
        assert!(check_dimensions(10, 2).is_err());
        assert!(check_dimensions(3, 3).is_ok());
    }

    #[test]
    fn errors_are_failures() {
        fn takes_fail<F: Fail>(f: F) -> String {
            f.to_string()
        }
        let msg = takes_fail(CarveError::WidthExhausted {
            width: 3,
            requested: 1,
        });
        assert!(msg.contains("3 pixels wide"));
    }

    #[test]
    fn messages_name_the_floor() {
        let err = CarveError::InvalidDimensions {
            width: 2,
            height: 7,
        };
        assert_eq!(
            err.to_string(),
            "invalid image dimensions 2x7: both must be at least 3"
        );
        assert_eq!(
            CarveError::WidthExhausted {
                width: 5,
                requested: 4
            }
            .to_string(),
            "cannot remove 4 seam(s) from an image 5 pixels wide: width may not drop below 3"
        );
        assert_eq!(
            CarveError::AllocationFailure { elements: 12 }.to_string(),
            "failed to allocate a grid of 12 elements"
        );
    }
}
