// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Moving pixels between `image` buffers and grids.

use crate::error::CarveResult;
use crate::grid::{Grid, GridView};
use image::{ImageBuffer, Pixel, Primitive};

/// Copy a decoded image into a grid with one element per subpixel and
/// a pitch of exactly one row.
pub fn grid_from_image<P, S>(image: &ImageBuffer<P, Vec<S>>) -> CarveResult<Grid<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    Grid::from_packed(width, height, u32::from(P::CHANNEL_COUNT), image.as_raw())
}

/// Copy the live region of a grid out into an image buffer.  Returns
/// `None` if the grid's channel count doesn't match the pixel type.
pub fn grid_to_image<P, S>(grid: &Grid<S>) -> Option<ImageBuffer<P, Vec<S>>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    if grid.channels() != u32::from(P::CHANNEL_COUNT) {
        return None;
    }
    ImageBuffer::from_raw(grid.width(), grid.height(), grid.to_packed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    #[test]
    fn rgb_images_keep_their_layout() {
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, 7]));
        let grid = grid_from_image(&image).unwrap();
        assert_eq!((grid.width(), grid.height(), grid.channels()), (4, 3, 3));
        assert_eq!(grid.pixel(2, 1), &[2, 1, 7]);

        let back: RgbImage = grid_to_image(&grid).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn shrunk_grids_export_only_live_pixels() {
        let image = RgbImage::from_fn(4, 3, |x, _| Rgb([x as u8; 3]));
        let mut grid = grid_from_image(&image).unwrap();
        grid.shrink_width(2);
        let back: RgbImage = grid_to_image(&grid).unwrap();
        assert_eq!(back.dimensions(), (2, 3));
        assert_eq!(back.get_pixel(1, 2), &Rgb([1, 1, 1]));
    }

    #[test]
    fn channel_mismatch_is_refused() {
        let grid = Grid::new(3, 3, 9, 3, 0u8).unwrap();
        let gray: Option<ImageBuffer<Luma<u8>, Vec<u8>>> = grid_to_image(&grid);
        assert!(gray.is_none());
    }
}
