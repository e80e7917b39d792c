// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The Renderer walks every pixel of the integral plane, maps it into
//! the complex plane, scores it with the escape-time test, and paints
//! the result into an RGBA image.  Every pixel is independent of every
//! other, so the threaded version just hands each worker its own band
//! of rows out of the same buffer.

use image::{Pixel as _, Rgba, RgbaImage};
use itertools::iproduct;
use log::debug;

use crate::errors::FractError;
use crate::escape::mandel;
use crate::palette::colorize;
use crate::planes::{IntegralPlane, Pixel, PlaneMapper};

/// Bytes per pixel in the raw RGBA buffer.
const CHANNELS: usize = 4;

/// Holds the plane and the iteration budget.  Once built it is never
/// mutated, so it can be shared freely between worker threads.
pub struct Renderer {
    plane: PlaneMapper,
    limit: usize,
}

impl Renderer {
    /// Requires the width and height of the image and the number of
    /// iterations to spend on each point.
    pub fn new(width: usize, height: usize, limit: usize) -> Self {
        Renderer {
            plane: PlaneMapper::new(width, height),
            limit,
        }
    }

    /// The size of the image this renderer produces.
    pub fn dimensions(&self) -> (u32, u32) {
        let IntegralPlane(width, height) = self.plane.integral_plane;
        (width as u32, height as u32)
    }

    fn colour_at(&self, pixel: &Pixel) -> Rgba<u8> {
        colorize(mandel(self.plane.pixel_to_point(pixel), self.limit))
    }

    /// The single-threaded render.  Visits columns left to right and
    /// each column top to bottom.
    pub fn render_single(&self) -> RgbaImage {
        let IntegralPlane(width, height) = self.plane.integral_plane;
        let mut image = RgbaImage::new(width as u32, height as u32);
        for (x, y) in iproduct!(0..width, 0..height) {
            image.put_pixel(x as u32, y as u32, self.colour_at(&Pixel(x, y)));
        }
        image
    }

    /// Paints one band of whole rows, starting at `first_row`, into a
    /// slice of the raw buffer.
    fn render_band(&self, first_row: usize, band: &mut [u8]) {
        let width = self.plane.integral_plane.0;
        for (offset, texel) in band.chunks_mut(CHANNELS).enumerate() {
            let pixel = Pixel(offset % width, first_row + offset / width);
            texel.copy_from_slice(self.colour_at(&pixel).channels());
        }
    }

    /// A multi-threaded version of the render function.  The output is
    /// identical to `render_single` for any thread count.
    pub fn render(&self, threads: usize) -> Result<RgbaImage, FractError> {
        if threads == 0 {
            return Err(FractError::Render {
                reason: "thread count must be at least 1".to_string(),
            });
        }
        if threads == 1 || self.plane.is_empty() {
            return Ok(self.render_single());
        }

        let IntegralPlane(width, height) = self.plane.integral_plane;
        let band_rows = (height + threads - 1) / threads;
        debug!(
            "rendering {}x{} in bands of {} rows on {} threads",
            width, height, band_rows, threads
        );

        let mut buffer = vec![0 as u8; self.plane.len() * CHANNELS];
        crossbeam::scope(|spawner| {
            for (index, band) in buffer.chunks_mut(band_rows * width * CHANNELS).enumerate() {
                spawner.spawn(move |_| self.render_band(index * band_rows, band));
            }
        })
        .map_err(|_| FractError::Render {
            reason: "a worker thread panicked".to_string(),
        })?;

        RgbaImage::from_raw(width as u32, height as u32, buffer).ok_or_else(|| FractError::Render {
            reason: "pixel buffer does not match the image size".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::MAX_ITERATIONS;
    use image::Pixel as _;
    use num::Complex;

    #[test]
    fn image_has_requested_dimensions() {
        let image = Renderer::new(40, 30, MAX_ITERATIONS).render_single();
        assert_eq!(image.dimensions(), (40, 30));
    }

    #[test]
    fn complex_origin_is_black() {
        let image = Renderer::new(400, 400, MAX_ITERATIONS).render_single();
        assert_eq!(*image.get_pixel(300, 200), Rgba::from_channels(0, 0, 0, 255));
    }

    #[test]
    fn every_pixel_is_painted_from_its_own_point() {
        let renderer = Renderer::new(16, 12, MAX_ITERATIONS);
        let image = renderer.render_single();
        let plane = PlaneMapper::new(16, 12);
        for (x, y, colour) in image.enumerate_pixels() {
            let point = plane.pixel_to_point(&Pixel(x as usize, y as usize));
            assert_eq!(*colour, colorize(mandel(point, MAX_ITERATIONS)));
        }
    }

    #[test]
    fn upper_left_corner_escapes_early() {
        let image = Renderer::new(400, 400, MAX_ITERATIONS).render_single();
        let expected = colorize(mandel(Complex::new(-1.5, -1.0), MAX_ITERATIONS));
        assert_eq!(*image.get_pixel(0, 0), expected);
    }

    #[test]
    fn threaded_render_matches_single() {
        let renderer = Renderer::new(400, 400, MAX_ITERATIONS);
        let single = renderer.render_single();
        let threaded = renderer.render(3).unwrap();
        assert_eq!(single.into_raw(), threaded.into_raw());
    }

    #[test]
    fn threaded_render_handles_uneven_bands() {
        let renderer = Renderer::new(37, 23, MAX_ITERATIONS);
        let single = renderer.render_single().into_raw();
        for threads in 2..8 {
            assert_eq!(renderer.render(threads).unwrap().into_raw(), single);
        }
    }

    #[test]
    fn more_threads_than_rows() {
        let renderer = Renderer::new(5, 2, MAX_ITERATIONS);
        let single = renderer.render_single().into_raw();
        assert_eq!(renderer.render(6).unwrap().into_raw(), single);
    }

    #[test]
    fn zero_threads_is_an_error() {
        let renderer = Renderer::new(4, 4, MAX_ITERATIONS);
        match renderer.render(0) {
            Err(FractError::Render { .. }) => (),
            other => panic!("expected a render error, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn renders_are_repeatable() {
        let renderer = Renderer::new(64, 64, MAX_ITERATIONS);
        assert_eq!(renderer.render_single().into_raw(), renderer.render_single().into_raw());
    }
}
