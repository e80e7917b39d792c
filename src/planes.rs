// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and the fixed window of the complex plane that frames the main
//! body of the Mandelbrot set.
use num::Complex;

/// The horizontal and vertical zoom factors.  The integral plane is
/// stretched to cover this much of the real and imaginary axes.
pub const ZOOM: (f64, f64) = (2.0, 2.0);

/// Describes the width and height of an integral plane that is assumed
/// to start at 0,0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels on the integral plane onto the complex plane.  The
/// window is fixed: real parts run from -1.5 up to 0.5 and imaginary
/// parts from -1.0 up to 1.0, whatever the size of the integral plane.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-lower corner of the integral cartesian plane.  The
    /// left-upper is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    zoom: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane.
    pub fn new(width: usize, height: usize) -> PlaneMapper {
        PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            zoom: ZOOM,
        }
    }

    /// How many pixels the plane holds, which is also how many RGBA
    /// cells the render buffer needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// True when either side is zero and there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the equivalent location in the window.  The
    /// operations are ordered so the result is reproducible to the bit.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        let (zx, zy) = self.zoom;
        Complex::new(
            (pixel.0 as f64) / (self.integral_plane.0 as f64) * zx - (zx / 2.0 + 0.5),
            (pixel.1 as f64) / (self.integral_plane.1 as f64) * zy - zy / 2.0,
        )
    }
}
