#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane for
//! which repeatedly squaring `z` and adding `c`, starting from zero,
//! never runs off to infinity.  Points outside the set do run off, and
//! how quickly they do so is the number used to colour the image.
//!
//! This crate renders a fixed window of the plane, from -1.5 to 0.5 on
//! the real axis and -1.0 to 1.0 on the imaginary axis, which frames
//! the main cardioid and its largest bulbs.  Each pixel is mapped to a
//! point, scored by how many iterations its orbit survives out of a
//! fixed budget, and painted with a deliberately arbitrary palette.
//! Points that never escape are painted black.

pub mod errors;
pub mod escape;
pub mod output;
pub mod palette;
pub mod planes;
pub mod render;

pub use errors::FractError;
pub use escape::{mandel, MAX_ITERATIONS};
pub use output::write_png;
pub use palette::colorize;
pub use planes::{Pixel, PlaneMapper};
pub use render::Renderer;

/// Width of the rendered image, in pixels.
pub const WIDTH: usize = 400;

/// Height of the rendered image, in pixels.
pub const HEIGHT: usize = 400;
