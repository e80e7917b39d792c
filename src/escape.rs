// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.  A point `c` belongs to the Mandelbrot set
//! if `z <- z * z + c`, starting from zero, stays within a radius of
//! two forever.  We can only iterate a bounded number of times, so
//! the answer is a score: how quickly the orbit left that radius,
//! scaled by the iteration budget.

use num::Complex;

/// The iteration budget used by the renderer.
pub const MAX_ITERATIONS: usize = 80;

/// Once the orbit is further than this from the origin it can never
/// come back.
const ESCAPE_RADIUS: f64 = 2.0;

/// Returns `(i - 1) / limit` where `i` is the first iteration at which
/// `|z| > 2`, or exactly `1.0` if the orbit never escapes within
/// `limit` iterations.
///
/// The modulus is the true Euclidean norm rather than the squared
/// norm, which keeps boundary points on the same side of the radius
/// as a hypot-based absolute value would put them.
pub fn mandel(c: Complex<f64>, limit: usize) -> f64 {
    let mut z: Complex<f64> = Complex::new(0.0, 0.0);
    for i in 0..limit {
        if z.norm() > ESCAPE_RADIUS {
            return (i as f64 - 1.0) / limit as f64;
        }
        z = z * z + c;
    }
    1.0
}
