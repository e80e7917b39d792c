// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a divergence score into a colour.  The palette is arbitrary
//! on purpose: channels cycle at different rates so that neighbouring
//! escape bands come out in visibly different hues.

use image::{Pixel, Rgba};

/// The score channel value at which a point counts as inside the set.
const INSIDE: i32 = 255;

/// Maps a score to an opaque RGBA colour.  Points that never escaped
/// are black.  Everything else gets `(v mod 256, 2v mod 255, 3v mod
/// 255)` where `v` is the score scaled to 255 and truncated toward
/// zero.  Remainders truncate too, and each channel wraps into a byte,
/// so small negative scores still produce a colour rather than a
/// clamp.
pub fn colorize(score: f64) -> Rgba<u8> {
    let v = (score * 255.0) as i32;
    if v == INSIDE {
        return Rgba::from_channels(0, 0, 0, 255);
    }
    Rgba::from_channels(v as u8, (2 * v % 255) as u8, (3 * v % 255) as u8, 255)
}
