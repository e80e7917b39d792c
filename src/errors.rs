// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can stop a render from reaching disk.  The maths
//! itself cannot fail; only thread bookkeeping and output can.

use failure::Fail;
use std::io;

/// The ways a run of the renderer can fail.
#[derive(Debug, Fail)]
pub enum FractError {
    /// The output file could not be created.
    #[fail(display = "Error opening file {}: {}", path, cause)]
    OutputPath {
        /// The path we tried to create.
        path: String,
        /// Why the operating system refused.
        #[cause]
        cause: io::Error,
    },

    /// The image could not be encoded, or the encoded bytes could not
    /// be written out.
    #[fail(display = "Error encoding image to {}: {}", path, cause)]
    Encode {
        /// The path being written.
        path: String,
        /// The underlying encoder or write failure.
        #[cause]
        cause: io::Error,
    },

    /// The pixel grid could not be assembled.
    #[fail(display = "Render failure: {}", reason)]
    Render {
        /// What went wrong.
        reason: String,
    },
}
