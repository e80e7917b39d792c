// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Writes a finished image to disk as a PNG.  The image is encoded in
//! memory first, so a file only appears once there is something
//! complete to put in it.

use image::png::PNGEncoder;
use image::{ColorType, RgbaImage};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::errors::FractError;

/// Encodes `image` as an 8-bit RGBA PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, std::io::Error> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();
    PNGEncoder::new(&mut bytes).encode(image, width, height, ColorType::RGBA(8))?;
    Ok(bytes)
}

/// Encodes `image` and writes it to `path`.  A path that cannot be
/// created is reported as such; nothing else is tried.  Regular files
/// are synced before returning.  If the write fails part way and this
/// call created the file, the partial file is removed.  Pipes, devices
/// and files that were already there are never unlinked.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<(), FractError> {
    let name = path.display().to_string();
    let bytes = encode_png(image).map_err(|cause| FractError::Encode {
        path: name.clone(),
        cause,
    })?;
    debug!("encoded {} bytes of png", bytes.len());

    let existed = path.exists();
    let mut output = File::create(path).map_err(|cause| FractError::OutputPath {
        path: name,
        cause,
    })?;
    let regular = output
        .metadata()
        .map(|m| m.file_type().is_file())
        .unwrap_or(false);
    let created = regular && !existed;

    deliver(&mut output, &bytes, path, created)?;
    if regular {
        output
            .sync_all()
            .map_err(|cause| discard(path, created, cause))?;
    }
    Ok(())
}

/// Writes `bytes` out in full.  On failure, removes `path` only if
/// `created` says this run made it.
fn deliver<W: Write>(
    output: &mut W,
    bytes: &[u8],
    path: &Path,
    created: bool,
) -> Result<(), FractError> {
    output
        .write_all(bytes)
        .and_then(|_| output.flush())
        .map_err(|cause| discard(path, created, cause))
}

fn discard(path: &Path, created: bool, cause: io::Error) -> FractError {
    let name = path.display().to_string();
    if created {
        if let Err(e) = fs::remove_file(path) {
            warn!("could not remove partial file {}: {}", name, e);
        }
    }
    FractError::Encode { path: name, cause }
}
