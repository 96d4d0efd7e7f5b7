// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device space bounds of paths.

use log::warn;

use crate::kurbo::{Affine, Rect};
use crate::path::Path;

/// Compute the device space bounds of `path` under `transform`.
///
/// Inverse filled paths cover everything outside of their geometry, so their bounds are
/// exactly the device rectangle `(0, 0, width, height)`.
///
/// The bounds of other paths are the transformed local bounding box, and are *not* clipped
/// to the device. Callers that need that must intersect the result themselves; some
/// renderers use the off-screen extent to estimate how much work a path is.
pub fn path_dev_bounds(path: &Path, width: u16, height: u16, transform: &Affine) -> Rect {
    if path.is_inverse_fill_type() {
        return Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
    }

    let bounds = transform.transform_rect_bbox(path.bounds());
    if bounds.is_nan() {
        warn!("A path or its transform contains NaN, its device bounds are undefined.");
    }

    bounds
}
