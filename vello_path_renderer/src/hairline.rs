// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deciding whether a thin stroke can be drawn as a hairline with partial coverage.
//!
//! Drawing a zero-width line with fractional coverage is much faster than widening the
//! stroke geometrically, and for strokes thinner than a device pixel the result is close
//! enough.

use crate::kurbo::{Affine, Vec2};
use crate::style::{StrokeStyle, Style};

/// The result of classifying a stroke, see [`HairlineClassification::classify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HairlineClassification {
    /// Whether the stroke can be drawn as a hairline.
    pub is_hairline_equivalent: bool,
    /// The coverage to draw the hairline with, in `[0, 1]`.
    ///
    /// Only meaningful if `is_hairline_equivalent` is set; zero otherwise.
    pub coverage: f64,
}

impl HairlineClassification {
    /// Classify `style` under `transform`.
    pub fn classify(style: &Style, transform: &Affine) -> Self {
        match is_stroke_hairline_or_equivalent(style, transform) {
            Some(coverage) => Self {
                is_hairline_equivalent: true,
                coverage,
            },
            None => Self {
                is_hairline_equivalent: false,
                coverage: 0.0,
            },
        }
    }
}

/// Returns the coverage to draw a hairline with if `style` can be treated as one under
/// `transform`, and `None` if the stroke has to be widened.
///
/// A style with a path effect is never hairline-equivalent. An explicit hairline always is,
/// with full coverage. Otherwise only plain strokes (not fills, not stroke-and-fill) whose
/// device space width is at most one pixel qualify, see [`treat_aa_stroke_as_hairline`].
pub fn is_stroke_hairline_or_equivalent(style: &Style, transform: &Affine) -> Option<f64> {
    if style.path_effect().is_some() {
        return None;
    }

    let stroke = style.stroke_rec();
    match stroke.style() {
        StrokeStyle::Hairline => Some(1.0),
        StrokeStyle::Stroke => treat_aa_stroke_as_hairline(stroke.width(), transform),
        StrokeStyle::Fill | StrokeStyle::StrokeAndFill => None,
    }
}

/// Returns the coverage to draw an anti-aliased stroke of `width` as a hairline, if its
/// device space extent is no more than a pixel in each direction.
///
/// A zero width always qualifies with full coverage. Otherwise the coverage is the average
/// device space length of the stroke width mapped along both axes.
pub fn treat_aa_stroke_as_hairline(width: f64, transform: &Affine) -> Option<f64> {
    if width == 0.0 {
        return Some(1.0);
    }

    // Map (width, 0) and (0, width); translation doesn't apply to vectors.
    let [a, b, c, d, _, _] = transform.as_coeffs();
    let len0 = fast_len(Vec2::new(a * width, b * width));
    let len1 = fast_len(Vec2::new(c * width, d * width));

    if len0 <= 1.0 && len1 <= 1.0 {
        Some((len0 + len1) * 0.5)
    } else {
        None
    }
}

/// Cheap approximation of a vector length, exact for axis-aligned vectors and at most ~12%
/// too long otherwise.
fn fast_len(v: Vec2) -> f64 {
    let x = v.x.abs();
    let y = v.y.abs();
    if x < y {
        y + x * 0.5
    } else {
        x + y * 0.5
    }
}
