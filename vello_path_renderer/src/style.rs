// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How a path is styled: filled, stroked, and whether a path effect applies.

use core::fmt::Debug;
use std::sync::Arc;

use log::warn;
use smallvec::SmallVec;

use crate::kurbo::{self, BezPath, Cap, Join, Stroke};

/// The designation of a stroke record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeStyle {
    /// The interior is filled; nothing is stroked.
    Fill,
    /// A stroke of minimal width, drawn without geometric widening.
    Hairline,
    /// A stroke of positive width.
    Stroke,
    /// A stroke of positive width, with the interior filled as well.
    StrokeAndFill,
}

/// The stroking part of a [`Style`].
///
/// A zero-width stroke is a hairline, and a zero-width stroke-and-fill collapses to a fill.
/// A negative width also means fill. Dashing is not part of the record; see
/// [`Style::from_stroke`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRec {
    style: StrokeStyle,
    stroke: Stroke,
}

impl StrokeRec {
    /// A record that fills.
    pub fn fill() -> Self {
        Self {
            style: StrokeStyle::Fill,
            stroke: Stroke::new(0.0),
        }
    }

    /// A hairline stroke with default joins and caps.
    pub fn hairline() -> Self {
        Self {
            style: StrokeStyle::Hairline,
            stroke: Stroke::new(0.0),
        }
    }

    /// A stroke with the width, joins and caps of `stroke`.
    ///
    /// The dash pattern of `stroke` is dropped.
    pub fn stroke(stroke: &Stroke) -> Self {
        Self::new(stroke, false)
    }

    /// Like [`StrokeRec::stroke`], but also fills the interior.
    pub fn stroke_and_fill(stroke: &Stroke) -> Self {
        Self::new(stroke, true)
    }

    fn new(stroke: &Stroke, fill_too: bool) -> Self {
        let width = stroke.width;
        if !width.is_finite() {
            warn!("A stroke width is not finite ({width}), filling instead.");
        }

        let style = if !width.is_finite() || width < 0.0 {
            StrokeStyle::Fill
        } else {
            match (width == 0.0, fill_too) {
                (true, true) => StrokeStyle::Fill,
                (true, false) => StrokeStyle::Hairline,
                (false, true) => StrokeStyle::StrokeAndFill,
                (false, false) => StrokeStyle::Stroke,
            }
        };

        let mut stroke = Stroke {
            dash_pattern: SmallVec::new(),
            dash_offset: 0.0,
            ..stroke.clone()
        };
        if style == StrokeStyle::Fill {
            stroke.width = 0.0;
        }

        Self { style, stroke }
    }

    /// The designation of this record.
    #[inline]
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Whether this record only fills.
    #[inline]
    pub fn is_fill_style(&self) -> bool {
        self.style == StrokeStyle::Fill
    }

    /// Whether this record is a hairline.
    #[inline]
    pub fn is_hairline_style(&self) -> bool {
        self.style == StrokeStyle::Hairline
    }

    /// The stroke width. Zero for fills and hairlines.
    #[inline]
    pub fn width(&self) -> f64 {
        self.stroke.width
    }

    /// The join style.
    #[inline]
    pub fn join(&self) -> Join {
        self.stroke.join
    }

    /// The cap style at the start of open subpaths.
    #[inline]
    pub fn cap(&self) -> Cap {
        self.stroke.start_cap
    }

    /// The stroke parameters, without any dash pattern.
    #[inline]
    pub fn stroke_params(&self) -> &Stroke {
        &self.stroke
    }
}

impl Default for StrokeRec {
    fn default() -> Self {
        Self::fill()
    }
}

/// A transformation of path geometry that is applied before filling or stroking.
///
/// Once a style carries a path effect, its outline is no longer derived purely from the
/// stroke width, joins and caps.
pub trait PathEffect: Debug + Send + Sync {
    /// Apply the effect to `path`.
    fn filter_path(&self, path: &BezPath) -> BezPath;
}

/// A dash pattern, as a path effect.
#[derive(Debug, Clone, PartialEq)]
pub struct DashEffect {
    intervals: SmallVec<[f64; 4]>,
    phase: f64,
}

impl DashEffect {
    /// Create a dash effect from alternating on/off `intervals`, starting `phase` into the
    /// pattern.
    ///
    /// Returns `None` if the pattern has no positive length or contains a negative or
    /// non-finite interval.
    pub fn new(intervals: &[f64], phase: f64) -> Option<Self> {
        let valid = intervals.iter().all(|it| it.is_finite() && *it >= 0.0);
        let total: f64 = intervals.iter().sum();
        if !valid || !phase.is_finite() || total <= 0.0 {
            return None;
        }

        Some(Self {
            intervals: intervals.iter().copied().collect(),
            phase,
        })
    }

    /// The on/off intervals.
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// The offset into the pattern.
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl PathEffect for DashEffect {
    fn filter_path(&self, path: &BezPath) -> BezPath {
        kurbo::dash(path.iter(), self.phase, &self.intervals).collect()
    }
}

/// Styling information for a path: the stroke record and an optional path effect.
#[derive(Debug, Clone, Default)]
pub struct Style {
    stroke_rec: StrokeRec,
    path_effect: Option<Arc<dyn PathEffect>>,
}

impl Style {
    /// Create a style.
    pub fn new(stroke_rec: StrokeRec, path_effect: Option<Arc<dyn PathEffect>>) -> Self {
        Self {
            stroke_rec,
            path_effect,
        }
    }

    /// A plain fill with no path effect.
    pub fn simple_fill() -> Self {
        Self::default()
    }

    /// A hairline with no path effect.
    pub fn hairline() -> Self {
        Self::new(StrokeRec::hairline(), None)
    }

    /// Create a style from a kurbo stroke.
    ///
    /// A dash pattern on `stroke` becomes a [`DashEffect`].
    pub fn from_stroke(stroke: &Stroke) -> Self {
        let path_effect = DashEffect::new(&stroke.dash_pattern, stroke.dash_offset)
            .map(|dash| Arc::new(dash) as Arc<dyn PathEffect>);

        Self::new(StrokeRec::stroke(stroke), path_effect)
    }

    /// Return this style with `path_effect` applied.
    #[must_use]
    pub fn with_path_effect(mut self, path_effect: Arc<dyn PathEffect>) -> Self {
        self.path_effect = Some(path_effect);
        self
    }

    /// The stroke record.
    #[inline]
    pub fn stroke_rec(&self) -> &StrokeRec {
        &self.stroke_rec
    }

    /// The path effect, if any.
    #[inline]
    pub fn path_effect(&self) -> Option<&dyn PathEffect> {
        self.path_effect.as_deref()
    }

    /// Whether the path is filled directly: no stroking, no path effect.
    #[inline]
    pub fn is_simple_fill(&self) -> bool {
        self.stroke_rec.is_fill_style() && self.path_effect.is_none()
    }

    /// Whether the style is a hairline without a path effect.
    #[inline]
    pub fn is_simple_hairline(&self) -> bool {
        self.stroke_rec.is_hairline_style() && self.path_effect.is_none()
    }
}

impl From<StrokeRec> for Style {
    fn from(stroke_rec: StrokeRec) -> Self {
        Self::new(stroke_rec, None)
    }
}
