// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths with a fill type.

use crate::kurbo::{BezPath, Rect};
use crate::peniko::Fill;

/// How the interior of a path is determined.
///
/// The inverse variants cover everything *outside* the region the corresponding
/// non-inverse rule would fill.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillType {
    /// Non-zero winding.
    #[default]
    Winding,
    /// Even-odd.
    EvenOdd,
    /// Inverse of non-zero winding.
    InverseWinding,
    /// Inverse of even-odd.
    InverseEvenOdd,
}

impl FillType {
    /// Whether this is one of the inverse fill types.
    #[inline]
    pub fn is_inverse(self) -> bool {
        matches!(self, Self::InverseWinding | Self::InverseEvenOdd)
    }

    /// The underlying fill rule, ignoring inversion.
    #[inline]
    pub fn fill_rule(self) -> Fill {
        match self {
            Self::Winding | Self::InverseWinding => Fill::NonZero,
            Self::EvenOdd | Self::InverseEvenOdd => Fill::EvenOdd,
        }
    }

    /// The non-inverse fill type with the same fill rule.
    #[inline]
    pub fn to_non_inverse(self) -> Self {
        match self {
            Self::Winding | Self::InverseWinding => Self::Winding,
            Self::EvenOdd | Self::InverseEvenOdd => Self::EvenOdd,
        }
    }
}

impl From<Fill> for FillType {
    fn from(value: Fill) -> Self {
        match value {
            Fill::NonZero => Self::Winding,
            Fill::EvenOdd => Self::EvenOdd,
        }
    }
}

/// A path in local coordinates together with its fill type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    path: BezPath,
    fill_type: FillType,
}

impl Path {
    /// Create a new path.
    pub fn new(path: BezPath, fill_type: FillType) -> Self {
        Self { path, fill_type }
    }

    /// The geometry of the path.
    #[inline]
    pub fn bez_path(&self) -> &BezPath {
        &self.path
    }

    /// The fill type of the path.
    #[inline]
    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    /// Return the same path with a different fill type.
    #[must_use]
    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = fill_type;
        self
    }

    /// Whether the fill type of this path is an inverse one.
    #[inline]
    pub fn is_inverse_fill_type(&self) -> bool {
        self.fill_type.is_inverse()
    }

    /// Whether the path has no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// The bounding box of all points of the path in local coordinates, including the
    /// control points of curves.
    ///
    /// This is conservative: it contains the filled area, but may be larger than it for
    /// curved paths.
    pub fn bounds(&self) -> Rect {
        self.path.control_box()
    }
}

impl From<BezPath> for Path {
    fn from(path: BezPath) -> Self {
        Self::new(path, FillType::default())
    }
}
