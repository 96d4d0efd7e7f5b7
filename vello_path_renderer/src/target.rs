// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collaborators a path renderer draws with: resource provider, draw target, clip and
//! paint.
//!
//! These are passed through the protocol without being interpreted. A concrete renderer
//! reaches its own backend types by downcasting, see [`DrawTarget::as_any_mut`].

use core::any::Any;
use std::sync::Arc;

use crate::kurbo::{Affine, BezPath, Rect};
use crate::peniko::{Brush, Fill};

/// Shader features of the device.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShaderCaps {
    /// Screen space derivatives are available in fragment shaders.
    pub shader_derivative_support: bool,
    /// Integer arithmetic is available in shaders.
    pub integer_support: bool,
    /// Dual source blending is available.
    pub dual_source_blending_support: bool,
    /// Sample locations can be read in fragment shaders.
    pub sample_variables_support: bool,
}

/// Device capabilities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Caps {
    /// Shader features.
    pub shader_caps: ShaderCaps,
}

/// Allocates GPU resources on behalf of path renderers.
pub trait ResourceProvider: Any {
    /// The capabilities of the device resources are allocated on.
    fn caps(&self) -> &Caps;

    /// Access the concrete provider.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The sink for rendering work.
pub trait DrawTarget: Any {
    /// Width in device pixels.
    fn width(&self) -> u16;

    /// Height in device pixels.
    fn height(&self) -> u16;

    /// Whether the stencil buffer attached to the target is multisampled.
    fn is_stencil_buffer_multisampled(&self) -> bool;

    /// Access the concrete target.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A clip that only depends on a scissor rectangle, usable for stencil-only draws.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FixedClip {
    scissor: Option<Rect>,
}

impl FixedClip {
    /// A clip that does not restrict anything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A clip to a device space rectangle.
    pub fn scissor(rect: Rect) -> Self {
        Self {
            scissor: Some(rect),
        }
    }

    /// The scissor rectangle, if enabled.
    #[inline]
    pub fn scissor_rect(&self) -> Option<Rect> {
        self.scissor
    }

    /// Whether any clipping happens.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.scissor.is_some()
    }
}

/// A clip for general draws.
#[derive(Debug, Clone)]
pub enum Clip {
    /// A scissor-only clip.
    Fixed(FixedClip),
    /// Clip to the inside of a path.
    Path {
        /// The clip geometry.
        path: Arc<BezPath>,
        /// The fill rule of the clip geometry.
        fill_rule: Fill,
        /// The transform from the clip geometry to device space.
        transform: Affine,
    },
}

impl Default for Clip {
    fn default() -> Self {
        Self::Fixed(FixedClip::disabled())
    }
}

impl From<FixedClip> for Clip {
    fn from(clip: FixedClip) -> Self {
        Self::Fixed(clip)
    }
}

/// How the color of a draw is produced.
///
/// An empty paint has no brush, and a draw with it performs no color writes.
#[derive(Debug, Clone)]
pub struct Paint {
    /// The brush, if color is written at all.
    pub brush: Option<Brush>,
}

impl Paint {
    /// A paint that writes no color.
    pub fn empty() -> Self {
        Self { brush: None }
    }

    /// A paint with `brush`.
    pub fn new(brush: impl Into<Brush>) -> Self {
        Self {
            brush: Some(brush.into()),
        }
    }

    /// Whether a draw with this paint writes color.
    #[inline]
    pub fn writes_color(&self) -> bool {
        self.brush.is_some()
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::empty()
    }
}
