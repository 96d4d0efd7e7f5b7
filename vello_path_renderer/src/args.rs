// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Argument bundles for capability queries, draws and stencil-only draws.
//!
//! Each bundle borrows everything it refers to and only lives for the duration of one call.
//! The `validate` methods check the preconditions that don't depend on a particular
//! renderer. They are always available, independently of whether the checked entry points
//! in [`PathRendererExt`](crate::PathRendererExt) run them.

use crate::error::ContractViolation;
use crate::kurbo::Affine;
use crate::path::Path;
use crate::peniko::Color;
use crate::stencil::UserStencilSettings;
use crate::style::Style;
use crate::target::{Clip, DrawTarget, FixedClip, Paint, ResourceProvider, ShaderCaps};

/// Arguments to [`can_draw_path`](crate::PathRendererExt::can_draw_path).
#[derive(Debug, Clone, Copy)]
pub struct CanDrawPathArgs<'a> {
    /// The shader capabilities of the device.
    pub shader_caps: &'a ShaderCaps,
    /// The transform from local to device space.
    pub view_matrix: &'a Affine,
    /// The path to draw.
    pub path: &'a Path,
    /// The styling info (path effect, stroking info).
    pub style: &'a Style,
    /// Whether anti-aliasing is required.
    pub anti_alias: bool,
    /// Whether the draw will use non-default [`UserStencilSettings`].
    ///
    /// Only of interest to renderers that use the stencil buffer themselves.
    pub has_user_stencil_settings: bool,
    /// Whether the target's stencil buffer is multisampled.
    pub is_stencil_buffer_msaa: bool,
}

impl<'a> CanDrawPathArgs<'a> {
    /// Create a capability query without user stencil settings on a single-sampled
    /// stencil buffer.
    pub fn new(
        shader_caps: &'a ShaderCaps,
        view_matrix: &'a Affine,
        path: &'a Path,
        style: &'a Style,
        anti_alias: bool,
    ) -> Self {
        Self {
            shader_caps,
            view_matrix,
            path,
            style,
            anti_alias,
            has_user_stencil_settings: false,
            is_stencil_buffer_msaa: false,
        }
    }

    /// Check the preconditions of a capability query.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        if self.path.is_empty() {
            return Err(ContractViolation::EmptyPath);
        }

        Ok(())
    }
}

/// Arguments to [`draw_path`](crate::PathRendererExt::draw_path).
///
/// If [`user_stencil_settings`](Self::user_stencil_settings) are in use, the renderer must
/// have [`NoRestriction`](crate::StencilSupport::NoRestriction) stencil support for the path,
/// and the style must be a simple fill.
pub struct DrawPathArgs<'a> {
    /// The resource provider for creating GPU resources to render the path.
    pub resource_provider: &'a mut dyn ResourceProvider,
    /// How color is produced.
    pub paint: &'a Paint,
    /// The stencil state requested by the caller.
    pub user_stencil_settings: &'a UserStencilSettings,
    /// The target the path will be rendered to.
    pub target: &'a mut dyn DrawTarget,
    /// The clip.
    pub clip: &'a Clip,
    /// The color to render with.
    pub color: Color,
    /// The transform from local to device space.
    pub view_matrix: &'a Affine,
    /// The path to draw.
    pub path: &'a Path,
    /// The styling info (path effect, stroking info).
    pub style: &'a Style,
    /// Whether anti-aliasing is required.
    pub anti_alias: bool,
    /// Whether gamma-correct rendering is to be used.
    pub gamma_correct: bool,
}

impl DrawPathArgs<'_> {
    /// Check the preconditions of a draw that don't depend on the renderer.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        if self.path.is_empty() {
            return Err(ContractViolation::EmptyPath);
        }

        Ok(())
    }

    /// The capability query equivalent to this draw.
    ///
    /// A draw is only valid if the renderer accepts this query.
    pub fn can_draw_args(&self) -> CanDrawPathArgs<'_> {
        CanDrawPathArgs {
            shader_caps: &self.resource_provider.caps().shader_caps,
            view_matrix: self.view_matrix,
            path: self.path,
            style: self.style,
            anti_alias: self.anti_alias,
            has_user_stencil_settings: !self.user_stencil_settings.is_unused(),
            is_stencil_buffer_msaa: self.target.is_stencil_buffer_multisampled(),
        }
    }
}

impl core::fmt::Debug for DrawPathArgs<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawPathArgs")
            .field("paint", self.paint)
            .field("user_stencil_settings", self.user_stencil_settings)
            .field("clip", self.clip)
            .field("color", &self.color)
            .field("view_matrix", self.view_matrix)
            .field("path", self.path)
            .field("style", self.style)
            .field("anti_alias", &self.anti_alias)
            .field("gamma_correct", &self.gamma_correct)
            .finish_non_exhaustive()
    }
}

/// Arguments to [`stencil_path`](crate::PathRendererExt::stencil_path).
///
/// The caller guarantees that the writable stencil bits are zero before the call.
pub struct StencilPathArgs<'a> {
    /// The resource provider for creating GPU resources to render the path.
    pub resource_provider: &'a mut dyn ResourceProvider,
    /// The target of the draws.
    pub target: &'a mut dyn DrawTarget,
    /// The clip.
    pub clip: &'a FixedClip,
    /// The transform from local to device space.
    pub view_matrix: &'a Affine,
    /// The path to stencil.
    pub path: &'a Path,
    /// Whether the path is to be drawn anti-aliased. Only set when multisampling is
    /// available.
    pub anti_alias: bool,
}

impl StencilPathArgs<'_> {
    /// Check the preconditions of a stencil-only draw that don't depend on the renderer.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        if self.path.is_empty() {
            return Err(ContractViolation::EmptyPath);
        }

        Ok(())
    }
}

impl core::fmt::Debug for StencilPathArgs<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StencilPathArgs")
            .field("clip", self.clip)
            .field("view_matrix", self.view_matrix)
            .field("path", self.path)
            .field("anti_alias", &self.anti_alias)
            .finish_non_exhaustive()
    }
}
