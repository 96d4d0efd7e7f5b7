// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.
//!
//! There are two tiers. [`DrawError`] is the only recoverable failure: a renderer could not
//! submit its work, and the caller may retry with a different renderer. [`ContractViolation`]
//! describes a programming error in the caller, and is reported by the validators in
//! [`args`](crate::args) and [`renderer`](crate::renderer).

use thiserror::Error;

use crate::stencil::StencilSupport;

/// A recoverable failure while drawing a path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrawError {
    /// The renderer failed to submit its work to the target.
    #[error("Failed to submit path rendering work: {0}")]
    Submission(&'static str),
    /// The renderer could not allocate the GPU resources it needs.
    #[error("Failed to allocate {bytes} bytes of GPU resources")]
    Allocation {
        /// The size of the failed allocation.
        bytes: usize,
    },
    /// The draw target or resource provider is not one this renderer can drive.
    #[error("The draw target is not supported by this path renderer")]
    IncompatibleTarget,
}

/// A broken precondition of the path renderer protocol.
///
/// These are bugs in the caller, not runtime conditions. The checked entry points in
/// [`PathRendererExt`](crate::PathRendererExt) panic with this message when validation is
/// enabled.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContractViolation {
    /// The path has no elements.
    #[error("path must not be empty")]
    EmptyPath,
    /// Stencil support was queried for an inverse filled path.
    #[error("stencil support must not be queried for an inverse filled path")]
    InverseFillStencilQuery,
    /// A draw was issued to a renderer which would reject the equivalent capability query.
    #[error("path renderer cannot draw this path")]
    CannotDraw,
    /// User stencil settings are in use, but the renderer only has the given support.
    #[error("user stencil settings require `NoRestriction` stencil support, got `{0:?}`")]
    StencilSettingsNeedNoRestriction(StencilSupport),
    /// User stencil settings are in use with a style that is not a simple fill.
    #[error("user stencil settings require a simple fill style")]
    StencilSettingsNeedSimpleFill,
    /// A stencil-only draw was issued to a renderer with no stencil support for the path.
    #[error("path renderer has no stencil support for this path")]
    StencilUnsupported,
}
