// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`PathRenderer`] trait, and the checked entry points callers use to drive it.

use log::{debug, trace, warn};

use crate::args::{CanDrawPathArgs, DrawPathArgs, StencilPathArgs};
use crate::error::{ContractViolation, DrawError};
use crate::path::Path;
use crate::peniko::Color;
use crate::stencil::{StencilSupport, UserStencilSettings};
use crate::style::Style;
use crate::target::{Clip, Paint};

/// Whether the checked entry points validate their preconditions.
const VALIDATE: bool = cfg!(any(debug_assertions, feature = "strict_validation"));

/// One strategy for drawing paths into a [`DrawTarget`](crate::DrawTarget).
///
/// Implementors provide the `on_*` hooks. Callers should not use the hooks directly, but the
/// checked methods of [`PathRendererExt`], which is implemented for every path renderer.
///
/// [`on_stencil_support`](Self::on_stencil_support) and
/// [`on_can_draw_path`](Self::on_can_draw_path) must behave as pure functions: a dispatcher
/// may call them on many renderers, from several threads, without ever drawing.
pub trait PathRenderer {
    /// The stencil support for `path`. The path is never inverse filled, and is always filled
    /// rather than stroked.
    ///
    /// Renderers without limitations keep the default, [`StencilSupport::NoRestriction`].
    fn on_stencil_support(&self, _path: &Path) -> StencilSupport {
        StencilSupport::NoRestriction
    }

    /// Whether this renderer can draw the path described by `args`.
    ///
    /// Returning `false` lets the caller fall back to another renderer. This must not fail
    /// for unsupported combinations, and must not assume a draw follows.
    fn on_can_draw_path(&self, args: &CanDrawPathArgs<'_>) -> bool;

    /// Draw the path into `args.target`.
    ///
    /// If [`on_stencil_support`](Self::on_stencil_support) returns
    /// [`StencilSupport::NoRestriction`] for the path, the renderer must respect
    /// `args.user_stencil_settings`.
    fn on_draw_path(&mut self, args: DrawPathArgs<'_>) -> Result<(), DrawError>;

    /// Draw the path into the stencil buffer only, writing non-zero values to covered pixels.
    ///
    /// The default draws through [`on_draw_path`](Self::on_draw_path), see
    /// [`stencil_path_via_draw`]. Renderers must override this if they ever return
    /// [`StencilSupport::StencilOnly`], or if they can't draw a simple fill with
    /// [`StencilSupport::NoRestriction`].
    fn on_stencil_path(&mut self, args: StencilPathArgs<'_>) {
        stencil_path_via_draw(self, args);
    }
}

/// The entry points for driving a [`PathRenderer`].
///
/// These check the protocol's preconditions when `debug_assertions` or the
/// `strict_validation` feature are enabled, and panic if one is violated.
pub trait PathRendererExt: PathRenderer {
    /// The stencil support for `path`, which must not be inverse filled.
    #[track_caller]
    fn stencil_support(&self, path: &Path) -> StencilSupport {
        if VALIDATE {
            enforce(check_stencil_query(path));
        }
        self.on_stencil_support(path)
    }

    /// Whether this renderer can draw the path described by `args`.
    #[track_caller]
    fn can_draw_path(&self, args: &CanDrawPathArgs<'_>) -> bool {
        if VALIDATE {
            enforce(args.validate());
        }
        self.on_can_draw_path(args)
    }

    /// Draw a path.
    ///
    /// The renderer must accept the equivalent query (see [`DrawPathArgs::can_draw_args`]).
    /// If user stencil settings are in use, it must also have
    /// [`StencilSupport::NoRestriction`] for the path and the style must be a simple fill.
    ///
    /// An error means this renderer could not complete the draw, and the caller may retry
    /// with another one.
    #[track_caller]
    fn draw_path(&mut self, args: DrawPathArgs<'_>) -> Result<(), DrawError> {
        if VALIDATE {
            enforce(check_draw_preconditions(&*self, &args));
        }
        trace!(
            "Drawing path with {} elements",
            args.path.bez_path().elements().len()
        );
        self.on_draw_path(args)
    }

    /// Draw a path into the stencil buffer only.
    ///
    /// The writable stencil bits must be zero beforehand; afterwards every pixel covered by
    /// the path holds a non-zero value. The renderer must have stencil support for the path.
    #[track_caller]
    fn stencil_path(&mut self, args: StencilPathArgs<'_>) {
        if VALIDATE {
            enforce(check_stencil_preconditions(&*self, &args));
        }
        trace!(
            "Stencilling path with {} elements",
            args.path.bez_path().elements().len()
        );
        self.on_stencil_path(args);
    }
}

impl<R: PathRenderer + ?Sized> PathRendererExt for R {}

/// Stencil a path by drawing it with [`UserStencilSettings::REPLACE_ALL`].
///
/// This is the default of [`PathRenderer::on_stencil_path`], and can be called by renderers
/// that override it but still want this behaviour in some cases. The synthesized draw
/// uses an empty paint so no color is written, a simple fill style, and an unused opaque
/// white color. Anti-aliasing and gamma correction are off: coverage must not interact with
/// a raw stencil replace, multisampling provides anti-aliasing where it is available.
///
/// Covered pixels end up holding `0xffff`. Using this commits the renderer to drawing simple
/// fills with [`StencilSupport::NoRestriction`].
///
/// A failed draw can't be reported through the stencil interface, so it is logged.
pub fn stencil_path_via_draw<R: PathRenderer + ?Sized>(
    renderer: &mut R,
    args: StencilPathArgs<'_>,
) {
    let paint = Paint::empty();
    let style = Style::simple_fill();
    let clip = Clip::Fixed(*args.clip);

    let draw_args = DrawPathArgs {
        resource_provider: args.resource_provider,
        paint: &paint,
        user_stencil_settings: &UserStencilSettings::REPLACE_ALL,
        target: args.target,
        clip: &clip,
        color: Color::WHITE,
        view_matrix: args.view_matrix,
        path: args.path,
        style: &style,
        anti_alias: false,
        gamma_correct: false,
    };

    if let Err(e) = renderer.draw_path(draw_args) {
        warn!("Failed to stencil a path through its draw implementation: {e}");
    }
}

/// Check whether `args` is a valid draw for `renderer`.
///
/// This is what [`PathRendererExt::draw_path`] runs when validation is enabled.
pub fn check_draw_preconditions<R: PathRenderer + ?Sized>(
    renderer: &R,
    args: &DrawPathArgs<'_>,
) -> Result<(), ContractViolation> {
    args.validate()?;

    if !renderer.on_can_draw_path(&args.can_draw_args()) {
        return Err(ContractViolation::CannotDraw);
    }

    if !args.user_stencil_settings.is_unused() {
        check_stencil_query(args.path)?;
        let support = renderer.on_stencil_support(args.path);
        if support != StencilSupport::NoRestriction {
            return Err(ContractViolation::StencilSettingsNeedNoRestriction(support));
        }
        if !args.style.is_simple_fill() {
            return Err(ContractViolation::StencilSettingsNeedSimpleFill);
        }
    }

    Ok(())
}

/// Check whether `args` is a valid stencil-only draw for `renderer`.
pub fn check_stencil_preconditions<R: PathRenderer + ?Sized>(
    renderer: &R,
    args: &StencilPathArgs<'_>,
) -> Result<(), ContractViolation> {
    args.validate()?;
    check_stencil_query(args.path)?;

    if renderer.on_stencil_support(args.path) == StencilSupport::NoSupport {
        return Err(ContractViolation::StencilUnsupported);
    }

    Ok(())
}

fn check_stencil_query(path: &Path) -> Result<(), ContractViolation> {
    if path.is_inverse_fill_type() {
        return Err(ContractViolation::InverseFillStencilQuery);
    }

    Ok(())
}

#[track_caller]
fn enforce(result: Result<(), ContractViolation>) {
    if let Err(violation) = result {
        debug!("Path renderer contract violated: {violation:?}");
        panic!("path renderer contract violated: {violation}");
    }
}
