// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The protocol shared by interchangeable path renderers.
//!
//! A path renderer is one strategy for turning a filled or stroked [`Path`] into
//! rendering work on a GPU-backed [`DrawTarget`]: tessellation, analytic coverage,
//! stencil-then-cover and so on. This crate does not contain any of those algorithms.
//! Instead, it defines the contract every one of them has to honour so that a dispatcher
//! can pick between them safely:
//!
//! - A three-level stencil capability classification ([`StencilSupport`]).
//! - The argument bundles for capability queries, draws and stencil-only draws
//!   ([`CanDrawPathArgs`], [`DrawPathArgs`], [`StencilPathArgs`]), including their
//!   cross-field invariants.
//! - The [`PathRenderer`] trait with a default stencil implementation built on top of
//!   drawing ([`stencil_path_via_draw`]), and the checked entry points in
//!   [`PathRendererExt`].
//! - Two geometric helpers renderers commonly need: deciding whether a thin stroke can be
//!   drawn as a hairline ([`is_stroke_hairline_or_equivalent`]) and computing device space
//!   bounds of a path ([`path_dev_bounds`]).
//!
//! # Usage
//!
//! A dispatcher holds a priority-ordered list of renderers, for example
//! `Vec<Box<dyn PathRenderer + Send + Sync>>`. For a given path and style it asks each one
//! [`can_draw_path`](PathRendererExt::can_draw_path) until one accepts, then calls
//! [`draw_path`](PathRendererExt::draw_path) or
//! [`stencil_path`](PathRendererExt::stencil_path) on it.
//! A draw returning [`DrawError`] means that renderer could not complete the draw; the
//! dispatcher decides whether to try another one.
//!
//! # Features
//!
//! - `strict_validation`: Run the precondition checks of the checked entry points in
//!   release builds too. They always run when `debug_assertions` are enabled.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod args;
pub mod bounds;
pub mod error;
pub mod hairline;
pub mod path;
pub mod renderer;
pub mod stencil;
pub mod style;
pub mod target;

pub use peniko;
pub use peniko::kurbo;

pub use args::{CanDrawPathArgs, DrawPathArgs, StencilPathArgs};
pub use bounds::path_dev_bounds;
pub use error::{ContractViolation, DrawError};
pub use hairline::{
    is_stroke_hairline_or_equivalent, treat_aa_stroke_as_hairline, HairlineClassification,
};
pub use path::{FillType, Path};
pub use renderer::{
    check_draw_preconditions, check_stencil_preconditions, stencil_path_via_draw, PathRenderer,
    PathRendererExt,
};
pub use stencil::{StencilOp, StencilSupport, StencilTest, UserStencilSettings};
pub use style::{DashEffect, PathEffect, StrokeRec, StrokeStyle, Style};
pub use target::{Caps, Clip, DrawTarget, FixedClip, Paint, ResourceProvider, ShaderCaps};
