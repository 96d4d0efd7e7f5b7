// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A software draw target and a few path renderers shared across different tests.

use std::any::Any;

use vello_path_renderer::kurbo::{Affine, Point, Rect, Shape};
use vello_path_renderer::peniko::{Color, Fill};
use vello_path_renderer::{
    is_stroke_hairline_or_equivalent, CanDrawPathArgs, Caps, Clip, DrawError, DrawPathArgs,
    DrawTarget, FillType, Path, PathRenderer, ResourceProvider, ShaderCaps, StencilPathArgs,
    StencilSupport, UserStencilSettings,
};

pub(crate) struct SoftwareProvider {
    caps: Caps,
}

impl SoftwareProvider {
    pub(crate) fn new() -> Self {
        Self {
            caps: Caps {
                shader_caps: ShaderCaps {
                    shader_derivative_support: true,
                    integer_support: true,
                    ..Default::default()
                },
            },
        }
    }
}

impl ResourceProvider for SoftwareProvider {
    fn caps(&self) -> &Caps {
        &self.caps
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// What a renderer was asked to draw.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedDraw {
    pub(crate) renderer: &'static str,
    pub(crate) writes_color: bool,
    pub(crate) user_stencil_settings: UserStencilSettings,
    pub(crate) color: Color,
    pub(crate) anti_alias: bool,
    pub(crate) gamma_correct: bool,
    pub(crate) simple_fill: bool,
}

/// A target with a 16-bit stencil plane and a count of color writes.
pub(crate) struct SoftwareTarget {
    width: u16,
    height: u16,
    msaa: bool,
    stencil: Vec<u16>,
    pub(crate) color_writes: usize,
    pub(crate) draws: Vec<RecordedDraw>,
}

impl SoftwareTarget {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            msaa: false,
            stencil: vec![0; usize::from(width) * usize::from(height)],
            color_writes: 0,
            draws: Vec::new(),
        }
    }

    pub(crate) fn with_msaa(mut self) -> Self {
        self.msaa = true;
        self
    }

    pub(crate) fn stencil(&self, x: u16, y: u16) -> u16 {
        self.stencil[usize::from(y) * usize::from(self.width) + usize::from(x)]
    }

    pub(crate) fn set_stencil(&mut self, x: u16, y: u16, value: u16) {
        self.stencil[usize::from(y) * usize::from(self.width) + usize::from(x)] = value;
    }

    pub(crate) fn clear_stencil(&mut self) {
        self.stencil.fill(0);
    }

    /// Pixels with a non-zero stencil value, in row-major order.
    pub(crate) fn stencilled_pixels(&self) -> Vec<(u16, u16)> {
        let mut pixels = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.stencil(x, y) != 0 {
                    pixels.push((x, y));
                }
            }
        }

        pixels
    }
}

impl DrawTarget for SoftwareTarget {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn is_stencil_buffer_multisampled(&self) -> bool {
        self.msaa
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn software_target(target: &mut dyn DrawTarget) -> Result<&mut SoftwareTarget, DrawError> {
    target
        .as_any_mut()
        .downcast_mut::<SoftwareTarget>()
        .ok_or(DrawError::IncompatibleTarget)
}

fn is_inside(winding: i32, fill_type: FillType) -> bool {
    let inside = match fill_type.fill_rule() {
        Fill::NonZero => winding != 0,
        Fill::EvenOdd => winding % 2 != 0,
    };

    inside != fill_type.is_inverse()
}

fn clip_contains(clip: &Clip, pt: Point) -> bool {
    match clip {
        Clip::Fixed(fixed) => fixed.scissor_rect().is_none_or(|r| r.contains(pt)),
        Clip::Path {
            path,
            fill_rule,
            transform,
        } => {
            let local = transform.inverse() * pt;
            is_inside(path.winding(local), (*fill_rule).into())
        }
    }
}

/// Point-sample `path` at pixel centers and call `f` for every covered stencil value.
fn for_each_covered(
    target: &mut SoftwareTarget,
    view_matrix: &Affine,
    path: &Path,
    clip: &Clip,
    mut f: impl FnMut(&mut u16),
) {
    let inverse = view_matrix.inverse();
    for y in 0..target.height {
        for x in 0..target.width {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if !clip_contains(clip, center) {
                continue;
            }
            let local = inverse * center;
            if is_inside(path.bez_path().winding(local), path.fill_type()) {
                let idx = usize::from(y) * usize::from(target.width) + usize::from(x);
                f(&mut target.stencil[idx]);
            }
        }
    }
}

impl RecordedDraw {
    fn new(renderer: &'static str, args: &DrawPathArgs<'_>) -> Self {
        Self {
            renderer,
            writes_color: args.paint.writes_color(),
            user_stencil_settings: *args.user_stencil_settings,
            color: args.color,
            anti_alias: args.anti_alias,
            gamma_correct: args.gamma_correct,
            simple_fill: args.style.is_simple_fill(),
        }
    }
}

/// Fills anything, honouring user stencil settings. Relies on the default stencil
/// implementation.
pub(crate) struct SampledRenderer;

impl PathRenderer for SampledRenderer {
    fn on_can_draw_path(&self, args: &CanDrawPathArgs<'_>) -> bool {
        args.style.is_simple_fill()
    }

    fn on_draw_path(&mut self, args: DrawPathArgs<'_>) -> Result<(), DrawError> {
        let draw = RecordedDraw::new("sampled", &args);
        let settings = *args.user_stencil_settings;
        let target = software_target(&mut *args.target)?;
        target.draws.push(draw.clone());

        let mut covered = 0;
        for_each_covered(target, args.view_matrix, args.path, args.clip, |value| {
            *value = settings.apply(*value);
            covered += 1;
        });
        if draw.writes_color {
            target.color_writes += covered;
        }

        Ok(())
    }
}

/// Fills paths without user stencil settings, and can stencil them, but never both at once.
/// Writes `1` to covered stencil values.
pub(crate) struct StencilOnlyRenderer;

impl PathRenderer for StencilOnlyRenderer {
    fn on_stencil_support(&self, _: &Path) -> StencilSupport {
        StencilSupport::StencilOnly
    }

    fn on_can_draw_path(&self, args: &CanDrawPathArgs<'_>) -> bool {
        args.style.is_simple_fill() && !args.has_user_stencil_settings
    }

    fn on_draw_path(&mut self, args: DrawPathArgs<'_>) -> Result<(), DrawError> {
        let draw = RecordedDraw::new("stencil_only", &args);
        let writes_color = draw.writes_color;
        let target = software_target(&mut *args.target)?;
        target.draws.push(draw);

        let mut covered = 0;
        for_each_covered(target, args.view_matrix, args.path, args.clip, |_| covered += 1);
        if writes_color {
            target.color_writes += covered;
        }

        Ok(())
    }

    fn on_stencil_path(&mut self, args: StencilPathArgs<'_>) {
        let Ok(target) = software_target(&mut *args.target) else {
            return;
        };
        let clip = Clip::Fixed(*args.clip);
        for_each_covered(target, args.view_matrix, args.path, &clip, |value| *value = 1);
    }
}

/// Draws hairline-equivalent strokes only and has no stencil support.
pub(crate) struct HairlineRenderer;

impl PathRenderer for HairlineRenderer {
    fn on_stencil_support(&self, _: &Path) -> StencilSupport {
        StencilSupport::NoSupport
    }

    fn on_can_draw_path(&self, args: &CanDrawPathArgs<'_>) -> bool {
        !args.has_user_stencil_settings
            && is_stroke_hairline_or_equivalent(args.style, args.view_matrix).is_some()
    }

    fn on_draw_path(&mut self, args: DrawPathArgs<'_>) -> Result<(), DrawError> {
        let draw = RecordedDraw::new("hairline", &args);
        software_target(&mut *args.target)?.draws.push(draw);

        Ok(())
    }
}

/// Accepts every draw, and fails all of them.
pub(crate) struct FailingRenderer;

impl PathRenderer for FailingRenderer {
    fn on_can_draw_path(&self, _: &CanDrawPathArgs<'_>) -> bool {
        true
    }

    fn on_draw_path(&mut self, _: DrawPathArgs<'_>) -> Result<(), DrawError> {
        Err(DrawError::Allocation { bytes: 1 << 20 })
    }
}

/// Accepts every draw, and does nothing.
pub(crate) struct PermissiveRenderer;

impl PathRenderer for PermissiveRenderer {
    fn on_can_draw_path(&self, _: &CanDrawPathArgs<'_>) -> bool {
        true
    }

    fn on_draw_path(&mut self, _: DrawPathArgs<'_>) -> Result<(), DrawError> {
        Ok(())
    }
}

pub(crate) fn rect_path(rect: Rect, fill_type: FillType) -> Path {
    Path::new(rect.to_path(0.1), fill_type)
}
