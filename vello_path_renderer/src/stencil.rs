// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stencil capabilities and user stencil settings.

/// How well a path renderer can render a particular path into the stencil buffer.
///
/// A caller may want to use a path renderer to draw a path into the stencil buffer, while
/// the renderer itself may need the stencil buffer, or may use a coverage stage that zeroes
/// pixels covered by bounding geometry but outside the path. Those pixels would still be
/// written to the stencil. This classification tells the caller what it can rely on.
///
/// The variants are ordered from least to most capable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StencilSupport {
    /// The renderer cannot be used to stencil the path.
    NoSupport,
    /// The renderer cannot apply arbitrary stencil rules, nor shade and stencil at the same
    /// time. It does support [`stencil_path`](crate::PathRendererExt::stencil_path), which
    /// performs no color writes and writes a non-zero stencil value to covered pixels.
    StencilOnly,
    /// The most general level. The path is drawn exactly as requested, including
    /// simultaneous color and stencil writes with arbitrary [`UserStencilSettings`].
    /// Pixels partially covered by anti-aliased paths are affected by the stencil settings.
    NoRestriction,
}

/// The comparison between the masked reference and the masked stencil value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilTest {
    /// Always passes.
    Always,
    /// Never passes.
    Never,
    /// Passes if `reference > stencil`.
    Greater,
    /// Passes if `reference >= stencil`.
    GreaterOrEqual,
    /// Passes if `reference < stencil`.
    Less,
    /// Passes if `reference <= stencil`.
    LessOrEqual,
    /// Passes if `reference == stencil`.
    Equal,
    /// Passes if `reference != stencil`.
    NotEqual,
}

impl StencilTest {
    fn passes(self, reference: u16, value: u16) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Greater => reference > value,
            Self::GreaterOrEqual => reference >= value,
            Self::Less => reference < value,
            Self::LessOrEqual => reference <= value,
            Self::Equal => reference == value,
            Self::NotEqual => reference != value,
        }
    }
}

/// What happens to the stencil value after the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StencilOp {
    /// Leave the value unchanged.
    Keep,
    /// Set the value to zero.
    Zero,
    /// Set the value to the reference.
    Replace,
    /// Bitwise invert the value.
    Invert,
    /// Increment, wrapping on overflow.
    IncWrap,
    /// Decrement, wrapping on underflow.
    DecWrap,
    /// Increment, saturating at the maximum.
    IncClamp,
    /// Decrement, saturating at zero.
    DecClamp,
}

impl StencilOp {
    fn apply(self, reference: u16, value: u16) -> u16 {
        match self {
            Self::Keep => value,
            Self::Zero => 0,
            Self::Replace => reference,
            Self::Invert => !value,
            Self::IncWrap => value.wrapping_add(1),
            Self::DecWrap => value.wrapping_sub(1),
            Self::IncClamp => value.saturating_add(1),
            Self::DecClamp => value.saturating_sub(1),
        }
    }
}

/// Stencil state requested by the caller of a draw.
///
/// [`UserStencilSettings::UNUSED`] means the caller does not care about the stencil buffer.
/// Any other value is "in use", and may only be given to a renderer with
/// [`StencilSupport::NoRestriction`] for the path, together with a simple fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserStencilSettings {
    /// The reference value for the test and for [`StencilOp::Replace`].
    pub reference: u16,
    /// The comparison.
    pub test: StencilTest,
    /// Applied to both the reference and the stored value before comparing.
    pub test_mask: u16,
    /// The operation when the test passes.
    pub pass_op: StencilOp,
    /// The operation when the test fails.
    pub fail_op: StencilOp,
    /// Only these bits of the stored value are written.
    pub write_mask: u16,
}

impl UserStencilSettings {
    /// The caller does not use the stencil buffer.
    pub const UNUSED: Self = Self {
        reference: 0,
        test: StencilTest::Always,
        test_mask: 0xffff,
        pass_op: StencilOp::Keep,
        fail_op: StencilOp::Keep,
        write_mask: 0,
    };

    /// Always pass, and replace every bit with one regardless of the current value.
    ///
    /// This is what [`stencil_path_via_draw`](crate::stencil_path_via_draw) draws with.
    pub const REPLACE_ALL: Self = Self {
        reference: 0xffff,
        test: StencilTest::Always,
        test_mask: 0xffff,
        pass_op: StencilOp::Replace,
        fail_op: StencilOp::Replace,
        write_mask: 0xffff,
    };

    /// Whether these are the [`UNUSED`](Self::UNUSED) settings.
    #[inline]
    pub fn is_unused(&self) -> bool {
        *self == Self::UNUSED
    }

    /// Whether the settings can change the stencil buffer.
    pub fn writes_stencil(&self) -> bool {
        self.write_mask != 0
            && !(self.pass_op == StencilOp::Keep && self.fail_op == StencilOp::Keep)
    }

    /// The stencil value after a covered pixel holding `current` is drawn with these settings.
    pub fn apply(&self, current: u16) -> u16 {
        let passed = self
            .test
            .passes(self.reference & self.test_mask, current & self.test_mask);
        let op = if passed { self.pass_op } else { self.fail_op };
        let updated = op.apply(self.reference, current);

        (current & !self.write_mask) | (updated & self.write_mask)
    }
}

impl Default for UserStencilSettings {
    fn default() -> Self {
        Self::UNUSED
    }
}
