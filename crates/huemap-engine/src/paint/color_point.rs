use std::cmp::Ordering;
use std::fmt;

use bytemuck::{Pod, Zeroable};

/// A straight-alpha RGBA color anchored at a scalar `value`.
///
/// Invariants:
/// - `r`, `g`, `b`, `a` are clamped to [0, 1] by every constructor.
/// - `value` is stored as given (it is an interpolation key, not a channel).
///
/// A point never changes after construction; the blend primitives always
/// return fresh points.
///
/// Equality and ordering look at `value` only: two points with the same
/// value are the same control point regardless of color. Compare
/// [`rgba`](Self::rgba) when the color matters.
///
/// Layout is `#[repr(C)]` POD so a slice of samples can be handed to a GPU
/// texture upload unchanged.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
pub struct ColorPoint {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
    value: f32,
}

impl ColorPoint {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32, value: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
            value,
        }
    }

    /// Opaque color at `value`.
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32, value: f32) -> Self {
        Self::new(r, g, b, 1.0, value)
    }

    /// Opaque white, the color of an empty colormap.
    #[inline]
    pub fn white(value: f32) -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0, value)
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.a
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color anchored at a different value.
    #[inline]
    pub(crate) fn at(self, value: f32) -> Self {
        Self { value, ..self }
    }

    // ── Blend primitives ──────────────────────────────────────────────────

    /// Multiplies the color channels by `factor`.
    ///
    /// `a` and `value` are carried over untouched.
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            r: self.r * factor,
            g: self.g * factor,
            b: self.b * factor,
            ..self
        }
    }

    /// Sums the color channels of `lhs` and `rhs` without re-clamping.
    ///
    /// `a` and `value` become the plain average of the two operands. This is
    /// not a weighted blend; interpolation goes through
    /// [`weighted_blend`](Self::weighted_blend) instead.
    #[inline]
    pub fn combined(lhs: Self, rhs: Self) -> Self {
        Self {
            r: lhs.r + rhs.r,
            g: lhs.g + rhs.g,
            b: lhs.b + rhs.b,
            a: (lhs.a + rhs.a) / 2.0,
            value: (lhs.value + rhs.value) / 2.0,
        }
    }

    /// Linear blend from `lower` (ratio 0) to `upper` (ratio 1).
    ///
    /// Color channels and alpha are both weighted by `ratio`. The resulting
    /// `value` is the midpoint of the operands; callers overwrite it with the
    /// queried position.
    #[inline]
    pub fn weighted_blend(lower: Self, upper: Self, ratio: f32) -> Self {
        let blended = Self::combined(lower.scaled(1.0 - ratio), upper.scaled(ratio));
        Self {
            a: lower.a * (1.0 - ratio) + upper.a * ratio,
            ..blended
        }
    }
}

impl PartialEq for ColorPoint {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialOrd for ColorPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(({}, {}, {}, {}), {})",
            self.r, self.g, self.b, self.a, self.value
        )
    }
}
