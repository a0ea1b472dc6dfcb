use crate::paint::ColorPoint;

use super::{Colormap, lerp, unlerp};

impl Colormap {
    /// Piecewise-linear color at `value`, computed from the control points.
    ///
    /// O(log k). `value` is clamped into `[inf, sup]` first. An empty map
    /// yields opaque white; a single point yields that point. A value that
    /// hits a control point exactly yields that point's color.
    pub fn exact_color(&self, value: f32) -> ColorPoint {
        let value = value.clamp(self.inf, self.sup);

        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return ColorPoint::white(value),
        };
        if self.points.len() == 1 {
            return first;
        }

        // Index of the first point strictly above `value`.
        let upper = self.points.partition_point(|p| p.value() <= value);
        if upper == 0 {
            return first;
        }
        if upper == self.points.len() {
            return last;
        }

        let lo = self.points[upper - 1];
        let hi = self.points[upper];
        if lo.value() == value {
            return lo;
        }

        let ratio = unlerp(lo.value(), hi.value(), value);
        ColorPoint::weighted_blend(lo, hi, ratio).at(value)
    }

    /// Cached color at `value`. O(1).
    ///
    /// Out-of-range values are clamped. The result differs from
    /// [`exact_color`](Self::exact_color) by at most one bucket width,
    /// `(sup - inf) / resolution`.
    #[inline]
    pub fn color(&self, value: f32) -> ColorPoint {
        self.samples[self.bucket(value)]
    }

    /// Cached color at `value` as an RGBA tuple.
    #[inline]
    pub fn rgba(&self, value: f32) -> [f32; 4] {
        self.color(value).rgba()
    }

    /// The sample cache, `resolution + 1` entries from `inf` to `sup`.
    #[inline]
    pub fn samples(&self) -> &[ColorPoint] {
        &self.samples
    }

    /// The sample cache as raw bytes (five `f32` per entry: r, g, b, a,
    /// value), ready for a 1D texture or storage buffer upload.
    #[inline]
    pub fn sample_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Domain position at fraction `t` of `[inf, sup]`.
    ///
    /// Stays finite for any finite bounds, including `-f32::MAX..f32::MAX`.
    #[inline]
    pub fn position(&self, t: f32) -> f32 {
        lerp(self.inf, self.sup, t)
    }

    fn bucket(&self, value: f32) -> usize {
        if self.sup <= self.inf {
            return 0;
        }
        let value = value.clamp(self.inf, self.sup);
        let idx = (unlerp(self.inf, self.sup, value) * self.resolution as f32).floor();
        // NaN queries land in bucket 0 through the saturating cast.
        (idx as usize).min(self.resolution)
    }

    /// Rebuilds the sample cache from the current points, bounds and
    /// resolution.
    pub(super) fn resample(&mut self) {
        let n = self.resolution;
        let samples: Vec<ColorPoint> = (0..=n)
            .map(|i| self.exact_color(self.position(i as f32 / n as f32)))
            .collect();
        self.samples = samples;

        log::debug!(
            "colormap: resampled {} points into {} buckets over [{}, {}]",
            self.points.len(),
            n,
            self.inf,
            self.sup
        );
    }
}
