//! Scalar-to-color mapping.
//!
//! A [`Colormap`] holds control points sorted by value and keeps a resampled
//! cache of `resolution + 1` colors spanning `[inf, sup]`. Every mutation
//! rebuilds the cache before returning, so [`Colormap::color`] never sees
//! stale samples.
//!
//! Cost model:
//! - `color` / `rgba`: O(1), safe to call per pixel.
//! - `add` / `rescale` / `set_resolution`: O(k log k) for the control points
//!   plus O(resolution · log k) for the rebuild. Treat these as rare control
//!   operations, not per-frame work.
//!
//! There is no internal synchronization. A colormap shared between an
//! updating thread and a render thread needs an external lock.

mod channels;
pub mod presets;
mod sample;

use std::fmt;

use crate::error::ColormapError;
use crate::paint::ColorPoint;

pub use channels::ToChannel;
pub use presets::Preset;

/// Number of cache buckets a new colormap starts with.
pub const DEFAULT_RESOLUTION: usize = 512;

#[derive(Debug, Clone)]
pub struct Colormap {
    /// Strictly ascending by value.
    points: Vec<ColorPoint>,
    inf: f32,
    sup: f32,
    resolution: usize,
    /// Always `resolution + 1` entries.
    samples: Vec<ColorPoint>,
}

impl Default for Colormap {
    fn default() -> Self {
        Self::new()
    }
}

impl Colormap {
    /// Empty colormap, default resolution, bounds (0, 0).
    pub fn new() -> Self {
        Self::with_resolution(DEFAULT_RESOLUTION)
    }

    /// Empty colormap sampled with `resolution` buckets (at least one).
    pub fn with_resolution(resolution: usize) -> Self {
        let mut map = Self {
            points: Vec::new(),
            inf: 0.0,
            sup: 0.0,
            resolution: resolution.max(1),
            samples: Vec::new(),
        };
        map.resample();
        map
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Control points in ascending order.
    #[inline]
    pub fn points(&self) -> &[ColorPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn inf(&self) -> f32 {
        self.inf
    }

    #[inline]
    pub fn sup(&self) -> f32 {
        self.sup
    }

    /// `(inf, sup)`.
    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        (self.inf, self.sup)
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    // ── Control points ────────────────────────────────────────────────────

    /// Adds a control point at `value` with a 3- (RGB) or 4-entry (RGBA)
    /// channel description.
    ///
    /// Returns `true` when a point was inserted. A point already sitting at
    /// `value` makes this a silent no-op. Malformed input is logged and
    /// leaves the colormap untouched; use [`try_add`](Self::try_add) to get
    /// the error instead.
    pub fn add<C: ToChannel>(&mut self, value: f32, channels: &[C]) -> bool {
        match self.try_add(value, channels) {
            Ok(inserted) => inserted,
            Err(err) => {
                log::warn!("colormap: rejected control point at {}: {}", value, err);
                false
            }
        }
    }

    /// Like [`add`](Self::add), but hands malformed input back to the caller.
    pub fn try_add<C: ToChannel>(&mut self, value: f32, channels: &[C]) -> Result<bool, ColormapError> {
        if !value.is_finite() {
            return Err(ColormapError::NonFiniteValue(value));
        }
        let value = canonical(value);
        let [r, g, b, a] = channels::read_rgba(channels)?;

        if !self.insert(ColorPoint::new(r, g, b, a, value)) {
            log::trace!("colormap: control point at {} already present", value);
            return Ok(false);
        }
        self.update_bounds();
        self.resample();
        Ok(true)
    }

    /// Removes every control point. Resolution is kept.
    pub fn clear(&mut self) {
        self.points.clear();
        self.update_bounds();
        self.resample();
    }

    /// Linearly remaps control point values so the domain becomes
    /// `[new_inf, new_sup]`.
    ///
    /// - An empty colormap stays empty with bounds (0, 0).
    /// - A degenerate domain (one point) moves every point to `new_inf`.
    /// - `new_inf > new_sup` mirrors the map; points are re-sorted.
    /// - Points that collapse onto the same value keep the first one.
    ///
    /// Bounds as far apart as `-f32::MAX..f32::MAX` are fine; a remap that
    /// would still produce a non-finite value is rejected and nothing changes.
    pub fn rescale(&mut self, new_inf: f32, new_sup: f32) -> Result<(), ColormapError> {
        for bound in [new_inf, new_sup] {
            if !bound.is_finite() {
                return Err(ColormapError::NonFiniteValue(bound));
            }
        }

        let (old_inf, old_sup) = (self.inf, self.sup);
        let remapped: Vec<f32> = self
            .points
            .iter()
            .map(|p| {
                let t = if old_sup > old_inf { unlerp(old_inf, old_sup, p.value()) } else { 0.0 };
                canonical(lerp(new_inf, new_sup, t))
            })
            .collect();
        if let Some(&bad) = remapped.iter().find(|v| !v.is_finite()) {
            return Err(ColormapError::NonFiniteValue(bad));
        }
        for (point, value) in self.points.iter_mut().zip(remapped) {
            *point = point.at(value);
        }

        self.normalize();
        self.update_bounds();
        self.resample();
        log::debug!(
            "colormap: rescaled [{}, {}] -> [{}, {}]",
            old_inf, old_sup, self.inf, self.sup
        );
        Ok(())
    }

    /// Changes the number of cache buckets and rebuilds the cache with
    /// `resolution + 1` samples.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), ColormapError> {
        if resolution == 0 {
            return Err(ColormapError::ZeroResolution);
        }
        self.resolution = resolution;
        self.resample();
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Sorted insert. Returns `false` when the value is already taken.
    fn insert(&mut self, point: ColorPoint) -> bool {
        match self.points.binary_search_by(|p| p.value().total_cmp(&point.value())) {
            Ok(_) => false,
            Err(at) => {
                self.points.insert(at, point);
                true
            }
        }
    }

    /// Restores ascending order and drops repeated values, keeping the first.
    fn normalize(&mut self) {
        self.points.sort_by(|a, b| a.value().total_cmp(&b.value()));
        self.points.dedup_by(|later, earlier| later.value() == earlier.value());
    }

    fn update_bounds(&mut self) {
        (self.inf, self.sup) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.value(), last.value()),
            _ => (0.0, 0.0),
        };
    }
}

/// Folds `-0.0` into `0.0` so ordering by `total_cmp` agrees with `==`.
#[inline]
fn canonical(value: f32) -> f32 {
    value + 0.0
}

/// Position at fraction `t` of `[lo, hi]`. Never overflows for finite
/// bounds and `t` in [0, 1]; returns `lo` and `hi` exactly at the ends.
#[inline]
pub(crate) fn lerp(lo: f32, hi: f32, t: f32) -> f32 {
    lo * (1.0 - t) + hi * t
}

/// Fraction of `[lo, hi]` at which `value` sits. Operands are halved first
/// so `hi - lo` stays finite across the whole `f32` range. Requires
/// `lo < hi`.
#[inline]
pub(crate) fn unlerp(lo: f32, hi: f32, value: f32) -> f32 {
    (value * 0.5 - lo * 0.5) / (hi * 0.5 - lo * 0.5)
}

impl FromIterator<ColorPoint> for Colormap {
    fn from_iter<I: IntoIterator<Item = ColorPoint>>(iter: I) -> Self {
        let mut map = Colormap::new();
        map.extend(iter);
        map
    }
}

/// Bulk insert with a single cache rebuild. Non-finite values are skipped;
/// on repeated values the first point wins.
impl Extend<ColorPoint> for Colormap {
    fn extend<I: IntoIterator<Item = ColorPoint>>(&mut self, iter: I) {
        let before = self.points.len();
        self.points.extend(iter.into_iter().filter_map(|p| {
            if !p.value().is_finite() {
                log::warn!("colormap: skipped control point at non-finite value {}", p.value());
                return None;
            }
            Some(p.at(canonical(p.value())))
        }));
        if self.points.len() == before {
            return;
        }
        // Stable sort keeps existing points ahead of new ones on ties.
        self.normalize();
        self.update_bounds();
        self.resample();
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", point)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(map: &Colormap) -> bool {
        map.points().windows(2).all(|w| w[0].value() < w[1].value())
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_is_empty() {
        let map = Colormap::new();
        assert!(map.is_empty());
        assert_eq!(map.bounds(), (0.0, 0.0));
        assert_eq!(map.resolution(), DEFAULT_RESOLUTION);
        assert_eq!(map.samples().len(), DEFAULT_RESOLUTION + 1);
        assert_eq!(map.to_string(), "[]");
    }

    #[test]
    fn with_resolution_zero_is_bumped() {
        assert_eq!(Colormap::with_resolution(0).resolution(), 1);
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_keeps_points_sorted_and_bounds_extremal() {
        let mut map = Colormap::new();
        assert!(map.add(0.5, &[0.0f32, 1.0, 0.0]));
        assert!(map.add(-2.0, &[1.0f32, 0.0, 0.0]));
        assert!(map.add(3.0, &[0.0f32, 0.0, 1.0, 0.5]));
        assert!(ascending(&map));
        assert_eq!(map.bounds(), (-2.0, 3.0));
        assert_eq!(map.points()[2].a(), 0.5);
        assert_eq!(map.points()[0].a(), 1.0);
    }

    #[test]
    fn add_duplicate_is_noop() {
        let mut map = Colormap::new();
        assert!(map.add(1.0, &[1.0f32, 0.0, 0.0]));
        let before = map.clone();
        assert!(!map.add(1.0, &[0.0f32, 0.0, 1.0]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.points()[0].rgba(), before.points()[0].rgba());
        assert_eq!(map.to_string(), before.to_string());
    }

    #[test]
    fn add_malformed_leaves_map_unchanged() {
        let mut map = Colormap::new();
        map.add(0.0, &[0.0f32, 0.0, 0.0]);
        assert!(!map.add(1.0, &["1", "zero", "0"]));
        assert!(!map.add(1.0, &[1.0f32, 1.0]));
        assert!(!map.add(f32::NAN, &[1.0f32, 1.0, 1.0]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.bounds(), (0.0, 0.0));
    }

    #[test]
    fn add_negative_zero_is_duplicate_of_zero() {
        let mut map = Colormap::new();
        assert!(map.add(0.0, &[1.0f32, 0.0, 0.0]));
        assert!(!map.add(-0.0, &[0.0f32, 0.0, 1.0]));
        assert_eq!(map.len(), 1);
        assert_eq!(map.to_string(), "[((1, 0, 0, 1), 0)]");

        let mut map = Colormap::new();
        assert!(map.add(-0.0, &[1.0f32, 0.0, 0.0]));
        assert!(!map.add(0.0, &[0.0f32, 0.0, 1.0]));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn extend_negative_zero_then_add_zero() {
        let mut map: Colormap = [ColorPoint::rgb(1.0, 0.0, 0.0, -0.0)].into_iter().collect();
        assert!(!map.add(0.0, &[0.0f32, 0.0, 1.0]));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn try_add_reports_error() {
        let mut map = Colormap::new();
        assert_eq!(
            map.try_add(0.0, &[0.5f32; 2]),
            Err(ColormapError::ChannelCount { got: 2 })
        );
        assert_eq!(map.try_add(f32::INFINITY, &[0.5f32; 3]), Err(ColormapError::NonFiniteValue(f32::INFINITY)));
        assert_eq!(map.try_add(0.0, &[0.5f32; 3]), Ok(true));
        assert_eq!(map.try_add(0.0, &[0.5f32; 3]), Ok(false));
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_bounds_keeps_resolution() {
        let mut map = Colormap::with_resolution(64);
        map.add(-1.0, &[0.0f32, 0.0, 0.0]);
        map.add(1.0, &[1.0f32, 1.0, 1.0]);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.bounds(), (0.0, 0.0));
        assert_eq!(map.resolution(), 64);
        assert_eq!(map.samples().len(), 65);
    }

    // ── rescale ───────────────────────────────────────────────────────────

    #[test]
    fn rescale_maps_linearly() {
        let mut map = Colormap::new();
        map.add(0.0, &[1.0f32, 0.0, 0.0]);
        map.add(0.5, &[0.0f32, 1.0, 0.0]);
        map.add(1.0, &[0.0f32, 0.0, 1.0]);
        map.rescale(10.0, 20.0).unwrap();
        let values: Vec<f32> = map.points().iter().map(|p| p.value()).collect();
        assert_eq!(values, vec![10.0, 15.0, 20.0]);
        assert_eq!(map.bounds(), (10.0, 20.0));
    }

    #[test]
    fn rescale_single_point_moves_to_new_inf() {
        let mut map = Colormap::new();
        map.add(5.0, &[0.2f32, 0.4, 0.6]);
        map.rescale(-1.0, 1.0).unwrap();
        assert_eq!(map.points()[0].value(), -1.0);
        assert_eq!(map.bounds(), (-1.0, -1.0));
    }

    #[test]
    fn rescale_empty_keeps_zero_bounds() {
        let mut map = Colormap::new();
        map.rescale(3.0, 4.0).unwrap();
        assert_eq!(map.bounds(), (0.0, 0.0));
    }

    #[test]
    fn rescale_reversed_mirrors() {
        let mut map = Colormap::new();
        map.add(0.0, &[1.0f32, 0.0, 0.0]);
        map.add(1.0, &[0.0f32, 0.0, 1.0]);
        map.rescale(1.0, 0.0).unwrap();
        assert!(ascending(&map));
        assert_eq!(map.bounds(), (0.0, 1.0));
        assert_eq!(map.points()[0].rgba(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn rescale_collapse_dedups() {
        let mut map = Colormap::new();
        map.add(0.0, &[1.0f32, 0.0, 0.0]);
        map.add(1.0, &[0.0f32, 0.0, 1.0]);
        map.rescale(2.0, 2.0).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.points()[0].rgba(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(map.bounds(), (2.0, 2.0));
    }

    #[test]
    fn rescale_to_full_f32_range() {
        let mut map = Colormap::new();
        map.add(0.0, &[1.0f32, 0.0, 0.0]);
        map.add(1.0, &[0.0f32, 0.0, 1.0]);
        map.rescale(-f32::MAX, f32::MAX).unwrap();
        assert_eq!(map.bounds(), (-f32::MAX, f32::MAX));
        assert!(map.samples().iter().all(|s| s.value().is_finite()));

        // And back again.
        map.rescale(0.0, 1.0).unwrap();
        assert_eq!(map.bounds(), (0.0, 1.0));
        assert!(ascending(&map));
    }

    #[test]
    fn rescale_rejects_non_finite() {
        let mut map = Colormap::new();
        map.add(0.0, &[1.0f32, 0.0, 0.0]);
        map.add(1.0, &[0.0f32, 0.0, 1.0]);
        assert!(map.rescale(0.0, f32::NAN).is_err());
        assert_eq!(map.bounds(), (0.0, 1.0));
    }

    // ── resolution ────────────────────────────────────────────────────────

    #[test]
    fn set_resolution_resizes_cache() {
        let mut map = Colormap::new();
        map.add(0.0, &[0.0f32, 0.0, 0.0]);
        map.set_resolution(16).unwrap();
        assert_eq!(map.samples().len(), 17);
        assert_eq!(map.set_resolution(0), Err(ColormapError::ZeroResolution));
        assert_eq!(map.resolution(), 16);
    }

    // ── bulk / display ────────────────────────────────────────────────────

    #[test]
    fn from_iter_sorts_and_keeps_first_duplicate() {
        let map: Colormap = [
            ColorPoint::rgb(0.0, 0.0, 1.0, 1.0),
            ColorPoint::rgb(1.0, 0.0, 0.0, 0.0),
            ColorPoint::rgb(0.0, 1.0, 0.0, 1.0),
            ColorPoint::rgb(1.0, 1.0, 1.0, f32::NAN),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 2);
        assert!(ascending(&map));
        assert_eq!(map.points()[1].rgba(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn display_lists_points_in_order() {
        let mut map = Colormap::new();
        map.add(1.0, &[0.0f32, 0.0, 1.0]);
        map.add(0.0, &[1.0f32, 0.0, 0.0, 0.5]);
        assert_eq!(map.to_string(), "[((1, 0, 0, 0.5), 0), ((0, 0, 1, 1), 1)]");
    }
}
