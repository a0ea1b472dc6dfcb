//! Huemap engine crate.
//!
//! Maps scalar values to RGBA colors through piecewise-linear interpolation
//! over a sorted set of control points, with a resampled lookup cache for
//! O(1) queries during rendering.

pub mod colormap;
pub mod error;
pub mod event;
pub mod logging;
pub mod paint;

pub use colormap::{Colormap, Preset, ToChannel};
pub use error::ColormapError;
pub use event::{Event, EventBus, Observer};
pub use paint::ColorPoint;
