//! Color representation shared by the colormap and its consumers.
//!
//! Colors are straight-alpha RGBA in [0, 1], tagged with the scalar value
//! they anchor or were sampled at.

pub mod color_point;

pub use color_point::ColorPoint;
