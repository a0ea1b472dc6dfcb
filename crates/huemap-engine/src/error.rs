use std::fmt;

/// Errors reported by [`Colormap`](crate::Colormap) mutations.
///
/// None of these are fatal; the colormap is left exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum ColormapError {
    /// Channel description did not have 3 (RGB) or 4 (RGBA) entries.
    ChannelCount { got: usize },
    /// A channel entry could not be read as a finite number.
    NonNumericChannel { index: usize, text: String },
    /// Control point value or rescale bound was NaN or infinite.
    NonFiniteValue(f32),
    /// Sample resolution must be at least one bucket.
    ZeroResolution,
}

impl fmt::Display for ColormapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColormapError::ChannelCount { got } => {
                write!(f, "expected 3 (rgb) or 4 (rgba) channels, got {}", got)
            }
            ColormapError::NonNumericChannel { index, text } => {
                write!(f, "channel {} is not a finite number: {:?}", index, text)
            }
            ColormapError::NonFiniteValue(v) => write!(f, "value must be finite, got {}", v),
            ColormapError::ZeroResolution => write!(f, "resolution must be greater than zero"),
        }
    }
}

impl std::error::Error for ColormapError {}
