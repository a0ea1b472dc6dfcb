/// A parsed `.cmap` document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CmapDocument {
    /// `resolution N` directive, if present.
    pub resolution: Option<usize>,
    /// `domain MIN MAX` directive, if present. Applied after all stops.
    pub domain: Option<(f32, f32)>,
    /// Control points in source order (not sorted, not deduplicated).
    pub stops: Vec<Stop>,
}

/// One `value: color` line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub value: f32,
    /// 3 (rgb) or 4 (rgba) channels in [0, 1] for hex colors; numeric
    /// channels are passed through as written.
    pub channels: Vec<f32>,
    /// 1-based line of the stop's value.
    pub line: usize,
}
