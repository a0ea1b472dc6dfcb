use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use huemap_cmap::CmapDocument;
use huemap_engine::Colormap;

/// Reads and parses a `.cmap` file into a colormap.
pub fn from_file(path: &Path) -> Result<Colormap> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let doc = huemap_cmap::parse_str(&src)
        .with_context(|| format!("parsing {}", path.display()))?;
    from_document(&doc)
}

/// Builds a colormap from a parsed document.
///
/// Stops are added in source order, so on repeated values the first one
/// wins. `domain` is applied last.
pub fn from_document(doc: &CmapDocument) -> Result<Colormap> {
    let mut map = match doc.resolution {
        Some(n) => Colormap::with_resolution(n),
        None => Colormap::new(),
    };

    for stop in &doc.stops {
        if !map.try_add(stop.value, stop.channels.as_slice())? {
            log::warn!("line {}: stop at {} already defined, ignored", stop.line, stop.value);
        }
    }

    if let Some((min, max)) = doc.domain {
        map.rescale(min, max).context("applying domain")?;
    }
    Ok(map)
}

/// Splits a `VALUE:R,G,B[,A]` command-line argument.
///
/// Only the value is checked here; channel text is handed to
/// [`Colormap::add`] as written.
pub fn split_add_arg(arg: &str) -> Result<(f32, Vec<&str>)> {
    let (value, channels) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("expected VALUE:R,G,B[,A], got {:?}", arg))?;
    let value: f32 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid control point value {:?}", value))?;
    if !value.is_finite() {
        bail!("control point value must be finite, got {}", value);
    }
    Ok((value, channels.split(',').map(str::trim).collect()))
}
