use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};

use huemap_engine::Colormap;

/// Renders a horizontal colorbar: `inf` on the left column, `sup` on the
/// right, every row identical. Colors come from the O(1) cached lookup.
pub fn render(map: &Colormap, width: u32, height: u32) -> RgbaImage {
    let last = width.saturating_sub(1).max(1) as f32;

    RgbaImage::from_fn(width, height, |x, _| {
        let t = x as f32 / last;
        let [r, g, b, a] = map.rgba(map.position(t));
        Rgba([to_u8(r), to_u8(g), to_u8(b), to_u8(a)])
    })
}

pub fn write_png(map: &Colormap, width: u32, height: u32, path: &Path) -> Result<()> {
    render(map, width, height)
        .save(path)
        .with_context(|| format!("writing colorbar to {}", path.display()))?;
    log::info!("wrote {}x{} colorbar to {}", width, height, path.display());
    Ok(())
}

#[inline]
pub fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
