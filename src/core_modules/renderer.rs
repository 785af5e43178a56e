// THEORY:
// The `renderer` module produces the composite image handed to reporting
// collaborators: the actual canvas's pixels with a solid outline rectangle
// drawn over the bounds of every detected region. Outlines are drawn in
// region order; where they overlap, the later one simply overwrites the
// earlier, which needs no compositing rule because the highlight is one
// opaque color.
//
// Styling is an explicit value passed in by the caller, never process-wide
// state. A GUI shell with a theme picks a `HighlightStyle` and hands it down.

use crate::core_modules::canvas::PixelCanvas;
use crate::core_modules::region::DiffRegion;
use image::{Rgba, RgbaImage};

/// Appearance of the region outlines on the composite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    /// RGBA outline color.
    pub color: [u8; 4],
    /// Outline width in pixels, drawn inward from the region bounds.
    pub thickness: u32,
}

impl Default for HighlightStyle {
    /// Opaque red, two pixels wide — the classic diff highlight.
    fn default() -> Self {
        Self {
            color: [255, 0, 0, 255],
            thickness: 2,
        }
    }
}

/// Renders the actual canvas with an outline around every region, in region
/// order. The returned image has the canvas's dimensions.
pub fn render_composite(
    actual: &PixelCanvas,
    regions: &[DiffRegion],
    style: &HighlightStyle,
) -> RgbaImage {
    let mut composite = RgbaImage::from_fn(actual.width(), actual.height(), |x, y| {
        Rgba(actual.pixel(x, y).to_be_bytes())
    });

    for region in regions {
        draw_outline(&mut composite, region, style);
    }

    composite
}

/// Draws one rectangular outline, inset ring by ring so the stroke stays
/// inside the region bounds (and therefore inside the canvas).
fn draw_outline(image: &mut RgbaImage, region: &DiffRegion, style: &HighlightStyle) {
    let color = Rgba(style.color);

    for inset in 0..style.thickness {
        let left = region.min_x + inset;
        let top = region.min_y + inset;
        let right = region.max_x.saturating_sub(inset);
        let bottom = region.max_y.saturating_sub(inset);
        if left > right || top > bottom {
            break;
        }

        for x in left..=right {
            put_pixel_clamped(image, x, top, color);
            put_pixel_clamped(image, x, bottom, color);
        }
        for y in top..=bottom {
            put_pixel_clamped(image, left, y, color);
            put_pixel_clamped(image, right, y, color);
        }
    }
}

fn put_pixel_clamped(image: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>) {
    if x < image.width() && y < image.height() {
        image.put_pixel(x, y, color);
    }
}
