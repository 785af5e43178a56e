// THEORY:
// The `canvas` module is the bridge between decoded images and the diff engine.
// Two input images may have arbitrary, differing dimensions; the detector
// requires a pair of identically shaped pixel grids. This module produces those
// grids through pure top-left-anchored padding.
//
// Key architectural principles:
// 1.  **Flat Buffer Layout**: A `PixelCanvas` stores its pixels in a single flat
//     vector in row-major order (index = y * width + x). This keeps pixel access
//     cache-friendly and bounds-checked without nested vectors.
// 2.  **Packed Pixels**: Each pixel is one packed `u32` (0xRRGGBBAA). The diff
//     predicate is exact equality across all four channels, so a single integer
//     compare covers it. Padding is the packed value 0, i.e. fully transparent.
// 3.  **No Resampling**: Normalization never scales, crops, or interpolates.
//     Each source image lands unchanged at the origin; everything beyond its
//     extent is transparent filler. Differences caused by a size mismatch are
//     therefore reported like any other pixel difference.
// 4.  **Immutable After Construction**: A `PixelCanvas` is built once and then
//     only read. One comparison run owns its pair of canvases; nothing is
//     shared between runs.

use image::RgbaImage;

/// A rectangular pixel grid of fixed dimensions, stored as a flat row-major
/// buffer of packed RGBA values.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    /// Canvas width in pixels.
    width: u32,
    /// Canvas height in pixels.
    height: u32,
    /// Row-major packed pixels; `pixels[y * width + x]` is the pixel at (x, y).
    pixels: Vec<u32>,
}

impl PixelCanvas {
    /// Builds a canvas of the given dimensions containing the source image at
    /// the top-left corner and fully transparent pixels everywhere else.
    pub fn from_image(image: &RgbaImage, canvas_width: u32, canvas_height: u32) -> Self {
        let mut pixels = vec![0u32; canvas_width as usize * canvas_height as usize];
        for (x, y, rgba) in image.enumerate_pixels() {
            if x < canvas_width && y < canvas_height {
                let [r, g, b, a] = rgba.0;
                pixels[y as usize * canvas_width as usize + x as usize] =
                    u32::from_be_bytes([r, g, b, a]);
            }
        }
        Self {
            width: canvas_width,
            height: canvas_height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the packed RGBA value at (x, y). Coordinates must lie within
    /// `width()`/`height()`.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// True when both canvases have identical width and height.
    pub fn same_dimensions(&self, other: &PixelCanvas) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// Produces two equally sized canvases from two images of possibly differing
/// dimensions. The shared size is the per-axis maximum of the two inputs, and
/// each image sits unchanged at the origin of its own canvas.
pub fn normalize(expected: &RgbaImage, actual: &RgbaImage) -> (PixelCanvas, PixelCanvas) {
    let width = expected.width().max(actual.width());
    let height = expected.height().max(actual.height());
    (
        PixelCanvas::from_image(expected, width, height),
        PixelCanvas::from_image(actual, width, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(rgba))
    }

    #[test]
    fn normalize_pads_to_max_dimensions() {
        let small = solid_image(2, 2, [10, 20, 30, 255]);
        let large = solid_image(5, 3, [40, 50, 60, 255]);

        let (canvas_a, canvas_b) = normalize(&small, &large);

        assert_eq!((canvas_a.width(), canvas_a.height()), (5, 3));
        assert_eq!((canvas_b.width(), canvas_b.height()), (5, 3));
        assert!(canvas_a.same_dimensions(&canvas_b));
    }

    #[test]
    fn padding_outside_source_extent_is_transparent() {
        let small = solid_image(2, 2, [10, 20, 30, 255]);
        let large = solid_image(5, 3, [40, 50, 60, 255]);

        let (canvas_a, _) = normalize(&small, &large);

        for y in 0..3 {
            for x in 0..5 {
                let value = canvas_a.pixel(x, y);
                if x >= 2 || y >= 2 {
                    assert_eq!(value, 0, "padding at ({x}, {y}) must be transparent");
                } else {
                    assert_eq!(value, u32::from_be_bytes([10, 20, 30, 255]));
                }
            }
        }
    }

    #[test]
    fn source_pixels_are_preserved_in_place() {
        let mut image = solid_image(3, 2, [0, 0, 0, 255]);
        image.put_pixel(2, 1, Rgba([200, 100, 50, 128]));

        let canvas = PixelCanvas::from_image(&image, 3, 2);

        assert_eq!(canvas.pixel(2, 1), u32::from_be_bytes([200, 100, 50, 128]));
        assert_eq!(canvas.pixel(0, 0), u32::from_be_bytes([0, 0, 0, 255]));
    }

    #[test]
    fn zero_dimension_image_yields_fully_transparent_canvas() {
        let empty = RgbaImage::new(0, 0);
        let canvas = PixelCanvas::from_image(&empty, 4, 2);

        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(canvas.pixel(x, y), 0);
            }
        }
    }
}
