// THEORY:
// The `RegionDetector` is the engine of the comparison core. It implements
// connected-component extraction over the pixel grid: wherever the two
// canvases disagree, it grows a region over the full 4-connected cluster of
// differing pixels and reports that cluster's bounding rectangle.
//
// Key architectural principles & algorithm steps:
// 1.  **Row-Major Scan**: The outer loop walks every coordinate top-to-bottom,
//     left-to-right. The first unvisited differing pixel it meets becomes the
//     seed of a new region, so regions come out in the scan order of their
//     seeds — a stable, deterministic ordering.
// 2.  **Explicit Work Stack**: Each fill runs on a heap-allocated stack of
//     coordinates, never language-level recursion, so a pathological diff
//     spanning the whole canvas cannot overflow the call stack. Bounds and
//     visited checks happen when a coordinate is popped; neighbors are pushed
//     unconditionally.
// 3.  **Asymmetric Visited Marking**: Only differing pixels are ever marked
//     visited. A popped coordinate whose pixels agree is discarded unmarked.
//     It may be popped again from a later fill, but it can never seed a
//     region or join one, so final coverage is unaffected. This matches the
//     reference behavior exactly and is pinned by the tests.
// 4.  **Bounding Hull Aggregation**: As the fill claims pixels, it only grows
//     a running min/max box. The emitted `DiffRegion` is the hull of one
//     connected component; interior pixels that happen to agree stay inside
//     the box.
// 5.  **Stateless Utility**: `find_regions` is a pure function of its two
//     canvases. The visited mask and work stack live and die inside one call,
//     which is what makes independent comparisons safe to run in parallel.

use crate::core_modules::canvas::PixelCanvas;
use crate::core_modules::error::DiffError;
use crate::core_modules::region::DiffRegion;

pub mod region_detector {
    use super::*; // Make structs from parent module available.

    /// The main function of the extraction layer.
    /// Scans two equally sized canvases and returns the bounding rectangle of
    /// every 4-connected cluster of differing pixels, in seed discovery order.
    pub fn find_regions(
        expected: &PixelCanvas,
        actual: &PixelCanvas,
    ) -> Result<Vec<DiffRegion>, DiffError> {
        if !expected.same_dimensions(actual) {
            return Err(DiffError::ShapeMismatch {
                expected_width: expected.width(),
                expected_height: expected.height(),
                actual_width: actual.width(),
                actual_height: actual.height(),
            });
        }

        let width = expected.width() as usize;
        let height = expected.height() as usize;

        // One flat visited mask per extraction run, row-major like the canvas.
        let mut visited = vec![false; width * height];
        let mut regions: Vec<DiffRegion> = Vec::new();

        for y in 0..height {
            for x in 0..width {
                if !visited[y * width + x]
                    && expected.pixel(x as u32, y as u32) != actual.pixel(x as u32, y as u32)
                {
                    let region = fill_region(expected, actual, &mut visited, x as u32, y as u32);
                    regions.push(region);
                }
            }
        }

        log::debug!(
            "extracted {} diff regions from {}x{} canvas",
            regions.len(),
            width,
            height
        );
        Ok(regions)
    }

    /// Grows one region from a seed pixel known to differ, consuming its whole
    /// 4-connected cluster of differing pixels.
    fn fill_region(
        expected: &PixelCanvas,
        actual: &PixelCanvas,
        visited: &mut [bool],
        seed_x: u32,
        seed_y: u32,
    ) -> DiffRegion {
        let width = expected.width() as i64;
        let height = expected.height() as i64;

        let mut region = DiffRegion::seeded_at(seed_x, seed_y);
        let mut stack: Vec<(i64, i64)> = vec![(seed_x as i64, seed_y as i64)];

        while let Some((x, y)) = stack.pop() {
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            let index = y as usize * width as usize + x as usize;
            if visited[index] {
                continue;
            }

            if expected.pixel(x as u32, y as u32) != actual.pixel(x as u32, y as u32) {
                visited[index] = true;
                region.include(x as u32, y as u32);
                stack.push((x + 1, y));
                stack.push((x - 1, y));
                stack.push((x, y + 1));
                stack.push((x, y - 1));
            }
            // A coordinate whose pixels agree is dropped without marking it
            // visited; it can never re-enter through the outer scan.
        }

        region
    }
}
