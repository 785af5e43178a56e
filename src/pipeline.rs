// THEORY:
// The `pipeline` module is the final, top-level API for the diff engine. It
// chains the stages in their one valid order — decode, canvas normalization,
// region extraction, composite rendering — behind a single call, so consumers
// never juggle canvases or masks themselves.
//
// The pipeline is a pure, synchronous computation once decoding is done: it
// holds no locks and shares nothing mutable between calls, so a host is free
// to run any number of comparisons concurrently, each on its own pipeline or
// a shared one.

use crate::core_modules::canvas;
use crate::core_modules::region_detector::region_detector;
use crate::core_modules::renderer;
use image::RgbaImage;
use std::path::Path;

// Re-export key data structures for the public API.
pub use crate::core_modules::error::DiffError;
pub use crate::core_modules::region::{DiffRegion, Point};
pub use crate::core_modules::renderer::HighlightStyle;
pub use crate::core_modules::report::DiffReport;

/// The main, top-level entry point for comparing two images.
#[derive(Debug, Clone, Default)]
pub struct ComparisonPipeline {
    style: HighlightStyle,
}

impl ComparisonPipeline {
    pub fn new(style: HighlightStyle) -> Self {
        Self { style }
    }

    /// Compares two decoded images and produces the full report: the ordered
    /// region list plus the composite rendering of the actual image.
    pub fn compare(
        &self,
        expected: &RgbaImage,
        actual: &RgbaImage,
    ) -> Result<DiffReport, DiffError> {
        // Stage 1: Canvas Normalization
        let (expected_canvas, actual_canvas) = canvas::normalize(expected, actual);
        log::debug!(
            "normalized {}x{} and {}x{} inputs to a {}x{} canvas pair",
            expected.width(),
            expected.height(),
            actual.width(),
            actual.height(),
            expected_canvas.width(),
            expected_canvas.height()
        );

        // Stage 2: Region Extraction
        let regions = region_detector::find_regions(&expected_canvas, &actual_canvas)?;
        log::info!("comparison found {} differing regions", regions.len());

        // Stage 3: Composite Rendering
        let composite = renderer::render_composite(&actual_canvas, &regions, &self.style);

        Ok(DiffReport { regions, composite })
    }

    /// Decodes two image files and compares them. This is the decode boundary:
    /// an unreadable input surfaces as `DiffError::Decode` before any
    /// normalization happens.
    pub fn compare_files(
        &self,
        expected_path: &Path,
        actual_path: &Path,
    ) -> Result<DiffReport, DiffError> {
        let expected = open_rgba(expected_path)?;
        let actual = open_rgba(actual_path)?;
        self.compare(&expected, &actual)
    }
}

fn open_rgba(path: &Path) -> Result<RgbaImage, DiffError> {
    let decoded = image::open(path).map_err(|source| DiffError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn compare_reports_regions_and_composite_of_shared_size() {
        let expected = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let mut actual = RgbaImage::from_pixel(6, 4, Rgba([0, 0, 0, 255]));
        actual.put_pixel(1, 1, Rgba([9, 9, 9, 255]));

        let report = ComparisonPipeline::default()
            .compare(&expected, &actual)
            .unwrap();

        assert!(report.has_differences());
        assert_eq!(report.composite.dimensions(), (6, 4));
        // The (1,1) edit plus the padding columns x=4..5 of the smaller image.
        assert!(report.regions.iter().any(|r| r.contains(1, 1)));
        assert!(report.regions.iter().any(|r| r.contains(5, 3)));
    }

    #[test]
    fn missing_file_surfaces_decode_error() {
        let result = ComparisonPipeline::default().compare_files(
            Path::new("definitely/not/a/real/expected.png"),
            Path::new("definitely/not/a/real/actual.png"),
        );

        match result {
            Err(DiffError::Decode { path, .. }) => {
                assert!(path.ends_with("expected.png"));
            }
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
