// THEORY:
// The `report` module packages one comparison's results for downstream
// consumers: the ordered region list plus the composite rendering. A
// `DiffReport` is created fresh per comparison and holds nothing persistent;
// exporting it (CSV rows, PNG of the composite) is the only file I/O in the
// crate, and it lives here rather than in the detection core.

use crate::core_modules::error::DiffError;
use crate::core_modules::region::DiffRegion;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::path::Path;

/// The complete result of one image comparison.
#[derive(Debug, Clone)]
pub struct DiffReport {
    /// Bounding regions of every differing cluster, in discovery order.
    pub regions: Vec<DiffRegion>,
    /// The actual image with region outlines drawn over it.
    pub composite: RgbaImage,
}

impl DiffReport {
    pub fn has_differences(&self) -> bool {
        !self.regions.is_empty()
    }

    /// Renders the region list as CSV with the header
    /// `Region,X,Y,Width,Height`, one row per region in discovery order.
    pub fn regions_csv(&self) -> String {
        let mut csv = String::from("Region,X,Y,Width,Height\n");
        for (index, region) in self.regions.iter().enumerate() {
            csv.push_str(&format!(
                "Region{},{},{},{},{}\n",
                index + 1,
                region.x(),
                region.y(),
                region.width(),
                region.height()
            ));
        }
        csv
    }

    /// Writes the CSV summary to the given path.
    pub fn write_csv(&self, path: &Path) -> Result<(), DiffError> {
        std::fs::write(path, self.regions_csv())?;
        log::info!("region summary exported to {}", path.display());
        Ok(())
    }

    /// Encodes the composite image as PNG at the given path.
    pub fn write_composite_png(&self, path: &Path) -> Result<(), DiffError> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);
        encoder
            .write_image(
                self.composite.as_raw(),
                self.composite.width(),
                self.composite.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(DiffError::Encode)?;
        log::info!("composite image written to {}", path.display());
        Ok(())
    }
}
