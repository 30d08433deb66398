use image::{Rgb, RgbImage};

use crate::state::FaceGrid;
use crate::vision::classifier::{Classification, ColorClassifier};
use crate::vision::hsv::HsvImage;
use crate::vision::palette::Color;

/// One scanned face: the classified grid plus the per-cell vote detail.
#[derive(Debug, Clone)]
pub struct FaceScan {
    pub grid: FaceGrid,
    pub cells: [[Classification; 3]; 3],
}

impl FaceScan {
    /// Weakest cell confidence across the face. Useful for deciding how
    /// hard to push the operator toward a manual check.
    pub fn min_confidence(&self) -> f32 {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.confidence())
            .fold(1.0, f32::min)
    }
}

/// Splits a cropped face region into a 3x3 grid and classifies each cell.
pub struct FaceScanner {
    classifier: ColorClassifier,
}

impl FaceScanner {
    pub fn new() -> Self {
        Self {
            classifier: ColorClassifier::new(),
        }
    }

    pub fn with_classifier(classifier: ColorClassifier) -> Self {
        Self { classifier }
    }

    /// Cell boundaries come from integer division of the extent by 3; the
    /// last row and column absorb any remainder, so regions need not be
    /// divisible by 3.
    fn cell_bounds(extent: u32, index: usize) -> (u32, u32) {
        let step = extent / 3;
        let start = step * index as u32;
        let end = if index == 2 {
            extent
        } else {
            step * (index as u32 + 1)
        };
        (start, end)
    }

    /// Classifies the nine cells in row-major order. Never fails; a cell
    /// that matches nothing still resolves deterministically.
    pub fn scan(&self, region: &RgbImage) -> FaceScan {
        let hsv = HsvImage::from_rgb(region);
        let blank = Classification {
            color: Color::White,
            matched: 0,
            sampled: 0,
        };
        let mut cells = [[blank; 3]; 3];
        let mut colors = [[Color::White; 3]; 3];

        for row in 0..3 {
            let (y0, y1) = Self::cell_bounds(hsv.height(), row);
            for col in 0..3 {
                let (x0, x1) = Self::cell_bounds(hsv.width(), col);
                let classification = self.classifier.classify(hsv.rect(x0, y0, x1, y1));
                tracing::debug!(
                    row,
                    col,
                    color = %classification.color,
                    confidence = classification.confidence(),
                    "classified cell"
                );
                colors[row][col] = classification.color;
                cells[row][col] = classification;
            }
        }

        FaceScan {
            grid: FaceGrid::new(colors),
            cells,
        }
    }

    /// Draws white cell borders on a copy of the region for display.
    /// Presentation only; the scan result never depends on it.
    pub fn annotate(&self, region: &RgbImage) -> RgbImage {
        let mut out = region.clone();
        let (width, height) = out.dimensions();
        if width < 3 || height < 3 {
            return out;
        }

        let white = Rgb([255u8, 255, 255]);
        for index in 0..3 {
            let (x0, x1) = Self::cell_bounds(width, index);
            let (y0, y1) = Self::cell_bounds(height, index);
            for y in 0..height {
                out.put_pixel(x0, y, white);
                out.put_pixel(x1 - 1, y, white);
            }
            for x in 0..width {
                out.put_pixel(x, y0, white);
                out.put_pixel(x, y1 - 1, white);
            }
        }
        out
    }
}

impl Default for FaceScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    #[test]
    fn uniform_region_classifies_every_cell_the_same() {
        let region = ImageBuffer::from_pixel(300, 300, Rgb([0u8, 0, 255]));
        let scan = FaceScanner::new().scan(&region);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(scan.grid.get(row, col).unwrap(), Color::Blue);
            }
        }
        assert_eq!(scan.min_confidence(), 1.0);
    }

    #[test]
    fn cells_map_to_their_region_in_row_major_order() {
        // Top row red, middle row green, bottom row yellow.
        let mut region = ImageBuffer::from_pixel(90, 90, Rgb([255u8, 0, 0]));
        for y in 30..60 {
            for x in 0..90 {
                region.put_pixel(x, y, Rgb([0, 255, 0]));
            }
        }
        for y in 60..90 {
            for x in 0..90 {
                region.put_pixel(x, y, Rgb([255, 255, 0]));
            }
        }

        let scan = FaceScanner::new().scan(&region);
        for col in 0..3 {
            assert_eq!(scan.grid.get(0, col).unwrap(), Color::Red);
            assert_eq!(scan.grid.get(1, col).unwrap(), Color::Green);
            assert_eq!(scan.grid.get(2, col).unwrap(), Color::Yellow);
        }
    }

    #[test]
    fn non_divisible_region_still_yields_nine_cells() {
        // 301 / 3 = 100, so the last row and column span 101 pixels.
        let region = ImageBuffer::from_pixel(301, 301, Rgb([255u8, 255, 255]));
        let scan = FaceScanner::new().scan(&region);

        let (x0, x1) = FaceScanner::cell_bounds(301, 2);
        assert_eq!((x0, x1), (200, 301));

        let mut total = 0;
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(scan.grid.get(row, col).unwrap(), Color::White);
                total += scan.cells[row][col].sampled;
            }
        }
        assert_eq!(total, 301 * 301);
    }

    #[test]
    fn annotation_marks_cell_borders_without_touching_the_original() {
        let region = ImageBuffer::from_pixel(90, 90, Rgb([0u8, 0, 255]));
        let scanner = FaceScanner::new();
        let annotated = scanner.annotate(&region);

        assert_eq!(*annotated.get_pixel(30, 45), Rgb([255, 255, 255]));
        assert_eq!(*annotated.get_pixel(45, 60), Rgb([255, 255, 255]));
        assert_eq!(*region.get_pixel(30, 45), Rgb([0, 0, 255]));
        // Cell interiors keep the source pixels.
        assert_eq!(*annotated.get_pixel(15, 15), Rgb([0, 0, 255]));
    }
}
