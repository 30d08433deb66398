use image::RgbImage;

/// Pixel in the HSV space used for range tests. Hue is stored in
/// half-degrees (0-179) so the full circle fits in a byte; saturation and
/// value use the full 0-255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Converts an RGB triple to the byte-scaled HSV used by the palette ranges.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let h = if h < 0.0 { h + 360.0 } else { h };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: (h / 2.0).round().min(179.0) as u8,
        s: (s * 255.0).round() as u8,
        v: (max * 255.0).round() as u8,
    }
}

/// A face region converted to HSV once, then sampled per grid cell.
pub struct HsvImage {
    width: u32,
    height: u32,
    data: Vec<Hsv>,
}

impl HsvImage {
    pub fn from_rgb(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let data = image
            .pixels()
            .map(|px| rgb_to_hsv(px.0[0], px.0[1], px.0[2]))
            .collect();

        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels of the rectangle spanning [x0, x1) x [y0, y1).
    pub fn rect(&self, x0: u32, y0: u32, x1: u32, y1: u32) -> impl Iterator<Item = Hsv> + '_ {
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| self.data[(y * self.width + x) as usize]))
    }
}
