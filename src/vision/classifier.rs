use crate::vision::hsv::Hsv;
use crate::vision::palette::{Color, ColorRange};

/// Outcome of classifying one pixel sample. The matched-pixel count stays
/// attached as a confidence signal for the correction front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub color: Color,
    pub matched: u32,
    pub sampled: u32,
}

impl Classification {
    /// Fraction of sampled pixels inside the winning range.
    pub fn confidence(&self) -> f32 {
        if self.sampled == 0 {
            0.0
        } else {
            self.matched as f32 / self.sampled as f32
        }
    }
}

/// Majority-vote range classifier over the fixed six-color palette.
pub struct ColorClassifier {
    ranges: [(Color, ColorRange); 6],
}

impl ColorClassifier {
    pub fn new() -> Self {
        Self {
            ranges: Color::ALL.map(|color| (color, color.range())),
        }
    }

    /// Replaces the bounds for one color, keeping the evaluation order.
    pub fn with_range(mut self, color: Color, range: ColorRange) -> Self {
        for entry in &mut self.ranges {
            if entry.0 == color {
                entry.1 = range;
            }
        }
        self
    }

    /// Picks the color whose range matches the most pixels. Ties, and a
    /// sample matching no range at all, resolve to the earliest color in
    /// `Color::ALL`: the winner is only replaced on a strictly greater
    /// count, so evaluation order is the tie-break.
    pub fn classify(&self, pixels: impl Iterator<Item = Hsv>) -> Classification {
        let mut counts = [0u32; 6];
        let mut sampled = 0u32;

        for px in pixels {
            sampled += 1;
            for (i, (_, range)) in self.ranges.iter().enumerate() {
                if range.contains(px) {
                    counts[i] += 1;
                }
            }
        }

        let mut best = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[best] {
                best = i;
            }
        }

        Classification {
            color: self.ranges[best].0,
            matched: counts[best],
            sampled,
        }
    }
}

impl Default for ColorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
